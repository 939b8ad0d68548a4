//! Property tests for the site menu built from `omd sites` output.

use proptest::prelude::*;

use sitepush::domain::value_objects::SiteEntry;
use sitepush::{Site, SiteMenu};

fn site_name() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,11}"
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Every listed site is numbered in order and quit comes last.
    #[test]
    fn property_quit_is_always_the_last_entry(
        names in proptest::collection::vec(site_name(), 0..=8),
    ) {
        let listing: String = names
            .iter()
            .map(|n| format!("{n}  2.3.0p1  default version\n"))
            .collect();
        let menu = SiteMenu::parse(&listing);

        prop_assert_eq!(menu.quit_number(), names.len() + 1);
        prop_assert_eq!(menu.entry(menu.quit_number()), Some(SiteEntry::Quit));
        for (i, name) in names.iter().enumerate() {
            prop_assert_eq!(menu.entry(i + 1), Some(SiteEntry::Site(Site::new(name.as_str()))));
        }
        prop_assert_eq!(menu.entry(0), None);
        prop_assert_eq!(menu.entry(names.len() + 2), None);
    }

    /// PROPERTY: A menu is skipped exactly when one site exists.
    #[test]
    fn property_sole_site_iff_single_site(
        names in proptest::collection::vec(site_name(), 0..=4),
    ) {
        let menu = SiteMenu::new(names.iter().map(|n| Site::new(n.as_str())).collect());
        prop_assert_eq!(menu.sole_site().is_some(), names.len() == 1);
    }
}
