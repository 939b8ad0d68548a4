//! Property tests for the excluded-directory rule.

use std::path::PathBuf;

use proptest::prelude::*;

use sitepush::ExcludedDirs;

use crate::common::relative_path;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Nothing kept starts with an excluded directory.
    #[test]
    fn property_filter_drops_excluded_roots(
        paths in proptest::collection::vec(relative_path(), 0..=16),
    ) {
        let kept = ExcludedDirs::default().filter(paths.clone());

        for file in &kept {
            let first = file.path().components().next().map(|c| c.as_os_str().to_owned());
            prop_assert!(first.as_deref() != Some(".werks".as_ref()));
            prop_assert!(first.as_deref() != Some("bin".as_ref()));
        }
    }

    /// PROPERTY: Kept files are exactly the non-excluded input, in input order.
    #[test]
    fn property_filter_preserves_order(
        paths in proptest::collection::vec(relative_path(), 0..=16),
    ) {
        let excluded = ExcludedDirs::default();
        let kept: Vec<PathBuf> = excluded
            .filter(paths.clone())
            .into_iter()
            .map(|f| f.path().to_path_buf())
            .collect();
        let expected: Vec<PathBuf> = paths
            .iter()
            .map(PathBuf::from)
            .filter(|p| !excluded.excludes(p))
            .collect();

        prop_assert_eq!(kept, expected);
    }

    /// PROPERTY: Only the first segment matters; nested `bin` directories are kept.
    #[test]
    fn property_nested_excluded_name_is_kept(prefix in "[a-z]{1,8}", leaf in "[a-z]{1,8}") {
        prop_assume!(prefix != "bin");
        let path = format!("{prefix}/bin/{leaf}");
        prop_assert!(!ExcludedDirs::default().excludes(path.as_ref()));
    }
}
