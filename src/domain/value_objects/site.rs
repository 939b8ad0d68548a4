//! Site value objects - deployment targets and the menu built from them

use std::fmt;

/// Label of the synthetic menu entry that cancels the run.
pub const QUIT_LABEL: &str = "quit";

/// A named running instance of the monitoring system.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Site(String);

impl Site {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Site {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One row of the site menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SiteEntry {
    Site(Site),
    Quit,
}

impl SiteEntry {
    pub fn label(&self) -> &str {
        match self {
            SiteEntry::Site(site) => site.name(),
            SiteEntry::Quit => QUIT_LABEL,
        }
    }
}

/// Ordered site listing with the quit entry always last.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SiteMenu {
    sites: Vec<Site>,
}

impl SiteMenu {
    pub fn new(sites: Vec<Site>) -> Self {
        Self { sites }
    }

    /// Parse line-oriented listing output.
    ///
    /// Blank lines are skipped; only the first whitespace-separated token of
    /// each line is kept, the rest of the line is metadata.
    pub fn parse(output: &str) -> Self {
        let sites = output
            .lines()
            .filter_map(|line| line.split_whitespace().next())
            .map(Site::new)
            .collect();
        Self { sites }
    }

    pub fn sites(&self) -> &[Site] {
        &self.sites
    }

    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }

    /// Number of menu rows, quit entry included.
    pub fn len(&self) -> usize {
        self.sites.len() + 1
    }

    /// The only real site, when there is exactly one.
    pub fn sole_site(&self) -> Option<&Site> {
        match self.sites.as_slice() {
            [site] => Some(site),
            _ => None,
        }
    }

    /// All rows in display order.
    pub fn entries(&self) -> Vec<SiteEntry> {
        self.sites
            .iter()
            .cloned()
            .map(SiteEntry::Site)
            .chain(std::iter::once(SiteEntry::Quit))
            .collect()
    }

    /// 1-indexed number of the quit entry.
    pub fn quit_number(&self) -> usize {
        self.len()
    }

    /// Valid answers for the menu prompt ("1", "2", ...).
    pub fn choices(&self) -> Vec<String> {
        (1..=self.len()).map(|n| n.to_string()).collect()
    }

    /// Resolve a 1-indexed menu number.
    pub fn entry(&self, number: usize) -> Option<SiteEntry> {
        if number == 0 || number > self.len() {
            return None;
        }
        if number == self.quit_number() {
            return Some(SiteEntry::Quit);
        }
        self.sites.get(number - 1).cloned().map(SiteEntry::Site)
    }
}
