/// Tab operations: title sorting and search filtering

use crate::tab_data::Tab;

/// Alphabetical sort direction, toggled by the popup's sort button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    pub fn toggle(self) -> SortOrder {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortOrder::Ascending => "ascending",
            SortOrder::Descending => "descending",
        }
    }
}

/// Sort tabs by case-insensitive title (precompute the lowercased key).
///
/// Descending is defined as the exact reverse of the ascending result, not a
/// second comparator: the underlying sort is stable, so equal titles keep
/// their relative order ascending and appear exactly reversed descending.
pub fn sort_tabs(tabs: &mut [Tab], order: SortOrder) {
    tabs.sort_by_cached_key(|tab| tab.title.to_lowercase());
    if order == SortOrder::Descending {
        tabs.reverse();
    }
}

/// Keep tabs whose title or domain contains the term, case-insensitively.
///
/// An empty term keeps everything. Filtering never reorders: the output is
/// a subsequence of the input.
pub fn filter_tabs(tabs: &[Tab], term: &str) -> Vec<Tab> {
    let needle = term.to_lowercase();
    tabs.iter()
        .filter(|tab| {
            tab.title.to_lowercase().contains(&needle)
                || tab.domain.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}
