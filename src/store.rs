/// In-memory tab store: the popup's single source of truth

use crate::operations::{SortOrder, filter_tabs, sort_tabs};
use crate::tab_data::{RawTab, Tab, TabId};

/// Ordered collection of ingested tab records.
///
/// Populated once from the startup snapshot; afterwards it only shrinks
/// (per-tab removal). Element order is whatever the last sort established.
#[derive(Debug, Clone, PartialEq)]
pub struct TabStore {
    tabs: Vec<Tab>,
}

impl TabStore {
    pub fn new() -> Self {
        TabStore { tabs: Vec::new() }
    }

    /// Replace the entire contents with an ingested snapshot.
    pub fn replace_all(&mut self, snapshot: Vec<RawTab>) {
        self.tabs = snapshot.into_iter().map(Tab::from_raw).collect();
    }

    /// Remove at most one record with the given id.
    ///
    /// Absent ids are a no-op, not an error; returns whether anything was
    /// removed. Closing the underlying browser tab is the capability
    /// provider's job, not the store's.
    pub fn remove_by_id(&mut self, id: TabId) -> bool {
        let original_len = self.tabs.len();
        self.tabs.retain(|tab| tab.id != id);
        self.tabs.len() < original_len
    }

    /// Re-sort the stored records in place.
    pub fn sort(&mut self, order: SortOrder) {
        sort_tabs(&mut self.tabs, order);
    }

    /// Derive the search-filtered view in current store order.
    pub fn filtered(&self, term: &str) -> Vec<Tab> {
        filter_tabs(&self.tabs, term)
    }

    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }
}

impl Default for TabStore {
    fn default() -> Self {
        Self::new()
    }
}
