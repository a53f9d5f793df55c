/// Popup session: the one context object behind every event

use std::collections::HashSet;
use std::rc::Rc;

use yew::prelude::Reducible;

use crate::category::Category;
use crate::operations::SortOrder;
use crate::store::TabStore;
use crate::tab_data::{RawTab, Tab, TabId};
use crate::view::{self, Node, ViewKind};

/// All mutable popup state: the ingested store, the search term, the sort
/// order, the selected view, and which category groups are expanded.
///
/// One instance lives for the popup's lifetime. Every mutating operation
/// recomputes the sorted+filtered view from scratch instead of patching it,
/// so the derived view can never go stale.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    store: TabStore,
    search: String,
    order: SortOrder,
    view: ViewKind,
    expanded: HashSet<Category>,
    filtered: Vec<Tab>,
}

impl Session {
    pub fn new() -> Session {
        Session {
            store: TabStore::new(),
            search: String::new(),
            order: SortOrder::default(),
            view: ViewKind::default(),
            expanded: HashSet::new(),
            filtered: Vec::new(),
        }
    }

    /// Ingest the startup snapshot, replacing anything held before.
    pub fn ingest(&mut self, snapshot: Vec<RawTab>) {
        log::info!("Ingested {} tabs", snapshot.len());
        self.store.replace_all(snapshot);
        self.refresh();
    }

    pub fn set_search(&mut self, term: String) {
        self.search = term;
        self.refresh();
    }

    pub fn toggle_sort(&mut self) {
        self.order = self.order.toggle();
        self.refresh();
    }

    /// Switch layouts. Re-render only: no data recomputation happens here.
    pub fn set_view(&mut self, view: ViewKind) {
        if self.view != view {
            log::debug!("Switching to {} view", view.label());
        }
        self.view = view;
    }

    /// Expand or collapse one category group.
    pub fn toggle_group(&mut self, category: Category) {
        if !self.expanded.remove(&category) {
            self.expanded.insert(category);
        }
    }

    /// Drop the local record. Closing the browser-side tab is the
    /// controller's job; this stays idempotent either way.
    pub fn remove_local(&mut self, id: TabId) -> bool {
        let removed = self.store.remove_by_id(id);
        self.refresh();
        removed
    }

    /// Route one dispatched action to its mutator.
    pub fn apply(&mut self, action: SessionAction) {
        match action {
            SessionAction::Ingest(snapshot) => self.ingest(snapshot),
            SessionAction::SetSearch(term) => self.set_search(term),
            SessionAction::ToggleSort => self.toggle_sort(),
            SessionAction::SetView(view) => self.set_view(view),
            SessionAction::ToggleGroup(category) => self.toggle_group(category),
            SessionAction::Remove(id) => {
                self.remove_local(id);
            }
        }
    }

    /// Full recomputation: re-sort the store, re-derive the filtered view.
    fn refresh(&mut self) {
        self.store.sort(self.order);
        self.filtered = self.store.filtered(&self.search);
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn order(&self) -> SortOrder {
        self.order
    }

    pub fn view(&self) -> ViewKind {
        self.view
    }

    /// The records the current view renders: sorted, then filtered.
    pub fn filtered(&self) -> &[Tab] {
        &self.filtered
    }

    /// The popup's count line.
    pub fn status_line(&self) -> String {
        format!(
            "{} tabs • Sorted {} • Last sync: Just now",
            self.filtered.len(),
            self.order.label()
        )
    }

    /// Render the current view over the current filtered records.
    pub fn render(&self) -> Node {
        view::render(self.view, &self.filtered, &self.expanded)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// One popup state transition. Dispatched actions apply to whatever
/// state is current when they land, never to a copy captured earlier.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionAction {
    Ingest(Vec<RawTab>),
    SetSearch(String),
    ToggleSort,
    SetView(ViewKind),
    ToggleGroup(Category),
    Remove(TabId),
}

impl Reducible for Session {
    type Action = SessionAction;

    fn reduce(self: Rc<Self>, action: SessionAction) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}
