/// View layer: abstract render tree and the three tab layouts
///
/// Renderers are pure functions from the sorted+filtered records to a
/// `Node` tree; they never touch the store or the browser. The `ui`
/// adapter turns the tree into actual elements, so everything here stays
/// unit-testable without a DOM.

pub mod category;
pub mod sphere;
pub mod timeline;

use std::collections::HashSet;

use crate::category::Category;
use crate::tab_data::{Tab, TabId};

/// Which layout the popup is currently showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewKind {
    #[default]
    Sphere,
    Category,
    Timeline,
}

impl ViewKind {
    pub const ALL: [ViewKind; 3] = [ViewKind::Sphere, ViewKind::Category, ViewKind::Timeline];

    pub fn label(self) -> &'static str {
        match self {
            ViewKind::Sphere => "sphere",
            ViewKind::Category => "category",
            ViewKind::Timeline => "timeline",
        }
    }

    /// Button caption in the view switcher.
    pub fn display(self) -> &'static str {
        match self {
            ViewKind::Sphere => "Sphere",
            ViewKind::Category => "Category",
            ViewKind::Timeline => "Timeline",
        }
    }
}

/// Semantic node kinds; the adapter decides tags and classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    SphereLayout,
    SphereNode,
    DomainLabel,
    TitleLabel,
    CategoryLayout,
    CategoryCard,
    CategoryHeader,
    Dropdown,
    TabRow,
    UrlLabel,
    TimelineLayout,
    TimeGroup,
    TimeHeader,
    TabCard,
    RemoveButton,
}

/// Interactive role attached to a node.
///
/// `Remove` handlers must stop event propagation in the adapter so a remove
/// click never also activates the enclosing entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Binding {
    Activate(TabId),
    Remove(TabId),
    ToggleGroup(Category),
}

/// Absolute placement inside the sphere layout, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// One node of the abstract render tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub kind: NodeKind,
    pub text: Option<String>,
    pub pos: Option<Point>,
    pub on_click: Option<Binding>,
    pub children: Vec<Node>,
}

impl Node {
    pub fn new(kind: NodeKind) -> Node {
        Node {
            kind,
            text: None,
            pos: None,
            on_click: None,
            children: Vec::new(),
        }
    }

    pub fn text(kind: NodeKind, text: impl Into<String>) -> Node {
        Node {
            text: Some(text.into()),
            ..Node::new(kind)
        }
    }

    pub fn push(&mut self, child: Node) {
        self.children.push(child);
    }

    /// Depth-first traversal, self included.
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a Node)) {
        visit(self);
        for child in &self.children {
            child.walk(visit);
        }
    }
}

/// Render the selected layout over the sorted, filtered records.
pub fn render(kind: ViewKind, tabs: &[Tab], expanded: &HashSet<Category>) -> Node {
    match kind {
        ViewKind::Sphere => sphere::render(tabs),
        ViewKind::Category => category::render(tabs, expanded),
        ViewKind::Timeline => timeline::render(tabs),
    }
}
