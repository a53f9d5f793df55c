/// Category view: collapsible groups in table order

use std::collections::HashSet;

use crate::category::Category;
use crate::tab_data::Tab;
use crate::view::{Binding, Node, NodeKind};

/// Group the records by category.
///
/// Groups appear in `Category::ALL` order and empty groups are skipped
/// entirely (the timeline view deliberately does the opposite). Each header
/// toggles its own member list; `expanded` is the set of currently open
/// groups.
pub fn render(tabs: &[Tab], expanded: &HashSet<Category>) -> Node {
    let mut layout = Node::new(NodeKind::CategoryLayout);

    for category in Category::ALL {
        let members: Vec<&Tab> = tabs.iter().filter(|t| t.category == category).collect();
        if members.is_empty() {
            continue;
        }

        let mut card = Node::new(NodeKind::CategoryCard);
        let mut header = Node::text(
            NodeKind::CategoryHeader,
            format!("{} ({})", category.display(), members.len()),
        );
        header.on_click = Some(Binding::ToggleGroup(category));
        card.push(header);

        if expanded.contains(&category) {
            let mut dropdown = Node::new(NodeKind::Dropdown);
            for tab in members {
                let mut row = Node::new(NodeKind::TabRow);
                row.on_click = Some(Binding::Activate(tab.id));
                row.push(Node::text(NodeKind::TitleLabel, tab.title.clone()));
                row.push(Node::text(NodeKind::UrlLabel, tab.url.clone()));

                let mut remove = Node::text(NodeKind::RemoveButton, "X");
                remove.on_click = Some(Binding::Remove(tab.id));
                row.push(remove);

                dropdown.push(row);
            }
            card.push(dropdown);
        }

        layout.push(card);
    }
    layout
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tab_data::RawTab;

    fn create_test_tabs() -> Vec<Tab> {
        vec![
            Tab::from_raw(RawTab::new(1, "GitHub - foo", "https://github.com/foo")),
            Tab::from_raw(RawTab::new(2, "Crates", "https://crates.io/")),
            Tab::from_raw(RawTab::new(3, "Apple News", "https://cnn.com/y")),
        ]
    }

    fn header_text(card: &Node) -> &str {
        card.children[0].text.as_deref().unwrap()
    }

    #[test]
    fn test_empty_groups_are_skipped() {
        let layout = render(&create_test_tabs(), &HashSet::new());

        // Only development and news have members; nothing else renders.
        assert_eq!(layout.children.len(), 2);
        assert_eq!(header_text(&layout.children[0]), "Development (2)");
        assert_eq!(header_text(&layout.children[1]), "News (1)");
    }

    #[test]
    fn test_groups_follow_table_order() {
        let tabs = vec![
            Tab::from_raw(RawTab::new(1, "News", "https://cnn.com/")),
            Tab::from_raw(RawTab::new(2, "Mail", "https://gmail.com/")),
        ];
        let layout = render(&tabs, &HashSet::new());

        // Productivity is listed before news in the table, regardless of
        // record order.
        assert_eq!(header_text(&layout.children[0]), "Productivity (1)");
        assert_eq!(header_text(&layout.children[1]), "News (1)");
    }

    #[test]
    fn test_groups_are_collapsed_by_default() {
        let layout = render(&create_test_tabs(), &HashSet::new());

        for card in &layout.children {
            assert_eq!(card.children.len(), 1, "collapsed card holds only its header");
            assert_eq!(card.children[0].kind, NodeKind::CategoryHeader);
        }
    }

    #[test]
    fn test_header_toggles_its_group() {
        let layout = render(&create_test_tabs(), &HashSet::new());
        let header = &layout.children[0].children[0];
        assert_eq!(header.on_click, Some(Binding::ToggleGroup(Category::Development)));
    }

    #[test]
    fn test_expanded_group_lists_members_with_affordances() {
        let mut expanded = HashSet::new();
        expanded.insert(Category::Development);

        let layout = render(&create_test_tabs(), &expanded);
        let dev_card = &layout.children[0];
        assert_eq!(dev_card.children.len(), 2);

        let dropdown = &dev_card.children[1];
        assert_eq!(dropdown.kind, NodeKind::Dropdown);
        assert_eq!(dropdown.children.len(), 2);

        let row = &dropdown.children[0];
        assert_eq!(row.kind, NodeKind::TabRow);
        assert_eq!(row.on_click, Some(Binding::Activate(1)));
        assert_eq!(row.children[0].text.as_deref(), Some("GitHub - foo"));
        assert_eq!(row.children[1].kind, NodeKind::UrlLabel);
        assert_eq!(row.children[1].text.as_deref(), Some("https://github.com/foo"));
        assert_eq!(row.children[2].on_click, Some(Binding::Remove(1)));

        // News stays collapsed.
        assert_eq!(layout.children[1].children.len(), 1);
    }

    #[test]
    fn test_no_records_render_empty_layout() {
        let layout = render(&[], &HashSet::new());
        assert_eq!(layout.kind, NodeKind::CategoryLayout);
        assert!(layout.children.is_empty());
    }
}
