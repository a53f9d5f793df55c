/// Sphere view: every tab on one circle

use std::f64::consts::TAU;

use crate::tab_data::Tab;
use crate::view::{Binding, Node, NodeKind, Point};

pub const SPHERE_RADIUS: f64 = 120.0;
pub const SPHERE_CENTER_X: f64 = 160.0;
pub const SPHERE_CENTER_Y: f64 = 160.0;

/// Longest title shown on a sphere node; longer titles are cut to 17 chars
/// plus an ellipsis marker.
pub const TITLE_MAX: usize = 20;

/// Place the records evenly around the circle: node `i` of `n` sits at
/// angle `2π·i/n` from the center.
pub fn render(tabs: &[Tab]) -> Node {
    let mut layout = Node::new(NodeKind::SphereLayout);
    if tabs.is_empty() {
        // No records: empty layout, and no zero division below.
        return layout;
    }

    let count = tabs.len() as f64;
    for (index, tab) in tabs.iter().enumerate() {
        let angle = (index as f64 / count) * TAU;
        let x = angle.cos() * SPHERE_RADIUS + SPHERE_CENTER_X;
        let y = angle.sin() * SPHERE_RADIUS + SPHERE_CENTER_Y;

        let mut node = Node::new(NodeKind::SphereNode);
        node.pos = Some(Point { x, y });
        node.on_click = Some(Binding::Activate(tab.id));
        node.push(Node::text(NodeKind::DomainLabel, tab.domain.clone()));
        node.push(Node::text(NodeKind::TitleLabel, truncate_title(&tab.title)));

        let mut remove = Node::text(NodeKind::RemoveButton, "X");
        remove.on_click = Some(Binding::Remove(tab.id));
        node.push(remove);

        layout.push(node);
    }
    layout
}

fn truncate_title(title: &str) -> String {
    // Char-based so a multibyte title can never be split mid-character.
    if title.chars().count() > TITLE_MAX {
        let head: String = title.chars().take(TITLE_MAX - 3).collect();
        format!("{}...", head)
    } else {
        title.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tab_data::RawTab;

    fn create_test_tabs(n: usize) -> Vec<Tab> {
        (0..n)
            .map(|i| {
                Tab::from_raw(RawTab::new(
                    i as i32,
                    &format!("Tab {}", i),
                    &format!("https://example.org/{}", i),
                ))
            })
            .collect()
    }

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-9, "{} vs {}", a, b);
    }

    #[test]
    fn test_zero_records_render_empty_layout() {
        let layout = render(&[]);
        assert_eq!(layout.kind, NodeKind::SphereLayout);
        assert!(layout.children.is_empty());
    }

    #[test]
    fn test_nodes_follow_the_circle_formula() {
        let tabs = create_test_tabs(4);
        let layout = render(&tabs);

        assert_eq!(layout.children.len(), 4);
        for (i, node) in layout.children.iter().enumerate() {
            let angle = (i as f64 / 4.0) * TAU;
            let pos = node.pos.expect("sphere nodes carry a position");
            assert_close(pos.x, angle.cos() * SPHERE_RADIUS + SPHERE_CENTER_X);
            assert_close(pos.y, angle.sin() * SPHERE_RADIUS + SPHERE_CENTER_Y);
        }

        // First node sits at angle zero, due right of center.
        let first = layout.children[0].pos.unwrap();
        assert_close(first.x, SPHERE_CENTER_X + SPHERE_RADIUS);
        assert_close(first.y, SPHERE_CENTER_Y);
    }

    #[test]
    fn test_positions_are_distinct() {
        let tabs = create_test_tabs(6);
        let layout = render(&tabs);
        let positions: Vec<Point> = layout.children.iter().map(|n| n.pos.unwrap()).collect();

        for (i, a) in positions.iter().enumerate() {
            for b in positions.iter().skip(i + 1) {
                let dist = ((a.x - b.x).powi(2) + (a.y - b.y).powi(2)).sqrt();
                assert!(dist > 1.0, "two nodes collapsed onto one point");
            }
        }
    }

    #[test]
    fn test_single_record_is_placed_without_panic() {
        let layout = render(&create_test_tabs(1));
        assert_eq!(layout.children.len(), 1);
        let pos = layout.children[0].pos.unwrap();
        assert_close(pos.x, SPHERE_CENTER_X + SPHERE_RADIUS);
        assert_close(pos.y, SPHERE_CENTER_Y);
    }

    #[test]
    fn test_node_carries_both_affordances() {
        let tabs = vec![Tab::from_raw(RawTab::new(
            7,
            "GitHub - foo",
            "https://github.com/foo",
        ))];
        let layout = render(&tabs);
        let node = &layout.children[0];

        assert_eq!(node.on_click, Some(Binding::Activate(7)));
        assert_eq!(node.children[0].kind, NodeKind::DomainLabel);
        assert_eq!(node.children[0].text.as_deref(), Some("github.com"));
        assert_eq!(node.children[1].kind, NodeKind::TitleLabel);

        let remove = &node.children[2];
        assert_eq!(remove.kind, NodeKind::RemoveButton);
        assert_eq!(remove.on_click, Some(Binding::Remove(7)));
    }

    #[test]
    fn test_title_truncation_cap() {
        assert_eq!(truncate_title("short"), "short");
        assert_eq!(truncate_title("exactly twenty chars"), "exactly twenty chars");
        assert_eq!(
            truncate_title("this title is definitely too long"),
            "this title is def...",
        );
    }

    #[test]
    fn test_title_truncation_is_char_based() {
        let title = "日本語のタイトルがとてもとても長い場合でも安全です";
        let cut = truncate_title(title);
        assert_eq!(cut.chars().count(), TITLE_MAX);
        assert!(cut.ends_with("..."));
    }
}
