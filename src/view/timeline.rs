/// Timeline view: fixed recency buckets

use crate::tab_data::{Tab, Timeframe};
use crate::view::{Binding, Node, NodeKind};

/// Group the records by recency bucket.
///
/// Every bucket in `Timeframe::ALL` renders, members or not; an empty
/// bucket is a bare header. The category view does the opposite and skips
/// empty groups entirely.
pub fn render(tabs: &[Tab]) -> Node {
    let mut layout = Node::new(NodeKind::TimelineLayout);

    for timeframe in Timeframe::ALL {
        let mut group = Node::new(NodeKind::TimeGroup);
        group.push(Node::text(NodeKind::TimeHeader, timeframe.label()));

        for tab in tabs.iter().filter(|t| t.last_accessed == timeframe) {
            let mut card = Node::text(NodeKind::TabCard, tab.title.clone());
            card.on_click = Some(Binding::Activate(tab.id));

            let mut remove = Node::text(NodeKind::RemoveButton, "X");
            remove.on_click = Some(Binding::Remove(tab.id));
            card.push(remove);

            group.push(card);
        }

        layout.push(group);
    }
    layout
}
