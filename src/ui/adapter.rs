/// Yew adapter: materializes abstract render trees as elements

use yew::prelude::*;

use crate::view::{Binding, Node, NodeKind};

/// Element class for each node kind, matching the extension stylesheet.
fn class_name(kind: NodeKind) -> &'static str {
    match kind {
        NodeKind::SphereLayout => "sphere-view",
        NodeKind::SphereNode => "tab-node",
        NodeKind::DomainLabel => "domain",
        NodeKind::TitleLabel => "title",
        NodeKind::CategoryLayout => "category-view",
        NodeKind::CategoryCard => "category-card",
        NodeKind::CategoryHeader => "category-title",
        NodeKind::Dropdown => "dropdown",
        NodeKind::TabRow => "tab-title",
        NodeKind::UrlLabel => "tab-url-text",
        NodeKind::TimelineLayout => "timeline-view",
        NodeKind::TimeGroup => "time-group",
        NodeKind::TimeHeader => "time-title",
        NodeKind::TabCard => "tab-card",
        NodeKind::RemoveButton => "remove-tab-button",
    }
}

/// Turn one abstract node and its subtree into Html, routing every click
/// through `on_action`.
pub fn render_node(node: &Node, on_action: &Callback<Binding>) -> Html {
    let class = class_name(node.kind);

    let onclick = node.on_click.map(|binding| {
        let on_action = on_action.clone();
        Callback::from(move |event: MouseEvent| {
            // Remove buttons sit inside activate targets; the click must
            // not bubble into them.
            if matches!(binding, Binding::Remove(_)) {
                event.stop_propagation();
            }
            on_action.emit(binding);
        })
    });

    let style = node.pos.map(|p| {
        format!(
            "left: {}px; top: {}px; transform: translate(-50%, -50%);",
            p.x, p.y
        )
    });

    let inner = html! {
        <>
            if let Some(text) = &node.text {
                {text.clone()}
            }
            {for node.children.iter().map(|child| render_node(child, on_action))}
        </>
    };

    match node.kind {
        NodeKind::SphereLayout => html! {
            <div class={class}>
                <div class="sphere-container">{inner}</div>
            </div>
        },
        NodeKind::RemoveButton => html! {
            <button class={class} onclick={onclick}>{inner}</button>
        },
        NodeKind::CategoryHeader | NodeKind::TimeHeader => html! {
            <h3 class={class} onclick={onclick}>{inner}</h3>
        },
        NodeKind::UrlLabel => html! {
            <span class={class}>{inner}</span>
        },
        _ => html! {
            <div class={class} style={style} onclick={onclick}>{inner}</div>
        },
    }
}
