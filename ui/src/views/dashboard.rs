use dioxus::prelude::*;

use crate::charts::{Chart, PLOTLY_JS};
use crate::components::{DataPathDropdown, DiagnosisInput};
use crate::layout::{LayoutNode, Slot};
use crate::page::Document;

/// Shared theme, inlined so server output and every platform get the same rules.
pub const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/theme/main.css"
));

/// Renders a built [`Document`] by walking its layout tree.
#[component]
pub fn Dashboard(page: Document) -> Element {
    rsx! {
        document::Title { "{page.title}" }
        document::Style { "{THEME_CSS}" }
        document::Script { src: PLOTLY_JS }

        {render_node(&page.layout, &page)}
    }
}

fn render_node(node: &LayoutNode, page: &Document) -> Element {
    let preset = node.preset();
    let class = preset.class();
    let style = preset.inline_style();

    match node {
        LayoutNode::Row { children, .. } => rsx! {
            div { class: "{class}", style: "{style}", "data-layout": "row",
                for child in children.iter() {
                    {render_node(child, page)}
                }
            }
        },
        LayoutNode::Column { children, .. } => rsx! {
            div { class: "{class}", style: "{style}", "data-layout": "column",
                for child in children.iter() {
                    {render_node(child, page)}
                }
            }
        },
        LayoutNode::Leaf { slot, .. } => render_leaf(*slot, &class, &style, page),
    }
}

fn render_leaf(slot: Slot, class: &str, style: &str, page: &Document) -> Element {
    let content = match slot {
        Slot::Title => {
            return rsx! {
                h2 { class: "{class}", "{page.title}" }
            }
        }
        Slot::DataPathDropdown => rsx! {
            DataPathDropdown { state: page.dropdown.clone() }
        },
        Slot::DiagnosisInput => rsx! {
            DiagnosisInput { state: page.text_field.clone() }
        },
        Slot::SamplingCaption => rsx! {
            span { "{page.caption}" }
        },
        Slot::MainChart | Slot::SmallChart(_) => match page.chart(slot) {
            Some((id, config)) => rsx! {
                Chart { key: "{id}", id: id.clone(), config: config.clone() }
            },
            None => {
                tracing::warn!(?slot, "layout slot has no chart");
                rsx! {}
            }
        },
    };

    rsx! {
        div { class: "{class}", style: "{style}", {content} }
    }
}
