//! Sticky table cell component

use dioxus::prelude::*;

/// Cell wrapper with the same class-merge and attribute-forwarding contract
/// as [`Table`](super::Table), under the `sticky-table-cell` token.
#[component]
pub fn Cell(
    #[props(default = None)] class: Option<String>,
    #[props(extends = div, extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let class = format!("sticky-table-cell {}", class.unwrap_or_default());

    rsx! {
        div { class: "{class}", ..attributes, {children} }
    }
}
