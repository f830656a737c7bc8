//! Sticky table row component

use dioxus::prelude::*;

/// Row wrapper with the same class-merge and attribute-forwarding contract
/// as [`Table`](super::Table), under the `sticky-table-row` token.
#[component]
pub fn Row(
    #[props(default = None)] class: Option<String>,
    #[props(extends = div, extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let class = format!("sticky-table-row {}", class.unwrap_or_default());

    rsx! {
        div { class: "{class}", ..attributes, {children} }
    }
}
