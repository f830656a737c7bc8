//! Sticky table container component

use dioxus::prelude::*;

/// Scroll container for a sticky table.
///
/// The root div's class is the `sticky-table-container` token joined to the
/// caller's class with a single space; with no caller class the separator is
/// still emitted, so the value ends in a trailing space. Every other caller
/// attribute is forwarded verbatim onto the root div and the children render
/// inside it, unchanged and in order.
#[component]
pub fn Table(
    /// Additional classes appended after the base token
    #[props(default = None)]
    class: Option<String>,
    #[props(extends = div, extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let class = format!("sticky-table-container {}", class.unwrap_or_default());

    rsx! {
        div { class: "{class}", ..attributes, {children} }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(app: fn() -> Element) -> String {
        let mut vdom = VirtualDom::new(app);
        vdom.rebuild_in_place();
        dioxus_ssr::Renderer::new().render(&vdom)
    }

    #[test]
    fn test_merges_caller_class_and_forwards_attributes() {
        fn app() -> Element {
            rsx! {
                Table { class: "wide", id: "t1", "Row1" }
            }
        }

        let html = render(app);
        assert!(
            html.contains(r#"class="sticky-table-container wide""#),
            "unexpected html: {html}"
        );
        assert!(html.contains(r#"id="t1""#), "unexpected html: {html}");
        assert!(html.contains("Row1"), "unexpected html: {html}");
    }

    #[test]
    fn test_base_token_keeps_trailing_space_without_caller_class() {
        fn app() -> Element {
            rsx! {
                Table { "Row1" }
            }
        }

        let html = render(app);
        assert!(
            html.contains(r#"class="sticky-table-container ""#),
            "unexpected html: {html}"
        );
    }

    #[test]
    fn test_children_render_in_order() {
        fn app() -> Element {
            rsx! {
                Table {
                    span { "A" }
                    span { "B" }
                }
            }
        }

        let html = render(app);
        let a = html.find("<span>A</span>").expect("first child missing");
        let b = html.find("<span>B</span>").expect("second child missing");
        assert!(a < b, "children out of order: {html}");
    }

    #[test]
    fn test_forwards_title_attribute() {
        fn app() -> Element {
            rsx! {
                Table { title: "dataset", "Row1" }
            }
        }

        let html = render(app);
        assert!(html.contains(r#"title="dataset""#), "unexpected html: {html}");
    }
}
