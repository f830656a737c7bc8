//! Table stylesheet
//!
//! Header pinning is plain CSS (`position: sticky`); the components do no
//! layout measurement of their own.

use dioxus::prelude::*;

/// CSS for the sticky table class tokens
pub const TABLE_CSS: &str = r#"
* {
    margin: 0;
    padding: 0;
    box-sizing: border-box;
}

body {
    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
    color: #2e3440;
    background: #ffffff;
    padding: 24px;
}

h1 {
    margin-bottom: 8px;
}

.frame-summary {
    color: #6c7a89;
    font-size: 0.875rem;
    margin-bottom: 16px;
}

.sticky-table-container {
    position: relative;
    width: 100%;
    max-height: 80vh;
    overflow: auto;
    border: 1px solid #d8dee9;
    border-radius: 8px;
}

.sticky-table-row {
    display: table-row;
}

.sticky-table-cell {
    display: table-cell;
    padding: 8px 16px;
    border-bottom: 1px solid #e5e9f0;
    white-space: nowrap;
}

.sticky-table-row.header-row .sticky-table-cell {
    position: sticky;
    top: 0;
    background: #f5f7fa;
    font-weight: 600;
    text-transform: uppercase;
    font-size: 0.75rem;
    letter-spacing: 0.05em;
    color: #4c566a;
}
"#;

/// Inject the table CSS as a style node
pub fn inject_table_css() -> Element {
    rsx! {
        style { dangerous_inner_html: TABLE_CSS }
    }
}
