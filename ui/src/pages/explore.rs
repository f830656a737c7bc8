//! Explore page - tabular dataset view

use dioxus::prelude::*;
use frameview_core::TableFrame;

use crate::components::{Cell, Row, Table};

#[derive(Clone, PartialEq, Props)]
pub struct ExploreProps {
    pub frame: TableFrame,
}

/// Render a frame as a sticky-header table: one header row of column names,
/// then one row per data row. Static composition, no handlers.
#[component]
pub fn Explore(props: ExploreProps) -> Element {
    let frame = props.frame;
    let row_count = frame.rows.len();
    let column_count = frame.columns.len();

    rsx! {
        div {
            h1 { "{frame.title}" }
            p { class: "frame-summary", "{row_count} rows, {column_count} columns" }

            Table { class: "explore-table",
                Row { class: "header-row",
                    for (i, name) in frame.columns.iter().enumerate() {
                        Cell { key: "{i}", "{name}" }
                    }
                }

                for (r, row) in frame.rows.iter().enumerate() {
                    Row { key: "{r}",
                        for (c, value) in row.iter().enumerate() {
                            Cell { key: "{r}-{c}", "{value}" }
                        }
                    }
                }
            }
        }
    }
}
