//! Frameview UI
//!
//! Dioxus component library for rendering tabular datasets with sticky
//! headers. The components are pure presentational wrappers; scrolling and
//! header pinning are handled entirely by the stylesheet in [`theme`].

pub mod components;
pub mod pages;
pub mod theme;

// Re-exports
pub use components::{Cell, Row, Table};
pub use pages::{Explore, ExploreProps};
