//! Core library for Frameview
//!
//! This crate defines the tabular data types and the shared error type
//! used across all Frameview components.

pub mod error;
pub mod types;

// Re-exports
pub use error::{Error, Result};
pub use types::{CellValue, TableFrame};
