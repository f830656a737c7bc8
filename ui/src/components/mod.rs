//! Reusable UI components

mod cell;
mod row;
mod table;

pub use cell::Cell;
pub use row::Row;
pub use table::Table;
