//! Shared types

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single cell value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Integer(i64),
    Float(f64),
    Text(String),
    Bool(bool),
    /// Missing observation, rendered as an empty cell
    Missing,
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Integer(v) => write!(f, "{}", v),
            CellValue::Float(v) => write!(f, "{}", v),
            CellValue::Text(v) => write!(f, "{}", v),
            CellValue::Bool(v) => write!(f, "{}", v),
            CellValue::Missing => Ok(()),
        }
    }
}

impl From<i64> for CellValue {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for CellValue {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<&str> for CellValue {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for CellValue {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<bool> for CellValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

/// A titled table of columns and typed rows
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableFrame {
    /// Display title for the frame
    pub title: String,
    /// Column names, in display order
    pub columns: Vec<String>,
    /// Row data; every row holds exactly `columns.len()` cells
    pub rows: Vec<Vec<CellValue>>,
}

impl TableFrame {
    /// Create an empty frame with the given columns
    pub fn new(title: impl Into<String>, columns: Vec<String>) -> Self {
        Self {
            title: title.into(),
            columns,
            rows: Vec::new(),
        }
    }

    /// Append a row, padding with missing cells or truncating so the row
    /// matches the column count.
    pub fn push_row(&mut self, mut row: Vec<CellValue>) {
        row.resize(self.columns.len(), CellValue::Missing);
        self.rows.push(row);
    }

    /// Number of data rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Is the frame empty of data rows?
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Built-in demo frame served when no dataset is configured
    pub fn sample() -> Self {
        let mut frame = Self::new(
            "Sample dataset",
            vec![
                "name".to_string(),
                "count".to_string(),
                "ratio".to_string(),
                "active".to_string(),
            ],
        );
        frame.push_row(vec![
            "alpha".into(),
            412_i64.into(),
            0.87.into(),
            true.into(),
        ]);
        frame.push_row(vec![
            "beta".into(),
            57_i64.into(),
            0.12.into(),
            false.into(),
        ]);
        frame.push_row(vec!["gamma".into(), 9001_i64.into(), CellValue::Missing]);
        frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_row_pads_short_rows() {
        let mut frame = TableFrame::new("t", vec!["a".to_string(), "b".to_string()]);
        frame.push_row(vec![1_i64.into()]);
        assert_eq!(frame.rows[0], vec![CellValue::Integer(1), CellValue::Missing]);
    }

    #[test]
    fn test_push_row_truncates_long_rows() {
        let mut frame = TableFrame::new("t", vec!["a".to_string()]);
        frame.push_row(vec![1_i64.into(), 2_i64.into()]);
        assert_eq!(frame.rows[0], vec![CellValue::Integer(1)]);
    }

    #[test]
    fn test_cell_value_display() {
        assert_eq!(CellValue::Integer(42).to_string(), "42");
        assert_eq!(CellValue::Text("x".to_string()).to_string(), "x");
        assert_eq!(CellValue::Missing.to_string(), "");
    }

    #[test]
    fn test_frame_from_json() {
        let json = r#"{
            "title": "demo",
            "columns": ["name", "count"],
            "rows": [["alpha", 3], ["beta", 7]]
        }"#;
        let frame: TableFrame = serde_json::from_str(json).unwrap();
        assert_eq!(frame.columns.len(), 2);
        assert_eq!(frame.rows[1][1], CellValue::Integer(7));
    }

    #[test]
    fn test_sample_rows_match_columns() {
        let frame = TableFrame::sample();
        for row in &frame.rows {
            assert_eq!(row.len(), frame.columns.len());
        }
    }
}
