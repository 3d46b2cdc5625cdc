// Google Charts DataTable models (`cols` + `rows`)

use serde::{Deserialize, Serialize};

use super::Reading;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    Date,
    Number,
    String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub id: String,
    pub label: String,
    pub pattern: String,
    #[serde(rename = "type")]
    pub type_: ColumnType,
}

impl Column {
    pub fn new(label: &str, type_: ColumnType) -> Self {
        Self {
            id: String::new(),
            label: label.to_string(),
            pattern: String::new(),
            type_,
        }
    }
}

/// Cell payload: epoch milliseconds for the date column, a reading for the value column.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Millis(i64),
    Reading(Reading),
}

/// `{"v": ...}`; `None` serializes as `null` (rendered as absent by the chart).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    pub v: Option<CellValue>,
}

impl Cell {
    pub fn empty() -> Self {
        Self { v: None }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row {
    pub c: Vec<Cell>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartDocument {
    pub cols: Vec<Column>,
    pub rows: Vec<Row>,
}
