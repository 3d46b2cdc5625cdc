// Aggregated readings -> Google Charts DataTable.

use crate::models::{
    AggregatedReadings, Cell, CellValue, ChartDocument, Column, ColumnType, Reading, Row,
};

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ChartError {
    #[error("timestamp {0:?} is not a valid epoch-seconds integer")]
    InvalidTimestamp(String),
}

/// The fixed four-column template: Date, value, title, text.
pub fn default_columns(series_label: &str) -> Vec<Column> {
    vec![
        Column::new("Date", ColumnType::Date),
        Column::new(series_label, ColumnType::Number),
        Column::new("title", ColumnType::String),
        Column::new("text", ColumnType::String),
    ]
}

/// One row: `[epoch_ms, reading, null, null]`.
pub fn build_row(timestamp: &str, reading: Reading) -> Result<Row, ChartError> {
    let millis = timestamp
        .parse::<i64>()
        .ok()
        .and_then(|secs| secs.checked_mul(1000))
        .ok_or_else(|| ChartError::InvalidTimestamp(timestamp.to_string()))?;

    Ok(Row {
        c: vec![
            Cell {
                v: Some(CellValue::Millis(millis)),
            },
            Cell {
                v: Some(CellValue::Reading(reading)),
            },
            Cell::empty(),
            Cell::empty(),
        ],
    })
}

/// Rows are emitted in the map's key order, i.e. sorted by the timestamp string.
/// That equals numeric order as long as all keys have the same number of digits.
pub fn build_chart(
    readings: &AggregatedReadings,
    columns: Vec<Column>,
) -> Result<ChartDocument, ChartError> {
    let rows = readings
        .iter()
        .map(|(ts, reading)| build_row(ts, *reading))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(ChartDocument {
        cols: columns,
        rows,
    })
}
