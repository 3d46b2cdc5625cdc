// Domain models: query response in, chart document out

mod chart;
mod series;

pub use chart::{Cell, CellValue, ChartDocument, Column, ColumnType, Row};
pub use series::{AggregatedReadings, Reading, Series};
