// One run: fetch -> aggregate -> format -> write. Every stage consumes the previous one's full
// output, and nothing touches the output file unless all earlier stages succeeded.

use crate::aggregation::aggregate_series;
use crate::chart::{build_chart, default_columns};
use crate::config::AppConfig;
use crate::tsdb_repo::TsdbRepo;
use crate::writer::write_chart;
use std::time::Duration;
use tracing::{info, instrument};

/// What a successful run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub series_count: usize,
    pub row_count: usize,
    pub output_path: String,
}

#[instrument(skip(config), fields(url = %config.url, output = %config.output_path))]
pub async fn run(config: &AppConfig) -> anyhow::Result<RunSummary> {
    let repo = TsdbRepo::new(
        &config.url,
        Duration::from_secs(config.request_timeout_secs),
    )?;
    let series = repo.fetch_series().await?;

    let readings = aggregate_series(&series)?;
    info!(timestamps = readings.len(), "series aggregated");

    let doc = build_chart(&readings, default_columns(&config.series_label))?;
    write_chart(&config.output_path, &doc)?;

    Ok(RunSummary {
        series_count: series.len(),
        row_count: doc.rows.len(),
        output_path: config.output_path.clone(),
    })
}
