// Client-side sum of series sharing timestamps.
// The key set comes from the first series: a later series missing one of those keys is an error,
// keys that only appear in later series are ignored.

use crate::models::{AggregatedReadings, Reading, Series};
use tracing::debug;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum AggregationError {
    #[error("query returned no series")]
    EmptyResponse,

    #[error("series {series_index} has no data point for timestamp {timestamp}")]
    MissingTimestamp {
        series_index: usize,
        timestamp: String,
    },
}

/// Sums every series' reading per timestamp of the first series.
pub fn aggregate_series(series: &[Series]) -> Result<AggregatedReadings, AggregationError> {
    let first = series.first().ok_or(AggregationError::EmptyResponse)?;

    let mut out = AggregatedReadings::new();
    for timestamp in first.dps.keys() {
        let mut sum = Reading::default();
        for (series_index, s) in series.iter().enumerate() {
            let value = s
                .dps
                .get(timestamp)
                .ok_or_else(|| AggregationError::MissingTimestamp {
                    series_index,
                    timestamp: timestamp.clone(),
                })?;
            sum = sum + *value;
        }
        out.insert(timestamp.clone(), sum);
    }

    let ignored = count_ignored_points(series);
    if ignored > 0 {
        debug!(ignored, "data points outside the first series' timestamps ignored");
    }
    Ok(out)
}

/// Data points in non-first series whose timestamp the first series does not have.
fn count_ignored_points(series: &[Series]) -> usize {
    let Some((first, rest)) = series.split_first() else {
        return 0;
    };
    rest.iter()
        .flat_map(|s| s.dps.keys())
        .filter(|k| !first.dps.contains_key(*k))
        .count()
}
