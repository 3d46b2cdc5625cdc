// Persist the chart document: compact JSON, truncating any previous file. Not atomic.

use crate::models::ChartDocument;
use anyhow::Context;
use std::path::Path;
use tracing::info;

/// Writes `doc` to `path` and returns the number of bytes written.
pub fn write_chart(path: impl AsRef<Path>, doc: &ChartDocument) -> anyhow::Result<usize> {
    let path = path.as_ref();
    let bytes = serde_json::to_vec(doc)?;
    std::fs::write(path, &bytes).with_context(|| format!("writing {}", path.display()))?;
    info!(path = %path.display(), bytes = bytes.len(), "chart data written");
    Ok(bytes.len())
}
