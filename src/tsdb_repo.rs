// OpenTSDB HTTP query: one GET against /api/query, parsed into Series.
// No retry. The request is bounded by the client timeout.

use crate::models::Series;
use crate::version;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info};

pub const QUERY_PATH: &str = "/api/query";

/// 3-day trailing window, hourly-averaged rate of `energy`, summed over the three panel sources.
pub const ENERGY_QUERY: &str = "start=3d-ago&m=sum:1h-avg:rate:energy{source=GDSP1|GDSP2|GDSP3}";

#[derive(Debug, thiserror::Error)]
pub enum TsdbError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("OpenTSDB returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("failed to decode query response: {0}")]
    Decode(#[from] serde_json::Error),
}

pub struct TsdbRepo {
    base_url: String,
    client: Client,
}

impl TsdbRepo {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, TsdbError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(version::user_agent())
            .build()?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn query_url(&self) -> String {
        format!("{}{}?{}", self.base_url, QUERY_PATH, ENERGY_QUERY)
    }

    /// Issues the energy query and returns the series in response order.
    pub async fn fetch_series(&self) -> Result<Vec<Series>, TsdbError> {
        let url = self.query_url();
        debug!(url = %url, "querying OpenTSDB");

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(TsdbError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let series = parse_series(&body)?;
        info!(series = series.len(), "OpenTSDB query returned");
        Ok(series)
    }
}

/// Parses an `/api/query` response body (a JSON array of series).
pub fn parse_series(body: &str) -> Result<Vec<Series>, serde_json::Error> {
    serde_json::from_str(body)
}
