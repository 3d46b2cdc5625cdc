use anyhow::Context;
use serde::Deserialize;
use std::path::Path;

/// Label of the value column in the default chart template.
pub const DEFAULT_SERIES_LABEL: &str = "Green Dorm Solar Panel Production";

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base URL of the OpenTSDB HTTP endpoint (e.g. `http://tsdb:4242`).
    pub url: String,
    pub output_path: String,
    pub request_timeout_secs: u64,
    pub series_label: String,
}

/// On-disk layout. `url` may sit at the top level or under an explicit `[DEFAULT]` table.
#[derive(Debug, Deserialize)]
struct RawConfig {
    url: Option<String>,
    #[serde(rename = "DEFAULT")]
    default_section: Option<DefaultSection>,
    #[serde(default = "default_output_path")]
    output_path: String,
    #[serde(default = "default_request_timeout_secs")]
    request_timeout_secs: u64,
    #[serde(default = "default_series_label")]
    series_label: String,
}

#[derive(Debug, Deserialize)]
struct DefaultSection {
    url: Option<String>,
}

fn default_output_path() -> String {
    "data.json".into()
}

fn default_request_timeout_secs() -> u64 {
    30
}

fn default_series_label() -> String {
    DEFAULT_SERIES_LABEL.into()
}

impl AppConfig {
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var("CONFIG_FILE").unwrap_or_else(|_| "config.toml".into());
        Self::load_from_path(&path)
    }

    pub fn load_from_path(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let s = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        Self::load_from_str(&s)
    }

    /// Parse and validate config from a string (e.g. for tests).
    pub fn load_from_str(s: &str) -> anyhow::Result<Self> {
        let raw: RawConfig = toml::from_str(s)?;
        let url = raw
            .url
            .or_else(|| raw.default_section.and_then(|d| d.url))
            .ok_or_else(|| anyhow::anyhow!("url must be set (top level or under [DEFAULT])"))?;
        let config = AppConfig {
            url,
            output_path: raw.output_path,
            request_timeout_secs: raw.request_timeout_secs,
            series_label: raw.series_label,
        };
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(!self.url.trim().is_empty(), "url must be non-empty");
        anyhow::ensure!(
            self.url.starts_with("http://") || self.url.starts_with("https://"),
            "url must start with http:// or https://, got {}",
            self.url
        );
        anyhow::ensure!(!self.output_path.is_empty(), "output_path must be non-empty");
        anyhow::ensure!(
            self.request_timeout_secs > 0,
            "request_timeout_secs must be > 0, got {}",
            self.request_timeout_secs
        );
        Ok(())
    }
}
