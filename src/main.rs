use anyhow::Result;
use energy_chart::*;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::time::FormatTime;

struct LocalTimer;

impl FormatTime for LocalTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> std::fmt::Result {
        write!(
            w,
            "{}",
            chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%.3f%:z")
        )
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_timer(LocalTimer)
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("{} {} starting", version::NAME, version::VERSION);

    let app_config = config::AppConfig::load().inspect_err(|e| {
        tracing::error!("failed to load config: {:#}", e);
    })?;

    let summary = pipeline::run(&app_config).await.inspect_err(|e| {
        tracing::error!("run failed: {:#}", e);
    })?;

    tracing::info!(
        series = summary.series_count,
        rows = summary.row_count,
        output = %summary.output_path,
        "done"
    );
    Ok(())
}
