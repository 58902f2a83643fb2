use analytics::AnalyticsEngine;
use anyhow::Context;
use std::path::Path;
use web_server::AppState;

/// Optional settings file, read from the working directory.
const CONFIG_FILE: &str = "config.toml";

/// The main entry point for the sales dashboard.
///
/// Loads the sales table once, then serves the interactive dashboard on the
/// local address from the settings. Any load failure is fatal.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = configuration::load_settings(Path::new(CONFIG_FILE))
        .context("Failed to load settings")?;

    // Hold the guard so buffered file logs are flushed on exit.
    let _log_guard = configuration::init_tracing(&settings.logging)?;

    let engine = AnalyticsEngine::new(settings.analytics.cost_ratio)?;

    let table = dataset::load(&settings.data.path).with_context(|| {
        format!(
            "Failed to load sales data from {}",
            settings.data.path.display()
        )
    })?;
    if table.is_empty() {
        tracing::warn!("Sales data is empty; every chart will show no data.");
    }

    web_server::run_server(settings.server.socket_addr(), AppState::new(table, engine)).await
}
