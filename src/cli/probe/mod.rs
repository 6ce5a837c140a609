//! Probe command - checks database connectivity and exits

use tracing::info;

use crate::config::AppConfig;
use crate::infrastructure::logging::init_logging;

/// Load configuration, run the connectivity probe and fail if it does not pass
pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load()?;
    init_logging(&config.logging);

    let state = crate::create_app_state_with_config(&config)?;

    if !state.usuario_service.probe().await {
        anyhow::bail!("Database probe failed");
    }

    info!("Database probe succeeded");
    Ok(())
}
