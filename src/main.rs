//! ONG service
//!
//! Reads configuration from a TOML file (`$ONG_CONFIG`, else
//! `~/.config/ong-service/config.toml`) and serves the REST API until
//! SIGINT/SIGTERM.

use tracing::{error, info};

use ong_api::server::{init_tracing, ServerHandle, ServerOptions};
use ong_api::{default_config_path, AppConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config_path = default_config_path();

    let (app_cfg, load_error) = match AppConfig::load(&config_path) {
        Ok(cfg) => (cfg, None),
        Err(e) => {
            let mut cfg = AppConfig::default();
            cfg.apply_overrides(std::env::var(ong_api::config::DATABASE_URL_ENV).ok());
            (cfg, Some(e))
        }
    };

    init_tracing(&app_cfg);
    match load_error {
        None => info!("Configuration loaded from {}", config_path.display()),
        Some(e) => error!("Failed to load config: {}. Using defaults.", e),
    }

    let handle = match ServerHandle::start(ServerOptions::from(app_cfg)).await {
        Ok(handle) => handle,
        Err(e) => {
            error!("Failed to start server: {}", e);
            return Err(e);
        }
    };

    handle.install_signal_handler();
    info!("Server started. Press Ctrl+C to shutdown gracefully.");

    handle.wait().await;
    Ok(())
}
