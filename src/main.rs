mod app;
mod config;
mod game;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::config::GameConfig;

fn main() {
    init_tracing();
    info!("=== gpui-jumper startup ===");

    let config = match GameConfig::from_env() {
        Ok(config) => {
            info!(
                road_length = config.road_length,
                seeded = config.seed.is_some(),
                "config_loaded"
            );
            config
        }
        Err(err) => {
            error!(error = %err, "config_load_failed; using defaults");
            GameConfig::default()
        }
    };

    app::run(config);
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}
