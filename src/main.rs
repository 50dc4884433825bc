use std::path::Path;

use anyhow::{Result, anyhow};
use tracing::{error, info};
use tracing_subscriber::{self, EnvFilter};

use simulation_events::simulation;
use simulation_events::utils::load_config;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    println!();
    info!("=========================== INITIALIZING ===========================");

    // Config lives next to the manifest
    let config_path = Path::new(env!("CARGO_MANIFEST_DIR")).join("config.yml");
    let config = match load_config(&config_path) {
        Ok(config) => {
            info!("Config loaded successfully");
            config
        }
        Err(e) => {
            error!("Failed to load config: {}", e);
            return Err(anyhow!(e));
        }
    };

    match simulation::run(&config).await {
        Ok(path) => {
            info!("Done: {}", path.display());
            Ok(())
        }
        Err(e) => {
            error!("Run aborted, no output written: {:#}", e);
            Err(e)
        }
    }
}
