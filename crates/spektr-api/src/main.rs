//! Spektr API server entry point
//!
//! Run with:
//! ```bash
//! cargo run -p spektr-api
//! ```
//!
//! Configuration is loaded from environment variables (a `.env` file is
//! honored when present).

use tracing::{error, info};

use spektr_common::{try_init_tracing, AppConfig};

#[tokio::main]
async fn main() {
    if let Err(e) = try_init_tracing() {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    if let Err(e) = run().await {
        error!(error = %e, "Server failed to start");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    info!("Starting Spektr API server...");

    let config = AppConfig::from_env().map_err(|e| {
        error!(error = %e, "Failed to load configuration");
        e
    })?;

    info!(
        env = ?config.app.env,
        port = config.api.port,
        "Configuration loaded"
    );

    spektr_api::run(config).await?;

    Ok(())
}
