//! Filmorate API Server entry point
//!
//! Run with:
//! ```bash
//! cargo run -p filmorate-api
//! ```
//!
//! Configuration is loaded from environment variables or a `.env` file.

use filmorate_common::{try_init_tracing, try_init_tracing_with_config, AppConfig, TracingConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    // Load configuration before tracing so the log format can follow it
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            if let Err(e) = try_init_tracing() {
                eprintln!("Warning: Failed to initialize tracing: {e}");
            }
            error!(error = %e, "Failed to load configuration");
            std::process::exit(1);
        }
    };

    if let Err(e) = try_init_tracing_with_config(TracingConfig::for_app(&config)) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    info!(
        app = %config.app.name,
        env = ?config.app.env,
        backend = ?config.storage.backend,
        address = %config.api.address(),
        "Starting Filmorate API Server..."
    );

    if let Err(e) = filmorate_api::run(config).await {
        error!(error = %e, "Server failed to start");
        std::process::exit(1);
    }
}
