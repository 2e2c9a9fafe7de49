//! Campaign API server entry point
//!
//! Run with:
//! ```bash
//! cargo run -p campaign-api
//! ```
//!
//! Configuration is loaded from environment variables (and `.env`).

use campaign_common::{try_init_tracing, try_init_tracing_with_config, AppConfig, TracingConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            // Subscriber still needed to report the failure
            if let Err(init) = try_init_tracing() {
                eprintln!("Warning: Failed to initialize tracing: {init}");
            }
            error!(error = %e, "Failed to load configuration");
            std::process::exit(1);
        }
    };

    if let Err(e) = try_init_tracing_with_config(TracingConfig::for_environment(config.app.env)) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    info!(
        app = %config.app.name,
        env = ?config.app.env,
        port = config.api.port,
        "Starting campaign API server"
    );

    if let Err(e) = campaign_api::run(config).await {
        error!(error = %e, "Server failed");
        std::process::exit(1);
    }
}
