use std::process;
use std::sync::Arc;

use anyhow::Result;

use plankan::api::planka::PlankaApi;
use plankan::config::Config;
use plankan::logger;
use plankan::ui;

#[tokio::main]
async fn main() -> Result<()> {
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {e:#}");
            process::exit(1);
        }
    };

    if config.logging.enabled {
        if let Err(e) = logger::init_file_logging(config.log_file()) {
            eprintln!("Failed to initialize file logging: {e:#}");
            process::exit(1);
        }
    }

    let credentials = match config.credentials() {
        Ok(credentials) => credentials,
        Err(e) => {
            eprintln!("{e:#}");
            process::exit(1);
        }
    };

    let api = match PlankaApi::connect(&credentials).await {
        Ok(api) => api,
        Err(e) => {
            eprintln!("Could not connect to {}: {e}", credentials.url);
            process::exit(1);
        }
    };

    ui::run_app(Arc::new(api), config).await
}
