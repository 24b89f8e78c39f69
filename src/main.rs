// Standard library
use std::error::Error;
use std::process::ExitCode;
use std::sync::Arc;

// 3rd party crates
use tokio::signal::ctrl_c;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};
use tracing_subscriber::{filter::LevelFilter, EnvFilter};

// Project modules
mod functions;
mod providers;
mod scheduler;
mod settings;
mod utility;

// Project imports
use crate::functions::run;
use crate::settings::types::ConfigManager;

/// Main entry point for the CasaDNS updater.
/// This application keeps CasaDNS domains pointed at the host's current
/// public IPv4 address by calling the update endpoint on a fixed cadence.
///
/// Features:
/// - Public IPv4 check before anything is scheduled
/// - One immediate update per entry, recurring updates only after a success
/// - Bounded, non-overlapping update calls per entry
/// - Configurable interval per entry
/// - Detailed logging without credentials
#[tokio::main]
async fn main() -> ExitCode {
    // loads the .env file from the current directory or parents.
    dotenvy::dotenv_override().ok();

    let config: Arc<ConfigManager> = match ConfigManager::new() {
        Ok(config) => Arc::new(config),
        Err(e) => {
            eprintln!("Failed to initialize configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    // setup logging.
    if let Err(e) = setup_logging(config.get_log_level()) {
        eprintln!("Failed to initialize logging: {}", e);
        return ExitCode::FAILURE;
    }

    info!("⚙️ Settings have been loaded.");

    // Cancelled on Ctrl+C
    let shutdown = CancellationToken::new();
    let shutdown_trigger = shutdown.clone();

    // Handle Ctrl+C
    tokio::spawn(async move {
        if let Err(e) = ctrl_c().await {
            error!("Failed to listen for Ctrl+C: {}", e);
            return;
        }
        info!("Received shutdown signal, initiating graceful shutdown...");
        shutdown_trigger.cancel();
    });

    // Run the main application logic with shutdown signal
    let exit_code: ExitCode = match run(config, shutdown).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Application error: {}", e);
            ExitCode::FAILURE
        }
    };

    info!("Shutdown complete.");
    exit_code
}

fn setup_logging(log_level: String) -> Result<(), Box<dyn Error>> {
    let filter: EnvFilter = EnvFilter::builder()
        .with_default_directive(LevelFilter::ERROR.into())
        .parse_lossy(log_level)
        .add_directive("hyper_util=error".parse()?)
        .add_directive("reqwest=error".parse()?)
        .add_directive("hyper=error".parse()?);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_level(true)
        .init();

    Ok(())
}
