// Standard library
use std::error::Error;
use std::sync::Arc;
use std::time::Duration;

// 3rd party crates
use futures::future::join_all;
use reqwest::Client;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

// Project imports
use crate::providers::casadns::types::{CasaDns, Endpoint, UpdateEntry};
use crate::scheduler::{EntryScheduler, SchedulerHandle};
use crate::settings::types::ConfigManager;
use crate::utility::http::create_reqwest_client;
use crate::utility::ip_detector::types::IpDetector;

/// How long shutdown waits for in-flight updates before abandoning them
const SHUTDOWN_GRACE: Duration = Duration::from_secs(5);

/// Main application flow.
///
/// This function:
/// - Builds the shared HTTP client used for every outbound call
/// - Checks for a public IPv4 address before anything is scheduled
/// - Probes each entry once and schedules the ones that succeeded
/// - Waits for the shutdown signal, then lets in-flight updates finish
///
/// Returns an error when the preflight check fails.
pub async fn run(
    config: Arc<ConfigManager>,
    shutdown: CancellationToken,
) -> Result<(), Box<dyn Error>> {
    let settings = config.get_settings();
    let entries: Vec<UpdateEntry> = settings.get_entries();
    let endpoint: Endpoint = Endpoint::casadns(settings.get_endpoint_variant());
    let ip_detection = settings.get_ip_detection();

    let client: Client = create_reqwest_client()?;
    let casadns = CasaDns::new(client.clone(), endpoint);
    let ip_detector = IpDetector::new(ip_detection, client);
    let scheduler = EntryScheduler::new(Arc::new(casadns), Arc::new(ip_detector));

    let entry_count: usize = entries.len();
    let handles: Vec<SchedulerHandle> = tokio::select! {
        biased;

        _ = shutdown.cancelled() => {
            info!("Received shutdown signal before any entry was scheduled");
            return Ok(());
        }

        result = scheduler.start(entries, &shutdown) => result?,
    };

    if handles.is_empty() {
        warn!("None of the {} entries could be scheduled, exiting", entry_count);
        return Ok(());
    }

    let names: Vec<&str> = handles.iter().map(SchedulerHandle::name).collect();
    info!(
        "Scheduled {} of {} entries: {}",
        handles.len(),
        entry_count,
        names.join(", ")
    );

    shutdown.cancelled().await;
    info!("Received shutdown signal, waiting for in-progress updates...");

    join_all(handles.into_iter().map(|handle| handle.stop(SHUTDOWN_GRACE))).await;

    Ok(())
}
