// Standard library
use std::sync::Arc;
use std::time::Duration;

// 3rd party crates
use tokio::task::JoinHandle;

// Project imports
use crate::providers::DnsUpdater;
use crate::utility::ip_detector::traits::Ipv4Detector;

/// Runs the preflight check, probes every entry once and keeps a recurring
/// task alive for each entry whose probe succeeded.
pub struct EntryScheduler {
    pub updater: Arc<dyn DnsUpdater>,
    pub detector: Arc<dyn Ipv4Detector>,
}

/// Recurring update task of one committed entry.
#[derive(Debug)]
pub struct SchedulerHandle {
    pub(super) name: String,
    pub(super) interval: Duration,
    pub(super) task: JoinHandle<()>,
}
