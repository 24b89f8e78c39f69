// Standard library
use std::sync::Arc;
use std::time::Duration;

// 3rd party crates
use futures::{stream::FuturesUnordered, StreamExt};
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

// Project imports
use crate::providers::casadns::types::{UpdateEntry, UpdateResult};
use crate::providers::DnsUpdater;
use crate::utility::ip_detector::traits::Ipv4Detector;

// Current module imports
use super::constants::MAX_INTERVAL;
use super::errors::SchedulerError;
use super::types::{EntryScheduler, SchedulerHandle};

impl EntryScheduler {
    pub fn new(updater: Arc<dyn DnsUpdater>, detector: Arc<dyn Ipv4Detector>) -> Self {
        Self { updater, detector }
    }

    /// Sets up recurring updates for the given entries.
    ///
    /// This function:
    /// - Aborts before any update call when no public IPv4 address is found
    /// - Probes every entry once, concurrently
    /// - Spawns a recurring task only for entries whose probe succeeded
    ///
    /// Returned handles are in configuration order. Each task stops once
    /// `shutdown` is cancelled, including when that happened before it was spawned.
    pub async fn start(
        &self,
        entries: Vec<UpdateEntry>,
        shutdown: &CancellationToken,
    ) -> Result<Vec<SchedulerHandle>, SchedulerError> {
        let Some(ip) = self.detector.detect_ipv4().await else {
            warn!(
                "Preflight failed, not scheduling any of {} entries",
                entries.len()
            );
            return Err(SchedulerError::PreflightUnavailable);
        };
        info!("Preflight passed with public IPv4 {}", ip);

        let mut probes = FuturesUnordered::new();
        for (index, entry) in entries.into_iter().enumerate() {
            let updater = Arc::clone(&self.updater);
            probes.push(async move {
                let result: UpdateResult = updater.update(&entry).await;
                (index, entry, result)
            });
        }

        let mut committed: Vec<(usize, UpdateEntry)> = Vec::new();
        while let Some((index, entry, result)) = probes.next().await {
            if !result.is_success() {
                warn!(
                    entry = %entry.name,
                    "Not scheduling entry, first update failed: {}",
                    result
                );
                continue;
            }
            if entry.interval.is_zero() {
                warn!(entry = %entry.name, "Not scheduling entry with a zero interval");
                continue;
            }
            if entry.interval > MAX_INTERVAL {
                warn!(
                    entry = %entry.name,
                    "Not scheduling entry, interval of {} seconds exceeds {} seconds",
                    entry.interval.as_secs(),
                    MAX_INTERVAL.as_secs()
                );
                continue;
            }
            committed.push((index, entry));
        }
        committed.sort_by_key(|(index, _)| *index);

        Ok(committed
            .into_iter()
            .map(|(_, entry)| self.spawn_entry(entry, shutdown.clone()))
            .collect())
    }

    fn spawn_entry(
        &self,
        entry: UpdateEntry,
        shutdown: CancellationToken,
    ) -> SchedulerHandle {
        info!(
            entry = %entry.name,
            provider = self.updater.get_name(),
            "🕰️ Updating DNS for {} every {} seconds",
            entry.domain,
            entry.interval.as_secs()
        );

        let name = entry.name.clone();
        let interval = entry.interval;
        let task = tokio::spawn(run_entry(Arc::clone(&self.updater), entry, shutdown));

        SchedulerHandle {
            name,
            interval,
            task,
        }
    }
}

/// Recurring loop of one entry. The update is awaited inside the loop body, so
/// a slow call delays the next tick instead of overlapping with it.
async fn run_entry(
    updater: Arc<dyn DnsUpdater>,
    entry: UpdateEntry,
    shutdown: CancellationToken,
) {
    let mut ticker = interval_at(Instant::now() + entry.interval, entry.interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            biased;

            _ = shutdown.cancelled() => {
                debug!(entry = %entry.name, "Stopping scheduled updates");
                break;
            }

            _ = ticker.tick() => {
                debug!(entry = %entry.name, "Scheduled update due");
                // Outcome is already logged by the updater; committed entries keep their timer.
                let _ = updater.update(&entry).await;
            }
        }
    }
}

impl SchedulerHandle {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Waits up to `grace` for the task to end, then abandons it along with
    /// any call still in flight. Call after cancelling the shutdown token.
    pub async fn stop(mut self, grace: Duration) {
        match tokio::time::timeout(grace, &mut self.task).await {
            Ok(Ok(())) => debug!(
                entry = %self.name,
                "Stopped updates scheduled every {} seconds",
                self.interval.as_secs()
            ),
            Ok(Err(e)) => warn!(entry = %self.name, "Update task ended abnormally: {}", e),
            Err(_) => {
                warn!(
                    entry = %self.name,
                    "Update still in flight after {} seconds, abandoning it",
                    grace.as_secs()
                );
                self.task.abort();
            }
        }
    }
}
