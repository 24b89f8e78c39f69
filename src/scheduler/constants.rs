// Standard library
use std::time::Duration;

/// Longest accepted update interval, one year.
pub const MAX_INTERVAL: Duration = Duration::from_secs(365 * 24 * 60 * 60);
