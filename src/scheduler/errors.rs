// 3rd party crates
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SchedulerError {
    #[error("No usable public IPv4 address, refusing to schedule any entry")]
    PreflightUnavailable,
}
