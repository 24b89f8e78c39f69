// 3rd party crates
use thiserror::Error;

// Project imports
use crate::utility::ip_detector::errors::IpDetectionValidationError;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Invalid log level: {0}. Must be one of: error, warn, info, debug, trace")]
    InvalidLogLevel(String),
    #[error("Update interval must be between 1 second and one year, got {0}")]
    InvalidUpdateInterval(u64),
    #[error("No entries are configured")]
    NoEntries,
    #[error("Entry '{0}' has no username or domain")]
    MissingUsername(String),
    #[error("Entry '{0}' has no secret")]
    MissingSecret(String),
    #[error("Entry '{0}' still uses the placeholder secret")]
    PlaceholderSecret(String),
    #[error("Entry '{entry}' interval must be between 1 second and one year, got {interval}")]
    InvalidEntryInterval { entry: String, interval: u64 },
    #[error("IP detection configuration error: {0}")]
    IpDetectionConfig(#[from] IpDetectionValidationError),
}
