// Standard library
use std::net::IpAddr;

// 3rd party crates
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IpDetectionError {
    #[error("Network error from {service}: {error}")]
    NetworkError {
        service: String,
        error: reqwest::Error,
    },

    #[error("Timeout from {service} after {timeout_secs} seconds")]
    Timeout { service: String, timeout_secs: u64 },

    #[error("Invalid response from {service}: {response}")]
    InvalidResponse { service: String, response: String },

    #[error("IP version mismatch from {service}: expected IPv4, got {got}")]
    VersionMismatch { service: String, got: IpAddr },
}

#[derive(Debug, Error)]
pub enum IpDetectionValidationError {
    #[error("Invalid timeout: {0}")]
    InvalidTimeout(String),
}
