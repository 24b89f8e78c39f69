// Standard library
use std::time::Duration;

// 3rd party crates
use serde::Deserialize;

use super::constants::default_request_timeout;

#[derive(Debug, Deserialize, Clone)]
pub struct IpDetection {
    /// Per-service request timeout (in seconds)
    #[serde(default = "default_request_timeout")]
    pub timeout: u64,
}

pub struct IpDetector {
    pub services: Vec<IpService>,
    pub timeout: Duration,
    pub client: reqwest::Client,
}

/// Service configuration for IP detection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IpService {
    pub url: String,
    pub format: ResponseFormat,
}

/// How a detection service encodes the address in its body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseFormat {
    /// Object with an `ip` field
    Json,
    /// The bare address, possibly followed by a newline
    Text,
}

/// The part of a location lookup response we care about
#[derive(Debug, Deserialize)]
pub struct LocationInfo {
    pub ip: String,
}
