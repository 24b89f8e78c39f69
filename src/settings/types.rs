// 3rd party crates
use serde::Deserialize;

// Project imports
use crate::providers::casadns::types::{Credential, EndpointVariant};
use crate::utility::ip_detector::types::IpDetection;

use super::constants::{DEFAULT_LOG_LEVEL, DEFAULT_UPDATE_INTERVAL};

#[derive(Debug, Deserialize, Clone)]
pub struct Log {
    #[serde(default = "default_log_level")]
    pub level: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Update {
    #[serde(default = "default_update_interval")]
    pub interval: u64,
}

#[derive(Debug, Default, Deserialize, Clone)]
pub struct Provider {
    #[serde(default)]
    pub variant: EndpointVariant,
}

/// One `[[entry]]` block.
#[derive(Debug, Deserialize, Clone)]
pub struct EntryConfig {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(alias = "domain")]
    pub username: String,
    #[serde(alias = "token", alias = "password")]
    pub secret: Credential,
    /// Seconds; falls back to `[update] interval`
    #[serde(default)]
    pub interval: Option<u64>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    #[serde(default)]
    pub log: Log,
    #[serde(default)]
    pub update: Update,
    #[serde(default)]
    pub provider: Provider,
    #[serde(default)]
    pub ip_detection: IpDetection,

    #[serde(default, rename = "entry")]
    pub entries: Vec<EntryConfig>,
}

fn default_update_interval() -> u64 {
    DEFAULT_UPDATE_INTERVAL
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

/// Settings that passed validation.
pub struct ValidatedSettings(pub(super) Settings);

/// Owns the application settings for the lifetime of the process.
pub struct ConfigManager {
    pub(super) settings: Settings,
}
