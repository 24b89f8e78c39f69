// Current module imports
use super::types::ResponseFormat;

/// Default per-service request timeout in seconds
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// IPv4 detection services, tried in order.
pub const IPV4_SERVICES: [(&str, ResponseFormat); 3] = [
    // Location lookup, answers JSON with an `ip` field
    ("https://ipinfo.io/json", ResponseFormat::Json),
    ("https://api.ipify.org?format=json", ResponseFormat::Json),
    // Plain text fallback
    ("https://ipv4.icanhazip.com", ResponseFormat::Text),
];

pub fn default_request_timeout() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_SECS
}
