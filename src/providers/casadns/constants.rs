// Standard library
use std::time::Duration;

// Current module imports
use super::types::{FailureKind, ResponseError};

/// Host serving the CasaDNS update endpoint.
pub const HOST: &str = "casadns.eu";

/// Base URL for all update requests. HTTPS only.
pub const CASADNS_API_BASE: &str = "https://casadns.eu";

/// Overall bound for one update call (send and body read).
pub const UPDATE_TIMEOUT: Duration = Duration::from_secs(30);

/// A body starting with this prefix means the record was updated.
pub const SUCCESS_PREFIX: &str = "OK";

/// Unrecognized bodies are cut to this many characters when displayed.
pub const MAX_SHOWN_BODY_CHARS: usize = 100;

/// Error tokens the provider answers with, and what they mean.
pub static RESPONSE_ERRORS: [ResponseError; 4] = [
    ResponseError {
        token: "Forbidden",
        kind: FailureKind::Auth,
        reason: "Invalid username password combination",
    },
    ResponseError {
        token: "Unauthorized",
        kind: FailureKind::Auth,
        reason: "Invalid combination of username and secret",
    },
    ResponseError {
        token: "Blocked",
        kind: FailureKind::AccessBlocked,
        reason: "Browser user agent not allowed or IP address blocked",
    },
    ResponseError {
        token: "Abuse",
        kind: FailureKind::AbuseBlocked,
        reason: "Username is blocked due to abuse",
    },
];
