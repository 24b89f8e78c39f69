// Standard library
use std::time::Duration;

// 3rd party crates
use reqwest::Client;
use serde::Deserialize;

/// Client for the CasaDNS update endpoint.
///
/// Holds a clone of the process-wide HTTP client; cloning `CasaDns` is cheap and
/// every clone shares the same connection pool.
#[derive(Debug, Clone)]
pub struct CasaDns {
    pub client: Client,
    pub endpoint: Endpoint,
    pub timeout: Duration,
}

/// Where and how update requests are sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    /// Scheme and host, without a trailing slash.
    pub base_url: String,
    pub variant: EndpointVariant,
}

/// Path and query parameter names differ between deployments of the service.
/// The contract stays the same: two credential-bearing query parameters.
#[derive(Debug, Default, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum EndpointVariant {
    /// `dns/?username=..&secret=..`
    #[default]
    UsernameSecret,
    /// `update?domain=..&token=..`
    DomainToken,
    /// `dns/?username=..&password=..`
    UsernamePassword,
}

/// A secret value that never shows up in logs or debug output.
#[derive(Clone, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct Credential(pub(super) String);

/// One configured update target. Owned by exactly one scheduler task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateEntry {
    pub name: String,
    /// Domain or username, depending on the endpoint variant.
    pub domain: String,
    pub credential: Credential,
    pub interval: Duration,
}

/// Classified outcome of a single update call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateResult {
    Success,
    AuthFailure(&'static str),
    AccessBlocked(&'static str),
    AbuseBlocked(&'static str),
    UnknownResponse(String),
    TransportError,
    Timeout,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Auth,
    AccessBlocked,
    AbuseBlocked,
}

/// Row of the provider error table.
#[derive(Debug, Clone, Copy)]
pub struct ResponseError {
    pub token: &'static str,
    pub kind: FailureKind,
    pub reason: &'static str,
}
