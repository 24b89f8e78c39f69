// Standard library
use std::fmt;
use std::time::Duration;

// 3rd party crates
use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, info, warn};

// Project imports
use crate::providers::DnsUpdater;

// Current module imports
use super::constants::{CASADNS_API_BASE, HOST, MAX_SHOWN_BODY_CHARS, UPDATE_TIMEOUT};
use super::functions::classify_response;
use super::types::{CasaDns, Credential, Endpoint, EndpointVariant, UpdateEntry, UpdateResult};

impl Credential {
    pub fn new(secret: impl Into<String>) -> Self {
        Self(secret.into().trim().to_string())
    }

    /// Returns the raw secret. Only the request builder should call this.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(<redacted>)")
    }
}

impl fmt::Display for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<redacted>")
    }
}

impl UpdateEntry {
    pub fn new(
        name: impl Into<String>,
        domain: impl Into<String>,
        credential: Credential,
        interval: Duration,
    ) -> Self {
        Self {
            name: name.into(),
            domain: domain.into().trim().to_string(),
            credential,
            interval,
        }
    }
}

impl EndpointVariant {
    pub fn path(&self) -> &'static str {
        match self {
            EndpointVariant::UsernameSecret | EndpointVariant::UsernamePassword => "dns/",
            EndpointVariant::DomainToken => "update",
        }
    }

    /// Query parameter names for the domain and the credential.
    pub fn param_names(&self) -> (&'static str, &'static str) {
        match self {
            EndpointVariant::UsernameSecret => ("username", "secret"),
            EndpointVariant::DomainToken => ("domain", "token"),
            EndpointVariant::UsernamePassword => ("username", "password"),
        }
    }
}

impl Endpoint {
    /// The production endpoint for the given variant.
    pub fn casadns(variant: EndpointVariant) -> Self {
        Self {
            base_url: CASADNS_API_BASE.to_string(),
            variant,
        }
    }

    pub fn url(&self) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            self.variant.path()
        )
    }
}

impl UpdateResult {
    pub fn is_success(&self) -> bool {
        matches!(self, UpdateResult::Success)
    }

    /// Human-readable reason for the known provider errors.
    pub fn reason(&self) -> Option<&'static str> {
        match self {
            UpdateResult::AuthFailure(reason)
            | UpdateResult::AccessBlocked(reason)
            | UpdateResult::AbuseBlocked(reason) => Some(reason),
            _ => None,
        }
    }
}

impl fmt::Display for UpdateResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpdateResult::Success => f.write_str("success"),
            UpdateResult::AuthFailure(reason)
            | UpdateResult::AccessBlocked(reason)
            | UpdateResult::AbuseBlocked(reason) => f.write_str(reason),
            UpdateResult::UnknownResponse(raw) => {
                let shown: String = raw.chars().take(MAX_SHOWN_BODY_CHARS).collect();
                if shown.len() < raw.len() {
                    write!(f, "unknown response {:?} (truncated)", shown)
                } else {
                    write!(f, "unknown response {:?}", shown)
                }
            }
            UpdateResult::TransportError => f.write_str("can't connect to server"),
            UpdateResult::Timeout => f.write_str("server timeout"),
        }
    }
}

impl CasaDns {
    pub fn new(client: Client, endpoint: Endpoint) -> Self {
        Self {
            client,
            endpoint,
            timeout: UPDATE_TIMEOUT,
        }
    }

    /// Sends the update request and reads the whole body, whatever the status code.
    async fn fetch_body(&self, entry: &UpdateEntry) -> Result<String, reqwest::Error> {
        let (domain_param, secret_param) = self.endpoint.variant.param_names();

        let response = self
            .client
            .get(self.endpoint.url())
            .query(&[
                (domain_param, entry.domain.as_str()),
                (secret_param, entry.credential.expose()),
            ])
            .send()
            .await?;

        debug!(
            entry = %entry.name,
            status = %response.status(),
            "Received update response"
        );

        response.text().await
    }

    /// Performs one bounded update call and classifies the outcome.
    pub async fn update_entry(&self, entry: &UpdateEntry) -> UpdateResult {
        let result = match tokio::time::timeout(self.timeout, self.fetch_body(entry)).await {
            Err(_) => UpdateResult::Timeout,
            Ok(Err(e)) if e.is_timeout() => UpdateResult::Timeout,
            Ok(Err(e)) => {
                // The URL carries the credential in its query string.
                debug!(
                    entry = %entry.name,
                    error = %e.without_url(),
                    "Update request failed"
                );
                UpdateResult::TransportError
            }
            Ok(Ok(body)) => classify_response(&body),
        };

        log_result(entry, &result);
        result
    }
}

fn log_result(entry: &UpdateEntry, result: &UpdateResult) {
    match result {
        UpdateResult::Success => info!(
            entry = %entry.name,
            host = HOST,
            "Updating DNS for {}... success",
            entry.domain
        ),
        UpdateResult::TransportError => warn!(
            entry = %entry.name,
            host = HOST,
            "Can't connect to CasaDNS server: {}",
            entry.domain
        ),
        UpdateResult::Timeout => warn!(
            entry = %entry.name,
            host = HOST,
            "CasaDNS server timeout: {}",
            entry.domain
        ),
        failure => warn!(
            entry = %entry.name,
            host = HOST,
            "Updating DNS for {}... failed: {}",
            entry.domain,
            failure
        ),
    }
}

#[async_trait]
impl DnsUpdater for CasaDns {
    async fn update(&self, entry: &UpdateEntry) -> UpdateResult {
        self.update_entry(entry).await
    }

    fn get_name(&self) -> &str {
        "casadns"
    }
}
