// Standard library
use std::net::{IpAddr, Ipv4Addr};

// 3rd party crates
use reqwest::Client;
use thiserror::Error;
use tracing::error;

/// Non-browser user agent; the provider rejects browser user agents.
pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Error)]
pub enum HttpClientError {
    #[error("HTTP client error: {0}")]
    Build(#[from] reqwest::Error),
}

/// Builds the HTTP client shared by the preflight check and every update call.
///
/// Sockets are bound to the IPv4 wildcard address, so connections to dual-stack
/// hosts always go out over IPv4.
pub fn create_reqwest_client() -> Result<Client, HttpClientError> {
    let client: Client = Client::builder()
        .local_address(IpAddr::V4(Ipv4Addr::UNSPECIFIED))
        .user_agent(USER_AGENT)
        .build()
        .map_err(|e| {
            error!("Failed to build HTTP client: {}", e);
            HttpClientError::Build(e)
        })?;

    Ok(client)
}
