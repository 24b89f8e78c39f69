// Standard library
use std::net::Ipv4Addr;

// 3rd party crates
use async_trait::async_trait;

/// Source of the host's public IPv4 address, checked before any entry is scheduled.
#[async_trait]
pub trait Ipv4Detector: Send + Sync {
    /// Returns the public IPv4 address, or `None` when the host has no usable IPv4 egress.
    async fn detect_ipv4(&self) -> Option<Ipv4Addr>;
}
