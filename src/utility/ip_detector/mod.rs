//! IPv4 Preflight Module
//!
//! Confirms the host has a usable public IPv4 address before any update entry
//! is scheduled. An IPv6-only or disconnected host cannot usefully update
//! IPv4 records, so the whole run stops when no address is found.
//!
//! # Detection
//!
//! Services are queried in order through the shared HTTP client (which only
//! opens IPv4 sockets) until one answers with a valid IPv4 literal:
//! - Location lookups answering JSON with an `ip` field
//! - Plain text services as a fallback
//!
//! # Error Handling
//!
//! Per-service failures are logged and the next service is tried:
//! - Network errors and timeouts
//! - Unparseable responses
//! - IPv6 addresses

pub mod constants;
pub mod errors;
pub mod impls;
pub mod traits;
pub mod types;
