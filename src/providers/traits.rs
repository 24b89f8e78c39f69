// 3rd party crates
use async_trait::async_trait;

// Project imports
use crate::providers::casadns::types::{UpdateEntry, UpdateResult};

/// Core trait for anything that can push one entry's address to a DNS provider.
/// The scheduler only talks to providers through this trait.
///
/// # Implementation Requirements
///
/// Implementors must:
/// - Bound the duration of every call
/// - Convert every failure into an `UpdateResult` instead of returning an error
/// - Never log the entry's credential
///
/// # Example Implementation
///
/// ```rust,ignore
/// struct AlwaysOk;
///
/// #[async_trait]
/// impl DnsUpdater for AlwaysOk {
///     async fn update(&self, _entry: &UpdateEntry) -> UpdateResult {
///         UpdateResult::Success
///     }
///
///     fn get_name(&self) -> &str {
///         "always_ok"
///     }
/// }
/// ```
#[async_trait]
pub trait DnsUpdater: Send + Sync {
    /// Performs one update call for the given entry.
    ///
    /// # Arguments
    ///
    /// * `entry` - The entry whose domain and credential are sent
    ///
    /// # Returns
    ///
    /// The classified outcome. Transport problems and timeouts are outcomes
    /// too, so this never fails.
    async fn update(&self, entry: &UpdateEntry) -> UpdateResult;

    /// Gets the provider's name.
    ///
    /// This name should be:
    /// - Lowercase
    /// - No spaces
    ///
    /// # Returns
    ///
    /// A string slice containing the provider name
    fn get_name(&self) -> &str;
}
