// Standard library
use std::time::Duration;

// Project imports
use crate::providers::casadns::types::{Credential, UpdateEntry};
use crate::settings::types::EntryConfig;

/// Name given to an entry configured without one.
pub fn entry_name(index: usize) -> String {
    format!("entry_{}", index)
}

/// Turns configured entries into update entries.
///
/// Unnamed entries are named after their position in the configured list,
/// starting at `entry_0`. Entries without their own interval get `default_interval`.
pub fn build_entries(configs: &[EntryConfig], default_interval: Duration) -> Vec<UpdateEntry> {
    configs
        .iter()
        .enumerate()
        .map(|(index, config)| {
            let name: String = config
                .name
                .as_deref()
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .map(str::to_string)
                .unwrap_or_else(|| entry_name(index));

            let interval: Duration = config
                .interval
                .map(Duration::from_secs)
                .unwrap_or(default_interval);

            UpdateEntry::new(
                name,
                config.username.as_str(),
                Credential::new(config.secret.expose()),
                interval,
            )
        })
        .collect()
}
