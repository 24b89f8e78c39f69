/// Example configuration
pub const DEFAULT_CONFIG: &str = r#"
# Logging configuration
[log]
# Level can be "error", "warn", "info", "debug", or "trace"
level = "info"

# Default update interval in seconds, for entries without their own
[update]
interval = 900

# Endpoint flavor: "username_secret", "domain_token" or "username_password"
[provider]
variant = "username_secret"

# Public IPv4 check done once before scheduling (optional)
[ip_detection]
timeout = 10

# One block per domain to keep updated
[[entry]]
# Optional: defaults to "entry_<position>", counting from 0
name = "home"
username = "your_username"
secret = "your_secret"
# Optional: overrides [update] interval
interval = 900
"#;

/// Placeholder secret of the generated configuration file
pub const PLACEHOLDER_SECRET: &str = "your_secret";

pub const DEFAULT_LOG_LEVEL: &str = "info";

/// 15 minutes
pub const DEFAULT_UPDATE_INTERVAL: u64 = 900;
