// Standard library
use std::path::{Path, PathBuf};
use std::time::Duration;
use std::{env, fs};

// 3rd party crates
use config::{Config, ConfigError, Environment, File};
use tracing::{error, info};

// Project imports
use crate::providers::casadns::types::{EndpointVariant, UpdateEntry};
use crate::scheduler::constants::MAX_INTERVAL;
use crate::scheduler::functions::{build_entries, entry_name};
use crate::utility::ip_detector::types::IpDetection;

// Current module imports
use super::constants::{
    DEFAULT_CONFIG, DEFAULT_LOG_LEVEL, DEFAULT_UPDATE_INTERVAL, PLACEHOLDER_SECRET,
};
use super::errors::ValidationError;
use super::types::{ConfigManager, Log, Settings, Update, ValidatedSettings};

impl Default for Log {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl Default for Update {
    fn default() -> Self {
        Self {
            interval: DEFAULT_UPDATE_INTERVAL,
        }
    }
}

impl Settings {
    pub fn get_log_level(&self) -> String {
        self.log.level.to_lowercase()
    }

    pub fn get_update_interval(&self) -> u64 {
        self.update.interval
    }

    pub fn get_endpoint_variant(&self) -> EndpointVariant {
        self.provider.variant
    }

    pub fn get_ip_detection(&self) -> IpDetection {
        self.ip_detection.clone()
    }

    /// Entries ready for scheduling, named and with their effective interval.
    pub fn get_entries(&self) -> Vec<UpdateEntry> {
        build_entries(
            &self.entries,
            Duration::from_secs(self.get_update_interval()),
        )
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        // Validate log level
        match self.log.level.to_lowercase().as_str() {
            "error" | "warn" | "info" | "debug" | "trace" => {}
            _ => return Err(ValidationError::InvalidLogLevel(self.log.level.clone())),
        }

        let max_interval: u64 = MAX_INTERVAL.as_secs();

        // Validate update interval
        if self.update.interval == 0 || self.update.interval > max_interval {
            return Err(ValidationError::InvalidUpdateInterval(self.update.interval));
        }

        if self.entries.is_empty() {
            return Err(ValidationError::NoEntries);
        }

        for (index, entry) in self.entries.iter().enumerate() {
            let label: String = entry
                .name
                .clone()
                .filter(|name| !name.trim().is_empty())
                .unwrap_or_else(|| entry_name(index));

            if entry.username.trim().is_empty() {
                return Err(ValidationError::MissingUsername(label));
            }

            if entry.secret.expose().trim().is_empty() {
                return Err(ValidationError::MissingSecret(label));
            }

            if entry.secret.expose().trim() == PLACEHOLDER_SECRET {
                return Err(ValidationError::PlaceholderSecret(label));
            }

            if let Some(interval) = entry
                .interval
                .filter(|interval| *interval == 0 || *interval > max_interval)
            {
                return Err(ValidationError::InvalidEntryInterval {
                    entry: label,
                    interval,
                });
            }
        }

        self.ip_detection.validate()?;

        Ok(())
    }
}

impl ConfigManager {
    /// Creates a new `ConfigManager` instance by loading and validating the configuration.
    pub fn new() -> Result<Self, Box<dyn std::error::Error>> {
        let config_path: PathBuf = Self::get_config_path()?;
        Self::ensure_config_file_exists(&config_path)?;

        let settings: Settings = Self::load_settings(&config_path)?;

        // Validate settings before proceeding
        let validated_settings = ValidatedSettings::new(settings).map_err(|e| {
            error!("Configuration validation failed: {}", e);
            e
        })?;

        Ok(ConfigManager {
            settings: validated_settings.into_inner(),
        })
    }

    /// Determines the configuration file path.
    fn get_config_path() -> Result<PathBuf, ConfigError> {
        if let Ok(path) = env::var("CASADNS_CONFIG_PATH") {
            Ok(PathBuf::from(path))
        } else if let Some(config_dir) = dirs::config_dir() {
            Ok(config_dir.join("casadns").join("config.toml"))
        } else {
            let msg: &str = "Could not determine the configuration directory";
            error!("{}", msg);
            Err(ConfigError::Message(msg.into()))
        }
    }

    /// Ensures that the configuration file exists, creating it if necessary.
    fn ensure_config_file_exists(config_path: &Path) -> Result<(), ConfigError> {
        if !config_path.exists() {
            if let Some(parent_dir) = config_path.parent() {
                fs::create_dir_all(parent_dir).map_err(|e| {
                    let msg: String = format!("Failed to create configuration directory: {}", e);
                    error!("{}", msg);
                    ConfigError::Message(msg)
                })?;
            }
            fs::write(config_path, DEFAULT_CONFIG).map_err(|e| {
                let msg: String = format!("Failed to create default configuration file: {}", e);
                error!("{}", msg);
                ConfigError::Message(msg)
            })?;
            info!("Default configuration file created at: {:?}", config_path);
        }
        Ok(())
    }

    /// Loads the settings from the configuration file and environment variables.
    fn load_settings(config_path: &Path) -> Result<Settings, ConfigError> {
        let config_file: &str = config_path.to_str().ok_or_else(|| {
            let msg: &str = "Configuration file path contains invalid UTF-8 characters";
            error!("{}", msg);
            ConfigError::Message(msg.into())
        })?;

        let settings: Config = Config::builder()
            .add_source(File::with_name(config_file))
            .add_source(Environment::with_prefix("CASADNS").separator("__"))
            .build()?;

        settings.try_deserialize()
    }

    pub fn get_settings(&self) -> &Settings {
        &self.settings
    }

    pub fn get_log_level(&self) -> String {
        self.settings.get_log_level()
    }
}

impl ValidatedSettings {
    pub fn new(settings: Settings) -> Result<Self, ValidationError> {
        settings.validate()?;
        Ok(ValidatedSettings(settings))
    }

    pub fn into_inner(self) -> Settings {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use config::FileFormat;

    use super::*;

    fn parse(toml: &str) -> Settings {
        Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    #[test]
    fn defaults_apply_to_minimal_file() {
        let settings = parse(
            r#"
            [[entry]]
            username = "x.example"
            secret = "tok123"
            "#,
        );

        assert_eq!(settings.get_log_level(), "info");
        assert_eq!(settings.get_update_interval(), 900);
        assert_eq!(settings.get_endpoint_variant(), EndpointVariant::UsernameSecret);
        assert_eq!(settings.ip_detection.timeout, 10);

        let entries = settings.get_entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name, "entry_0");
        assert_eq!(entries[0].interval, Duration::from_secs(900));
        assert!(ValidatedSettings::new(settings).is_ok());
    }

    #[test]
    fn aliases_and_variant_are_read() {
        let settings = parse(
            r#"
            [provider]
            variant = "domain_token"

            [[entry]]
            name = "home"
            domain = " x.example "
            token = " tok123 "
            interval = 60
            "#,
        );

        assert_eq!(settings.get_endpoint_variant(), EndpointVariant::DomainToken);

        let entries = settings.get_entries();
        assert_eq!(entries[0].name, "home");
        assert_eq!(entries[0].domain, "x.example");
        assert_eq!(entries[0].credential.expose(), "tok123");
        assert_eq!(entries[0].interval, Duration::from_secs(60));
    }

    #[test]
    fn generated_default_config_is_rejected_until_edited() {
        let settings = parse(DEFAULT_CONFIG);

        assert!(matches!(
            settings.validate(),
            Err(ValidationError::PlaceholderSecret(name)) if name == "home"
        ));
    }

    #[test]
    fn invalid_settings_are_rejected() {
        let no_entries = parse("[log]\nlevel = \"info\"\n");
        assert!(matches!(no_entries.validate(), Err(ValidationError::NoEntries)));

        let bad_level = parse(
            "[log]\nlevel = \"loud\"\n[[entry]]\nusername = \"a\"\nsecret = \"b\"\n",
        );
        assert!(matches!(
            bad_level.validate(),
            Err(ValidationError::InvalidLogLevel(_))
        ));

        let zero_default = parse(
            "[update]\ninterval = 0\n[[entry]]\nusername = \"a\"\nsecret = \"b\"\n",
        );
        assert!(matches!(
            zero_default.validate(),
            Err(ValidationError::InvalidUpdateInterval(0))
        ));

        let zero_entry = parse("[[entry]]\nusername = \"a\"\nsecret = \"b\"\ninterval = 0\n");
        assert!(matches!(
            zero_entry.validate(),
            Err(ValidationError::InvalidEntryInterval { entry, interval: 0 }) if entry == "entry_0"
        ));

        let huge_default = parse(
            "[update]\ninterval = 9223372036854775807\n[[entry]]\nusername = \"a\"\nsecret = \"b\"\n",
        );
        assert!(matches!(
            huge_default.validate(),
            Err(ValidationError::InvalidUpdateInterval(9223372036854775807))
        ));

        let huge_entry = parse(
            "[[entry]]\nname = \"big\"\nusername = \"a\"\nsecret = \"b\"\ninterval = 9223372036854775807\n",
        );
        assert!(matches!(
            huge_entry.validate(),
            Err(ValidationError::InvalidEntryInterval { entry, interval: 9223372036854775807 })
                if entry == "big"
        ));

        let yearly = parse("[[entry]]\nusername = \"a\"\nsecret = \"b\"\ninterval = 31536000\n");
        assert!(yearly.validate().is_ok());

        let blank_secret = parse("[[entry]]\nusername = \"a\"\nsecret = \"  \"\n");
        assert!(matches!(
            blank_secret.validate(),
            Err(ValidationError::MissingSecret(_))
        ));

        let blank_username = parse("[[entry]]\nusername = \"\"\nsecret = \"b\"\n");
        assert!(matches!(
            blank_username.validate(),
            Err(ValidationError::MissingUsername(_))
        ));
    }

    #[test]
    fn credential_does_not_leak_through_debug() {
        let settings = parse("[[entry]]\nusername = \"a\"\nsecret = \"hunter2\"\n");

        assert!(!format!("{:?}", settings).contains("hunter2"));
    }
}
