use thiserror::Error;

const CHANNEL_BUFFER_KEY: &str = "STOREFRONT_CHANNEL_BUFFER";
const SEED_DEMO_KEY: &str = "STOREFRONT_SEED_DEMO";
const LOG_FILTER_KEY: &str = "RUST_LOG";

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

/// Runtime settings for the store actors and the demo binary.
#[derive(Debug, Clone, PartialEq)]
pub struct StorefrontConfig {
    /// Mailbox size of each store actor. Must be positive.
    pub channel_buffer: usize,
    pub seed_demo_data: bool,
    pub log_filter: String,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            channel_buffer: 32,
            seed_demo_data: true,
            log_filter: "info".to_string(),
        }
    }
}

impl StorefrontConfig {
    /// Reads the process environment, after loading `.env` if there is one.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup; unset keys keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(value) = lookup(CHANNEL_BUFFER_KEY) {
            let parsed = value.trim().parse::<usize>();
            config.channel_buffer = match parsed {
                Ok(size) if size > 0 => size,
                _ => return Err(ConfigError::Invalid { key: CHANNEL_BUFFER_KEY, value }),
            };
        }

        if let Some(value) = lookup(SEED_DEMO_KEY) {
            config.seed_demo_data = parse_flag(&value).ok_or(ConfigError::Invalid { key: SEED_DEMO_KEY, value })?;
        }

        if let Some(value) = lookup(LOG_FILTER_KEY) {
            if !value.trim().is_empty() {
                config.log_filter = value;
            }
        }

        Ok(config)
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
