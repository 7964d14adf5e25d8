use crate::config::{DatabaseConfig, RemindersConfig, SchedulerConfig, TelegramConfig};
use figment::{providers, providers::Format, Figment};
use serde::{Deserialize, Serialize};

/// Raw configuration structure that is used to read the configuration from the file.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct RawConfig {
    /// Defines a TCP port to listen on.
    pub port: u16,
    /// Database configuration.
    pub db: DatabaseConfig,
    /// Configuration for the reminder scheduler.
    pub scheduler: SchedulerConfig,
    /// Configuration for the Telegram messaging channel.
    pub telegram: TelegramConfig,
    /// Configuration for the reminders rendering.
    pub reminders: RemindersConfig,
}

impl RawConfig {
    /// Reads the configuration from the file (TOML) and merges it with the default values.
    pub fn read_from_file(path: &str) -> anyhow::Result<Self> {
        Ok(
            Figment::from(providers::Serialized::defaults(Self::default()))
                .merge(providers::Toml::file(path))
                .merge(providers::Env::prefixed("REMINDR_").split("__"))
                .extract()?,
        )
    }
}

impl Default for RawConfig {
    fn default() -> Self {
        Self {
            port: 7878,
            db: Default::default(),
            scheduler: Default::default(),
            telegram: Default::default(),
            reminders: Default::default(),
        }
    }
}
