mod database_config;
mod raw_config;
mod reminders_config;
mod scheduler_config;
mod telegram_config;

pub use self::{
    database_config::DatabaseConfig, raw_config::RawConfig, reminders_config::RemindersConfig,
    scheduler_config::SchedulerConfig, telegram_config::TelegramConfig,
};

/// Main server config.
#[derive(Clone, Debug)]
pub struct Config {
    /// Database configuration.
    pub db: DatabaseConfig,
    /// Configuration for the reminder scheduler.
    pub scheduler: SchedulerConfig,
    /// Configuration for the Telegram messaging channel.
    pub telegram: TelegramConfig,
    /// Configuration for the reminders rendering.
    pub reminders: RemindersConfig,
}

impl AsRef<Config> for Config {
    fn as_ref(&self) -> &Config {
        self
    }
}

impl From<RawConfig> for Config {
    fn from(raw_config: RawConfig) -> Self {
        Self {
            db: raw_config.db,
            scheduler: raw_config.scheduler,
            telegram: raw_config.telegram,
            reminders: raw_config.reminders,
        }
    }
}
