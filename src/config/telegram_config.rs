use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DurationMilliSeconds};
use std::{fmt, time::Duration};
use url::Url;

/// Configuration for the Telegram Bot API used to deliver reminders.
#[serde_as]
#[derive(Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct TelegramConfig {
    /// Bot token issued by the BotFather.
    pub token: String,
    /// Base URL of the Bot API server.
    pub api_url: Url,
    /// Upper bound for a single `sendMessage` call, a stuck send is abandoned after it.
    #[serde_as(as = "DurationMilliSeconds<u64>")]
    pub send_timeout: Duration,
}

impl Default for TelegramConfig {
    fn default() -> Self {
        Self {
            token: String::new(),
            api_url: Url::parse("https://api.telegram.org")
                .expect("Cannot parse Telegram API URL parameter."),
            send_timeout: Duration::from_secs(15),
        }
    }
}

// Bot token is a credential and must never end up in the logs.
impl fmt::Debug for TelegramConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TelegramConfig")
            .field("token", &if self.token.is_empty() { "" } else { "***" })
            .field("api_url", &self.api_url)
            .field("send_timeout", &self.send_timeout)
            .finish()
    }
}
