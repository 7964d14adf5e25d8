use serde::{Deserialize, Serialize};
use time::{macros::offset, UtcOffset};

time::serde::format_description!(
    utc_offset_format,
    UtcOffset,
    "[offset_hour sign:mandatory]:[offset_minute]"
);

/// Configuration for the reminder messages.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemindersConfig {
    /// Fixed offset all users see due times in.
    #[serde(with = "utc_offset_format")]
    pub utc_offset: UtcOffset,
}

impl Default for RemindersConfig {
    fn default() -> Self {
        Self {
            utc_offset: offset!(+3),
        }
    }
}
