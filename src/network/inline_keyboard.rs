use serde::Serialize;
use uuid::Uuid;

/// Inline keyboard attached to a chat message.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct InlineKeyboardMarkup {
    pub inline_keyboard: Vec<Vec<InlineKeyboardButton>>,
}

/// Button of the inline keyboard that sends callback data back to the bot when pressed.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct InlineKeyboardButton {
    pub text: String,
    pub callback_data: String,
}

impl InlineKeyboardButton {
    pub fn new(text: impl Into<String>, callback_data: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            callback_data: callback_data.into(),
        }
    }
}

impl InlineKeyboardMarkup {
    /// Builds the keyboard with the actions available for a single task, one action per row.
    pub fn task_actions(task_id: Uuid) -> Self {
        Self {
            inline_keyboard: vec![
                vec![InlineKeyboardButton::new("✅ Done", format!("done:{task_id}"))],
                vec![InlineKeyboardButton::new(
                    "⏰ Postpone",
                    format!("postpone:{task_id}"),
                )],
                vec![InlineKeyboardButton::new("↩️ Menu", "menu")],
            ],
        }
    }
}
