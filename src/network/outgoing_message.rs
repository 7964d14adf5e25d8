use crate::network::InlineKeyboardMarkup;
use serde::Serialize;

/// Message addressed to a single chat.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct OutgoingMessage {
    /// Id of the chat the message is sent to.
    pub chat_id: i64,
    /// Plain text of the message.
    pub text: String,
    /// Optional inline keyboard attached to the message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<InlineKeyboardMarkup>,
}

impl OutgoingMessage {
    /// Creates a plain text message without any keyboard.
    pub fn text(chat_id: i64, text: impl Into<String>) -> Self {
        Self {
            chat_id,
            text: text.into(),
            reply_markup: None,
        }
    }

    /// Attaches the inline keyboard to the message.
    pub fn with_reply_markup(self, reply_markup: InlineKeyboardMarkup) -> Self {
        Self {
            reply_markup: Some(reply_markup),
            ..self
        }
    }
}
