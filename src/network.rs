mod inline_keyboard;
mod outgoing_message;
mod telegram;

pub use self::{
    inline_keyboard::InlineKeyboardMarkup,
    outgoing_message::OutgoingMessage,
    telegram::TelegramTransport,
};
use std::future::Future;

/// Abstraction over the messaging channel used to reach the task owners.
pub trait MessageTransport: Send + Sync + 'static {
    /// Sends the message to the chat specified in the message.
    fn send_message(
        &self,
        message: OutgoingMessage,
    ) -> impl Future<Output = anyhow::Result<()>> + Send;
}
