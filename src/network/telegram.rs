use crate::{
    config::TelegramConfig,
    network::{MessageTransport, OutgoingMessage},
};
use anyhow::{anyhow, bail};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_tracing::{DefaultSpanBackend, TracingMiddleware};
use serde::Deserialize;
use tracing::debug;
use url::Url;

/// Error returned by the Telegram Bot API.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum TelegramError {
    /// Bot API responded with a non-successful HTTP status.
    #[error("Telegram API failed with {status}: {description}")]
    Status { status: u16, description: String },
    /// Bot API accepted the request, but refused to perform it.
    #[error("Telegram API rejected the request: {description}")]
    Rejected { description: String },
}

/// Envelope of every Bot API response.
#[derive(Deserialize, Debug)]
struct TelegramResponse {
    ok: bool,
    #[serde(default)]
    description: Option<String>,
}

/// Message transport backed by the Telegram Bot API.
pub struct TelegramTransport {
    client: ClientWithMiddleware,
    config: TelegramConfig,
}

impl TelegramTransport {
    /// Creates a new Telegram transport with the specified config.
    pub fn new(config: TelegramConfig) -> Self {
        // Method URLs include the bot token, the default span backend doesn't record them.
        let client = ClientBuilder::new(reqwest::Client::new())
            .with(TracingMiddleware::<DefaultSpanBackend>::new())
            .build();

        Self { client, config }
    }

    /// Builds the URL of the Bot API method. Tokens contain `:` and cannot be joined as a
    /// relative URL, so the path is assembled segment by segment.
    fn method_url(&self, method: &str) -> anyhow::Result<Url> {
        let mut url = self.config.api_url.clone();
        url.path_segments_mut()
            .map_err(|_| anyhow!("Telegram API URL cannot be used as a base URL."))?
            .pop_if_empty()
            .push(&format!("bot{}", self.config.token))
            .push(method);
        Ok(url)
    }
}

impl MessageTransport for TelegramTransport {
    async fn send_message(&self, message: OutgoingMessage) -> anyhow::Result<()> {
        let response = self
            .client
            .post(self.method_url("sendMessage")?)
            .json(&message)
            .send()
            .await
            .map_err(|err| match err {
                reqwest_middleware::Error::Reqwest(err) => anyhow!(err.without_url()),
                err => anyhow!(err),
            })
            .map_err(|err| {
                err.context(format!(
                    "Could not connect to Telegram API to send a message to chat ('{}').",
                    message.chat_id
                ))
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|err| {
            anyhow!(err.without_url()).context("Could not read Telegram API response.")
        })?;
        let telegram_response = serde_json::from_str::<TelegramResponse>(&body);

        if !status.is_success() {
            bail!(TelegramError::Status {
                status: status.as_u16(),
                description: telegram_response
                    .ok()
                    .and_then(|response| response.description)
                    .unwrap_or(body),
            });
        }

        let telegram_response = telegram_response.map_err(|err| {
            anyhow!(err).context("Could not deserialize Telegram API response.")
        })?;
        if !telegram_response.ok {
            bail!(TelegramError::Rejected {
                description: telegram_response.description.unwrap_or_default(),
            });
        }

        debug!(chat.id = message.chat_id, "Successfully sent message via Telegram API.");

        Ok(())
    }
}
