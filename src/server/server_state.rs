mod status;

pub use self::status::Status;
use crate::{
    api::Api,
    database::Database,
    network::{MessageTransport, TelegramTransport},
    tasks::TaskStore,
};
use std::sync::Arc;

pub struct ServerState<TS: TaskStore = Database, MT: MessageTransport = TelegramTransport> {
    pub api: Arc<Api<TS, MT>>,
    /// Version of the API server.
    version: String,
}

impl<TS: TaskStore, MT: MessageTransport> ServerState<TS, MT> {
    pub fn new(api: Arc<Api<TS, MT>>) -> Self {
        Self {
            api,
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    /// Gets the status of the server.
    pub fn status(&self) -> Status {
        Status {
            version: self.version.clone(),
            scheduler: self.api.scheduler.status(),
        }
    }
}
