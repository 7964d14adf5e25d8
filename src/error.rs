mod error_kind;

pub use error_kind::ErrorKind;

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use anyhow::anyhow;
use std::fmt::{Debug, Display, Formatter};

/// Application specific error type.
#[derive(thiserror::Error)]
pub struct Error {
    root_cause: anyhow::Error,
    kind: ErrorKind,
}

impl Error {
    /// Creates a client error with the specified message, the message is shown to the caller as is.
    pub fn client<M>(message: M) -> Self
    where
        M: Display + Debug + Send + Sync + 'static,
    {
        Self {
            root_cause: anyhow!(message),
            kind: ErrorKind::ClientError,
        }
    }

    /// Returns the kind of the error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        match self.kind() {
            ErrorKind::ClientError => StatusCode::BAD_REQUEST,
            ErrorKind::Unknown => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self.kind() {
            ErrorKind::ClientError => HttpResponse::build(self.status_code()).body(self.to_string()),
            ErrorKind::Unknown => HttpResponse::build(self.status_code()).finish(),
        }
    }
}

impl Debug for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Debug::fmt(&self.root_cause, f)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.root_cause, f)
    }
}

// Client errors travel inside `anyhow::Error` through the API layers and are unwrapped here.
impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        match err.downcast::<Error>() {
            Ok(err) => err,
            Err(root_cause) => Self {
                root_cause,
                kind: ErrorKind::Unknown,
            },
        }
    }
}
