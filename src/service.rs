use http::StatusCode;

use crate::infer::{InferError, ProviderKind};

#[cfg(feature = "server-http2")]
use crate::actuators::chat::dto::ChatReply;

/// Every way a chat request can fail. The `Display` text is the reply sent to the client.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Message is empty")]
    EmptyMessage,
    #[error("Invalid request body: {0}")]
    InvalidBody(Box<str>),
    #[error("Server misconfigured: set OPENAI_API_KEY or GEMINI_API_KEY env var")]
    Misconfigured,
    #[error("API Error: {message}")]
    UpstreamRejected { status: StatusCode, message: Box<str> },
    #[error("Error connecting to {0} API")]
    UpstreamUnreachable(ProviderKind),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn status(&self) -> StatusCode {
        match self {
            Error::EmptyMessage | Error::InvalidBody(_) => StatusCode::BAD_REQUEST,
            Error::Misconfigured | Error::UpstreamUnreachable(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            Error::UpstreamRejected { status, .. } => *status,
        }
    }
}

impl From<InferError> for Error {
    fn from(error: InferError) -> Self {
        match error {
            InferError::Rejected { status, message, .. } => {
                Error::UpstreamRejected { status, message }
            }
            InferError::Unreachable { kind, source } => {
                tracing::error!("Error connecting to {} API: {:?}", kind, source);
                Error::UpstreamUnreachable(kind)
            }
        }
    }
}

#[cfg(feature = "server-http2")]
impl axum::response::IntoResponse for Error {
    fn into_response(self) -> axum::response::Response {
        (self.status(), axum::Json(ChatReply::new(self.to_string()))).into_response()
    }
}
