use http::StatusCode;
use thiserror::Error;

use super::ProviderKind;

#[derive(Error, Debug)]
pub enum InferError {
    #[error("{kind} API responded with {status}: {message}")]
    Rejected {
        kind: ProviderKind,
        status: StatusCode,
        message: Box<str>,
    },

    #[error("Request to {kind} API failed: {source}")]
    Unreachable {
        kind: ProviderKind,
        #[source]
        source: reqwest::Error,
    },
}
