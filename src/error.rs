//! Error types for the InEngine API client

use crate::config::Resource;
use crate::resource::Verb;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// A logical resource has no (or an empty) endpoint segment configured.
    /// Raised at client construction, before any request is made.
    #[error("no endpoint segment configured for resource '{0}'")]
    MissingEndpoint(Resource),

    /// The action table has no descriptor for the requested verb.
    #[error("no action configured for verb '{0}'")]
    MissingAction(Verb),

    /// An action descriptor names an HTTP method this client cannot issue.
    #[error("unsupported HTTP method: {0}")]
    UnsupportedMethod(String),

    /// A record passed by the caller lacks a required field.
    #[error("record has no '{field}' field")]
    MissingField { field: &'static str },

    /// Network-level failure from the underlying HTTP client.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    /// Non-2xx response. The body is carried verbatim.
    #[error("request failed ({status}): {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    /// Response body was not valid JSON.
    #[error(transparent)]
    Decode(#[from] serde_json::Error),

    /// A list verb resolved to something other than a JSON array.
    #[error("expected a JSON array in response, got {got}")]
    NotAList { got: &'static str },
}
