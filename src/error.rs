use http::{HeaderMap, StatusCode};
use reqwest::Url;

use crate::api::tibber::HomeId;

pub type Result<T = (), E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    Configuration(&'static str),

    /// Connection or protocol failure below HTTP status handling.
    #[error("transport failure")]
    Transport(#[from] reqwest::Error),

    /// The provider responded with a non-success status.
    #[error("`{url}` responded with {status}: {}", .body.as_deref().unwrap_or("<no body>"))]
    RequestFailed { url: Url, status: StatusCode, headers: HeaderMap, body: Option<String> },

    /// The provider reported failures in an otherwise successful response.
    #[error("API call failed: {}", .messages.join("; "))]
    Provider { messages: Vec<String> },

    #[error("failed to deserialize the response from `{url}`")]
    Decode {
        url: Url,

        #[source]
        source: serde_json::Error,
    },

    #[error("`{url}` returned an empty response")]
    EmptyResponse { url: Url },

    #[error("the response contains neither data nor errors")]
    MissingData,

    #[error("the response contains no homes")]
    NoHomes,

    #[error("home `{0}` is not found")]
    HomeNotFound(HomeId),

    #[error("home `{0}` has no active subscription")]
    NoSubscription(HomeId),

    /// Received price point count does not match the requested one.
    #[error("expected {expected} price points, but got {actual}")]
    CountMismatch { expected: usize, actual: usize },
}
