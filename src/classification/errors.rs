//! Error types for the classification domain

use thiserror::Error;

/// Reasons the remote classifier could not produce a specification
///
/// None of these reach the caller of [`Classifier`](super::Classifier); they
/// route the request to the keyword fallback.
#[derive(Error, Debug)]
pub enum ClassificationError {
    #[error("No API key configured for the remote classifier")]
    MissingCredential,

    #[error("HTTP error: {0}")]
    Http(String),

    #[error("Request timed out after {0} seconds")]
    Timeout(u64),

    #[error("HTTP {status} from classification endpoint: {body}")]
    Status { status: u16, body: String },

    #[error("Classification endpoint returned no content")]
    EmptyResponse,

    #[error("Malformed classification response: {0}")]
    MalformedResponse(String),
}
