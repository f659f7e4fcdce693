//! Error types for the Alma API client.
//!
//! # Design
//! One enum covers the whole request lifecycle: resolving configuration,
//! building the URL, executing the request, and decoding the body. `NotFound`
//! keeps its own variant because callers routinely branch on "no such record"
//! separately from other unexpected statuses. Every other non-2xx response
//! lands in `HttpError` with the raw status and body for debugging.

use thiserror::Error;

/// Errors returned by the Alma client.
#[derive(Debug, Error)]
pub enum ApiError {
    /// No API key was given and none was found in the environment.
    #[error("missing API key (pass one explicitly or set ALMA_API_KEY)")]
    MissingApiKey,

    /// No region was given and none was found in the environment.
    #[error("missing region (pass one explicitly or set ALMA_API_REGION)")]
    MissingRegion,

    /// The region code is not in the endpoint registry.
    #[error("unknown region: {0:?}")]
    UnknownRegion(String),

    /// The resource name does not match any URL template.
    #[error("unknown resource type: {0:?}")]
    UnknownResource(String),

    /// The content type is neither JSON nor XML.
    #[error("unknown content type: {0:?}")]
    UnknownContentType(String),

    /// A placeholder in the resource's URL template has no identifier value.
    #[error("missing identifier {name:?} for resource {resource:?}")]
    MissingIdentifier {
        resource: &'static str,
        name: &'static str,
    },

    /// The request never produced an HTTP response.
    #[error("transport error: {0}")]
    Transport(String),

    /// The server returned 404.
    #[error("resource not found")]
    NotFound,

    /// The server returned a non-2xx status other than 404.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body claimed to be JSON but could not be parsed.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    SerializationError(String),
}

pub type Result<T> = std::result::Result<T, ApiError>;
