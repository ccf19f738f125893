//! Error types for the ruleset client.
//!
//! # Design
//! A single enum covers every way a call can fail. Non-2xx responses keep
//! the raw status and body so callers see exactly what the server said.
//! Transport failures and malformed bodies stay separate variants even
//! though both end up on the same error path.

use thiserror::Error;

/// Errors returned by `RulesetClient`, `Rulesets` and `Transport`
/// implementations.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server answered with a non-2xx status.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The request never produced a response (connection refused, DNS, I/O).
    #[error("transport failed: {0}")]
    Transport(String),

    /// The response body could not be decoded into the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    SerializationError(String),
}
