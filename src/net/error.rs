//! Typed failure taxonomy for Content Pack Service calls.
//!
//! ERROR HANDLING
//! ==============
//! Every screen reports failures through one enum so the queue and detail
//! views can render a uniform request-failed banner instead of the silent
//! unhandled-rejection paths the original dashboard shipped with.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failure reported by any [`ApiClient`] call.
///
/// [`ApiClient`]: super::api::ApiClient
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The service answered with a non-success status code.
    #[error("request failed: {status}")]
    Http {
        /// HTTP status code of the response.
        status: u16,
    },
    /// The request never produced a response (DNS, CORS, connection reset).
    #[error("network error: {0}")]
    Network(String),
    /// The response body did not decode into the expected wire type.
    #[error("malformed response: {0}")]
    Decode(String),
    /// The API was called on the server-render path where no browser exists.
    #[error("not available on server")]
    Unavailable,
}
