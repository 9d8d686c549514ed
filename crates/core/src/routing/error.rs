use thiserror::Error;

/// Reasons a request is refused before any storage call is made.
///
/// The display text is the response body sent back to the caller.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Rejection {
    #[error("You need to specify /key/{{key}} path parameter.")]
    MissingKey,
    #[error("Key and value parameters must not be empty")]
    EmptyKeyOrValue,
    #[error("Key parameter must not be empty")]
    EmptyKey,
    #[error("Unsupported method: {0}")]
    UnsupportedMethod(String),
}
