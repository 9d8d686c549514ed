//! Pure functions for mapping router outcomes to HTTP status codes.

use super::Rejection;
use crate::storage::StorageError;

/// Maps a [`Rejection`] to an HTTP status code.
///
/// - `MissingKey` -> 200 (GET without a key answers with a usage hint)
/// - `EmptyKeyOrValue` -> 500
/// - `EmptyKey` -> 500
/// - `UnsupportedMethod` -> 405 (Method Not Allowed)
///
/// # Examples
///
/// ```
/// use kvgate_core::routing::{rejection_to_status_code, Rejection};
///
/// assert_eq!(rejection_to_status_code(&Rejection::EmptyKey), 500);
/// ```
pub fn rejection_to_status_code(rejection: &Rejection) -> u16 {
    match rejection {
        Rejection::MissingKey => 200,
        Rejection::EmptyKeyOrValue => 500,
        Rejection::EmptyKey => 500,
        Rejection::UnsupportedMethod(_) => 405,
    }
}

/// Maps a [`StorageError`] to an HTTP status code.
///
/// Every backend failure is reported as 500 (Internal Server Error).
pub fn storage_error_to_status_code(error: &StorageError) -> u16 {
    match error {
        StorageError::ConnectionFailed(_)
        | StorageError::TableNotFound(_)
        | StorageError::Throttled(_)
        | StorageError::RequestFailed(_)
        | StorageError::Serialization(_)
        | StorageError::InvalidData(_) => 500,
    }
}
