//! Response bodies rendered by the router.

use crate::storage::{Record, StorageError};

/// Renders the body of a successful GET.
///
/// `record` is `None` when the store has no entry for `key`.
pub fn lookup_message(key: &str, record: Option<&Record>) -> String {
    match record {
        Some(record) => format!("Value for key: {} is {}", key, record.value),
        None => format!("No entry found for key: {key}"),
    }
}

/// Renders the body of a response for a failed storage call.
pub fn storage_failure_message(error: &StorageError) -> String {
    format!("Storage backend error: {error}")
}
