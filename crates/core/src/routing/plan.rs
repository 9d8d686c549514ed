//! Pure request planning: turns method, key and body into one storage operation.

use super::{Rejection, RequestMethod};

/// A validated storage operation, ready to dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    Get { key: String },
    Put { key: String, value: String },
    Delete { key: String },
}

impl Operation {
    /// Returns the key the operation targets.
    pub fn key(&self) -> &str {
        match self {
            Operation::Get { key } | Operation::Put { key, .. } | Operation::Delete { key } => key,
        }
    }
}

/// Validates the request parameters and selects the storage operation.
///
/// An absent key and an empty key are treated the same. The body is only
/// read for PUT.
pub fn plan_request(
    method: &RequestMethod,
    key: Option<&str>,
    body: &str,
) -> Result<Operation, Rejection> {
    let key = key.filter(|k| !k.is_empty());

    match method {
        RequestMethod::Get => key
            .map(|key| Operation::Get {
                key: key.to_string(),
            })
            .ok_or(Rejection::MissingKey),
        RequestMethod::Put => match key {
            Some(key) if !body.is_empty() => Ok(Operation::Put {
                key: key.to_string(),
                value: body.to_string(),
            }),
            _ => Err(Rejection::EmptyKeyOrValue),
        },
        RequestMethod::Delete => key
            .map(|key| Operation::Delete {
                key: key.to_string(),
            })
            .ok_or(Rejection::EmptyKey),
        RequestMethod::Other(name) => Err(Rejection::UnsupportedMethod(name.clone())),
    }
}
