//! Request routing for the key-value gateway.
//!
//! Everything here is pure: the HTTP shell extracts method, key and body,
//! calls [`plan_request`], runs the resulting [`Operation`] against a store
//! and renders the outcome with the helpers in this module.

mod error;
mod http_mapping;
mod messages;
mod method;
mod plan;

pub use error::Rejection;
pub use http_mapping::{rejection_to_status_code, storage_error_to_status_code};
pub use messages::{lookup_message, storage_failure_message};
pub use method::RequestMethod;
pub use plan::{plan_request, Operation};

/// Name of the path parameter carrying the record key.
pub const KEY_PATH_PARAMETER: &str = "key";
