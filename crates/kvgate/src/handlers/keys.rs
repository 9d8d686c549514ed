//! Key-value request handler.
//!
//! One handler serves every method: the method, key and body are planned
//! into a single storage operation by `kvgate_core::routing`.

use axum::{
    extract::State,
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
};
use kvgate_core::routing::{lookup_message, plan_request, Operation, RequestMethod};

use crate::{
    handlers::{AppError, KeyParam},
    state::AppState,
};

/// Handle GET, PUT and DELETE on a record (ANY /key/{key}).
///
/// - GET responds 200 with the value, or a "no entry" message when absent.
/// - PUT stores the raw body as the value and responds 200 with no body.
/// - DELETE removes the record and responds 200 with no body.
pub async fn handle_request(
    State(state): State<AppState>,
    method: Method,
    KeyParam(key): KeyParam,
    body: String,
) -> Result<Response, AppError> {
    let method = RequestMethod::from(method.as_str());
    let operation = plan_request(&method, key.as_deref(), &body)?;

    tracing::debug!(method = %method, key = %operation.key(), "Dispatching request");

    match operation {
        Operation::Get { key } => {
            let record = state.store.get(&key).await?;
            Ok((StatusCode::OK, lookup_message(&key, record.as_ref())).into_response())
        }
        Operation::Put { key, value } => {
            state.store.put(&key, &value).await?;
            tracing::info!(key = %key, "Stored record");
            Ok(StatusCode::OK.into_response())
        }
        Operation::Delete { key } => {
            state.store.delete(&key).await?;
            tracing::info!(key = %key, "Deleted record");
            Ok(StatusCode::OK.into_response())
        }
    }
}
