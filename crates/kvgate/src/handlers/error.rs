use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use kvgate_core::routing::{
    rejection_to_status_code, storage_error_to_status_code, storage_failure_message, Rejection,
};
use kvgate_core::storage::StorageError;

/// Application error type that wraps `anyhow::Error`.
///
/// Rejections and storage errors are rendered with their own status codes;
/// anything else becomes a 500.
pub struct AppError(pub anyhow::Error);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let Some(rejection) = self.0.downcast_ref::<Rejection>() {
            let status = status_from_u16(rejection_to_status_code(rejection));
            tracing::warn!(status = %status, message = %rejection, "Request rejected");
            return (status, rejection.to_string()).into_response();
        }

        if let Some(storage_error) = self.0.downcast_ref::<StorageError>() {
            let status = status_from_u16(storage_error_to_status_code(storage_error));
            tracing::error!(status = %status, error = %storage_error, "Storage backend error");
            return (status, storage_failure_message(storage_error)).into_response();
        }

        tracing::error!(error = %self.0, "Application error");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Something went wrong: {}", self.0),
        )
            .into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

fn status_from_u16(code: u16) -> StatusCode {
    StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
}
