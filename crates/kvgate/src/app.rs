use axum::{routing::any, Router};
use tower_http::trace::TraceLayer;

use crate::{handlers::handle_request, state::AppState};

/// Create the application router with all routes and middleware.
///
/// `/key/{key}` serves local HTTP requests. The fallback lets API Gateway
/// deliver the key as a path parameter on whatever resource path the
/// function is mounted under.
///
/// No request timeout is applied; backend calls are bounded by the SDK
/// and the Lambda runtime.
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/key/{key}", any(handle_request))
        .fallback(handle_request)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
