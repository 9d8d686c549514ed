//! Axum extractor for the record key.

use std::collections::HashMap;
use std::convert::Infallible;

use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use kvgate_core::routing::KEY_PATH_PARAMETER;
use lambda_http::RequestExt;

/// The `key` path parameter, if the request carries one.
///
/// API Gateway path parameters take precedence; otherwise the `{key}`
/// segment matched by the router is used. Never rejects: a missing key is
/// handled by request planning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyParam(pub Option<String>);

impl<S> FromRequestParts<S> for KeyParam
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let from_gateway = parts
            .path_parameters_ref()
            .and_then(|params| params.first(KEY_PATH_PARAMETER))
            .map(str::to_string);
        if from_gateway.is_some() {
            return Ok(Self(from_gateway));
        }

        let from_route = Path::<HashMap<String, String>>::from_request_parts(parts, state)
            .await
            .ok()
            .and_then(|Path(mut params)| params.remove(KEY_PATH_PARAMETER));

        Ok(Self(from_route))
    }
}
