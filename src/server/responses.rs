use super::types::{ErrorResponse, UnsupportedMethodResponse};
use crate::Error;
use axum::{
    http::{Method, StatusCode},
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;
use tracing::{error, warn};

pub fn success_response<T: Serialize>(data: T) -> Response {
    (StatusCode::OK, Json(data)).into_response()
}

pub async fn unsupported_method(method: Method) -> Response {
    warn!("Unsupported method: {}", method);
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(UnsupportedMethodResponse {
            result: "failure".to_string(),
            error: format!("Unsupported Method: {method}"),
        }),
    )
        .into_response()
}

/// Validation messages go back as plain text; everything else as `{"error": ...}`.
pub fn error_response(err: Error) -> Response {
    let status = match &err {
        Error::Validation(message) => {
            warn!("Rejected request: {}", message);
            return (StatusCode::BAD_REQUEST, message.clone()).into_response();
        }
        Error::MalformedResponse(_) | Error::Invocation(_) => StatusCode::BAD_GATEWAY,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };

    error!("Request failed: {}", err);
    (
        status,
        Json(ErrorResponse {
            error: err.to_string(),
        }),
    )
        .into_response()
}
