//! Error-to-response mapping.
//!
//! The service layer returns `aggra_core::Error`; routes differ only in the
//! JSON body shape they surface, so each handler picks one of these mappers.

use aggra_core::Error;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

fn status_of(err: &Error) -> StatusCode {
    StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
}

/// `{"error": <message>}` with the error's status. Used by `/images`.
pub fn error_body(err: &Error) -> Response {
    (status_of(err), Json(json!({ "error": err.to_string() }))).into_response()
}

/// `{"message": <message>}` with the error's status. Used by the aggregate
/// read routes.
pub fn message_body(err: &Error) -> Response {
    (status_of(err), Json(json!({ "message": err.to_string() }))).into_response()
}

/// `{"message": <message>, "info": <details>}` for validation failures,
/// `{"message": <message>}` otherwise. Used by `/todo`.
pub fn message_info_body(err: &Error) -> Response {
    let body = match err {
        Error::Validation { info } => json!({ "message": err.to_string(), "info": info }),
        other => json!({ "message": other.to_string() }),
    };
    (status_of(err), Json(body)).into_response()
}
