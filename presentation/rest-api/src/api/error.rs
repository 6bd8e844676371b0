use poem::http::StatusCode;
use poem::{IntoResponse, Response};
use poem_openapi::{Object, payload::Json};
use serde::Serialize;

#[derive(Object, Serialize, Debug)]
pub struct ErrorResponse {
    pub name: String,
    pub message: String,
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}

/// Renders errors raised outside the handlers (unparsable bodies, missing
/// fields, rejected content types, unknown routes) with the same JSON shape
/// the handlers use.
pub async fn render_error(err: poem::Error) -> Response {
    let status = err.status();
    let body = ErrorResponse {
        name: status
            .canonical_reason()
            .unwrap_or("Error")
            .replace(' ', ""),
        message: err.to_string(),
    };

    (status, poem::web::Json(body)).into_response()
}
