use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

pub const NO_FILE_PART: &str = "No file part";
pub const NO_SELECTED_FILE: &str = "No selected file";
pub const INVALID_FILE_FORMAT: &str = "Invalid file format";

/// Handler error. Client input problems are 400 with a `message`; everything
/// else becomes a 500 carrying the error text under `error`.
#[derive(Debug)]
pub enum ApiError {
    BadRequest(&'static str),
    Internal(anyhow::Error),
}

impl<E> From<E> for ApiError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        ApiError::Internal(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::BadRequest(message) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "message": message }))).into_response()
            }
            ApiError::Internal(err) => {
                let mut error = format!("{:#}", err);
                if error.is_empty() {
                    error = "Internal Server Error".to_string();
                }
                log::error!("Unhandled exception: {}", error);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": error })),
                )
                    .into_response()
            }
        }
    }
}
