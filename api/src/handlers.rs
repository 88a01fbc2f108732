use axum::{
    extract::{multipart::MultipartRejection, rejection::JsonRejection, Multipart, State},
    http::StatusCode,
    Json,
};
use serde_json::{Map, Value};

use crate::analyze_payload::AnalyzePayload;
use crate::errors::{ApiError, INVALID_FILE_FORMAT, NO_FILE_PART, NO_SELECTED_FILE};
use crate::state::AppState;
use crate::upload_response::{MessageResponse, UploadResponse};

pub const GREETING: &str = "Welcome to the Flask backend server!";
const UPLOAD_SUCCESS: &str = "File uploaded and analyzed successfully";

pub async fn home() -> &'static str {
    GREETING
}

/// POST /upload
///
/// Validation runs in a fixed order and stops at the first failure: no `file`
/// part, empty filename, filename not ending in `.pdf` (case-sensitive).
pub async fn upload_file(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<UploadResponse>, ApiError> {
    let Ok(mut multipart) = multipart else {
        return Err(ApiError::BadRequest(NO_FILE_PART));
    };

    let mut upload = None;
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some("file") {
            continue;
        }
        // Parts without a filename are form values, not files.
        let Some(filename) = field.file_name().map(str::to_string) else {
            continue;
        };
        let bytes = field.bytes().await?;
        upload = Some((filename, bytes));
        break;
    }

    let Some((filename, bytes)) = upload else {
        return Err(ApiError::BadRequest(NO_FILE_PART));
    };
    if filename.is_empty() {
        return Err(ApiError::BadRequest(NO_SELECTED_FILE));
    }
    if !filename.ends_with(".pdf") {
        return Err(ApiError::BadRequest(INVALID_FILE_FORMAT));
    }

    let document = state.uploads.save(&filename, &bytes).await?;
    let analysis = state.analysis.analyze_document(&document.path).await?;

    Ok(Json(UploadResponse {
        message: UPLOAD_SUCCESS.to_string(),
        analysis_result: analysis.analysis_result,
        pdf_text: analysis.pdf_text,
    }))
}

/// POST /analyze
///
/// Follow-up question about an earlier analysis. Any body problem, including
/// a missing or non-JSON content type, is a 500.
pub async fn analyze_message(
    State(state): State<AppState>,
    body: Result<Json<Map<String, Value>>, JsonRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Json(fields) = body?;
    let payload = AnalyzePayload::from_fields(fields);

    let message = state
        .analysis
        .follow_up(&payload.prior_analysis(), &payload.question())
        .await?;

    Ok(Json(MessageResponse { message }))
}

/// OPTIONS /analyze
pub async fn analyze_preflight() -> StatusCode {
    StatusCode::NO_CONTENT
}
