use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize)]
pub struct UploadResponse {
    pub message: String,
    pub analysis_result: String,
    pub pdf_text: String,
}

#[derive(Deserialize, Serialize)]
pub struct MessageResponse {
    pub message: String,
}
