use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalyzerError {
    #[error("Unable to read PDF document: {0}")]
    UnreadableDocument(String),

    #[error("Model unavailable: {0}")]
    ModelUnavailable(String),

    #[error("Invalid model response: {0}")]
    ModelResponse(String),

    #[error("Upload storage error: {0}")]
    Storage(#[from] std::io::Error),

    #[error("Background task failed: {0}")]
    Task(String),
}

impl From<reqwest::Error> for AnalyzerError {
    fn from(err: reqwest::Error) -> Self {
        AnalyzerError::ModelUnavailable(err.to_string())
    }
}

impl From<pdf_extract::OutputError> for AnalyzerError {
    fn from(err: pdf_extract::OutputError) -> Self {
        AnalyzerError::UnreadableDocument(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AnalyzerError>;
