pub mod analysis_service;
pub mod error;
pub mod models;
pub mod openai_service;
pub mod prompt_builder;
pub mod text_extractor;
pub mod upload_store;

pub use analysis_service::AnalysisService;
pub use error::AnalyzerError;
pub use models::*;
pub use openai_service::{AnalysisClient, OpenAiService};
pub use prompt_builder::{PromptBuilder, SYSTEM_INSTRUCTION};
pub use text_extractor::{PageReader, PdfExtractReader, TextExtractor};
pub use upload_store::UploadStore;
