use crate::error::{AnalyzerError, Result};
use crate::models::*;
use crate::openai_service::AnalysisClient;
use crate::prompt_builder::PromptBuilder;
use crate::text_extractor::TextExtractor;
use std::path::Path;
use std::sync::Arc;

/// Composes extraction, prompt rendering and the model call.
#[derive(Clone)]
pub struct AnalysisService {
    extractor: TextExtractor,
    prompt_builder: PromptBuilder,
    client: Arc<dyn AnalysisClient>,
}

impl AnalysisService {
    pub fn new(
        extractor: TextExtractor,
        prompt_builder: PromptBuilder,
        client: Arc<dyn AnalysisClient>,
    ) -> Self {
        Self {
            extractor,
            prompt_builder,
            client,
        }
    }

    pub async fn extract_text(&self, path: &Path) -> Result<String> {
        let extractor = self.extractor.clone();
        let path = path.to_path_buf();

        tokio::task::spawn_blocking(move || extractor.extract_file(&path))
            .await
            .map_err(|e| AnalyzerError::Task(e.to_string()))?
    }

    pub async fn analyze_text(&self, text: &str) -> Result<String> {
        let prompt = self.prompt_builder.render(text);
        self.client.complete(&prompt).await
    }

    /// Extracts a stored PDF and sends its text to the model unchanged.
    pub async fn analyze_document(&self, path: &Path) -> Result<DocumentAnalysis> {
        let pdf_text = self.extract_text(path).await?;
        let analysis_result = self.analyze_text(&pdf_text).await?;

        Ok(DocumentAnalysis {
            pdf_text,
            analysis_result,
        })
    }

    pub async fn follow_up(&self, analysis_result: &str, question: &str) -> Result<String> {
        self.analyze_text(&follow_up_message(analysis_result, question)).await
    }
}

pub fn follow_up_message(analysis_result: &str, question: &str) -> String {
    format!("{}\n{}", analysis_result, question)
}
