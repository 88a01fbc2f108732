use crate::error::{AnalyzerError, Result};
use crate::models::*;
use async_trait::async_trait;
use reqwest::Client;

pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Sends a rendered prompt to a language model and returns its reply.
#[async_trait]
pub trait AnalysisClient: Send + Sync {
    async fn complete(&self, prompt: &AnalysisPrompt) -> Result<String>;
}

/// OpenAI chat-completions client. Built once at startup and shared.
pub struct OpenAiService {
    client: Client,
    api_key: Option<String>,
    model: String,
    base_url: String,
    temperature: f32,
}

impl OpenAiService {
    pub fn new(
        api_key: Option<String>,
        model: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            client: Client::new(),
            api_key,
            model: model.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            temperature: 0.0,
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn build_request(&self, prompt: &AnalysisPrompt) -> ChatCompletionRequest {
        ChatCompletionRequest {
            model: self.model.clone(),
            temperature: self.temperature,
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: prompt.system_instruction.clone(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: prompt.human_message.clone(),
                },
            ],
        }
    }
}

#[async_trait]
impl AnalysisClient for OpenAiService {
    async fn complete(&self, prompt: &AnalysisPrompt) -> Result<String> {
        let api_key = self.api_key.as_deref().ok_or_else(|| {
            AnalyzerError::ModelUnavailable("OPENAI_API_KEY environment variable not set".to_string())
        })?;

        let request = self.build_request(prompt);
        log::debug!(
            "Sending {} characters to {}",
            prompt.human_message.chars().count(),
            self.model
        );

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await?;
            return Err(AnalyzerError::ModelUnavailable(format!(
                "OpenAI API error ({}): {}",
                status, error_text
            )));
        }

        let body = response.text().await?;
        let answer = completion_text(&body)?;
        log::debug!("Model returned {} characters", answer.chars().count());
        Ok(answer)
    }
}

fn completion_text(body: &str) -> Result<String> {
    let completion: ChatCompletionResponse = serde_json::from_str(body)
        .map_err(|e| AnalyzerError::ModelResponse(format!("undecodable completion: {}", e)))?;

    completion
        .choices
        .into_iter()
        .next()
        .and_then(|c| c.message.content)
        .filter(|text| !text.is_empty())
        .ok_or_else(|| AnalyzerError::ModelResponse("completion contained no text".to_string()))
}
