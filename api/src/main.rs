mod analyze_payload;
mod config;
mod errors;
mod handlers;
mod routes;
mod state;
mod upload_response;

use anyhow::Result;
use resume_analyzer::{AnalysisService, OpenAiService, PromptBuilder, TextExtractor, UploadStore};
use std::sync::Arc;

use crate::config::Config;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize environment variables and logging
    dotenv::dotenv().ok();
    env_logger::init();

    let config = Config::from_env()?;

    let uploads = UploadStore::new(&config.upload_folder)?;

    let client = OpenAiService::new(
        config.openai_api_key.clone(),
        &config.openai_model,
        &config.openai_base_url,
    );
    if config.openai_api_key.is_none() {
        log::warn!("OPENAI_API_KEY is not set; analysis requests will fail");
    }
    log::info!("Using model {}", client.model());

    let analysis = AnalysisService::new(TextExtractor::new(), PromptBuilder::new(), Arc::new(client));
    let state = AppState { analysis, uploads };

    let app = build_router(state, &config)?;
    log::info!("Allowing CORS origin {}", config.cors_origin);

    let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;
    log::info!("Listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
