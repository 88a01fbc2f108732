use anyhow::{Context, Result};
use resume_analyzer::openai_service::{DEFAULT_BASE_URL, DEFAULT_MODEL};
use std::env;

/// Server configuration read from the environment (and `.env`, loaded in `main`).
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub cors_origin: String,
    pub upload_folder: String,
    /// Not validated here. A missing key fails the first model call.
    pub openai_api_key: Option<String>,
    pub openai_model: String,
    pub openai_base_url: String,
    pub max_upload_bytes: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
            cors_origin: "http://localhost:5173".to_string(),
            upload_folder: "uploads".to_string(),
            openai_api_key: None,
            openai_model: DEFAULT_MODEL.to_string(),
            openai_base_url: DEFAULT_BASE_URL.to_string(),
            max_upload_bytes: 16 * 1024 * 1024,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let defaults = Config::default();

        Ok(Config {
            host: env::var("HOST").unwrap_or(defaults.host),
            port: parse_env("PORT", defaults.port)?,
            cors_origin: env::var("CORS_ORIGIN").unwrap_or(defaults.cors_origin),
            upload_folder: env::var("UPLOAD_FOLDER").unwrap_or(defaults.upload_folder),
            openai_api_key: env::var("OPENAI_API_KEY").ok(),
            openai_model: env::var("OPENAI_MODEL").unwrap_or(defaults.openai_model),
            openai_base_url: env::var("OPENAI_BASE_URL").unwrap_or(defaults.openai_base_url),
            max_upload_bytes: parse_env("MAX_UPLOAD_BYTES", defaults.max_upload_bytes)?,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(raw) => raw
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid number, got '{raw}'")),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_development_setup() {
        let config = Config::default();
        assert_eq!(config.bind_address(), "127.0.0.1:5000");
        assert_eq!(config.cors_origin, "http://localhost:5173");
        assert_eq!(config.upload_folder, "uploads");
        assert!(config.openai_api_key.is_none());
    }

    #[test]
    fn parse_env_reports_the_variable_name() {
        env::set_var("RESUME_API_TEST_PORT", "not-a-port");
        let err = parse_env::<u16>("RESUME_API_TEST_PORT", 5000).unwrap_err();
        assert!(err.to_string().contains("RESUME_API_TEST_PORT"));
        env::remove_var("RESUME_API_TEST_PORT");
    }

    #[test]
    fn parse_env_falls_back_when_unset() {
        assert_eq!(parse_env::<usize>("RESUME_API_TEST_UNSET", 42).unwrap(), 42);
    }
}
