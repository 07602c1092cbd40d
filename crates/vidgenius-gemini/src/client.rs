//! Gemini HTTP client.

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, info};

use crate::error::{GeminiError, GeminiResult};
use crate::types::{GenerateContentRequest, GenerateContentResponse};

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Configuration for the Gemini client.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// API key for the generative language API
    pub api_key: String,
    /// Base URL of the API (overridable for tests)
    pub base_url: String,
    /// Model to call
    pub model: String,
}

impl GeminiConfig {
    /// Create config from environment variables.
    pub fn from_env() -> GeminiResult<Self> {
        let api_key = std::env::var("GEMINI_API_KEY")
            .map_err(|_| GeminiError::config("GEMINI_API_KEY not set"))?;

        Ok(Self {
            api_key,
            base_url: std::env::var("GEMINI_API_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            model: std::env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
        })
    }
}

/// The structured-generation capability behind the analysis pipeline.
///
/// The pipeline only depends on this trait, so the concrete service can be
/// swapped or stubbed in tests without touching pipeline logic.
#[async_trait]
pub trait AnalysisBackend: Send + Sync {
    /// Perform exactly one generation call and return the raw candidate text.
    async fn generate(&self, request: &GenerateContentRequest) -> GeminiResult<String>;
}

/// Gemini API client.
pub struct GeminiClient {
    config: GeminiConfig,
    client: Client,
}

impl GeminiClient {
    /// Create a new Gemini client.
    ///
    /// The underlying HTTP client carries no timeout; callers impose one by
    /// wrapping the generation future if they need it.
    pub fn new(config: GeminiConfig) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    /// Create from environment variables.
    pub fn from_env() -> GeminiResult<Self> {
        Ok(Self::new(GeminiConfig::from_env()?))
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.config.base_url, self.config.model, self.config.api_key
        )
    }
}

#[async_trait]
impl AnalysisBackend for GeminiClient {
    async fn generate(&self, request: &GenerateContentRequest) -> GeminiResult<String> {
        debug!(model = %self.config.model, "Sending generateContent request");

        let response = self
            .client
            .post(self.endpoint())
            .json(request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(GeminiError::RequestFailed { status, body });
        }

        let generate_response: GenerateContentResponse = response
            .json()
            .await
            .map_err(GeminiError::Network)?;

        let text = generate_response
            .first_text()
            .ok_or(GeminiError::EmptyResponse)?;

        if text.trim().is_empty() {
            return Err(GeminiError::EmptyResponse);
        }

        info!(model = %self.config.model, bytes = text.len(), "Received candidate text");
        Ok(text.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::analysis_response_schema;
    use crate::types::{Content, GenerationConfig, Part};
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_config(base_url: String) -> GeminiConfig {
        GeminiConfig {
            api_key: "test-key".to_string(),
            base_url,
            model: "gemini-2.5-flash".to_string(),
        }
    }

    fn test_request() -> GenerateContentRequest {
        GenerateContentRequest {
            system_instruction: Content::from_parts(vec![Part::text("instruction")]),
            contents: vec![Content::from_parts(vec![Part::text("transcript")])],
            generation_config: GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema: analysis_response_schema(),
            },
        }
    }

    #[tokio::test]
    async fn test_generate_returns_candidate_text() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1beta/models/gemini-2.5-flash:generateContent"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "candidates": [{"content": {"parts": [{"text": "{\"ok\": true}"}]}}]
            })))
            .mount(&server)
            .await;

        let client = GeminiClient::new(test_config(server.uri()));
        let text = client.generate(&test_request()).await.unwrap();
        assert_eq!(text, "{\"ok\": true}");
    }

    #[tokio::test]
    async fn test_generate_surfaces_authorization_failure() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(401).set_body_string("API key not valid"))
            .mount(&server)
            .await;

        let client = GeminiClient::new(test_config(server.uri()));
        let err = client.generate(&test_request()).await.unwrap_err();
        match err {
            GeminiError::RequestFailed { status, body } => {
                assert_eq!(status, 401);
                assert!(body.contains("API key"));
            }
            other => panic!("expected RequestFailed, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_generate_empty_candidates_is_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"candidates": []})),
            )
            .mount(&server)
            .await;

        let client = GeminiClient::new(test_config(server.uri()));
        let err = client.generate(&test_request()).await.unwrap_err();
        assert!(matches!(err, GeminiError::EmptyResponse));
    }

    #[tokio::test]
    async fn test_generate_blank_text_is_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "candidates": [{"content": {"parts": [{"text": "   "}]}}]
            })))
            .mount(&server)
            .await;

        let client = GeminiClient::new(test_config(server.uri()));
        let err = client.generate(&test_request()).await.unwrap_err();
        assert!(matches!(err, GeminiError::EmptyResponse));
    }
}
