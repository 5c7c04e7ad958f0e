use super::types::{GenerateContentRequest, GenerateContentResponse};
use crate::{Error, Result, config::LlmConfig};
use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

#[async_trait]
pub trait GenerativeClient: Send + Sync {
    async fn generate_content(
        &self,
        request: GenerateContentRequest,
    ) -> Result<GenerateContentResponse>;
}

/// Gemini `generateContent` REST client. One attempt per call, no retry;
/// cancellation is dropping the returned future.
pub struct GeminiClient {
    http: reqwest::Client,
    base_url: String,
    model: String,
    api_key: Option<String>,
}

impl GeminiClient {
    pub fn new(config: LlmConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            http: builder.build()?,
            base_url: config.base_url,
            model: config.model,
            api_key: config.api_key,
        })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        )
    }
}

#[async_trait]
impl GenerativeClient for GeminiClient {
    async fn generate_content(
        &self,
        request: GenerateContentRequest,
    ) -> Result<GenerateContentResponse> {
        // A missing credential fails the attempt before any I/O; it must
        // never take the process down.
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| Error::config("API key is not configured"))?;

        debug!(model = %self.model, "Sending generateContent request");

        let response = self
            .http
            .post(self.endpoint())
            .header("x-goog-api-key", api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::llm(format!("Provider returned {}: {}", status, body)));
        }

        let parsed = response.json::<GenerateContentResponse>().await?;
        debug!(
            candidates = parsed.candidates.len(),
            "Received generateContent response"
        );

        Ok(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LlmConfig;
    use pretty_assertions::assert_eq;

    fn create_test_config() -> LlmConfig {
        LlmConfig {
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            model: "gemini-3-flash-preview".to_string(),
            request_timeout_secs: None,
            api_key: Some("test-api-key".to_string()),
        }
    }

    #[test]
    fn endpoint_includes_model_and_version() {
        let client = GeminiClient::new(create_test_config()).unwrap();
        assert_eq!(
            client.endpoint(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-3-flash-preview:generateContent"
        );
    }

    #[test]
    fn endpoint_tolerates_trailing_slash() {
        let mut config = create_test_config();
        config.base_url = "http://127.0.0.1:9999/".to_string();
        let client = GeminiClient::new(config).unwrap();
        assert_eq!(
            client.endpoint(),
            "http://127.0.0.1:9999/v1beta/models/gemini-3-flash-preview:generateContent"
        );
    }

    #[tokio::test]
    async fn missing_api_key_fails_without_network() {
        let mut config = create_test_config();
        config.api_key = None;
        // Unroutable base URL: if the client attempted I/O the error would be
        // a network error, not a configuration error.
        config.base_url = "http://192.0.2.1".to_string();

        let client = GeminiClient::new(config).unwrap();
        let request = GenerateContentRequest::structured("prompt", serde_json::json!({}), 0.7);

        let err = client.generate_content(request).await.unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
