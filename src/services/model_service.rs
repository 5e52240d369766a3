use std::time::Duration;

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::{
    config::Config,
    errors::ModelError,
    models::dto::{request::GenerateRequest, response::GenerateResponse},
};

/// Sends a prompt to a language model and returns its raw text answer.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ModelClient: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, ModelError>;
}

/// Client for an Ollama-style `/api/generate` endpoint. One attempt per call,
/// bounded by the configured timeout.
pub struct OllamaModelService {
    client: reqwest::Client,
    config: Config,
}

impl OllamaModelService {
    pub fn new(config: &Config) -> Self {
        Self {
            client: reqwest::Client::new(),
            config: config.clone(),
        }
    }

    fn endpoint(&self) -> &str {
        &self.config.ollama_url
    }

    fn map_send_error(&self, err: reqwest::Error) -> ModelError {
        if err.is_timeout() {
            ModelError::Timeout {
                endpoint: self.endpoint().to_string(),
                seconds: self.config.model_timeout_secs,
            }
        } else {
            ModelError::Request {
                endpoint: self.endpoint().to_string(),
                source: err,
            }
        }
    }
}

#[async_trait]
impl ModelClient for OllamaModelService {
    async fn generate(&self, prompt: &str) -> Result<String, ModelError> {
        let body = GenerateRequest::new(&self.config, prompt);

        log::info!(
            "Sending request to {} (model: {})",
            self.endpoint(),
            self.config.model_name
        );

        let response = self
            .client
            .post(self.endpoint())
            .timeout(Duration::from_secs(self.config.model_timeout_secs))
            .json(&body)
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ModelError::Status {
                endpoint: self.endpoint().to_string(),
                status: status.as_u16(),
            });
        }

        let payload: GenerateResponse = response.json().await.map_err(|e| {
            if e.is_timeout() {
                self.map_send_error(e)
            } else {
                ModelError::Decode(e.to_string())
            }
        })?;

        log::info!(
            "Received response from model ({} chars)",
            payload.response.chars().count()
        );

        Ok(payload.response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn unreachable_endpoint_is_request_error() {
        let mut config = Config::test_config();
        config.ollama_url = "http://127.0.0.1:1/api/generate".to_string();
        let service = OllamaModelService::new(&config);

        let result = service.generate("prompt").await;

        assert!(matches!(
            result,
            Err(ModelError::Request { .. }) | Err(ModelError::Timeout { .. })
        ));
    }

    #[tokio::test]
    async fn mock_client_returns_configured_output() {
        let mut mock = MockModelClient::new();
        mock.expect_generate()
            .withf(|prompt| prompt.contains("Biology"))
            .times(1)
            .returning(|_| Ok("{\"questions\": []}".to_string()));

        let output = mock.generate("quiz about Biology").await;

        assert_eq!(output.ok().as_deref(), Some("{\"questions\": []}"));
    }
}
