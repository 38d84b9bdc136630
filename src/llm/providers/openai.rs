use super::CompletionProvider;
use crate::config::ChatConfig;
use crate::constants::ORGANIZATION_HEADER;
use crate::errors::{ChatError, ConfigError};
use crate::llm::{ChatRequest, ChatResponse};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, StatusCode};
use tracing::debug;

/// Provider implementation for OpenAI's chat completions API
#[derive(Debug)]
pub struct OpenAiProvider {
    /// Shared HTTP client carrying the timeout and default headers
    client: Client,
    config: ChatConfig,
}

impl OpenAiProvider {
    /// Creates a new OpenAI provider instance
    ///
    /// # Arguments
    /// * `config` - Resolved chat configuration, credential included
    ///
    /// # Returns
    /// * `Result<Self, ConfigError>` - Provider instance or error if the HTTP client cannot be built
    pub fn new(config: ChatConfig) -> Result<Self, ConfigError> {
        let mut headers = HeaderMap::new();
        if let Some(organization) = &config.organization {
            let value = HeaderValue::from_str(organization)
                .map_err(|_| ConfigError::InvalidHeader(ORGANIZATION_HEADER))?;
            headers.insert(HeaderName::from_static(ORGANIZATION_HEADER), value);
        }

        let client = Client::builder()
            .timeout(config.timeout)
            .default_headers(headers)
            .build()
            .map_err(ConfigError::HttpClient)?;

        Ok(OpenAiProvider { client, config })
    }
}

#[async_trait]
impl CompletionProvider for OpenAiProvider {
    /// Performs one POST to the chat completions endpoint
    ///
    /// # Arguments
    /// * `prompt` - User's input message
    ///
    /// # Returns
    /// * `Result<String, ChatError>` - Content of the first choice, or why there is none
    ///
    /// Failures are returned, not logged: the caller reports them once any
    /// terminal spinner has been cleared.
    async fn send(&self, prompt: &str) -> Result<String, ChatError> {
        let request_body = ChatRequest::single_turn(&self.config.model, prompt);
        debug!("Sending prompt to {} ({} chars)", self.config.api_url, prompt.len());

        let res = self
            .client
            .post(self.config.api_url.clone())
            .bearer_auth(self.config.credential.expose())
            .json(&request_body)
            .send()
            .await?;

        let status = res.status();
        if status != StatusCode::OK {
            let body = match res.text().await {
                Ok(body) => body,
                Err(e) => {
                    debug!("Could not read body of {} response: {}", status, e);
                    String::new()
                }
            };
            return Err(ChatError::Status { status, body });
        }

        let text = res.text().await?;
        let json_resp: ChatResponse = serde_json::from_str(&text)?;
        json_resp.first_content().ok_or(ChatError::EmptyCompletion)
    }
}
