use std::time::Duration;

use log::debug;
use reqwest::blocking::Client;
use reqwest::header::{HeaderValue, AUTHORIZATION, CONTENT_TYPE};

use crate::config::DemoConfig;
use crate::credential::Credential;
use crate::error::{DemoError, Result};
use crate::providers::CompletionProvider;
use crate::request::CompletionRequest;

/// Blocking client for the engine-scoped completions endpoint
/// (`/v1/engines/<model>/completions`)
pub struct OpenAiEngineClient {
    client: Client,
    api_key: Credential,
    base_url: String,
}

impl OpenAiEngineClient {
    /// Create a client from configuration and a runtime credential
    pub fn new(config: &DemoConfig, api_key: Credential) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(OpenAiEngineClient {
            client: builder.build()?,
            api_key,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    #[doc(hidden)]
    pub fn with_base_url(api_key: Credential, base_url: String) -> Self {
        OpenAiEngineClient {
            client: Client::new(),
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn endpoint(&self, model: &str) -> String {
        format!("{}/v1/engines/{}/completions", self.base_url, model)
    }
}

impl CompletionProvider for OpenAiEngineClient {
    fn provider_name(&self) -> &str {
        "openai"
    }

    fn complete(&self, request: &CompletionRequest) -> Result<String> {
        let url = self.endpoint(request.model());
        debug!(
            "POST {} (max_tokens={}, temperature={:?})",
            url,
            request.max_tokens(),
            request.temperature()
        );

        let mut authorization =
            HeaderValue::from_str(&format!("Bearer {}", self.api_key.expose()))?;
        authorization.set_sensitive(true);

        let response = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .header(AUTHORIZATION, authorization)
            .json(&request.wire_payload())
            .send()?;

        let status = response.status();
        // Owned by this call only; nothing is shared between requests
        let body = response.text()?;
        debug!("{} returned {} ({} bytes)", url, status, body.len());

        if !status.is_success() {
            return Err(DemoError::HttpStatus {
                status: status.as_u16(),
                body,
            });
        }

        Ok(body)
    }
}
