use serde::Serialize;

use crate::config::ProgramConfig;
use crate::error::{DemoError, Result};

/// One completion request, built fresh for every call
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompletionRequest {
    prompt: String,
    model: String,
    max_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f64>,
}

/// Body actually POSTed; the model travels in the endpoint path
#[derive(Debug, Serialize)]
pub(crate) struct WirePayload<'a> {
    prompt: &'a str,
    max_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f64>,
}

impl CompletionRequest {
    pub fn new(
        prompt: impl Into<String>,
        model: impl Into<String>,
        max_tokens: u32,
        temperature: Option<f64>,
    ) -> Result<Self> {
        if max_tokens == 0 {
            return Err(DemoError::InvalidRequest(
                "max_tokens must be positive".to_string(),
            ));
        }
        if let Some(t) = temperature {
            if !(0.0..=2.0).contains(&t) {
                return Err(DemoError::InvalidRequest(format!(
                    "temperature {t} is outside [0, 2]"
                )));
            }
        }
        let model = model.into();
        if model.trim().is_empty() {
            return Err(DemoError::InvalidRequest("model must not be empty".to_string()));
        }
        // Interpolated into the endpoint path as a single segment
        if model
            .chars()
            .any(|c| matches!(c, '/' | '\\' | '?' | '#' | '%') || c.is_whitespace())
        {
            return Err(DemoError::InvalidRequest(format!(
                "model '{model}' is not a valid engine name"
            )));
        }

        Ok(CompletionRequest {
            prompt: prompt.into(),
            model,
            max_tokens,
            temperature,
        })
    }

    /// Build a request using a program's configured parameters
    pub fn from_config(prompt: impl Into<String>, config: &ProgramConfig) -> Result<Self> {
        Self::new(prompt, config.model.clone(), config.max_tokens, config.temperature)
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn max_tokens(&self) -> u32 {
        self.max_tokens
    }

    pub fn temperature(&self) -> Option<f64> {
        self.temperature
    }

    pub(crate) fn wire_payload(&self) -> WirePayload<'_> {
        WirePayload {
            prompt: &self.prompt,
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        }
    }
}
