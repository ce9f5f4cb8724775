mod open_ai;

pub use open_ai::OpenAiEngineClient;

use crate::error::Result;
use crate::request::CompletionRequest;

/// Anything that can turn a completion request into a raw response body
pub trait CompletionProvider {
    /// Get the provider name (e.g., "openai")
    fn provider_name(&self) -> &str;

    /// Issue one blocking request and return the full, unparsed response body
    fn complete(&self, request: &CompletionRequest) -> Result<String>;
}
