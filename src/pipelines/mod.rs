pub mod meal;
pub mod movie;

use log::info;

use crate::config::ProgramConfig;
use crate::error::{Result, Stage};
use crate::extract::{extract_completion, Completion};
use crate::providers::CompletionProvider;
use crate::request::CompletionRequest;

/// One round trip: build the request, send it, extract `choices[0]`.
/// Any failure is tagged with `stage`.
pub(crate) fn ask(
    provider: &dyn CompletionProvider,
    config: &ProgramConfig,
    prompt: String,
    stage: Stage,
) -> Result<Completion> {
    let round_trip = || -> Result<Completion> {
        let request = CompletionRequest::from_config(prompt, config)?;
        let body = provider.complete(&request)?;
        extract_completion(&body)
    };

    let completion = round_trip().map_err(|e| e.during(stage))?;
    info!("Received {} from {}", stage, provider.provider_name());
    Ok(completion)
}

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::RefCell;
    use std::collections::VecDeque;

    use crate::error::Result;
    use crate::providers::CompletionProvider;
    use crate::request::CompletionRequest;

    /// Replays canned bodies in order and records every request
    pub struct ScriptedProvider {
        replies: RefCell<VecDeque<Result<String>>>,
        pub requests: RefCell<Vec<CompletionRequest>>,
    }

    impl ScriptedProvider {
        pub fn new(replies: Vec<Result<String>>) -> Self {
            ScriptedProvider {
                replies: RefCell::new(replies.into()),
                requests: RefCell::new(Vec::new()),
            }
        }

        pub fn text(text: &str) -> Result<String> {
            Ok(serde_json::json!({"choices": [{"text": text}]}).to_string())
        }

        pub fn prompts(&self) -> Vec<String> {
            self.requests
                .borrow()
                .iter()
                .map(|r| r.prompt().to_string())
                .collect()
        }
    }

    impl CompletionProvider for ScriptedProvider {
        fn provider_name(&self) -> &str {
            "scripted"
        }

        fn complete(&self, request: &CompletionRequest) -> Result<String> {
            self.requests.borrow_mut().push(request.clone());
            self.replies
                .borrow_mut()
                .pop_front()
                .expect("more requests than scripted replies")
        }
    }
}
