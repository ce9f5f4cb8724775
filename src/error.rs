use std::fmt;

use thiserror::Error;

/// Pipeline step a failure came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Title,
    Information,
    Review,
    Rating,
    MealPlan,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Title => "movie title",
            Stage::Information => "movie introduction",
            Stage::Review => "movie review",
            Stage::Rating => "movie rating",
            Stage::MealPlan => "meal plan",
        };
        f.write_str(name)
    }
}

/// Errors that can occur while collecting input, talking to the completion API
/// or reading its response. Every variant is terminal for the running program.
#[derive(Error, Debug)]
pub enum DemoError {
    /// The API key environment variable is unset or empty
    #[error("{0} environment variable not set")]
    CredentialMissing(String),

    /// Console input could not be accepted
    #[error("Invalid input: {0}")]
    InvalidUserInput(String),

    /// Request parameters out of range
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// The HTTP stack failed before a response was received
    #[error("Transport failure: {0}")]
    TransportFailure(#[from] reqwest::Error),

    /// The API answered with a non-success status
    #[error("API returned HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    /// The response body is not JSON
    #[error("Failed to parse response: {message}")]
    ParseFailure { message: String, body: String },

    /// The response is JSON but lacks the expected fields
    #[error("Unexpected response shape: {0}")]
    UnexpectedResponseShape(String),

    /// Error building HTTP headers
    #[error("Header parse error: {0}")]
    HeaderError(#[from] reqwest::header::InvalidHeaderValue),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),

    /// Console I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A pipeline step failed
    #[error("{stage} request failed: {source}")]
    StageFailed {
        stage: Stage,
        #[source]
        source: Box<DemoError>,
    },
}

impl DemoError {
    /// Tag this error with the pipeline step that produced it
    pub fn during(self, stage: Stage) -> Self {
        DemoError::StageFailed {
            stage,
            source: Box::new(self),
        }
    }

    /// The step that failed, if the error went through a pipeline
    pub fn stage(&self) -> Option<Stage> {
        match self {
            DemoError::StageFailed { stage, .. } => Some(*stage),
            _ => None,
        }
    }

    /// The error underneath any stage tag
    pub fn root(&self) -> &DemoError {
        match self {
            DemoError::StageFailed { source, .. } => source.root(),
            other => other,
        }
    }
}

pub type Result<T> = std::result::Result<T, DemoError>;
