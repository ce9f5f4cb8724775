use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;

const DEFAULT_BASE_URL: &str = "https://api.openai.com";
const DEFAULT_API_KEY_ENV: &str = "OPENAI_API_KEY";
const DEFAULT_MODEL: &str = "text-davinci-003";
const DEFAULT_MAX_TOKENS: u32 = 500;
const DEFAULT_MEAL_TEMPERATURE: f64 = 0.5;

/// Settings shared by both programs
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct DemoConfig {
    /// Scheme and host of the completion API, without a trailing path
    pub base_url: String,
    /// Name of the environment variable holding the bearer token.
    /// The token itself is never read from a config file.
    pub api_key_env: String,
    /// Request timeout in seconds; unset keeps the HTTP client's default
    #[serde(default)]
    pub timeout_secs: Option<u64>,
    /// Movie recommender request parameters
    pub movie: ProgramConfig,
    /// Meal planner request parameters
    pub meal: ProgramConfig,
}

/// Per-program request parameters
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ProgramConfig {
    /// Engine name, interpolated into the endpoint path
    pub model: String,
    /// Maximum tokens to generate
    pub max_tokens: u32,
    /// Sampling temperature (0.0-2.0); omitted from the request when unset
    #[serde(default)]
    pub temperature: Option<f64>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        DemoConfig {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key_env: DEFAULT_API_KEY_ENV.to_string(),
            timeout_secs: None,
            movie: ProgramConfig {
                model: DEFAULT_MODEL.to_string(),
                max_tokens: DEFAULT_MAX_TOKENS,
                temperature: None,
            },
            meal: ProgramConfig {
                model: DEFAULT_MODEL.to_string(),
                max_tokens: DEFAULT_MAX_TOKENS,
                temperature: Some(DEFAULT_MEAL_TEMPERATURE),
            },
        }
    }
}

impl DemoConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with COMPLETION_DEMOS__ prefix
    /// 2. config.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: COMPLETION_DEMOS__MEAL__MAX_TOKENS
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }

    /// Parse configuration from TOML text layered over the defaults
    pub fn from_toml_str(toml: &str) -> Result<Self, ConfigError> {
        with_defaults()?
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()?
            .try_deserialize()
    }
}

fn with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Config::builder()
        .set_default("base_url", DEFAULT_BASE_URL)?
        .set_default("api_key_env", DEFAULT_API_KEY_ENV)?
        .set_default("movie.model", DEFAULT_MODEL)?
        .set_default("movie.max_tokens", i64::from(DEFAULT_MAX_TOKENS))?
        .set_default("meal.model", DEFAULT_MODEL)?
        .set_default("meal.max_tokens", i64::from(DEFAULT_MAX_TOKENS))?
        .set_default("meal.temperature", DEFAULT_MEAL_TEMPERATURE)
}

/// Load configuration from file and environment variables
///
/// See [`DemoConfig::load`] for the source priority.
pub fn load_config() -> Result<DemoConfig, ConfigError> {
    let settings = with_defaults()?
        // Optional config file (can be missing)
        .add_source(File::with_name("config").required(false))
        // Use double underscore for nested: COMPLETION_DEMOS__MOVIE__MODEL
        .add_source(
            Environment::with_prefix("COMPLETION_DEMOS")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}
