use reqwest::StatusCode;

/// Startup failures. Any of these ends the run before the prompt loop starts.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} not found in environment")]
    MissingCredential(&'static str),
    #[error("Invalid API URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("Invalid timeout '{value}': {source}")]
    InvalidTimeout {
        value: String,
        #[source]
        source: humantime::DurationError,
    },
    #[error("Invalid header value for {0}")]
    InvalidHeader(&'static str),
    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),
}

/// Failure of a single request/response exchange.
///
/// The prompt loop treats every variant the same way (no response), the
/// variants only exist so the cause can be logged and asserted on.
#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Non-OK status: {status}, body: {body}")]
    Status { status: StatusCode, body: String },
    #[error("Could not decode response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("No content in completion response")]
    EmptyCompletion,
}

impl ChatError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, ChatError::Transport(e) if e.is_timeout())
    }
}

/// Top-level error returned by the application entry point
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("Could not read your prompt: {0}")]
    Io(#[from] std::io::Error),
}
