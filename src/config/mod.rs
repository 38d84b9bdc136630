mod parser;

use std::fmt;
use std::time::Duration;

use url::Url;

pub use parser::{load_chat_config, load_dotenv};

/// Bearer token for the completion endpoint.
///
/// Read once at startup and never mutated. `Debug` is redacted so the token
/// cannot leak through logs.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(token: impl Into<String>) -> Self {
        Credential(token.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***)")
    }
}

/// Everything the request sender needs, resolved once at startup
#[derive(Debug, Clone)]
pub struct ChatConfig {
    /// Token sent as `Authorization: Bearer <token>`
    pub credential: Credential,
    /// Model identifier (e.g. "gpt-4")
    pub model: String,
    /// Chat completions endpoint
    pub api_url: Url,
    /// Bound on the whole request, connect included
    pub timeout: Duration,
    /// Optional `OpenAI-Organization` header value
    pub organization: Option<String>,
}
