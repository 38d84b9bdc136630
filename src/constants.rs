/// Chat completions endpoint used when no `--api-url` is given
pub const DEFAULT_API_URL: &str = "https://api.openai.com/v1/chat/completions";

/// Model identifier sent with every request unless overridden
pub const DEFAULT_MODEL: &str = "gpt-4";

/// Per-request timeout, in humantime notation
pub const DEFAULT_TIMEOUT: &str = "10s";

/// Environment variable holding the bearer token
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Optional environment variable holding the organization id
pub const ORGANIZATION_ENV: &str = "OPENAI_ORGANIZATION";

/// Header carrying the organization id
pub const ORGANIZATION_HEADER: &str = "openai-organization";

/// Role attached to every outgoing message
pub const USER_ROLE: &str = "user";

/// Typing this (in any casing) ends the session
pub const EXIT_SENTINEL: &str = "exit";

pub const INPUT_PROMPT: &str = "Enter your prompt (or 'exit' to quit): ";
pub const EMPTY_INPUT_NOTICE: &str = "Please enter a prompt.";
pub const RESPONSE_LABEL: &str = "ChatGPT:";
pub const NO_RESPONSE_NOTICE: &str = "No response received or an error occurred.";
pub const FAREWELL: &str = "Goodbye!";
pub const WELCOME: &str = "Welcome to gptchat!";
