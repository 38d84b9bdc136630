use clap::Parser;

use crate::constants::{DEFAULT_API_URL, DEFAULT_MODEL, DEFAULT_TIMEOUT};

/// Interactive chat client for an OpenAI-compatible completion endpoint
#[derive(Parser, Debug, Clone)]
#[command(version, about)]
pub struct Cli {
    /// Model identifier sent with each request
    #[arg(long, default_value_t = String::from(DEFAULT_MODEL))]
    pub model: String,

    /// Chat completions endpoint to POST prompts to
    #[arg(long, default_value_t = String::from(DEFAULT_API_URL))]
    pub api_url: String,

    /// Timeout for a whole request, e.g. "10s" or "1m 30s"
    #[arg(long, default_value_t = String::from(DEFAULT_TIMEOUT))]
    pub timeout: String,

    /// Sets the logging verbosity level for the application
    /// Possible values: "error", "warn", "info", "debug", "trace"
    /// Default: "warn"
    #[arg(long, default_value_t = String::from("warn"))]
    pub logging_level: String,

    /// Also write logs to a daily rotating file in the "logs" directory
    #[arg(long)]
    pub log_file: bool,
}
