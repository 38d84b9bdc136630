//! Main entry point for the application.
//!
//! This module initializes logging, loads environment variables and starts an
//! interactive chat session against an OpenAI-compatible completion endpoint.
//!
//! The credential is read from `OPENAI_API_KEY`, either from the process
//! environment or from a `.env` file in the working directory.

mod cli;
mod config;
mod constants;
mod core;
mod errors;
mod llm;
mod utils;

use clap::Parser;
use std::process::ExitCode;
use tracing::error;

/// Main entry point that initializes and runs the application.
///
/// # Initialization steps:
/// 1. Parse CLI arguments
/// 2. Initialize logging system
/// 3. Load environment variables
/// 4. Run the chat session until the operator exits
#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = cli::Cli::parse();
    utils::init_logging(&cli.logging_level, cli.log_file);

    config::load_dotenv();

    let stdin = std::io::stdin();
    let result = core::start_chat(
        &cli,
        |key| std::env::var(key).ok(),
        stdin.lock(),
        std::io::stdout(),
    )
    .await;

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
