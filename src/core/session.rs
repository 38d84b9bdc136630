use crate::cli::Cli;
use crate::config::load_chat_config;
use crate::constants::API_KEY_ENV;
use crate::core::PromptLoop;
use crate::errors::AppError;
use crate::llm::OpenAiProvider;
use std::io::{BufRead, Write};
use tracing::info;

/// Resolves configuration, builds the provider and runs the prompt loop.
///
/// Configuration is resolved before anything is written to `output`, so a
/// missing credential never starts the loop and leaves the console untouched.
///
/// # Arguments
/// * `cli` - Parsed command line flags
/// * `lookup` - Environment lookup used for the credential and organization
/// * `input` - Operator console input
/// * `output` - Operator console output
pub async fn start_chat<F, R, W>(
    cli: &Cli,
    lookup: F,
    input: R,
    mut output: W,
) -> Result<(), AppError>
where
    F: Fn(&str) -> Option<String>,
    R: BufRead,
    W: Write,
{
    let config = load_chat_config(cli, lookup)?;
    let provider = OpenAiProvider::new(config)?;
    writeln!(output, "Success! Found {}.", API_KEY_ENV)?;

    info!("Starting chat session with model {}", cli.model);
    PromptLoop::new(&provider, input, output).run().await?;
    info!("Chat session ended");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{FAREWELL, INPUT_PROMPT, NO_RESPONSE_NOTICE};
    use crate::errors::ConfigError;
    use axum::routing::post;
    use axum::{Json, Router};
    use clap::Parser;
    use serde_json::json;
    use std::io::Cursor;
    use std::time::Duration;

    async fn spawn_endpoint(app: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}/v1/chat/completions", addr)
    }

    fn with_key(key: &str) -> Option<String> {
        (key == "OPENAI_API_KEY").then(|| "sk-test".to_string())
    }

    #[tokio::test]
    async fn test_missing_credential_never_enters_loop() {
        let cli = Cli::try_parse_from(["gptchat"]).unwrap();
        let mut output = Vec::new();

        let err = start_chat(&cli, |_| None, Cursor::new("hello\nexit\n"), &mut output)
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            AppError::Config(ConfigError::MissingCredential("OPENAI_API_KEY"))
        ));
        assert!(output.is_empty());
    }

    #[tokio::test]
    async fn test_session_against_local_endpoint() {
        let app = Router::new().route(
            "/v1/chat/completions",
            post(|| async { Json(json!({"choices": [{"message": {"content": "hello"}}]})) }),
        );
        let api_url = spawn_endpoint(app).await;
        let cli = Cli::try_parse_from(["gptchat", "--api-url", api_url.as_str()]).unwrap();
        let mut output = Vec::new();

        start_chat(&cli, with_key, Cursor::new("  \nhi\nEXIT\n"), &mut output)
            .await
            .unwrap();

        let out = String::from_utf8(output).unwrap();
        assert!(out.starts_with("Success! Found OPENAI_API_KEY."));
        assert!(out.contains("Please enter a prompt."));
        assert!(out.contains("hello"));
        assert!(out.contains("Goodbye!"));
    }

    #[tokio::test]
    async fn test_timed_out_prompt_reprompts() {
        let app = Router::new().route(
            "/v1/chat/completions",
            post(|| async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                Json(json!({"choices": [{"message": {"content": "too late"}}]}))
            }),
        );
        let api_url = spawn_endpoint(app).await;
        let cli = Cli::try_parse_from([
            "gptchat",
            "--api-url",
            api_url.as_str(),
            "--timeout",
            "200ms",
        ])
        .unwrap();
        let mut output = Vec::new();

        start_chat(&cli, with_key, Cursor::new("first\nsecond\nexit\n"), &mut output)
            .await
            .unwrap();

        let out = String::from_utf8(output).unwrap();
        assert_eq!(out.matches(NO_RESPONSE_NOTICE).count(), 2);
        assert_eq!(out.matches(INPUT_PROMPT).count(), 3);
        assert!(out.trim_end().ends_with(FAREWELL));
        assert!(!out.contains("too late"));
    }
}
