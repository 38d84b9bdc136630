use crate::constants::*;
use crate::errors::ChatError;
use crate::llm::CompletionProvider;
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{BufRead, Write};
use std::time::Duration;
use tracing::{debug, error, warn};

/// What the loop should do with one line of operator input
#[derive(Debug, PartialEq, Eq)]
pub enum PromptAction<'a> {
    Exit,
    Empty,
    Send(&'a str),
}

impl<'a> PromptAction<'a> {
    /// Classifies a raw input line. Trimming happens here, once.
    pub fn parse(line: &'a str) -> Self {
        let prompt = line.trim();
        if prompt.eq_ignore_ascii_case(EXIT_SENTINEL) {
            PromptAction::Exit
        } else if prompt.is_empty() {
            PromptAction::Empty
        } else {
            PromptAction::Send(prompt)
        }
    }
}

/// Interactive read-send-print loop.
///
/// Generic over its console so tests can drive it with in-memory buffers.
pub struct PromptLoop<'p, R, W> {
    provider: &'p dyn CompletionProvider,
    input: R,
    output: W,
}

impl<'p, R: BufRead, W: Write> PromptLoop<'p, R, W> {
    pub fn new(provider: &'p dyn CompletionProvider, input: R, output: W) -> Self {
        Self {
            provider,
            input,
            output,
        }
    }

    /// Runs until the operator types "exit" or input is exhausted
    ///
    /// # Errors
    ///
    /// Only console I/O failures end the loop with an error. Request failures
    /// are reported and the loop continues.
    pub async fn run(&mut self) -> std::io::Result<()> {
        writeln!(self.output, "{}", WELCOME.bold().cyan())?;

        let mut line = String::new();
        loop {
            write!(self.output, "\n{}", INPUT_PROMPT.yellow())?;
            self.output.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                debug!("End of input");
                writeln!(self.output, "\n{}", FAREWELL)?;
                return Ok(());
            }

            match PromptAction::parse(&line) {
                PromptAction::Exit => {
                    writeln!(self.output, "\n{}", FAREWELL)?;
                    return Ok(());
                }
                PromptAction::Empty => {
                    writeln!(self.output, "{}", EMPTY_INPUT_NOTICE)?;
                }
                PromptAction::Send(prompt) => {
                    let reply = self.ask(prompt).await;
                    match reply {
                        Some(text) => {
                            writeln!(self.output, "\n{} {}", RESPONSE_LABEL.green().bold(), text)?
                        }
                        None => writeln!(self.output, "\n{}", NO_RESPONSE_NOTICE.red())?,
                    }
                }
            }
        }
    }

    /// Sends one prompt, collapsing every failure into an absent result.
    /// The cause is logged only after the spinner has been cleared.
    async fn ask(&self, prompt: &str) -> Option<String> {
        let spinner = waiting_spinner();
        let result = self.provider.send(prompt).await;
        spinner.finish_and_clear();

        match result {
            Ok(text) => Some(text),
            Err(e) => {
                report_failure(&e);
                None
            }
        }
    }
}

/// Logs why a prompt produced no response
fn report_failure(err: &ChatError) {
    match err {
        timeout if timeout.is_timeout() => {
            error!("Request timed out: {}", timeout);
        }
        ChatError::Transport(e) => {
            error!("Could not send request: {}", e);
        }
        ChatError::Status { status, body } => {
            error!("Non-OK status: {}", status);
            error!("Response Body: {}", body);
        }
        ChatError::Decode(e) => {
            warn!("Could not decode response: {}", e);
        }
        ChatError::EmptyCompletion => {
            warn!("No content in completion response");
        }
    }
}

/// Spinner shown on stderr while a request is in flight; hidden when stderr is not a terminal
fn waiting_spinner() -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner:.cyan} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message("Waiting for response...");
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}
