use super::{ChatConfig, Credential};
use crate::cli::Cli;
use crate::constants::{API_KEY_ENV, ORGANIZATION_ENV};
use crate::errors::ConfigError;

use std::path::PathBuf;
use tracing::{debug, info, warn};
use url::Url;

/// Loads a `.env` file from the working directory (or a parent) into the
/// process environment. A missing file is reported, never fatal.
pub fn load_dotenv() -> Option<PathBuf> {
    report_dotenv(dotenvy::dotenv())
}

fn report_dotenv(result: dotenvy::Result<PathBuf>) -> Option<PathBuf> {
    match result {
        Ok(path) => {
            debug!("Loaded environment from {}", path.display());
            Some(path)
        }
        Err(e) => {
            warn!("Failed to load .env file: {}", e);
            None
        }
    }
}

/// Resolves the chat configuration from CLI flags and an environment lookup
///
/// # Arguments
///
/// * `cli` - Parsed command line flags
/// * `lookup` - Reads a variable by name; `|k| std::env::var(k).ok()` in production
///
/// # Errors
///
/// Returns an error if:
/// * The credential variable is missing or blank
/// * The API URL or the timeout cannot be parsed
pub fn load_chat_config<F>(cli: &Cli, lookup: F) -> Result<ChatConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let token = lookup(API_KEY_ENV)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or(ConfigError::MissingCredential(API_KEY_ENV))?;

    let api_url = Url::parse(&cli.api_url).map_err(|source| ConfigError::InvalidUrl {
        url: cli.api_url.clone(),
        source,
    })?;

    let timeout =
        humantime::parse_duration(&cli.timeout).map_err(|source| ConfigError::InvalidTimeout {
            value: cli.timeout.clone(),
            source,
        })?;

    let organization = lookup(ORGANIZATION_ENV)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty());

    info!("Found {}", API_KEY_ENV);
    debug!(
        "Chat config: model={}, url={}, timeout={:?}, organization={}",
        cli.model,
        api_url,
        timeout,
        organization.is_some()
    );

    Ok(ChatConfig {
        credential: Credential::new(token),
        model: cli.model.clone(),
        api_url,
        timeout,
        organization,
    })
}
