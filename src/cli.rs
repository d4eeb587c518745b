//! CLI argument parsing and notification input resolution.
use clap::Parser;
use std::env;

use crate::{config::NotifyConfig, result::Result};

/// CLI arguments for assembling a build notification.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[arg(long, default_value = "")]
    /// Telegram bot API token. Falls back to BOT_TOKEN env var.
    pub token: String,

    #[arg(long, default_value = "")]
    /// Commit message text. Falls back to COMMIT_MESSAGE env var.
    pub commit_message: String,

    #[arg(long, default_value = "")]
    /// Web UI link to the commit. Falls back to COMMIT_URL env var.
    pub commit_url: String,

    #[arg(long, default_value = "")]
    /// Full commit hash. Falls back to COMMIT_ID env var.
    pub commit_id: String,

    #[arg(long, default_value_t = false)]
    /// Enable debug logging.
    pub debug: bool,
}

impl Args {
    /// Resolve notification inputs from CLI arguments with environment
    /// variable fallbacks. Fails fast on any missing required input.
    pub fn get_config(&self) -> Result<NotifyConfig> {
        let token = resolve_input(&self.token, "BOT_TOKEN");
        let commit_message =
            resolve_input(&self.commit_message, "COMMIT_MESSAGE");
        let commit_url = resolve_input(&self.commit_url, "COMMIT_URL");
        let commit_id = resolve_input(&self.commit_id, "COMMIT_ID");

        let config =
            NotifyConfig::new(token, commit_message, commit_url, commit_id)?;

        Ok(config)
    }
}

/// Prefer the CLI value, fall back to the named environment variable.
fn resolve_input(arg_value: &str, env_key: &str) -> String {
    let mut value = arg_value.to_string();

    if value.is_empty()
        && let Ok(env_value) = env::var(env_key)
    {
        value = env_value;
    }

    value
}
