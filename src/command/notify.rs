//! Build notification command implementation.
use log::*;
use secrecy::ExposeSecret;

use crate::{caption, cli, payload, result::Result};

/// Execute notify command to assemble and print the sendMediaGroup URL.
pub fn execute(args: &cli::Args) -> Result<()> {
    let config = args.get_config()?;

    let caption = caption::build_caption(
        &config.commit_id,
        &config.commit_url,
        &config.commit_message,
    );

    debug!(
        "caption for commit {} ({} chars):\n{}",
        config.commit_id,
        caption.chars().count(),
        caption
    );

    let media = payload::media_json(caption)?;

    let url = payload::request_url(config.token.expose_secret(), &media)?;

    info!(
        "assembled sendMediaGroup request for commit {}",
        config.commit_id
    );

    // The URL is the command's one product; it carries the bot token, so
    // it goes to stdout only and never through the logger.
    println!("{}", url);

    Ok(())
}
