//! Command execution for herald.
//!
//! Each command follows the same pattern: resolve and validate inputs,
//! run the pure formatting pipeline, and write the result to stdout so the
//! invoking CI pipeline can consume it.

/// Build-notification assembly.
///
/// Implements the default command which escapes the commit message for
/// MarkdownV2, builds the bounded caption, serializes the media group, and
/// prints the final `sendMediaGroup` request URL. The CI pipeline is
/// responsible for issuing the actual HTTP request with the four artifact
/// files attached as multipart parts.
pub mod notify;
