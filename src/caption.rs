//! MarkdownV2-safe caption construction for build notifications.
//!
//! Telegram's MarkdownV2 dialect requires every reserved punctuation
//! character to be backslash-escaped wherever it is not intended as
//! formatting syntax. The caption combines a commit link with the escaped
//! commit message and is bounded by the platform caption limit.

/// Characters that must be escaped in MarkdownV2 text.
///
/// See <https://core.telegram.org/bots/api#markdownv2-style>.
pub const RESERVED_CHARS: &[char] = &[
    '\\', '_', '*', '[', ']', '(', ')', '~', '`', '>', '#', '+', '-', '=',
    '|', '{', '}', '.', '!',
];

/// Maximum caption length accepted by the Telegram Bot API.
pub const CAPTION_LIMIT: usize = 1024;

/// Number of leading commit hash characters shown as the link text.
pub const SHORT_ID_LEN: usize = 7;

/// Escape MarkdownV2 reserved characters in free-form text.
///
/// Performs a single forward scan over the input, emitting a backslash
/// before each reserved character. Backslashes introduced by the scan are
/// never themselves re-escaped.
pub fn escape_markdown_v2(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());

    for c in text.chars() {
        if RESERVED_CHARS.contains(&c) {
            escaped.push('\\');
        }
        escaped.push(c);
    }

    escaped
}

/// Build the notification caption for a commit.
///
/// The caption is a MarkdownV2 link line `[{short_id}]({commit_url})`
/// followed by the escaped commit message on the next line. The commit URL
/// sits inside link syntax and is used verbatim. Truncation to
/// [`CAPTION_LIMIT`] characters is the final step, applied after escaping
/// and combination.
pub fn build_caption(
    commit_id: &str,
    commit_url: &str,
    commit_message: &str,
) -> String {
    let short_id: String = commit_id.chars().take(SHORT_ID_LEN).collect();

    let caption = format!(
        "[{}]({})\n{}",
        short_id,
        commit_url,
        escape_markdown_v2(commit_message)
    );

    caption.chars().take(CAPTION_LIMIT).collect()
}
