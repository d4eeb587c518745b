//! Media group payload assembly for the Telegram `sendMediaGroup` endpoint.
//!
//! The notification always sends the same four build artifacts as one media
//! group. The CI pipeline uploads the files as multipart parts named after
//! the `attach://` tokens below; this module only produces the request URL
//! carrying the serialized media description.
use serde::Serialize;
use url::Url;

use crate::error::Result;

/// Telegram Bot API base.
pub const API_BASE_URL: &str = "https://api.telegram.org";

/// Destination channel. Fixed contract with the notification chat.
pub const CHAT_ID: &str = "-1002038922788";

/// Multipart part names for the four build artifacts, in send order.
/// The captioned attachment is always last.
pub const ATTACHMENT_NAMES: [&str; 4] =
    ["Release", "Debug", "ReleaseSymbol", "DebugSymbol"];

/// One entry of a `sendMediaGroup` media array.
///
/// Field order matters for reproducible serialization: `type`, `media`,
/// then `caption` and `parse_mode` on the captioned entry only.
#[derive(Debug, Clone, Serialize)]
pub struct MediaAttachment {
    #[serde(rename = "type")]
    pub media_type: &'static str,
    pub media: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<&'static str>,
}

impl MediaAttachment {
    /// Plain document attachment referencing a multipart part by name.
    fn document(name: &str) -> Self {
        Self {
            media_type: "document",
            media: format!("attach://{}", name),
            caption: None,
            parse_mode: None,
        }
    }

    /// Document attachment carrying the MarkdownV2 caption.
    fn captioned_document(name: &str, caption: String) -> Self {
        Self {
            media_type: "document",
            media: format!("attach://{}", name),
            caption: Some(caption),
            parse_mode: Some("MarkdownV2"),
        }
    }
}

/// Build the fixed four-entry media group with the caption on the last
/// attachment.
pub fn media_group(caption: String) -> Vec<MediaAttachment> {
    vec![
        MediaAttachment::document(ATTACHMENT_NAMES[0]),
        MediaAttachment::document(ATTACHMENT_NAMES[1]),
        MediaAttachment::document(ATTACHMENT_NAMES[2]),
        MediaAttachment::captioned_document(ATTACHMENT_NAMES[3], caption),
    ]
}

/// Serialize the media group to compact JSON.
pub fn media_json(caption: String) -> Result<String> {
    let json = serde_json::to_string(&media_group(caption))?;
    Ok(json)
}

/// Assemble the full `sendMediaGroup` request URL.
///
/// The token goes verbatim into the URL path. The media JSON is attached
/// as a query value and percent-encoded by the `Url` query serializer.
pub fn request_url(token: &str, media_json: &str) -> Result<Url> {
    let base = format!("{}/bot{}/sendMediaGroup", API_BASE_URL, token);

    let mut url = Url::parse(&base)?;

    url.query_pairs_mut()
        .append_pair("chat_id", CHAT_ID)
        .append_pair("media", media_json);

    Ok(url)
}
