//! YouTube video identifier extraction and thumbnail resolution.
//!
//! Input is treated as untrusted free text: a full URL, a scheme-less
//! fragment such as `watch?v=...`, or a plain description of a video.
//! Every function here is total and never fails.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// YouTube video identifiers are exactly this many characters.
pub const VIDEO_ID_LEN: usize = 11;

/// Thumbnail host template. `hqdefault` exists for every public video,
/// including shorts and old uploads where `maxresdefault` is missing.
const THUMBNAIL_BASE: &str = "https://img.youtube.com/vi";

/// Recognized shapes, tried from the right-most marker in the input:
/// - `youtu.be/ID`
/// - `.../v/ID`
/// - `.../u/<letter>/ID`
/// - `.../embed/ID`
/// - `.../watch?v=ID` (with or without scheme)
/// - `.../shorts/ID`
///
/// The candidate runs until the first `#`, `&` or `?`.
static VIDEO_ID_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^.*(?:youtu.be/|v/|/u/[A-Za-z0-9_]/|embed/|watch\??v?=?|shorts/)(?P<id>[^#&?]*).*",
    )
    .expect("video id pattern is valid")
});

/// A single http(s) link: lowercase scheme, no spaces or double quotes.
static WEB_URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^(http|https)://[^ "]+$"#).expect("web url pattern is valid"));

/// Extract the 11-character video identifier from arbitrary input.
///
/// Returns `None` when no recognized URL shape is present or when the
/// captured candidate is not exactly 11 characters long.
pub fn extract_youtube_id(input: &str) -> Option<String> {
    if input.is_empty() {
        return None;
    }

    let caps = VIDEO_ID_RE.captures(input)?;
    let candidate = caps.name("id")?.as_str();

    (candidate.chars().count() == VIDEO_ID_LEN).then(|| candidate.to_string())
}

/// Resolve the `hqdefault` thumbnail URL for the video referenced by `input`.
pub fn youtube_thumbnail_url(input: &str) -> Option<String> {
    extract_youtube_id(input).map(|id| format!("{THUMBNAIL_BASE}/{id}/hqdefault.jpg"))
}

/// What a live preview should show for the current input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "thumbnail_url", rename_all = "snake_case")]
pub enum PreviewState {
    /// A video identifier resolved; show its thumbnail.
    Thumbnail(String),
    /// The input is a web link but no video could be identified.
    /// The audit can still be attempted on the raw text.
    Unavailable,
    /// Free text (or nothing) was entered; no preview is shown.
    Hidden,
}

impl PreviewState {
    /// Classify raw input for preview purposes.
    pub fn classify(input: &str) -> Self {
        if let Some(thumbnail) = youtube_thumbnail_url(input) {
            return Self::Thumbnail(thumbnail);
        }

        if is_web_url(input) {
            Self::Unavailable
        } else {
            Self::Hidden
        }
    }

    pub fn thumbnail_url(&self) -> Option<&str> {
        match self {
            Self::Thumbnail(url) => Some(url),
            _ => None,
        }
    }
}

/// Purely syntactic; the link is never parsed or resolved.
fn is_web_url(input: &str) -> bool {
    WEB_URL_RE.is_match(input.trim())
}
