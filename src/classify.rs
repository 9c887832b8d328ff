//! Decides whether a URL points at a video or an ordinary web page.

use url::Url;

use crate::error::{AppError, Result, CHECK_INPUT_MESSAGE};

/// Host fragments that mark a video-hosting URL.
pub const VIDEO_HOST_MARKERS: &[&str] = &["youtube.com", "youtu.be"];

const WATCH_URL_PREFIX: &str = "https://www.youtube.com/watch?v=";

/// A URL tagged with the kind of content behind it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    WebPage(String),
    VideoTranscript(String),
}

impl Target {
    pub fn url(&self) -> &str {
        match self {
            Target::WebPage(url) | Target::VideoTranscript(url) => url,
        }
    }

    /// Short label used in logs and API responses.
    pub fn kind(&self) -> &'static str {
        match self {
            Target::WebPage(_) => "web",
            Target::VideoTranscript(_) => "video",
        }
    }
}

/// Accepts absolute `http`/`https` URLs that name a host.
pub fn validate_url(raw: &str) -> Result<Url> {
    let invalid = || AppError::ValidationError(CHECK_INPUT_MESSAGE.to_string());

    let parsed = Url::parse(raw.trim()).map_err(|_| invalid())?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(invalid());
    }
    match parsed.host_str() {
        Some(host) if !host.is_empty() => Ok(parsed),
        _ => Err(invalid()),
    }
}

pub fn is_video_url(raw: &str) -> bool {
    let haystack = match Url::parse(raw) {
        Ok(parsed) => parsed.host_str().unwrap_or_default().to_ascii_lowercase(),
        Err(_) => raw.to_ascii_lowercase(),
    };
    VIDEO_HOST_MARKERS
        .iter()
        .any(|marker| haystack.contains(marker))
}

/// Rewrites a video URL to its watch link when it carries a `v` parameter,
/// otherwise hands it back untouched. Never fails.
pub fn canonicalize_video_url(raw: &str) -> String {
    match video_id_param(raw) {
        Some(id) => format!("{}{}", WATCH_URL_PREFIX, id),
        None => raw.to_string(),
    }
}

pub fn classify(raw: &str) -> Target {
    if is_video_url(raw) {
        Target::VideoTranscript(canonicalize_video_url(raw))
    } else {
        Target::WebPage(raw.to_string())
    }
}

fn video_id_param(raw: &str) -> Option<String> {
    let (_, rest) = raw.split_once('?')?;
    let query = rest.split('#').next().unwrap_or_default();

    url::form_urlencoded::parse(query.as_bytes())
        .find(|(key, value)| key == "v" && !value.is_empty())
        .map(|(_, value)| value.into_owned())
}
