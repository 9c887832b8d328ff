//! Transcript loader backed by YouTube's caption tracks.
//!
//! The watch page embeds the player response, which lists the caption
//! tracks available for the video. Each track points at a timed-text XML
//! document with one `<text start dur>` node per caption.

use async_trait::async_trait;
use once_cell::sync::Lazy;
use reqwest::header::ACCEPT_LANGUAGE;
use reqwest::Client;
use scraper::{Html, Selector};
use serde::Deserialize;
use tracing::{debug, info};
use url::Url;

use crate::error::{AppError, Result};
use crate::extract::transcript::{TranscriptLoader, TranscriptSegment};

const CAPTION_TRACKS_MARKER: &str = "\"captionTracks\":";

/// Path prefixes that carry the video id as the next segment.
const ID_PATH_PREFIXES: &[&str] = &["embed", "shorts", "live", "v"];

static TEXT_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("text").expect("Failed to parse timed-text selector")
});

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CaptionTrack {
    base_url: String,
    language_code: String,
    #[serde(default)]
    kind: Option<String>,
}

impl CaptionTrack {
    fn is_english(&self) -> bool {
        self.language_code == "en" || self.language_code.starts_with("en-")
    }

    fn is_generated(&self) -> bool {
        self.kind.as_deref() == Some("asr")
    }
}

pub struct YouTubeTranscriptLoader {
    client: Client,
    base_url: String,
}

impl YouTubeTranscriptLoader {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn watch_url(&self, video_id: &str) -> Result<Url> {
        let mut url = Url::parse(&format!("{}/watch", self.base_url))
            .map_err(|e| AppError::ConfigError(format!("Invalid YouTube base URL: {}", e)))?;
        url.query_pairs_mut().append_pair("v", video_id);
        Ok(url)
    }

    async fn get_text(&self, url: &str) -> Result<String> {
        let response = self
            .client
            .get(url)
            .header(ACCEPT_LANGUAGE, "en-US,en;q=0.9")
            .send()
            .await?
            .error_for_status()?;
        Ok(response.text().await?)
    }
}

#[async_trait]
impl TranscriptLoader for YouTubeTranscriptLoader {
    fn name(&self) -> &'static str {
        "youtube"
    }

    async fn load(&self, url: &str) -> Result<Vec<TranscriptSegment>> {
        let video_id = video_id_from_url(url)
            .ok_or_else(|| AppError::FetchError(format!("Could not find a video id in {}", url)))?;
        let no_transcript =
            || AppError::FetchError(format!("No transcript available for video {}", video_id));

        let watch_url = self.watch_url(&video_id)?;
        let page = self.get_text(watch_url.as_str()).await?;

        let tracks = caption_tracks(&page).ok_or_else(no_transcript)?;
        let track = pick_track(&tracks).ok_or_else(no_transcript)?;
        debug!(
            video_id = %video_id,
            language = %track.language_code,
            generated = track.is_generated(),
            "selected caption track"
        );

        let xml = self.get_text(&track.base_url).await?;
        let segments = parse_timed_text(&xml);
        info!(video_id = %video_id, segments = segments.len(), "loaded transcript");

        Ok(segments)
    }
}

/// Finds the video id in watch, short-link, embed, shorts and live URLs.
pub fn video_id_from_url(raw: &str) -> Option<String> {
    let parsed = Url::parse(raw.trim()).ok()?;

    if let Some((_, id)) = parsed.query_pairs().find(|(k, v)| k == "v" && !v.is_empty()) {
        return Some(id.into_owned());
    }

    let host = parsed.host_str().unwrap_or_default().to_ascii_lowercase();
    let mut segments = parsed.path_segments()?.filter(|s| !s.is_empty());

    if host.contains("youtu.be") {
        return segments.next().map(str::to_string);
    }

    match (segments.next(), segments.next()) {
        (Some(prefix), Some(id)) if ID_PATH_PREFIXES.contains(&prefix) => Some(id.to_string()),
        _ => None,
    }
}

fn caption_tracks(page: &str) -> Option<Vec<CaptionTrack>> {
    let start = page.find(CAPTION_TRACKS_MARKER)? + CAPTION_TRACKS_MARKER.len();
    // The array is followed by the rest of the player response; read one value.
    serde_json::Deserializer::from_str(&page[start..])
        .into_iter::<Vec<CaptionTrack>>()
        .next()?
        .ok()
}

fn pick_track(tracks: &[CaptionTrack]) -> Option<&CaptionTrack> {
    tracks
        .iter()
        .find(|t| t.is_english() && !t.is_generated())
        .or_else(|| tracks.iter().find(|t| t.is_english()))
        .or_else(|| tracks.first())
}

fn parse_timed_text(xml: &str) -> Vec<TranscriptSegment> {
    let document = Html::parse_document(xml);

    document
        .select(&TEXT_SELECTOR)
        .filter_map(|node| {
            let text = strip_markup(&node.text().collect::<String>());
            if text.is_empty() {
                return None;
            }
            let seconds = |name: &str| {
                node.value()
                    .attr(name)
                    .and_then(|v| v.parse::<f64>().ok())
                    .unwrap_or(0.0)
            };
            Some(TranscriptSegment::new(text, seconds("start"), seconds("dur")))
        })
        .collect()
}

// Caption text arrives escaped a second time, e.g. `&amp;#39;` or `&lt;i&gt;`.
fn strip_markup(text: &str) -> String {
    let fragment = Html::parse_fragment(text);
    let plain: String = fragment.root_element().text().collect();
    plain.split_whitespace().collect::<Vec<_>>().join(" ")
}
