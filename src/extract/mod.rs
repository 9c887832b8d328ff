//! Content extraction
//!
//! Turns a classified [`Target`] into one block of plain text: paragraph
//! text for web pages, caption text for videos. Blocks are joined with a
//! blank line in the order they were found.

pub mod transcript;
pub mod web;
#[cfg(feature = "youtube")]
pub mod youtube;

use std::sync::Arc;

use reqwest::Client;
use tracing::{info, warn};

use crate::classify::Target;
use crate::config::Config;
use crate::error::{AppError, Result};

pub use transcript::{TranscriptLoader, TranscriptSegment};
#[cfg(feature = "youtube")]
pub use youtube::YouTubeTranscriptLoader;

pub const BLOCK_SEPARATOR: &str = "\n\n";

/// HTTP client shared by page fetches and transcript lookups.
pub fn build_http_client(config: &Config) -> Result<Client> {
    Client::builder()
        .user_agent(config.user_agent.as_str())
        .timeout(config.fetch_timeout)
        .build()
        .map_err(|e| AppError::ConfigError(format!("Failed to build HTTP client: {}", e)))
}

pub fn join_blocks<I, S>(blocks: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    blocks
        .into_iter()
        .map(|block| block.as_ref().to_string())
        .collect::<Vec<_>>()
        .join(BLOCK_SEPARATOR)
}

pub struct Extractor {
    client: Client,
    transcripts: Option<Arc<dyn TranscriptLoader>>,
}

impl Extractor {
    pub fn new(client: Client, transcripts: Option<Arc<dyn TranscriptLoader>>) -> Self {
        Self {
            client,
            transcripts,
        }
    }

    /// Extractor with the transcript loader this build was compiled with.
    pub fn from_config(config: &Config) -> Result<Self> {
        let client = build_http_client(config)?;
        let transcripts = default_transcript_loader(config, &client);
        if transcripts.is_none() {
            warn!("built without a transcript loader, video URLs will be rejected");
        }
        Ok(Self::new(client, transcripts))
    }

    pub fn has_transcripts(&self) -> bool {
        self.transcripts.is_some()
    }

    pub async fn extract(&self, target: &Target) -> Result<String> {
        match target {
            Target::WebPage(url) => {
                let html = web::fetch_html(&self.client, url).await?;
                let paragraphs = web::extract_paragraphs(&html);
                info!(url = %url, paragraphs = paragraphs.len(), "extracted page text");
                Ok(join_blocks(paragraphs))
            }
            Target::VideoTranscript(url) => {
                let loader = self.transcripts.as_ref().ok_or_else(|| {
                    AppError::ConfigError("transcript loader is not available".to_string())
                })?;
                let segments = loader.load(url).await?;
                info!(
                    url = %url,
                    loader = loader.name(),
                    segments = segments.len(),
                    "extracted transcript"
                );
                Ok(join_blocks(segments.iter().map(|s| s.text.as_str())))
            }
        }
    }
}

#[cfg(feature = "youtube")]
fn default_transcript_loader(config: &Config, client: &Client) -> Option<Arc<dyn TranscriptLoader>> {
    Some(Arc::new(YouTubeTranscriptLoader::new(
        client.clone(),
        config.youtube_base_url.as_str(),
    )))
}

#[cfg(not(feature = "youtube"))]
fn default_transcript_loader(_config: &Config, _client: &Client) -> Option<Arc<dyn TranscriptLoader>> {
    None
}
