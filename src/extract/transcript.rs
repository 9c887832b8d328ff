use async_trait::async_trait;

use crate::error::Result;

/// A captioned stretch of a video, times in seconds.
#[derive(Debug, Clone, PartialEq)]
pub struct TranscriptSegment {
    pub text: String,
    pub start: f64,
    pub duration: f64,
}

impl TranscriptSegment {
    pub fn new(text: impl Into<String>, start: f64, duration: f64) -> Self {
        Self {
            text: text.into(),
            start,
            duration,
        }
    }
}

/// Source of video transcripts.
///
/// Segments must come back in order of occurrence; the extractor joins them
/// as-is.
#[async_trait]
pub trait TranscriptLoader: Send + Sync {
    /// Identifier used in logs
    fn name(&self) -> &'static str;

    async fn load(&self, url: &str) -> Result<Vec<TranscriptSegment>>;
}
