use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};

use crate::options::{Language, WordLimit};

#[derive(Debug, Deserialize)]
pub struct SummarizeRequest {
    pub url: String,
    #[serde(default)]
    pub language: Option<Language>,
    #[serde(default)]
    pub word_limit: Option<WordLimit>,
    #[serde(default)]
    pub model: Option<String>,
    /// Overrides the server's configured key for this request only.
    #[serde(default)]
    pub api_key: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SummarizeResponse {
    pub url: String,
    /// URL the content was actually read from, canonical for videos.
    pub source_url: String,
    /// `web` or `video`
    pub source: String,
    pub summary: String,
    pub word_count: usize,
    pub summarized_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct OptionsResponse {
    pub languages: Vec<Language>,
    pub word_limits: Vec<u32>,
    pub default_word_limit: u32,
    pub models: Vec<String>,
    pub api_key_loaded: bool,
    pub transcripts_available: bool,
}
