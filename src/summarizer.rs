//! One summarize action: validate, classify, extract, invoke.

use chrono::{DateTime, Utc};
use tracing::{info, warn};

use crate::classify::{classify, validate_url, Target};
use crate::config::Config;
use crate::error::{AppError, Result};
use crate::extract::Extractor;
use crate::llm::{build_prompt, GroqClient};
use crate::options::SummaryOptions;

/// Result of a successful action.
#[derive(Debug, Clone)]
pub struct Summary {
    pub target: Target,
    pub text: String,
    /// Words in the extracted content sent to the model.
    pub source_word_count: usize,
    pub summarized_at: DateTime<Utc>,
}

pub struct Summarizer {
    extractor: Extractor,
    llm: GroqClient,
    default_api_key: Option<String>,
}

impl Summarizer {
    pub fn new(extractor: Extractor, llm: GroqClient, default_api_key: Option<String>) -> Self {
        Self {
            extractor,
            llm,
            default_api_key,
        }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new(
            Extractor::from_config(config)?,
            GroqClient::new(config.groq_api_url.as_str()),
            config.groq_api_key.clone(),
        ))
    }

    pub fn has_transcripts(&self) -> bool {
        self.extractor.has_transcripts()
    }

    /// A non-blank key from the request wins over the configured default.
    pub fn resolve_api_key<'a>(&'a self, supplied: Option<&'a str>) -> Option<&'a str> {
        supplied
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .or(self.default_api_key.as_deref())
    }

    pub async fn summarize(
        &self,
        url: &str,
        options: &SummaryOptions,
        api_key: Option<&str>,
    ) -> Result<Summary> {
        // Both checks run before any network I/O.
        let api_key = self.resolve_api_key(api_key).ok_or(AppError::MissingApiKey)?;
        validate_url(url)?;

        let target = classify(url.trim());
        info!(kind = target.kind(), url = %target.url(), "classified input");

        let text = self.extractor.extract(&target).await?;
        if text.trim().is_empty() {
            warn!(url = %target.url(), "no readable content");
            return Err(AppError::EmptyContent);
        }
        let source_word_count = text.split_whitespace().count();

        let prompt = build_prompt(&text, options);
        info!(
            model = %options.model,
            prompt_chars = prompt.len(),
            words = source_word_count,
            "calling LLM"
        );
        let summary = self.llm.complete(api_key, &options.model, &prompt).await?;

        Ok(Summary {
            target,
            text: summary,
            source_word_count,
            summarized_at: Utc::now(),
        })
    }
}
