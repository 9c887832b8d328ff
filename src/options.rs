//! Summarization options offered by the form.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Models the form offers, first entry is the default.
pub const SUPPORTED_MODELS: &[&str] = &["gemma2-9b-it"];

/// Languages a summary can be written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    English,
    Hindi,
    Bengali,
    Spanish,
}

impl Language {
    pub const ALL: [Language; 4] = [
        Language::English,
        Language::Hindi,
        Language::Bengali,
        Language::Spanish,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Hindi => "Hindi",
            Language::Bengali => "Bengali",
            Language::Spanish => "Spanish",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Approximate summary length in words. Only 100, 300 and 500 are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct WordLimit(u32);

impl WordLimit {
    pub const ALLOWED: [u32; 3] = [100, 300, 500];

    pub fn get(&self) -> u32 {
        self.0
    }
}

impl Default for WordLimit {
    fn default() -> Self {
        WordLimit(300)
    }
}

impl TryFrom<u32> for WordLimit {
    type Error = String;

    fn try_from(value: u32) -> std::result::Result<Self, Self::Error> {
        if Self::ALLOWED.contains(&value) {
            Ok(WordLimit(value))
        } else {
            Err(format!(
                "word limit must be one of {:?}, got {}",
                Self::ALLOWED,
                value
            ))
        }
    }
}

impl From<WordLimit> for u32 {
    fn from(limit: WordLimit) -> Self {
        limit.0
    }
}

impl fmt::Display for WordLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryOptions {
    pub language: Language,
    pub word_limit: WordLimit,
    pub model: String,
}

impl SummaryOptions {
    /// Fills in defaults and rejects models outside [`SUPPORTED_MODELS`].
    pub fn new(
        language: Option<Language>,
        word_limit: Option<WordLimit>,
        model: Option<&str>,
    ) -> Result<Self> {
        let model = match model.map(str::trim).filter(|m| !m.is_empty()) {
            Some(name) if SUPPORTED_MODELS.contains(&name) => name.to_string(),
            Some(name) => {
                return Err(AppError::ValidationError(format!(
                    "Unsupported model: {}",
                    name
                )));
            }
            None => SUPPORTED_MODELS[0].to_string(),
        };

        Ok(SummaryOptions {
            language: language.unwrap_or_default(),
            word_limit: word_limit.unwrap_or_default(),
            model,
        })
    }
}

impl Default for SummaryOptions {
    fn default() -> Self {
        SummaryOptions {
            language: Language::default(),
            word_limit: WordLimit::default(),
            model: SUPPORTED_MODELS[0].to_string(),
        }
    }
}
