pub mod api;
pub mod classify;
pub mod config;
pub mod error;
pub mod extract;
pub mod llm;
pub mod options;
pub mod summarizer;

use std::sync::Arc;
use config::Config;
use summarizer::Summarizer;

/// Application state shared across handlers, read-only once built.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub summarizer: Arc<Summarizer>,
}

impl AppState {
    pub fn from_config(config: Config) -> error::Result<Self> {
        let summarizer = Summarizer::from_config(&config)?;
        Ok(AppState {
            config: Arc::new(config),
            summarizer: Arc::new(summarizer),
        })
    }
}
