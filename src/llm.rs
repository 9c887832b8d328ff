use serde::Serialize;
use reqwest::Client;
use tracing::{debug, warn};

use crate::error::{Result, AppError};
use crate::options::SummaryOptions;

const CHAT_COMPLETIONS_PATH: &str = "/openai/v1/chat/completions";

#[derive(Serialize)]
struct Message {
    role: String,
    content: String,
}

#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<Message>,
}

pub fn build_prompt(content: &str, options: &SummaryOptions) -> String {
    format!(
        "You are a helpful assistant. Please summarize the content in about {} words.\n\
         Use {} language and correct script.\n\
         \n\
         Content:\n\
         {}\n",
        options.word_limit, options.language, content
    )
}

/// Client for Groq's OpenAI-compatible chat completion endpoint.
#[derive(Clone)]
pub struct GroqClient {
    client: Client,
    base_url: String,
}

impl GroqClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            // No timeout: a completion may take as long as the model needs.
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Sends one user message and returns the first choice verbatim.
    pub async fn complete(&self, api_key: &str, model: &str, prompt: &str) -> Result<String> {
        let body = ChatRequest {
            model: model.into(),
            messages: vec![
                Message {
                    role: "user".into(),
                    content: prompt.into(),
                }
            ],
        };

        let res = self
            .client
            .post(format!("{}{}", self.base_url, CHAT_COMPLETIONS_PATH))
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::LlmError(e.to_string()))?;

        let status = res.status();
        let json: serde_json::Value = if status.is_success() {
            res.json()
                .await
                .map_err(|e| AppError::LlmError(format!("Invalid response from LLM: {}", e)))?
        } else {
            let detail = match res.text().await {
                Ok(body) => error_detail(&body),
                Err(e) => format!("failed to read error body: {}", e),
            };
            warn!(%status, "LLM API returned an error");
            return Err(AppError::LlmError(format!("{} - {}", status, detail)));
        };

        let reply = json["choices"][0]["message"]["content"]
            .as_str()
            .ok_or_else(|| AppError::LlmError("Invalid response format from LLM".to_string()))?
            .to_string();
        debug!(chars = reply.len(), "LLM reply received");

        Ok(reply)
    }
}

/// The API's `error.message` when the body carries one, else the raw body.
fn error_detail(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v["error"]["message"].as_str().map(str::to_string))
        .unwrap_or_else(|| body.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{Language, WordLimit};

    #[test]
    fn test_prompt_template() {
        let options = SummaryOptions {
            language: Language::Spanish,
            word_limit: WordLimit::try_from(100).unwrap(),
            model: "gemma2-9b-it".into(),
        };
        assert_eq!(
            build_prompt("Some text.", &options),
            "You are a helpful assistant. Please summarize the content in about 100 words.\n\
             Use Spanish language and correct script.\n\nContent:\nSome text.\n"
        );
    }

    #[test]
    fn test_prompt_keeps_content_verbatim() {
        let content = "  line one\n\nline {two}  ";
        let prompt = build_prompt(content, &SummaryOptions::default());
        assert!(prompt.contains("about 300 words"));
        assert!(prompt.contains("Use English language"));
        assert!(prompt.ends_with("Content:\n  line one\n\nline {two}  \n"));
    }

    #[test]
    fn test_error_detail() {
        assert_eq!(
            error_detail(r#"{"error":{"message":"Rate limit reached","type":"tokens"}}"#),
            "Rate limit reached"
        );
        assert_eq!(error_detail("upstream unavailable"), "upstream unavailable");
        assert_eq!(error_detail(r#"{"detail":"x"}"#), r#"{"detail":"x"}"#);
    }

    #[test]
    fn test_base_url_trailing_slash() {
        let client = GroqClient::new("http://localhost:1234/");
        assert_eq!(client.base_url, "http://localhost:1234");
    }
}
