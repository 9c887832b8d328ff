use reqwest::Client;
use scraper::{Html, Selector};
use once_cell::sync::Lazy;
use tracing::debug;

use crate::error::Result;

// Paragraph-level elements only; scripts and styles never match.
static PARAGRAPH_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("p").expect("Failed to parse paragraph selector")
});

pub async fn fetch_html(client: &Client, url: &str) -> Result<String> {
    let response = client.get(url).send().await?.error_for_status()?;
    let html = response.text().await?;
    debug!(url, bytes = html.len(), "fetched page");
    Ok(html)
}

/// Text of every `<p>` in document order, blank paragraphs skipped.
pub fn extract_paragraphs(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);

    document
        .select(&PARAGRAPH_SELECTOR)
        .map(|element| element.text().collect::<String>())
        .filter(|text| !text.trim().is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paragraphs_in_document_order() {
        let html = "<html><body><p>A.</p><div><p>B.</p></div><p>C.</p></body></html>";
        assert_eq!(extract_paragraphs(html), vec!["A.", "B.", "C."]);
    }

    #[test]
    fn test_nested_markup_is_flattened() {
        let html = "<p>This is a <strong>bold</strong> <a href='#'>link</a>.</p>";
        assert_eq!(extract_paragraphs(html), vec!["This is a bold link."]);
    }

    #[test]
    fn test_ignores_text_outside_paragraphs() {
        let html = r#"<html><head><title>T</title><script>var x = 1;</script></head>
            <body><h1>Heading</h1><p>Body text</p><style>p { color: red }</style></body></html>"#;
        assert_eq!(extract_paragraphs(html), vec!["Body text"]);
    }

    #[test]
    fn test_blank_paragraphs_are_skipped() {
        let html = "<p>One</p><p>   </p><p></p><p>Two</p>";
        assert_eq!(extract_paragraphs(html), vec!["One", "Two"]);
    }

    #[test]
    fn test_no_paragraphs() {
        assert!(extract_paragraphs("<div>nothing here</div>").is_empty());
    }
}
