use axum::response::Html;

const INDEX_HTML: &str = include_str!("../../static/index.html");

/// The summarizer form. Options and key status are fetched from `/api/options`.
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}
