use axum::{
    routing::{get, post},
    Router,
    extract::{Json, State, rejection::JsonRejection},
    response::{IntoResponse, Response},
};
use tower_http::cors::{CorsLayer, Any};
use tracing::{error, info};

use crate::error::AppError;
use crate::api::models::{OptionsResponse, SummarizeRequest, SummarizeResponse};
use crate::api::{page, response};
use crate::options::{Language, SummaryOptions, WordLimit, SUPPORTED_MODELS};
use crate::AppState;

pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(page::index))
        .route("/api/options", get(options_handler))
        .route("/api/summarize", post(summarize_handler))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(app_state)
}

async fn options_handler(State(state): State<AppState>) -> impl IntoResponse {
    response::success(OptionsResponse {
        languages: Language::ALL.to_vec(),
        word_limits: WordLimit::ALLOWED.to_vec(),
        default_word_limit: WordLimit::default().get(),
        models: SUPPORTED_MODELS.iter().map(|m| m.to_string()).collect(),
        api_key_loaded: state.config.api_key_loaded(),
        transcripts_available: state.summarizer.has_transcripts(),
    })
}

async fn summarize_handler(
    State(state): State<AppState>,
    payload: Result<Json<SummarizeRequest>, JsonRejection>,
) -> Response {
    let req = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            error!(error = %rejection.body_text(), "rejected summarize request body");
            return AppError::ValidationError(rejection.body_text()).into_response();
        }
    };

    info!(url = %req.url, "processing summarize request");
    let start_time = std::time::Instant::now();

    let result = process_summarize_request(&state, &req).await;
    let elapsed = start_time.elapsed();

    match result {
        Ok(response_data) => {
            info!(url = %req.url, ?elapsed, "summary ready");
            response::success(response_data).into_response()
        }
        Err(err) => {
            error!(url = %req.url, ?elapsed, error = %err, "summarize request failed");
            err.into_response()
        }
    }
}

async fn process_summarize_request(
    state: &AppState,
    req: &SummarizeRequest,
) -> crate::error::Result<SummarizeResponse> {
    let options = SummaryOptions::new(req.language, req.word_limit, req.model.as_deref())?;

    let summary = state
        .summarizer
        .summarize(&req.url, &options, req.api_key.as_deref())
        .await?;

    Ok(SummarizeResponse {
        url: req.url.clone(),
        source_url: summary.target.url().to_string(),
        source: summary.target.kind().to_string(),
        summary: summary.text,
        word_count: summary.source_word_count,
        summarized_at: summary.summarized_at,
    })
}
