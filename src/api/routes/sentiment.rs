//! Sentiment Routes
//!
//! - POST /api/v1/sentiment - Classify a piece of text
//! - GET /api/v1/lexicon - List the active keywords

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::dto::{LexiconResponse, SentimentRequest, SentimentResponse};
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::ApiState;
use crate::sentiment::text_len;

/// Longest text accepted for classification, in UTF-16 code units
pub const MAX_TEXT_LEN: usize = 100_000;

/// POST /api/v1/sentiment
///
/// Stateless: the session's journal is not touched.
pub async fn classify_text(
    State(state): State<Arc<ApiState>>,
    Json(req): Json<SentimentRequest>,
) -> ApiResult<Json<SentimentResponse>> {
    let characters = check_length(&req.text)?;

    let result = state.classifier.classify(&req.text);
    let keywords = state.classifier.score(&req.text);

    tracing::debug!(characters, %result, "Classified request text");

    Ok(Json(SentimentResponse {
        result,
        keywords,
        characters,
    }))
}

/// GET /api/v1/lexicon
pub async fn get_lexicon(State(state): State<Arc<ApiState>>) -> Json<LexiconResponse> {
    let lexicon = state.classifier.lexicon();
    Json(LexiconResponse {
        positive: lexicon.positive_words().into_iter().map(String::from).collect(),
        negative: lexicon.negative_words().into_iter().map(String::from).collect(),
    })
}

/// Reject oversized text, returning its length in UTF-16 code units
pub(crate) fn check_length(text: &str) -> ApiResult<usize> {
    let characters = text_len(text);
    if characters > MAX_TEXT_LEN {
        return Err(ApiError::Validation(format!(
            "text is {} UTF-16 units, maximum is {}",
            characters, MAX_TEXT_LEN
        )));
    }
    Ok(characters)
}
