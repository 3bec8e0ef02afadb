//! Data Transfer Objects
//!
//! Request and response types for the API endpoints.
//! These types are serialized/deserialized to/from JSON.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::sentiment::{KeywordScore, SentimentResult};
use crate::state::{AppState, Effect};

// ============================================
// SENTIMENT DTOs
// ============================================

/// Text to classify
#[derive(Debug, Deserialize)]
pub struct SentimentRequest {
    pub text: String,
}

/// Classification result with the raw keyword counts behind it
#[derive(Debug, Serialize, Deserialize)]
pub struct SentimentResponse {
    #[serde(flatten)]
    pub result: SentimentResult,
    /// Lexicon hits
    pub keywords: KeywordScore,
    /// Length of the input in UTF-16 code units
    pub characters: usize,
}

/// Active keyword lists
#[derive(Debug, Serialize, Deserialize)]
pub struct LexiconResponse {
    pub positive: Vec<String>,
    pub negative: Vec<String>,
}

// ============================================
// SESSION DTOs
// ============================================

/// State after an action, with the effects to perform
#[derive(Debug, Serialize, Deserialize)]
pub struct ActionResponse {
    pub state: AppState,
    pub effects: Vec<Effect>,
    pub applied_at: DateTime<Utc>,
}

// ============================================
// HEALTH DTOs
// ============================================

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// "healthy"
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
    pub started_at: DateTime<Utc>,
    /// Total positive + negative keywords loaded
    pub lexicon_words: usize,
}
