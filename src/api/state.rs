//! API State
//!
//! Shared state accessible by all API handlers.

use crate::config::{ApiConfig, Config};
use crate::sentiment::SentimentClassifier;
use crate::state::{AppState, Session};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::Mutex;

/// Shared state for all handlers
#[derive(Clone)]
pub struct ApiState {
    /// Stateless classifier for `/sentiment`
    pub classifier: SentimentClassifier,
    /// The single app session driven by `/actions`
    pub session: Arc<Mutex<Session>>,
    /// API configuration
    pub config: Arc<ApiConfig>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
    pub started_at: DateTime<Utc>,
}

impl ApiState {
    pub fn new(classifier: SentimentClassifier, session: Session, config: ApiConfig) -> Self {
        Self {
            classifier,
            session: Arc::new(Mutex::new(session)),
            config: Arc::new(config),
            start_time: Instant::now(),
            started_at: Utc::now(),
        }
    }

    /// Build classifier and session from full configuration
    pub fn from_config(config: &Config) -> Self {
        let reducer = config.reducer();
        let classifier = reducer.classifier().clone();
        let initial = AppState::new(config.session.user_name.clone());

        let session = match config.session.rng_seed {
            Some(seed) => Session::with_seed(initial, reducer, seed),
            None => Session::new(initial, reducer),
        };

        Self::new(classifier, session, config.api.clone())
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
