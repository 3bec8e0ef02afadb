//! # PeacePal
//!
//! Wellness journal engine - keyword sentiment analysis for journal entries,
//! mood logging and garden interactions, driven through a pure state model.
//!
//! ## Features
//!
//! - **Sentiment analysis**: deterministic keyword classifier over an immutable lexicon
//! - **State model**: actions reduce an [`AppState`] and emit [`Effect`]s for the UI
//! - **REST API**: stateless classification plus an in-memory session over Axum
//!
//! ## Modules
//!
//! - [`sentiment`]: Lexicon and classifier
//! - [`state`]: App state, actions, effects and the reducer
//! - [`content`]: Canned messages, prompts and mood faces
//! - [`config`]: TOML configuration with environment overrides
//! - [`api`]: REST API server with Axum
//!
//! ## Quick Start
//!
//! ```rust
//! use peacepal::sentiment::{classify, Sentiment};
//! use peacepal::state::{Action, AppState, Reducer, Session};
//!
//! let result = classify("What a wonderful and peaceful morning");
//! assert_eq!(result.dominant, Sentiment::Positive);
//!
//! let mut session = Session::with_seed(AppState::default(), Reducer::default(), 7);
//! let effects = session.dispatch(Action::ContinueJourney).unwrap();
//! assert!(!effects.is_empty());
//! assert_eq!(session.state().user.points, 350);
//! ```

pub mod api;
pub mod config;
pub mod content;
pub mod logging;
pub mod sentiment;
pub mod state;

// Re-export top-level types for convenience
pub use sentiment::{
    classify, KeywordScore, Lexicon, Sentiment, SentimentClassifier, SentimentResult,
};

pub use state::{
    Action, AppState, Effect, NotificationLevel, Presenter, Reducer, Rewards, Session,
    StateError, StateResult, Tab, Transition,
};

pub use api::{build_router, serve, ApiError, ApiState};

pub use config::{ApiConfig, Config, ConfigError, LoggingConfig};
