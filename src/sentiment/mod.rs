//! Journal Sentiment Analysis
//!
//! Keyword-counting heuristic behind the journal's sentiment doughnut:
//!
//! - **types**: `Sentiment`, `SentimentResult`, `KeywordScore`
//! - **lexicon**: immutable positive/negative word sets
//! - **classifier**: `SentimentClassifier`, the text → distribution mapping
//!
//! # Example
//!
//! ```rust
//! use peacepal::sentiment::{self, Sentiment};
//!
//! let result = sentiment::classify("I feel sad and anxious and worried about tomorrow");
//! assert_eq!(result.dominant, Sentiment::Negative);
//! assert_eq!((result.positive, result.neutral, result.negative), (20, 50, 30));
//! ```

pub mod classifier;
pub mod lexicon;
pub mod types;

pub use classifier::{is_separator, text_len, SentimentClassifier, MIN_TEXT_LEN};
pub use lexicon::Lexicon;
pub use types::{KeywordScore, Sentiment, SentimentResult};

use std::sync::LazyLock;

static BUILTIN_CLASSIFIER: LazyLock<SentimentClassifier> =
    LazyLock::new(SentimentClassifier::builtin);

/// Classify text with the built-in lexicon
pub fn classify(text: &str) -> SentimentResult {
    BUILTIN_CLASSIFIER.classify(text)
}
