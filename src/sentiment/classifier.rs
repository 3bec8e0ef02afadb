//! Keyword sentiment classifier
//!
//! Counts whole-token lexicon hits and turns them into a
//! positive/neutral/negative percentage split.
//!
//! ```text
//! text ─┬─ < 10 units ──────────────► {50, 40, 10, neutral}
//!       └─ lowercase → split → count ─┬─ no hits ──► {40, 50, 10, neutral}
//!                                     └─ hits ─────► weighted split
//! ```

use super::lexicon::Lexicon;
use super::types::{KeywordScore, Sentiment, SentimentResult};
use std::sync::Arc;

/// Texts shorter than this (see [`text_len`]) carry no usable signal
pub const MIN_TEXT_LEN: usize = 10;

/// Share of the distribution the positive ratio is scaled to
const POSITIVE_WEIGHT: f64 = 80.0;
/// Share of the distribution the negative ratio is scaled to
const NEGATIVE_WEIGHT: f64 = 30.0;
const POSITIVE_FLOOR: f64 = 20.0;
const NEGATIVE_FLOOR: f64 = 5.0;

/// Dominance thresholds, compared against unrounded percentages
const POSITIVE_DOMINANT_ABOVE: f64 = 50.0;
const NEGATIVE_DOMINANT_ABOVE: f64 = 25.0;

/// Classifies free text against an immutable lexicon
///
/// Cheap to clone; the lexicon is shared.
#[derive(Debug, Clone)]
pub struct SentimentClassifier {
    lexicon: Arc<Lexicon>,
}

impl SentimentClassifier {
    pub fn new(lexicon: Lexicon) -> Self {
        Self {
            lexicon: Arc::new(lexicon),
        }
    }

    /// Classifier over the built-in word lists
    pub fn builtin() -> Self {
        Self::new(Lexicon::builtin().clone())
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Count positive and negative lexicon hits
    ///
    /// Matching is on whole tokens after lowercasing, split on
    /// [`is_separator`]. Punctuation is not stripped, so `"happy!"` does not
    /// match `"happy"`.
    pub fn score(&self, text: &str) -> KeywordScore {
        let lowered = text.to_lowercase();
        let mut score = KeywordScore::default();

        for token in lowered.split(is_separator).filter(|t| !t.is_empty()) {
            if self.lexicon.contains_positive(token) {
                score.positive += 1;
            }
            if self.lexicon.contains_negative(token) {
                score.negative += 1;
            }
        }

        score
    }

    /// Map text to a percentage distribution and dominant label
    ///
    /// Total over all inputs: empty, whitespace-only and non-ASCII text all
    /// produce a result.
    pub fn classify(&self, text: &str) -> SentimentResult {
        if text_len(text) < MIN_TEXT_LEN {
            return SentimentResult::NOT_ENOUGH_TEXT;
        }

        let score = self.score(text);
        if score.is_empty() {
            return SentimentResult::NO_KEYWORDS;
        }

        let total = score.total() as f64;
        let positive = (score.positive as f64 / total * POSITIVE_WEIGHT).max(POSITIVE_FLOOR);
        let negative = (score.negative as f64 / total * NEGATIVE_WEIGHT).max(NEGATIVE_FLOOR);
        // positive + negative never exceeds 85, so this stays within [15, 80]
        let neutral = 100.0 - positive - negative;

        let dominant = if positive > POSITIVE_DOMINANT_ABOVE {
            Sentiment::Positive
        } else if negative > NEGATIVE_DOMINANT_ABOVE {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        };

        let result = SentimentResult {
            positive: round_percent(positive),
            neutral: round_percent(neutral),
            negative: round_percent(negative),
            dominant,
        };

        tracing::trace!(
            positive_hits = score.positive,
            negative_hits = score.negative,
            %result,
            "Classified text"
        );

        result
    }
}

impl Default for SentimentClassifier {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Length of text in UTF-16 code units
///
/// This is the unit the journal editor reports, so an emoji outside the
/// Basic Multilingual Plane counts as two.
pub fn text_len(text: &str) -> usize {
    text.encode_utf16().count()
}

/// Token separators: the ECMAScript `\s` class
///
/// Differs from [`char::is_whitespace`] in two places: U+FEFF separates
/// tokens, U+0085 does not.
pub fn is_separator(c: char) -> bool {
    matches!(
        c,
        '\u{0009}'..='\u{000D}'
            | '\u{0020}'
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// Round half up and clamp into a percentage
fn round_percent(value: f64) -> u8 {
    (value + 0.5).floor().clamp(0.0, 100.0) as u8
}
