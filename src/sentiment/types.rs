//! Sentiment result types
//!
//! - `Sentiment`: the three-way dominant label
//! - `SentimentResult`: percentage distribution returned by the classifier
//! - `KeywordScore`: raw lexicon hit counts for a piece of text

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Dominant sentiment label
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    /// Get all labels for iteration
    pub fn all() -> &'static [Sentiment] {
        &[Sentiment::Positive, Sentiment::Neutral, Sentiment::Negative]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Neutral => "neutral",
            Sentiment::Negative => "negative",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sentiment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "positive" => Ok(Sentiment::Positive),
            "neutral" => Ok(Sentiment::Neutral),
            "negative" => Ok(Sentiment::Negative),
            _ => Err(format!("Unknown sentiment: {}", s)),
        }
    }
}

/// Percentage distribution over positive/neutral/negative plus the dominant label
///
/// Percentages are rounded integers. They are meant to sum to 100, but
/// rounding can leave the total at 99 or 101.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct SentimentResult {
    pub positive: u8,
    pub neutral: u8,
    pub negative: u8,
    pub dominant: Sentiment,
}

impl SentimentResult {
    /// Fixed distribution for text too short to carry signal
    pub const NOT_ENOUGH_TEXT: SentimentResult = SentimentResult {
        positive: 50,
        neutral: 40,
        negative: 10,
        dominant: Sentiment::Neutral,
    };

    /// Fixed distribution for text without any lexicon hit
    pub const NO_KEYWORDS: SentimentResult = SentimentResult {
        positive: 40,
        neutral: 50,
        negative: 10,
        dominant: Sentiment::Neutral,
    };

    pub fn new(positive: u8, neutral: u8, negative: u8, dominant: Sentiment) -> Self {
        Self {
            positive,
            neutral,
            negative,
            dominant,
        }
    }

    /// Sum of the three percentages
    pub fn total(&self) -> u16 {
        self.positive as u16 + self.neutral as u16 + self.negative as u16
    }

    /// Chart dataset order: positive, neutral, negative
    pub fn as_array(&self) -> [u8; 3] {
        [self.positive, self.neutral, self.negative]
    }
}

impl fmt::Display for SentimentResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (positive={}%, neutral={}%, negative={}%)",
            self.dominant, self.positive, self.neutral, self.negative
        )
    }
}

/// Raw lexicon hit counts
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct KeywordScore {
    pub positive: usize,
    pub negative: usize,
}

impl KeywordScore {
    pub fn total(&self) -> usize {
        self.positive + self.negative
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentiment_serializes_lowercase() {
        let json = serde_json::to_string(&Sentiment::Negative).unwrap();
        assert_eq!(json, "\"negative\"");

        let result = SentimentResult::NOT_ENOUGH_TEXT;
        let value = serde_json::to_value(result).unwrap();
        assert_eq!(value["dominant"], "neutral");
        assert_eq!(value["positive"], 50);
    }

    #[test]
    fn test_sentiment_from_str() {
        assert_eq!("Positive".parse::<Sentiment>().unwrap(), Sentiment::Positive);
        assert!("meh".parse::<Sentiment>().is_err());
    }

    #[test]
    fn test_fixed_distributions_sum_to_100() {
        assert_eq!(SentimentResult::NOT_ENOUGH_TEXT.total(), 100);
        assert_eq!(SentimentResult::NO_KEYWORDS.total(), 100);
    }

    #[test]
    fn test_display() {
        let result = SentimentResult::new(80, 15, 5, Sentiment::Positive);
        assert_eq!(
            result.to_string(),
            "positive (positive=80%, neutral=15%, negative=5%)"
        );
    }
}
