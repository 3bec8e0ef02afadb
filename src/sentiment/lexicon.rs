//! Keyword lexicon
//!
//! Two immutable word sets used by the sentiment heuristic. The built-in
//! lexicon is constructed once per process; extended lexicons are new values
//! built from it, never mutated in place.

use std::collections::HashSet;
use std::sync::LazyLock;

const POSITIVE_WORDS: &[&str] = &[
    "happy",
    "joy",
    "love",
    "great",
    "wonderful",
    "amazing",
    "beautiful",
    "peaceful",
    "grateful",
    "blessed",
    "excited",
    "good",
    "excellent",
    "fantastic",
    "awesome",
    "positive",
    "sunshine",
    "smile",
    "laugh",
    "nature",
    "fresh",
    "refreshing",
];

const NEGATIVE_WORDS: &[&str] = &[
    "sad",
    "angry",
    "hate",
    "terrible",
    "awful",
    "horrible",
    "depressed",
    "anxious",
    "worried",
    "stress",
    "pain",
    "hurt",
    "bad",
    "worst",
    "cry",
    "fear",
    "lonely",
    "tired",
];

static BUILTIN: LazyLock<Lexicon> =
    LazyLock::new(|| Lexicon::new(POSITIVE_WORDS.iter().copied(), NEGATIVE_WORDS.iter().copied()));

/// Positive and negative keyword sets
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexicon {
    positive: HashSet<String>,
    negative: HashSet<String>,
}

impl Lexicon {
    /// Build a lexicon from word lists
    ///
    /// Entries are trimmed and lowercased; blank entries are dropped.
    pub fn new<P, N>(positive: P, negative: N) -> Self
    where
        P: IntoIterator,
        P::Item: AsRef<str>,
        N: IntoIterator,
        N::Item: AsRef<str>,
    {
        Self {
            positive: normalize(positive),
            negative: normalize(negative),
        }
    }

    /// The process-wide built-in lexicon
    pub fn builtin() -> &'static Lexicon {
        &BUILTIN
    }

    /// Built-in words plus extra entries
    pub fn extended<P, N>(extra_positive: P, extra_negative: N) -> Self
    where
        P: IntoIterator,
        P::Item: AsRef<str>,
        N: IntoIterator,
        N::Item: AsRef<str>,
    {
        let mut lexicon = Self::builtin().clone();
        lexicon.positive.extend(normalize(extra_positive));
        lexicon.negative.extend(normalize(extra_negative));
        lexicon
    }

    /// Exact match against the positive set (token must already be lowercase)
    pub fn contains_positive(&self, token: &str) -> bool {
        self.positive.contains(token)
    }

    /// Exact match against the negative set (token must already be lowercase)
    pub fn contains_negative(&self, token: &str) -> bool {
        self.negative.contains(token)
    }

    /// Number of (positive, negative) entries
    pub fn len(&self) -> (usize, usize) {
        (self.positive.len(), self.negative.len())
    }

    pub fn is_empty(&self) -> bool {
        self.positive.is_empty() && self.negative.is_empty()
    }

    /// Positive words, sorted
    pub fn positive_words(&self) -> Vec<&str> {
        sorted(&self.positive)
    }

    /// Negative words, sorted
    pub fn negative_words(&self) -> Vec<&str> {
        sorted(&self.negative)
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::builtin().clone()
    }
}

fn normalize<I>(words: I) -> HashSet<String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    words
        .into_iter()
        .map(|w| w.as_ref().trim().to_lowercase())
        .filter(|w| !w.is_empty())
        .collect()
}

fn sorted(set: &HashSet<String>) -> Vec<&str> {
    let mut words: Vec<&str> = set.iter().map(String::as_str).collect();
    words.sort_unstable();
    words
}
