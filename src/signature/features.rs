// Signature: the fixed set of five stylometric features for one text.
//
// The JSON shape (feature name -> float) is what the on-disk cache holds,
// so the serde names below must stay in sync with `Feature::key`.

use serde::{Deserialize, Serialize};

use super::stats::TextStats;

/// One of the five stylometric features.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Feature {
    AverageWordLength,
    DifferentToTotal,
    ExactlyOnceToTotal,
    AverageSentenceLength,
    AverageSentenceComplexity,
}

impl Feature {
    /// All features, in signature order.
    pub const ALL: [Feature; 5] = [
        Feature::AverageWordLength,
        Feature::DifferentToTotal,
        Feature::ExactlyOnceToTotal,
        Feature::AverageSentenceLength,
        Feature::AverageSentenceComplexity,
    ];

    /// The stable string key used in the cache file.
    pub fn key(self) -> &'static str {
        match self {
            Feature::AverageWordLength => "average_word_length",
            Feature::DifferentToTotal => "different_to_total",
            Feature::ExactlyOnceToTotal => "exactly_once_to_total",
            Feature::AverageSentenceLength => "average_sentence_length",
            Feature::AverageSentenceComplexity => "average_sentence_complexity",
        }
    }

    /// Short column header for terminal tables.
    pub fn short_label(self) -> &'static str {
        match self {
            Feature::AverageWordLength => "WordLen",
            Feature::DifferentToTotal => "Diff",
            Feature::ExactlyOnceToTotal => "Once",
            Feature::AverageSentenceLength => "SentLen",
            Feature::AverageSentenceComplexity => "Cplx",
        }
    }
}

impl std::fmt::Display for Feature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// A text's stylometric signature. Every field is non-negative.
///
/// Missing or extra keys make deserialization fail, which the store treats
/// as a corrupt cache.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Signature {
    /// Mean character count of the clean words
    pub average_word_length: f64,
    /// Type-token ratio: distinct words / total words
    pub different_to_total: f64,
    /// Hapax legomena ratio: words used exactly once / total words
    pub exactly_once_to_total: f64,
    /// Mean whitespace-separated word count per sentence/line
    pub average_sentence_length: f64,
    /// Mean number of `,;:`-separated phrases per sentence/line
    pub average_sentence_complexity: f64,
}

impl Signature {
    /// Extract the signature of a raw text.
    pub fn from_text(text: &str) -> Self {
        TextStats::new(text).signature()
    }

    /// Look up a single feature value.
    pub fn get(&self, feature: Feature) -> f64 {
        match feature {
            Feature::AverageWordLength => self.average_word_length,
            Feature::DifferentToTotal => self.different_to_total,
            Feature::ExactlyOnceToTotal => self.exactly_once_to_total,
            Feature::AverageSentenceLength => self.average_sentence_length,
            Feature::AverageSentenceComplexity => self.average_sentence_complexity,
        }
    }

    /// Iterate `(feature, value)` pairs in signature order.
    pub fn iter(&self) -> impl Iterator<Item = (Feature, f64)> + '_ {
        Feature::ALL.into_iter().map(|f| (f, self.get(f)))
    }
}
