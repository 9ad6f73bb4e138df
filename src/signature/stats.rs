// TextStats: tokenizes a text once and computes the five features from the
// shared token and sentence lists.
//
// Every feature is total. Texts with no words or no sentences produce 0.0
// instead of dividing by zero.

use std::collections::HashMap;

use crate::text::{clean_words, split_into_phrases, split_into_sentences, split_words};

use super::features::Signature;

/// Pre-tokenized view of a text.
#[derive(Debug, Clone)]
pub struct TextStats {
    /// Sentence/line units (newlines and `.!?` are boundaries)
    pub sentences: Vec<String>,
    /// Lowercased words with surrounding punctuation removed
    pub clean_words: Vec<String>,
}

impl TextStats {
    pub fn new(text: &str) -> Self {
        Self {
            sentences: split_into_sentences(text),
            clean_words: clean_words(text),
        }
    }

    /// Mean character count per clean word.
    pub fn average_word_length(&self) -> f64 {
        if self.clean_words.is_empty() {
            return 0.0;
        }
        let total: usize = self.clean_words.iter().map(|w| w.chars().count()).sum();
        total as f64 / self.clean_words.len() as f64
    }

    /// Type-token ratio.
    pub fn different_to_total(&self) -> f64 {
        if self.clean_words.is_empty() {
            return 0.0;
        }
        let distinct = self.word_counts().len();
        distinct as f64 / self.clean_words.len() as f64
    }

    /// Share of words that occur exactly once (hapax legomena).
    pub fn exactly_once_to_total(&self) -> f64 {
        if self.clean_words.is_empty() {
            return 0.0;
        }
        let once = self.word_counts().values().filter(|&&c| c == 1).count();
        once as f64 / self.clean_words.len() as f64
    }

    /// Mean word count per sentence.
    ///
    /// Counts raw whitespace-separated words of each sentence, not clean
    /// words, so a stray "-" still counts. Cached signatures depend on this.
    pub fn average_sentence_length(&self) -> f64 {
        if self.sentences.is_empty() {
            return 0.0;
        }
        let total: usize = self
            .sentences
            .iter()
            .map(|s| split_words(s).count())
            .sum();
        total as f64 / self.sentences.len() as f64
    }

    /// Mean phrase count per sentence.
    pub fn average_sentence_complexity(&self) -> f64 {
        if self.sentences.is_empty() {
            return 0.0;
        }
        let total: usize = self
            .sentences
            .iter()
            .map(|s| split_into_phrases(s).len())
            .sum();
        total as f64 / self.sentences.len() as f64
    }

    pub fn signature(&self) -> Signature {
        Signature {
            average_word_length: self.average_word_length(),
            different_to_total: self.different_to_total(),
            exactly_once_to_total: self.exactly_once_to_total(),
            average_sentence_length: self.average_sentence_length(),
            average_sentence_complexity: self.average_sentence_complexity(),
        }
    }

    fn word_counts(&self) -> HashMap<&str, usize> {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for word in &self.clean_words {
            *counts.entry(word.as_str()).or_insert(0) += 1;
        }
        counts
    }
}
