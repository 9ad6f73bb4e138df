// Text normalization: clean word tokens, sentence/line units, phrases.
//
// Everything downstream (feature extraction, signatures) works from what
// these functions produce, so their edge-case behavior is part of the
// signature format.

pub mod segment;
pub mod words;

pub use segment::{split_into_phrases, split_into_sentences, split_on};
pub use words::{clean_word, clean_words, is_space, split_words};
