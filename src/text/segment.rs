// Sentence and phrase segmentation.
//
// Newlines count as sentence boundaries alongside `.`, `!` and `?`. Lyrics
// and verse use line breaks as their structural unit; without this a file
// with no terminal punctuation is one giant sentence and every length-based
// feature degenerates.

use super::words::is_space;

/// Terminal punctuation that ends a sentence.
pub const SENTENCE_DELIMITERS: &str = ".!?";

/// Intermediate punctuation that separates phrases within a sentence.
pub const PHRASE_DELIMITERS: &str = ",;:";

/// Split `text` at any character in `delimiters`, trim whitespace from each
/// part and drop the parts that are empty.
pub fn split_on<'a>(text: &'a str, delimiters: &str) -> Vec<&'a str> {
    text.split(|c: char| delimiters.contains(c))
        .map(|part| part.trim_matches(is_space))
        .filter(|part| !part.is_empty())
        .collect()
}

/// Split text into sentence-like units, treating each newline as a period.
pub fn split_into_sentences(text: &str) -> Vec<String> {
    let normalized = text.replace('\n', ".");
    split_on(&normalized, SENTENCE_DELIMITERS)
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Split a single sentence into phrases on `,`, `;` and `:`.
pub fn split_into_phrases(sentence: &str) -> Vec<&str> {
    split_on(sentence, PHRASE_DELIMITERS)
}
