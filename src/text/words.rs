// Word tokenization.
//
// A raw token is anything between whitespace. Cleaning strips ASCII
// punctuation from both ends and case-folds. Interior punctuation
// ("don't", "b.i.g") is kept.

/// Whitespace for tokenization: Unicode White_Space plus the ASCII
/// information separators U+001C..=U+001F, which also separate words in
/// the texts cached signatures were computed from.
pub fn is_space(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

/// Raw whitespace-separated tokens, no cleaning.
pub fn split_words(text: &str) -> impl Iterator<Item = &str> {
    text.split(is_space).filter(|w| !w.is_empty())
}

/// Normalize a single raw token: trim ASCII punctuation from both ends,
/// then lowercase.
///
/// Returns an empty string when the token was punctuation only.
pub fn clean_word(word: &str) -> String {
    word.trim_matches(|c: char| c.is_ascii_punctuation())
        .to_lowercase()
}

/// Split text on whitespace and clean every token, dropping the ones that
/// end up empty. Order and duplicates are preserved.
pub fn clean_words(text: &str) -> Vec<String> {
    split_words(text)
        .map(clean_word)
        .filter(|w| !w.is_empty())
        .collect()
}
