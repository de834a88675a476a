//! Sentence and word tokenization.
//!
//! Sentences end at a run of `.`, `!`, or `?` followed by whitespace or the
//! end of the text. Word tokens come from a simple word-boundary regex; the
//! analytic vocabulary then keeps only purely alphabetic tokens whose
//! lowercase form is not a stopword. Sentence count and filtered word count
//! are the denominators for every downstream ratio.

use regex::Regex;

use crate::lexicon::Lexicon;

/// Splits text into sentences, dropping empty segments.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let boundary = Regex::new(r"[.!?]+(?:\s+|$)").unwrap();
    boundary
        .split(text)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Number of sentences in `text`.
pub fn sentence_count(text: &str) -> usize {
    split_sentences(text).len()
}

/// Splits text into raw word tokens.
///
/// Tokens may include digits, apostrophes, and hyphens; the analytic filter
/// below discards anything not purely alphabetic.
pub fn tokenize(text: &str) -> Vec<&str> {
    let word_regex = Regex::new(r"\b[\w'-]+\b").unwrap();
    word_regex.find_iter(text).map(|m| m.as_str()).collect()
}

/// Filters raw tokens down to the analytic vocabulary.
///
/// A token is kept iff it is purely alphabetic and its lowercase form is not
/// a stopword. Original casing is preserved for the survivors.
pub fn filter_words<'a>(tokens: &[&'a str], stopwords: &Lexicon) -> Vec<&'a str> {
    tokens
        .iter()
        .filter(|token| token.chars().all(char::is_alphabetic))
        .filter(|token| !stopwords.contains(&token.to_lowercase()))
        .copied()
        .collect()
}

/// Tokenizes `text` and applies the analytic filter in one step.
pub fn analytic_words<'a>(text: &'a str, stopwords: &Lexicon) -> Vec<&'a str> {
    filter_words(&tokenize(text), stopwords)
}
