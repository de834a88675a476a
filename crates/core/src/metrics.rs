//! The text-metrics engine.
//!
//! A pure function of (filtered word list, sentence count, raw text) that
//! produces the fixed metric set: sentiment scores, readability indices, and
//! the word-shape statistics they depend on. The formulas and the syllable
//! heuristic are the scoring scheme's fixed definitions, not tunables.

use regex::Regex;
use serde::Serialize;

use crate::lexicon::Lexicons;

/// Denominator guard so zero-word or zero-sentence texts still produce
/// finite ratios.
pub const EPSILON: f64 = 1e-6;

/// The complete metric set computed for one article.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextMetrics {
    /// Filtered words found in the positive lexicon.
    pub positive_score: usize,
    /// Filtered words found in the negative lexicon.
    pub negative_score: usize,
    /// (positive − negative) / (positive + negative + ε).
    pub polarity_score: f64,
    /// (positive + negative) / (word count + ε).
    pub subjectivity_score: f64,
    /// Word count / (sentence count + ε).
    pub avg_sentence_length: f64,
    /// Complex word count / (word count + ε).
    pub percentage_complex_words: f64,
    /// 0.4 × (avg sentence length + 100 × percentage complex words).
    pub fog_index: f64,
    /// Same value as `avg_sentence_length`, emitted under its own column.
    pub avg_words_per_sentence: f64,
    /// Filtered words with more than two syllables.
    pub complex_word_count: usize,
    /// Number of filtered words.
    pub word_count: usize,
    /// Mean syllables per filtered word (0 when there are no words).
    pub syllable_per_word: f64,
    /// Whole-word pronoun matches in the raw text, less standalone `US`.
    pub personal_pronouns: usize,
    /// Mean character length of filtered words (0 when there are no words).
    pub avg_word_length: f64,
}

/// Counts syllables with the fixed heuristic.
///
/// Lowercase the word; strip a trailing `es`/`ed` when longer than two
/// characters; count each maximal vowel run as one syllable; take one back
/// off for a trailing `e` unless the word ends in `le` or `ue`; clamp to a
/// minimum of one.
pub fn count_syllables(word: &str) -> usize {
    let mut word = word.to_lowercase();
    if word.chars().count() > 2 && (word.ends_with("es") || word.ends_with("ed")) {
        word.truncate(word.len() - 2);
    }

    let mut count = 0usize;
    let mut prev_vowel = false;
    for ch in word.chars() {
        if matches!(ch, 'a' | 'e' | 'i' | 'o' | 'u') {
            if !prev_vowel {
                count += 1;
            }
            prev_vowel = true;
        } else {
            prev_vowel = false;
        }
    }

    if word.ends_with('e') && !word.ends_with("le") && !word.ends_with("ue") {
        count = count.saturating_sub(1);
    }

    count.max(1)
}

/// A word is complex iff it has more than two syllables.
pub fn is_complex(word: &str) -> bool {
    count_syllables(word) > 2
}

/// Counts personal pronouns in the raw, unfiltered text.
///
/// Case-insensitive whole-word matches of {I, we, my, ours, us}, minus the
/// standalone uppercase token `US`, which is taken to be the country. The
/// subtraction is a heuristic: it undercounts when "US" is the pronoun in
/// unusual casing or when lowercase "us" means the country. That behavior is
/// part of the scoring scheme and is kept as-is.
pub fn personal_pronouns(text: &str) -> usize {
    let pronoun_regex = Regex::new(r"(?i)\b(i|we|my|ours|us)\b").unwrap();
    let us_country_regex = Regex::new(r"\bUS\b").unwrap();

    let pronouns = pronoun_regex.find_iter(text).count();
    let us_as_country = us_country_regex.find_iter(text).count();

    // Every standalone "US" is also a pronoun-regex hit, so this cannot
    // underflow.
    pronouns.saturating_sub(us_as_country)
}

/// Computes the full metric set for one article.
///
/// `words` is the filtered analytic vocabulary (alphabetic, non-stopword,
/// original casing), `sentence_count` the sentence total for the same text,
/// and `raw_text` the unfiltered body used for the pronoun count.
pub fn compute_metrics(
    words: &[&str], sentence_count: usize, raw_text: &str, lexicons: &Lexicons,
) -> TextMetrics {
    let word_count = words.len();

    let mut positive_score = 0usize;
    let mut negative_score = 0usize;
    for word in words {
        let lower = word.to_lowercase();
        if lexicons.positive.contains(&lower) {
            positive_score += 1;
        }
        if lexicons.negative.contains(&lower) {
            negative_score += 1;
        }
    }

    let sentiment_total = (positive_score + negative_score) as f64;
    let polarity_score = (positive_score as f64 - negative_score as f64) / (sentiment_total + EPSILON);
    let subjectivity_score = sentiment_total / (word_count as f64 + EPSILON);

    let syllable_counts: Vec<usize> = words.iter().map(|w| count_syllables(w)).collect();
    let complex_word_count = syllable_counts.iter().filter(|&&n| n > 2).count();
    let percentage_complex_words = complex_word_count as f64 / (word_count as f64 + EPSILON);

    let avg_sentence_length = word_count as f64 / (sentence_count as f64 + EPSILON);
    let fog_index = 0.4 * (avg_sentence_length + percentage_complex_words * 100.0);

    let syllable_per_word = if word_count == 0 {
        0.0
    } else {
        syllable_counts.iter().sum::<usize>() as f64 / word_count as f64
    };

    let avg_word_length = if word_count == 0 {
        0.0
    } else {
        words.iter().map(|w| w.chars().count()).sum::<usize>() as f64 / word_count as f64
    };

    TextMetrics {
        positive_score,
        negative_score,
        polarity_score,
        subjectivity_score,
        avg_sentence_length,
        percentage_complex_words,
        fog_index,
        avg_words_per_sentence: avg_sentence_length,
        complex_word_count,
        word_count,
        syllable_per_word,
        personal_pronouns: personal_pronouns(raw_text),
        avg_word_length,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::Lexicon;
    use rstest::rstest;

    fn lexicons(positive: &[&str], negative: &[&str]) -> Lexicons {
        Lexicons {
            stopwords: Lexicon::default(),
            positive: positive.iter().map(|w| w.to_string()).collect(),
            negative: negative.iter().map(|w| w.to_string()).collect(),
        }
    }

    #[rstest]
    #[case("rocket", 2)] // vowel runs "o", "e"
    #[case("care", 1)] // "a", "e" minus trailing-e, clamped path not needed
    #[case("apple", 2)] // trailing "le" keeps its run
    #[case("blue", 1)] // "ue" is one run and exempt from the decrement
    #[case("aged", 1)] // "ed" stripped first
    #[case("wishes", 1)] // "es" stripped first
    #[case("be", 1)] // too short to strip, clamped to 1
    #[case("rhythm", 1)] // no vowels at all, clamped to 1
    #[case("wonderful", 3)]
    #[case("amazing", 3)]
    #[case("US", 1)]
    fn test_count_syllables(#[case] word: &str, #[case] expected: usize) {
        assert_eq!(count_syllables(word), expected);
    }

    #[test]
    fn test_count_syllables_deterministic_and_positive() {
        for word in ["", "a", "strengths", "Encyclopedia", "ed"] {
            let first = count_syllables(word);
            let second = count_syllables(word);
            assert_eq!(first, second);
            assert!(first >= 1);
        }
    }

    #[test]
    fn test_is_complex_matches_syllable_threshold() {
        for word in ["rocket", "care", "wonderful", "excellent", "sun", "terrible"] {
            assert_eq!(is_complex(word), count_syllables(word) > 2, "{word}");
        }
    }

    #[test]
    fn test_personal_pronouns_us_country_exclusion() {
        let text = "I think we should go. The US market grew.";
        assert_eq!(personal_pronouns(text), 2);
    }

    #[test]
    fn test_personal_pronouns_case_insensitive() {
        assert_eq!(personal_pronouns("My dog and i saw WE the musical"), 3);
        assert_eq!(personal_pronouns("Give it to us, it is ours"), 2);
    }

    #[test]
    fn test_personal_pronouns_ignores_substrings() {
        // "bus", "mystery", "iris" must not match
        assert_eq!(personal_pronouns("The bus mystery iris"), 0);
    }

    #[test]
    fn test_compute_metrics_end_to_end_numbers() {
        let lexicons = lexicons(&["wonderful", "amazing", "excellent"], &["terrible"]);
        let words = vec![
            "wonderful",
            "amazing",
            "excellent",
            "terrible",
            "cat",
            "dog",
            "sun",
            "map",
            "pen",
            "cup",
        ];

        let m = compute_metrics(&words, 2, "Plain text.", &lexicons);

        assert_eq!(m.positive_score, 3);
        assert_eq!(m.negative_score, 1);
        assert_eq!(m.word_count, 10);
        assert_eq!(m.complex_word_count, 4);
        assert!((m.polarity_score - 0.49999988).abs() < 1e-6);
        assert!((m.subjectivity_score - 0.4).abs() < 1e-6);
        assert!((m.percentage_complex_words - 0.4).abs() < 1e-6);
        assert!((m.avg_sentence_length - 5.0).abs() < 1e-5);
        assert!((m.fog_index - 18.0).abs() < 1e-4);
        assert_eq!(m.avg_words_per_sentence, m.avg_sentence_length);
        assert!((m.syllable_per_word - 1.8).abs() < 1e-9);
        assert!((m.avg_word_length - 5.1).abs() < 1e-9);
    }

    #[test]
    fn test_compute_metrics_empty_text_is_finite() {
        let lexicons = lexicons(&[], &[]);
        let m = compute_metrics(&[], 0, "", &lexicons);

        for value in [
            m.polarity_score,
            m.subjectivity_score,
            m.percentage_complex_words,
            m.avg_sentence_length,
            m.fog_index,
            m.syllable_per_word,
            m.avg_word_length,
        ] {
            assert!(value.is_finite());
        }
        assert_eq!(m.word_count, 0);
        assert_eq!(m.syllable_per_word, 0.0);
        assert_eq!(m.avg_word_length, 0.0);
    }

    #[test]
    fn test_compute_metrics_does_not_depend_on_casing_for_sentiment() {
        let lexicons = lexicons(&["great"], &[]);
        let words = vec!["Great", "GREAT", "great"];
        let m = compute_metrics(&words, 1, "", &lexicons);
        assert_eq!(m.positive_score, 3);
    }
}
