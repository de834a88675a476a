//! Reference word lists: stopwords and sentiment lexicons.
//!
//! Stopwords come from a directory of `*.txt` files where each line may carry
//! a pipe-delimited annotation (`the|DET`); only the part before the first
//! `|` counts. Sentiment lexicons are one word per line and exclude anything
//! already listed as a stopword. All lists are lowercased sets loaded once at
//! startup and passed by reference; nothing mutates them afterwards.
//!
//! Word-list files in the wild are not reliably UTF-8 (the classic negative
//! lexicon is Latin-1), so files are decoded lossily instead of failing.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::{Result, ScrutariError};

/// A set of lowercase words used for membership tests.
#[derive(Debug, Clone, Default)]
pub struct Lexicon(HashSet<String>);

impl Lexicon {
    /// Membership test. Callers are expected to pass the lowercase form.
    pub fn contains(&self, word: &str) -> bool {
        self.0.contains(word)
    }

    /// Number of words in the lexicon.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<String> for Lexicon {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Reads a word-list file, tolerating undecodable bytes.
fn read_lossy(path: &Path) -> Result<String> {
    let bytes = fs::read(path)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Loads the stopword set from every `*.txt` file in `dir`.
///
/// Each line contributes the text before its first `|`, trimmed and
/// lowercased; blank results are skipped. File order does not matter since
/// the result is a set.
pub fn load_stopwords(dir: &Path) -> Result<Lexicon> {
    if !dir.is_dir() {
        return Err(ScrutariError::FileNotFound(dir.to_path_buf()));
    }

    let mut words = HashSet::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if !path.extension().is_some_and(|ext| ext == "txt") {
            continue;
        }
        for line in read_lossy(&path)?.lines() {
            let word = line.split('|').next().unwrap_or("").trim().to_lowercase();
            if !word.is_empty() {
                words.insert(word);
            }
        }
    }

    Ok(Lexicon(words))
}

/// Loads a sentiment word list, excluding words present in `stopwords`.
///
/// One word per non-empty line, lowercased.
pub fn load_sentiment_list(path: &Path, stopwords: &Lexicon) -> Result<Lexicon> {
    if !path.is_file() {
        return Err(ScrutariError::FileNotFound(path.to_path_buf()));
    }

    let words = read_lossy(path)?
        .lines()
        .map(|line| line.trim().to_lowercase())
        .filter(|word| !word.is_empty() && !stopwords.contains(word))
        .collect();

    Ok(words)
}

/// The three reference lexicons the metric engine consumes.
#[derive(Debug, Clone)]
pub struct Lexicons {
    pub stopwords: Lexicon,
    pub positive: Lexicon,
    pub negative: Lexicon,
}

impl Lexicons {
    /// Loads stopwords from `stopwords_dir` and the sentiment lists from the
    /// conventional `positive-words.txt` / `negative-words.txt` files in
    /// `dictionary_dir`.
    pub fn load(stopwords_dir: &Path, dictionary_dir: &Path) -> Result<Self> {
        let stopwords = load_stopwords(stopwords_dir)?;
        let positive = load_sentiment_list(&dictionary_dir.join("positive-words.txt"), &stopwords)?;
        let negative = load_sentiment_list(&dictionary_dir.join("negative-words.txt"), &stopwords)?;
        Ok(Self { stopwords, positive, negative })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_file(dir: &Path, name: &str, content: &[u8]) -> std::path::PathBuf {
        let path = dir.join(name);
        let mut f = fs::File::create(&path).unwrap();
        f.write_all(content).unwrap();
        path
    }

    #[test]
    fn test_stopwords_pipe_annotations() {
        let tmp = TempDir::new().unwrap();
        write_file(tmp.path(), "sw.txt", b"the|DET\nand\n");

        let lexicon = load_stopwords(tmp.path()).unwrap();
        assert_eq!(lexicon.len(), 2);
        assert!(lexicon.contains("the"));
        assert!(lexicon.contains("and"));
    }

    #[test]
    fn test_stopwords_lowercased_and_merged_across_files() {
        let tmp = TempDir::new().unwrap();
        write_file(tmp.path(), "a.txt", b"THE | article\n");
        write_file(tmp.path(), "b.txt", b"Of\n\n");
        write_file(tmp.path(), "ignored.csv", b"nope\n");

        let lexicon = load_stopwords(tmp.path()).unwrap();
        assert!(lexicon.contains("the"));
        assert!(lexicon.contains("of"));
        assert!(!lexicon.contains("nope"));
        assert_eq!(lexicon.len(), 2);
    }

    #[test]
    fn test_stopwords_tolerate_bad_encoding() {
        let tmp = TempDir::new().unwrap();
        // Latin-1 "naïve|ADJ" plus a clean line
        write_file(tmp.path(), "sw.txt", b"na\xefve|ADJ\nplain\n");

        let lexicon = load_stopwords(tmp.path()).unwrap();
        assert!(lexicon.contains("plain"));
    }

    #[test]
    fn test_sentiment_excludes_stopwords() {
        let tmp = TempDir::new().unwrap();
        write_file(tmp.path(), "sw.txt", b"good\n");
        let stopwords = load_stopwords(tmp.path()).unwrap();

        let dict = write_file(tmp.path(), "positive-words.txt", b"good\nGreat\nexcellent\n\n");
        let positive = load_sentiment_list(&dict, &stopwords).unwrap();

        assert!(!positive.contains("good"));
        assert!(positive.contains("great"));
        assert!(positive.contains("excellent"));
        assert_eq!(positive.len(), 2);
    }

    #[test]
    fn test_lexicons_load_bundle() {
        let tmp = TempDir::new().unwrap();
        let stop_dir = tmp.path().join("stopwords");
        let dict_dir = tmp.path().join("dictionary");
        fs::create_dir_all(&stop_dir).unwrap();
        fs::create_dir_all(&dict_dir).unwrap();
        write_file(&stop_dir, "sw.txt", b"the\n");
        write_file(&dict_dir, "positive-words.txt", b"happy\n");
        write_file(&dict_dir, "negative-words.txt", b"sad\n");

        let lexicons = Lexicons::load(&stop_dir, &dict_dir).unwrap();
        assert!(lexicons.stopwords.contains("the"));
        assert!(lexicons.positive.contains("happy"));
        assert!(lexicons.negative.contains("sad"));
    }

    #[test]
    fn test_missing_dictionary_file_is_fatal() {
        let tmp = TempDir::new().unwrap();
        let stopwords = Lexicon::default();
        let result = load_sentiment_list(&tmp.path().join("positive-words.txt"), &stopwords);
        assert!(matches!(result, Err(ScrutariError::FileNotFound(_))));
    }
}
