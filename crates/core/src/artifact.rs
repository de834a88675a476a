//! Article artifact files.
//!
//! The extraction job writes one text file per input record, named
//! `<URL_ID>.txt`: the first line is the title, every following line is one
//! body line. The analysis job reads the same files back. [`ArticleArtifact`]
//! is the in-memory form shared by both sides; it is immutable after
//! creation.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::extract::ExtractedArticle;
use crate::{Result, ScrutariError};

/// One extracted article, keyed by the identifier of its input record.
#[derive(Debug, Clone, Serialize)]
pub struct ArticleArtifact {
    /// Identifier from the input table; also the file stem on disk.
    pub url_id: String,
    /// Title line.
    pub title: String,
    /// Body lines, trimmed and non-empty.
    pub body: Vec<String>,
}

impl ArticleArtifact {
    /// Pairs an extraction result with its record identifier.
    pub fn from_extracted(url_id: impl Into<String>, extracted: ExtractedArticle) -> Self {
        Self { url_id: url_id.into(), title: extracted.title, body: extracted.body }
    }

    /// Renders the on-disk text: title line followed by the body lines.
    pub fn to_text(&self) -> String {
        let mut text = self.title.clone();
        for line in &self.body {
            text.push('\n');
            text.push_str(line);
        }
        text
    }

    /// Writes the artifact into `dir` as `<url_id>.txt`, returning the path.
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf> {
        let path = dir.join(format!("{}.txt", self.url_id));
        fs::write(&path, self.to_text())?;
        Ok(path)
    }

    /// Reads an artifact back from disk.
    ///
    /// The file stem becomes the identifier, the first line the title, and
    /// the remaining lines the body.
    ///
    /// # Errors
    ///
    /// Returns [`ScrutariError::MalformedArtifact`] for an empty file and
    /// [`ScrutariError::FileNotFound`] when the path does not exist.
    pub fn read_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ScrutariError::FileNotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path)?;
        let mut lines = content.lines();
        let title = match lines.next() {
            Some(first) => first.trim().to_string(),
            None => return Err(ScrutariError::MalformedArtifact(path.to_path_buf())),
        };

        let url_id = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        let body = lines
            .map(|line| line.trim().to_string())
            .filter(|line| !line.is_empty())
            .collect();

        Ok(Self { url_id, title, body })
    }

    /// Body text as one string for analysis, lines joined with single spaces.
    pub fn analysis_text(&self) -> String {
        self.body.join(" ")
    }
}

/// Lists the artifact files (`*.txt`) in a directory, sorted by file name.
///
/// Sorting keeps output rows in a stable order regardless of how the
/// filesystem enumerates entries.
pub fn list_artifacts(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(ScrutariError::FileNotFound(dir.to_path_buf()));
    }

    let mut paths: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "txt"))
        .collect();

    paths.sort();
    Ok(paths)
}
