//! The two batch jobs: extraction and analysis.
//!
//! Both are sequential loops over independent records. Extraction recovers
//! from per-record failures by logging them and moving on, so one dead URL
//! never sinks the batch. Analysis has no per-article recovery path: a
//! missing lexicon, schema, or malformed artifact aborts the run.

use std::collections::HashMap;
use std::path::PathBuf;

use crate::artifact::{list_artifacts, ArticleArtifact};
use crate::lexicon::Lexicons;
use crate::metrics::compute_metrics;
use crate::schema::{assemble_row, OutputSchema};
use crate::table::{index_by_id, read_input};
use crate::tokenize::{analytic_words, sentence_count};
use crate::Result;

#[cfg(feature = "fetch")]
use crate::errorlog::{ErrorLog, ErrorRecord};
#[cfg(feature = "fetch")]
use crate::extract::extract_article;
#[cfg(feature = "fetch")]
use crate::fetch::{fetch_url, FetchConfig};
#[cfg(feature = "fetch")]
use crate::parse::Document;
#[cfg(feature = "fetch")]
use std::path::Path;

/// Configuration for one extraction run.
#[cfg(feature = "fetch")]
#[derive(Debug, Clone)]
pub struct ExtractionJob {
    /// Input table with `URL_ID` and `URL` columns.
    pub input: PathBuf,
    /// Directory receiving one `<URL_ID>.txt` artifact per success.
    pub articles_dir: PathBuf,
    /// Error log path, recreated at the start of the run.
    pub error_log: PathBuf,
    /// HTTP settings shared by every request.
    pub fetch: FetchConfig,
}

/// Outcome counts of an extraction run.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExtractionSummary {
    /// Artifacts written.
    pub saved: usize,
    /// Records that ended up in the error log.
    pub failed: usize,
}

#[cfg(feature = "fetch")]
impl ExtractionJob {
    /// Runs the extraction batch.
    ///
    /// Every record produces exactly one artifact or exactly one logged
    /// error. Failures to append to the log itself are swallowed; the log is
    /// best effort and must never take the batch down.
    pub async fn run(&self) -> Result<ExtractionSummary> {
        let records = read_input(&self.input)?;
        std::fs::create_dir_all(&self.articles_dir)?;
        let mut log = ErrorLog::create(&self.error_log)?;

        let mut summary = ExtractionSummary::default();
        for record in &records {
            match extract_one(&record.url, &record.url_id, &self.articles_dir, &self.fetch).await {
                Ok(()) => summary.saved += 1,
                Err(err) => {
                    summary.failed += 1;
                    let _ = log.append(&ErrorRecord {
                        url_id: record.url_id.clone(),
                        url: record.url.clone(),
                        kind: err.failure_kind(),
                        message: err.to_string(),
                    });
                }
            }
        }

        Ok(summary)
    }
}

/// Fetches, extracts, and persists a single article.
#[cfg(feature = "fetch")]
async fn extract_one(url: &str, url_id: &str, articles_dir: &Path, fetch: &FetchConfig) -> Result<()> {
    let html = fetch_url(url, fetch).await?;
    let doc = Document::parse(&html)?;
    let extracted = extract_article(&doc)?;
    ArticleArtifact::from_extracted(url_id, extracted).write_to(articles_dir)?;
    Ok(())
}

/// Configuration for one analysis run.
#[derive(Debug, Clone)]
pub struct AnalysisJob {
    /// Directory of `<URL_ID>.txt` artifacts.
    pub articles_dir: PathBuf,
    /// Directory of stopword lists.
    pub stopwords_dir: PathBuf,
    /// Directory holding `positive-words.txt` / `negative-words.txt`.
    pub dictionary_dir: PathBuf,
    /// Output schema template (header row defines the columns).
    pub schema: PathBuf,
    /// Input table, for passthrough fields.
    pub input: PathBuf,
    /// Output table path.
    pub output: PathBuf,
}

/// Outcome of an analysis run.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnalysisSummary {
    /// Rows written to the output table.
    pub rows: usize,
}

impl AnalysisJob {
    /// Runs the analysis batch.
    ///
    /// Artifacts are processed in sorted file-name order. An artifact whose
    /// identifier has no input record still yields a row; its passthrough
    /// cells come out null.
    pub fn run(&self) -> Result<AnalysisSummary> {
        let lexicons = Lexicons::load(&self.stopwords_dir, &self.dictionary_dir)?;
        let schema = OutputSchema::from_template(&self.schema)?;
        let inputs = index_by_id(read_input(&self.input)?);
        let no_fields = HashMap::new();

        let mut rows = Vec::new();
        for path in list_artifacts(&self.articles_dir)? {
            let artifact = ArticleArtifact::read_from(&path)?;
            let text = artifact.analysis_text();

            let sentences = sentence_count(&text);
            let words = analytic_words(&text, &lexicons.stopwords);
            let metrics = compute_metrics(&words, sentences, &text, &lexicons);

            let fields = inputs
                .get(&artifact.url_id)
                .map(|record| &record.fields)
                .unwrap_or(&no_fields);
            rows.push(assemble_row(&schema, fields, &metrics));
        }

        crate::table::write_output(&self.output, &schema, &rows)?;
        Ok(AnalysisSummary { rows: rows.len() })
    }
}
