pub mod artifact;
pub mod error;
pub mod errorlog;
pub mod extract;
#[cfg(feature = "fetch")]
pub mod fetch;
pub mod lexicon;
pub mod metrics;
pub mod parse;
pub mod pipeline;
pub mod schema;
pub mod table;
pub mod tokenize;

pub use artifact::{ArticleArtifact, list_artifacts};
pub use error::{FailureKind, Result, ScrutariError};
pub use errorlog::{ErrorLog, ErrorRecord};
pub use extract::{ExtractedArticle, extract_article};
#[cfg(feature = "fetch")]
pub use fetch::{FetchConfig, fetch_url};
pub use lexicon::{Lexicon, Lexicons, load_sentiment_list, load_stopwords};
pub use metrics::{EPSILON, TextMetrics, compute_metrics, count_syllables, is_complex, personal_pronouns};
pub use parse::Document;
#[cfg(feature = "fetch")]
pub use pipeline::{ExtractionJob, ExtractionSummary};
pub use pipeline::{AnalysisJob, AnalysisSummary};
pub use schema::{OutputSchema, assemble_row, normalize_column};
pub use table::{InputRecord, index_by_id, read_input, write_output};
