//! Output schema loading and row assembly.
//!
//! The output shape is externally supplied: the header row of a template
//! table defines the column order. For each column, resolution is
//! (a) a verbatim input-field name copies the input value, (b) a normalized
//! name (uppercase, spaces to underscores) that names a known metric emits
//! the computed value, and (c) anything else degrades to null. The metric
//! lookup is a closed match over the fixed metric names, so schema changes
//! cannot reach beyond the known set.

use std::collections::HashMap;
use std::path::Path;

use serde_json::Value;

use crate::metrics::TextMetrics;
use crate::{Result, ScrutariError};

/// An ordered sequence of output column names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputSchema {
    columns: Vec<String>,
}

impl OutputSchema {
    /// Builds a schema from column names directly.
    pub fn from_columns(columns: Vec<String>) -> Self {
        Self { columns }
    }

    /// Loads the schema from the header row of a CSV template.
    pub fn from_template(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(ScrutariError::FileNotFound(path.to_path_buf()));
        }

        let mut reader = csv::Reader::from_path(path)?;
        let columns = reader.headers()?.iter().map(|name| name.to_string()).collect();
        Ok(Self { columns })
    }

    /// Column names in output order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

/// Normalizes a column name for metric lookup: uppercase, spaces to
/// underscores.
pub fn normalize_column(name: &str) -> String {
    name.to_uppercase().replace(' ', "_")
}

/// Looks up a computed metric by normalized column name.
///
/// The long spellings are the template's historical column names; the short
/// ones are accepted as aliases.
fn metric_value(normalized: &str, metrics: &TextMetrics) -> Option<Value> {
    let value = match normalized {
        "POSITIVE_SCORE" => Value::from(metrics.positive_score as u64),
        "NEGATIVE_SCORE" => Value::from(metrics.negative_score as u64),
        "POLARITY_SCORE" => Value::from(metrics.polarity_score),
        "SUBJECTIVITY_SCORE" => Value::from(metrics.subjectivity_score),
        "AVG_SENTENCE_LENGTH" => Value::from(metrics.avg_sentence_length),
        "PERCENTAGE_OF_COMPLEX_WORDS" | "PERCENTAGE_COMPLEX_WORDS" => {
            Value::from(metrics.percentage_complex_words)
        }
        "FOG_INDEX" => Value::from(metrics.fog_index),
        "AVG_NUMBER_OF_WORDS_PER_SENTENCE" | "AVG_WORDS_PER_SENTENCE" => {
            Value::from(metrics.avg_words_per_sentence)
        }
        "COMPLEX_WORD_COUNT" => Value::from(metrics.complex_word_count as u64),
        "WORD_COUNT" => Value::from(metrics.word_count as u64),
        "SYLLABLE_PER_WORD" => Value::from(metrics.syllable_per_word),
        "PERSONAL_PRONOUNS" => Value::from(metrics.personal_pronouns as u64),
        "AVG_WORD_LENGTH" => Value::from(metrics.avg_word_length),
        _ => return None,
    };
    Some(value)
}

/// Assembles one output row in schema order.
///
/// Input fields win over metrics on a verbatim name match, so a passthrough
/// column like `URL` is always copied even if a same-named metric were ever
/// added. Unrecognized columns become `Value::Null`.
pub fn assemble_row(
    schema: &OutputSchema, input_fields: &HashMap<String, String>, metrics: &TextMetrics,
) -> Vec<Value> {
    schema
        .columns()
        .iter()
        .map(|column| {
            if let Some(value) = input_fields.get(column) {
                return Value::from(value.as_str());
            }
            metric_value(&normalize_column(column), metrics).unwrap_or(Value::Null)
        })
        .collect()
}
