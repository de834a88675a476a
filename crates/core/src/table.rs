//! Tabular input and output.
//!
//! The input table needs at least `URL_ID` and `URL` columns; any additional
//! columns ride along per record and are available to the row assembler as
//! passthrough fields. The output table is written with the schema's columns
//! as its header, null cells as empty fields.

use std::collections::HashMap;
use std::path::Path;

use serde_json::Value;

use crate::schema::OutputSchema;
use crate::{Result, ScrutariError};

/// Column holding the record identifier.
pub const ID_COLUMN: &str = "URL_ID";
/// Column holding the page URL.
pub const URL_COLUMN: &str = "URL";

/// One row of the input table.
#[derive(Debug, Clone)]
pub struct InputRecord {
    /// Record identifier (`URL_ID` column).
    pub url_id: String,
    /// Page URL (`URL` column).
    pub url: String,
    /// Every column of the row by name, identifier and URL included.
    pub fields: HashMap<String, String>,
}

/// Reads the input table.
///
/// # Errors
///
/// Returns [`ScrutariError::MissingColumn`] when `URL_ID` or `URL` is absent
/// from the header.
pub fn read_input(path: &Path) -> Result<Vec<InputRecord>> {
    if !path.is_file() {
        return Err(ScrutariError::FileNotFound(path.to_path_buf()));
    }

    let mut reader = csv::Reader::from_path(path)?;
    let headers: Vec<String> = reader.headers()?.iter().map(|h| h.to_string()).collect();

    for required in [ID_COLUMN, URL_COLUMN] {
        if !headers.iter().any(|h| h == required) {
            return Err(ScrutariError::MissingColumn(required.to_string()));
        }
    }

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;
        let fields: HashMap<String, String> = headers
            .iter()
            .zip(row.iter())
            .map(|(header, value)| (header.clone(), value.to_string()))
            .collect();

        let url_id = fields.get(ID_COLUMN).cloned().unwrap_or_default();
        let url = fields.get(URL_COLUMN).cloned().unwrap_or_default();
        records.push(InputRecord { url_id, url, fields });
    }

    Ok(records)
}

/// Indexes input records by identifier for artifact lookup.
pub fn index_by_id(records: Vec<InputRecord>) -> HashMap<String, InputRecord> {
    records.into_iter().map(|r| (r.url_id.clone(), r)).collect()
}

/// Renders one cell for the output table.
fn render_cell(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Writes the output table: schema header plus one line per assembled row.
pub fn write_output(path: &Path, schema: &OutputSchema, rows: &[Vec<Value>]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(schema.columns())?;
    for row in rows {
        writer.write_record(row.iter().map(render_cell))?;
    }
    writer.flush()?;
    Ok(())
}
