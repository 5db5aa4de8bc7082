//! Rendering of the aggregated sequence and scoped temporary artifacts.

use std::io::Write;
use std::path::Path;

use serde::Serialize;
use serde_json::Value;
use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::ExportError;
use crate::upstream::Activity;

/// Render the sequence as JSON indented with four spaces.
pub fn render_json(activities: &[Activity]) -> Result<Vec<u8>, ExportError> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    activities.serialize(&mut ser)?;
    Ok(buf)
}

/// Render the sequence as CSV.
///
/// Headers are the first record's keys in that record's order. Rows follow
/// sequence order; a key missing from a later record renders as an empty
/// field, and non-scalar values render as compact JSON. An empty sequence
/// has no derivable header and is an error.
pub fn render_csv(activities: &[Activity]) -> Result<Vec<u8>, ExportError> {
    let first = activities.first().ok_or(ExportError::EmptySequence)?;
    let headers: Vec<&str> = first.keys().map(String::as_str).collect();

    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(&headers)?;

    for activity in activities {
        let row: Vec<String> = headers
            .iter()
            .map(|key| activity.get(*key).map(csv_field).unwrap_or_default())
            .collect();
        writer.write_record(&row)?;
    }

    writer
        .into_inner()
        .map_err(|e| ExportError::Io(e.into_error()))
}

/// One CSV field for a JSON value: strings bare, null empty, the rest as
/// compact JSON.
fn csv_field(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// A temporary export file scoped to one request.
///
/// The backing file has a unique name so concurrent requests never collide,
/// and is removed when the artifact is dropped, on every exit path.
#[derive(Debug)]
pub struct Artifact {
    file: NamedTempFile,
    download_name: &'static str,
    content_type: &'static str,
}

impl Artifact {
    /// Render the sequence as indented JSON and persist it under `dir`.
    pub fn json(dir: &Path, activities: &[Activity]) -> Result<Self, ExportError> {
        let bytes = render_json(activities)?;
        Self::persist(dir, ".json", "output.json", "application/json", &bytes)
    }

    /// Render the sequence as CSV and persist it under `dir`.
    pub fn csv(dir: &Path, activities: &[Activity]) -> Result<Self, ExportError> {
        let bytes = render_csv(activities)?;
        Self::persist(dir, ".csv", "output.csv", "text/csv", &bytes)
    }

    fn persist(
        dir: &Path,
        suffix: &str,
        download_name: &'static str,
        content_type: &'static str,
        bytes: &[u8],
    ) -> Result<Self, ExportError> {
        let mut file = tempfile::Builder::new()
            .prefix("activity-export-")
            .suffix(suffix)
            .tempfile_in(dir)?;
        file.write_all(bytes)?;
        file.flush()?;

        debug!(path = %file.path().display(), size = bytes.len(), "Wrote export artifact");

        Ok(Self {
            file,
            download_name,
            content_type,
        })
    }

    /// Path of the backing temporary file.
    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// Client-facing download file name.
    pub fn download_name(&self) -> &'static str {
        self.download_name
    }

    /// Content type of the delivered file.
    pub fn content_type(&self) -> &'static str {
        self.content_type
    }

    /// Read the artifact contents back for delivery.
    pub fn contents(&self) -> Result<Vec<u8>, ExportError> {
        Ok(std::fs::read(self.file.path())?)
    }
}
