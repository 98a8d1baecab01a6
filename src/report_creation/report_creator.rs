use crate::data_processing::payload_summary::PayloadSummary;
use crate::report_creation::report_creation_error::ReportCreationError;
use crate::report_creation::report_format::ReportFormat;

use chrono::Utc;
use std::fs::File;
use std::io::BufWriter;
use std::io::Write;
use std::path::Path;
use tracing::info;

/// Serializes the payload summaries into a pretty-printed JSON report.
///
/// # Arguments
///
/// * `generated_at` - Creation time written into the report.
/// * `payloads` - The summaries to include.
///
/// # Returns
///
/// The JSON string, or `ReportCreationError::Serialization` if serialization fails.
fn generate_json(
    generated_at: String,
    payloads: &[PayloadSummary],
) -> Result<String, ReportCreationError> {
    let report = ReportFormat {
        generated_at,
        payloads,
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

/// Creates a JSON report from the payload summaries and writes it to the specified path.
///
/// # Arguments
///
/// * `path` - The path to the file where the report will be written.
/// * `payloads` - The summaries to include in the report.
///
/// # Returns
///
/// A `Result` indicating success or failure. Errors are represented by `ReportCreationError`.
pub fn create_json_report(
    path: &Path,
    payloads: &[PayloadSummary],
) -> Result<(), ReportCreationError> {
    let json_output = generate_json(Utc::now().to_rfc3339(), payloads)?;

    let file = File::create(path).map_err(ReportCreationError::FileCreation)?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(json_output.as_bytes())
        .and_then(|()| writer.flush())
        .map_err(ReportCreationError::FileWrite)?;

    info!(
        "Wrote report with {} payloads to {}",
        payloads.len(),
        path.display()
    );
    Ok(())
}
