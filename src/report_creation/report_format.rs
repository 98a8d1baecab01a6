use crate::data_processing::payload_summary::PayloadSummary;

use serde::Serialize;

/// Top-level structure of a batch report.
///
/// # Fields
///
/// * `generated_at` - RFC 3339 creation time of the report.
/// * `payloads` - The summary of every processed payload.
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ReportFormat<'a> {
    pub(crate) generated_at: String,
    pub(crate) payloads: &'a [PayloadSummary],
}
