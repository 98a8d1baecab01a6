use crate::explorer::stats_table::{StatsTable, StatsView};

use serde::Serialize;

/// Reshaped content of one saved stats payload.
///
/// # Fields
///
/// * `file_name` - Name of the payload file.
/// * `table` - The reshaped table, or `NoData` for accounts without stats.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PayloadSummary {
    pub file_name: String,
    pub table: StatsView<StatsTable>,
}
