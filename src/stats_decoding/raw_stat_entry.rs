use crate::stats_decoding::stat_value::StatValue;
use serde::{Deserialize, Serialize};

/// A single `{name, value}` stat record as reported by the Steam Web API.
///
/// # Fields
///
/// * `name` - The stat name. It encodes both the metric kind and the entity it refers to,
///     e.g. `total_kills_ak47` or `total_wins_map_de_dust2`.
/// * `value` - The reported value, kept in its raw form.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RawStatEntry {
    pub name: String,
    pub value: StatValue,
}

impl RawStatEntry {
    pub fn new(name: impl Into<String>, value: impl Into<StatValue>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}
