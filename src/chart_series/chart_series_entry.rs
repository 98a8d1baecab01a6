use crate::stats_decoding::stat_value::StatValue;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// A display-ready data point for the bar and pie charts.
///
/// Serializes as `{ "id", "value", "label", <metric_key>: <metric_value>, "color" }`, the
/// dynamic key being what keyed bar charts index their series by.
///
/// # Fields
///
/// * `id` - Identifier of the bar or slice.
/// * `value` - The plotted value.
/// * `label` - Text shown for the bar or slice.
/// * `metric_key` - Name of the dynamic field.
/// * `metric_value` - Value of the dynamic field.
/// * `color` - CSS color of the bar or slice.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeriesEntry {
    pub id: String,
    pub value: StatValue,
    pub label: String,
    pub metric_key: String,
    pub metric_value: StatValue,
    pub color: String,
}

impl Serialize for ChartSeriesEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(5))?;
        map.serialize_entry("id", &self.id)?;
        map.serialize_entry("value", &self.value)?;
        map.serialize_entry("label", &self.label)?;
        map.serialize_entry(&self.metric_key, &self.metric_value)?;
        map.serialize_entry("color", &self.color)?;
        map.end()
    }
}
