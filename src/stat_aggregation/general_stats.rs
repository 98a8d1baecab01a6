use crate::stat_aggregation::stat_field::StatField;
use crate::stats_decoding::raw_stat_entry::RawStatEntry;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Account-wide stats looked up by exact name, in the order they were requested.
///
/// Serializes as `{ "total_kills": 1500, "total_deaths": "", ... }`.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneralStats {
    slots: Vec<(String, StatField)>,
}

impl GeneralStats {
    pub fn get(&self, name: &str) -> Option<&StatField> {
        self.slots
            .iter()
            .find(|(slot_name, _)| slot_name == name)
            .map(|(_, field)| field)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &StatField)> {
        self.slots.iter().map(|(name, field)| (name.as_str(), field))
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl Serialize for GeneralStats {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.slots.len()))?;
        for (name, field) in &self.slots {
            map.serialize_entry(name, field)?;
        }
        map.end()
    }
}

/// Picks the requested stats out of the flat record list.
///
/// Unlike the per-entity aggregation, names must match exactly, so `total_kills` is not fed
/// by `total_kills_ak47`.
///
/// # Arguments
///
/// * `entries` - The decoded stat records.
/// * `keys` - The stat names to look up.
///
/// # Returns
///
/// A `GeneralStats` with one slot per key, `StatField::Missing` for keys never reported.
pub fn general_stats<K: AsRef<str>>(entries: &[RawStatEntry], keys: &[K]) -> GeneralStats {
    let mut slots: Vec<(String, StatField)> = keys
        .iter()
        .map(|key| (key.as_ref().to_owned(), StatField::Missing))
        .collect();

    for entry in entries {
        if let Some((_, slot)) = slots.iter_mut().find(|(name, _)| *name == entry.name) {
            *slot = StatField::Reported(entry.value.clone());
        }
    }

    GeneralStats { slots }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn looks_up_exact_names_only() {
        let entries = vec![
            RawStatEntry::new("total_kills_ak47", 120u64),
            RawStatEntry::new("total_kills", 1500u64),
            RawStatEntry::new("total_mvps", 12u64),
        ];

        let stats = general_stats(&entries, &["total_kills", "total_deaths"]);

        assert_eq!(stats.len(), 2);
        assert_eq!(stats.get("total_kills").and_then(StatField::as_f64), Some(1500.0));
        assert!(stats.get("total_deaths").is_some_and(StatField::is_missing));
        assert_eq!(stats.get("total_mvps"), None);
        assert_eq!(
            serde_json::to_value(&stats).unwrap(),
            json!({"total_kills": 1500, "total_deaths": ""})
        );
    }
}
