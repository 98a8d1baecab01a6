use crate::stat_aggregation::stat_field::StatField;
use crate::stat_aggregation::stat_layout::StatLayout;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Per-entity accumulation of stat records.
///
/// Serializes as a flat object, the entity key under `key_field` followed by the tracked
/// fields in layout order: `{"weaponName": "ak47", "totalKills": 120, "totalShots": "", ...}`.
///
/// # Fields
///
/// * `key_field` - Name under which the entity key is exposed.
/// * `entity_key` - The weapon or map key this row belongs to.
/// * `fields` - Tracked fields in layout order, each starting as `StatField::Missing`.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregatedStatRow {
    pub(crate) key_field: String,
    pub(crate) entity_key: String,
    pub(crate) fields: Vec<(String, StatField)>,
}

impl AggregatedStatRow {
    /// Creates a row with every tracked field of `layout` set to the empty sentinel.
    pub fn empty(entity_key: &str, layout: &StatLayout) -> Self {
        Self {
            key_field: layout.key_field.clone(),
            entity_key: entity_key.to_owned(),
            fields: layout
                .metrics
                .iter()
                .map(|metric| (metric.field.clone(), StatField::Missing))
                .collect(),
        }
    }

    pub fn entity_key(&self) -> &str {
        &self.entity_key
    }

    pub fn key_field(&self) -> &str {
        &self.key_field
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &StatField)> {
        self.fields
            .iter()
            .map(|(name, field)| (name.as_str(), field))
    }

    /// Looks up a tracked field by name.
    ///
    /// # Returns
    ///
    /// `None` if the layout of this row does not track `name`.
    pub fn get(&self, name: &str) -> Option<&StatField> {
        self.fields
            .iter()
            .find(|(field_name, _)| field_name == name)
            .map(|(_, field)| field)
    }

    /// Text of a field for labelling purposes. The key field yields the entity key,
    /// reported fields their display form, everything else an empty string.
    pub fn text(&self, name: &str) -> String {
        if name == self.key_field {
            return self.entity_key.clone();
        }
        self.get(name)
            .and_then(StatField::value)
            .map(|value| value.to_string())
            .unwrap_or_default()
    }

    pub(crate) fn set(&mut self, name: &str, field: StatField) {
        if let Some((_, slot)) = self
            .fields
            .iter_mut()
            .find(|(field_name, _)| field_name == name)
        {
            *slot = field;
        }
    }
}

impl Serialize for AggregatedStatRow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len() + 1))?;
        map.serialize_entry(&self.key_field, &self.entity_key)?;
        for (name, field) in &self.fields {
            map.serialize_entry(name, field)?;
        }
        map.end()
    }
}
