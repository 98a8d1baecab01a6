use crate::stats_decoding::stat_value::StatValue;
use serde::{Serialize, Serializer};

/// A tracked field of an aggregated row.
///
/// `Missing` is the empty-string sentinel: the API never reported this stat, which is
/// different from a reported zero. It serializes as `""`.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum StatField {
    #[default]
    Missing,
    Reported(StatValue),
}

impl StatField {
    pub fn is_missing(&self) -> bool {
        matches!(self, StatField::Missing)
    }

    pub fn value(&self) -> Option<&StatValue> {
        match self {
            StatField::Missing => None,
            StatField::Reported(value) => Some(value),
        }
    }

    /// Numeric reading of the field, `None` when missing or non-numeric.
    pub fn as_f64(&self) -> Option<f64> {
        self.value().and_then(StatValue::as_f64)
    }
}

impl From<StatValue> for StatField {
    fn from(value: StatValue) -> Self {
        StatField::Reported(value)
    }
}

impl Serialize for StatField {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            StatField::Missing => serializer.serialize_str(""),
            StatField::Reported(value) => value.serialize(serializer),
        }
    }
}
