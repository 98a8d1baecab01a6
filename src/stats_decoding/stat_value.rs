use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};
use std::fmt;

/// The value of a single stat record, kept in the form the API sent it.
///
/// The Steam API reports numbers, but cached or proxied payloads sometimes carry
/// numeric strings. Anything else is passed through untouched so that the
/// reshaping steps never fail on a malformed record.
///
/// # Variants
///
/// * `Number` - A JSON number.
/// * `Text` - A JSON string, numeric or not.
/// * `Other` - Any other JSON value (bool, null, array, object).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum StatValue {
    Number(Number),
    Text(String),
    Other(Value),
}

impl StatValue {
    /// Interprets the value as a number.
    ///
    /// # Returns
    ///
    /// `Some(f64)` for JSON numbers and for strings that parse as a finite number,
    /// `None` for everything else.
    pub fn as_f64(&self) -> Option<f64> {
        let number = match self {
            StatValue::Number(number) => number.as_f64()?,
            StatValue::Text(text) => text.trim().parse::<f64>().ok()?,
            StatValue::Other(_) => return None,
        };
        number.is_finite().then_some(number)
    }
}

impl From<f64> for StatValue {
    fn from(value: f64) -> Self {
        match Number::from_f64(value) {
            Some(number) => StatValue::Number(number),
            None => StatValue::Text(value.to_string()),
        }
    }
}

impl From<u64> for StatValue {
    fn from(value: u64) -> Self {
        StatValue::Number(Number::from(value))
    }
}

impl From<&str> for StatValue {
    fn from(value: &str) -> Self {
        StatValue::Text(value.to_owned())
    }
}

impl fmt::Display for StatValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatValue::Number(number) => write!(f, "{}", number),
            StatValue::Text(text) => f.write_str(text),
            StatValue::Other(value) => write!(f, "{}", value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn numeric_strings_are_read_as_numbers() {
        assert_eq!(StatValue::from("120").as_f64(), Some(120.0));
        assert_eq!(StatValue::from(" 7.5 ").as_f64(), Some(7.5));
        assert_eq!(StatValue::from(42u64).as_f64(), Some(42.0));
    }

    #[test]
    fn non_numeric_values_have_no_number() {
        assert_eq!(StatValue::from("abc").as_f64(), None);
        assert_eq!(StatValue::from("NaN").as_f64(), None);
        assert_eq!(StatValue::Other(Value::Bool(true)).as_f64(), None);
    }

    #[test]
    fn deserialization_keeps_the_raw_form() {
        let values: Vec<StatValue> = serde_json::from_value(json!([3, "3", null])).unwrap();
        assert_eq!(values[0], StatValue::from(3u64));
        assert_eq!(values[1], StatValue::from("3"));
        assert_eq!(values[2], StatValue::Other(Value::Null));
        assert_eq!(serde_json::to_value(&values).unwrap(), json!([3, "3", null]));
    }
}
