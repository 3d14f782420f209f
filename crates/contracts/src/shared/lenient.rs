//! Lenient numeric deserialization.
//!
//! The Gateway serializes decimal fields (prices, revenue) either as JSON
//! numbers or as quoted strings depending on the endpoint. Deserialize both
//! into `f64`, treating null/absent as zero.

use serde::{Deserialize, Deserializer};

pub fn f64_or_string<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Num(f64),
        Text(String),
        Null(Option<()>),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Num(n) => Ok(n),
        Raw::Text(s) => Ok(s.trim().parse::<f64>().unwrap_or(0.0)),
        Raw::Null(_) => Ok(0.0),
    }
}

#[cfg(test)]
mod tests {
    #[derive(serde::Deserialize)]
    struct Holder {
        #[serde(default, deserialize_with = "super::f64_or_string")]
        value: f64,
    }

    #[test]
    fn accepts_number() {
        let h: Holder = serde_json::from_str(r#"{"value": 12.5}"#).unwrap();
        assert_eq!(h.value, 12.5);
    }

    #[test]
    fn accepts_string() {
        let h: Holder = serde_json::from_str(r#"{"value": "99.90"}"#).unwrap();
        assert_eq!(h.value, 99.90);
    }

    #[test]
    fn null_and_garbage_become_zero() {
        let h: Holder = serde_json::from_str(r#"{"value": null}"#).unwrap();
        assert_eq!(h.value, 0.0);
        let h: Holder = serde_json::from_str(r#"{"value": "n/a"}"#).unwrap();
        assert_eq!(h.value, 0.0);
    }
}
