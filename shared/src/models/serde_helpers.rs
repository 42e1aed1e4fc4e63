//! Lenient deserializers for fields clients send in mixed types.

use serde::{Deserialize, Deserializer};

/// Accepts an integer, a numeric string or null for `Option<i64>` fields.
///
/// Form-backed clients send `"25"` where API clients send `25`; both must
/// land in the same column. Non-numeric strings deserialize as `None`
/// instead of failing the whole payload.
pub fn lenient_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Int(i64),
        Float(f64),
        Text(String),
    }

    Ok(match Option::<Raw>::deserialize(deserializer)? {
        Some(Raw::Int(n)) => Some(n),
        Some(Raw::Float(f)) => Some(f as i64),
        Some(Raw::Text(s)) => s.trim().parse().ok(),
        None => None,
    })
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Holder {
        #[serde(default, deserialize_with = "super::lenient_i64")]
        age: Option<i64>,
    }

    #[test]
    fn accepts_number_and_numeric_string() {
        let n: Holder = serde_json::from_str(r#"{"age": 25}"#).unwrap();
        assert_eq!(n.age, Some(25));
        let s: Holder = serde_json::from_str(r#"{"age": "25"}"#).unwrap();
        assert_eq!(s.age, Some(25));
    }

    #[test]
    fn junk_and_absent_become_none() {
        let junk: Holder = serde_json::from_str(r#"{"age": "abc"}"#).unwrap();
        assert_eq!(junk.age, None);
        let absent: Holder = serde_json::from_str("{}").unwrap();
        assert_eq!(absent.age, None);
        let null: Holder = serde_json::from_str(r#"{"age": null}"#).unwrap();
        assert_eq!(null.age, None);
    }
}
