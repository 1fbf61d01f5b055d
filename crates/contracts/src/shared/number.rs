//! Report endpoints serialize some aggregates (SUM over DECIMAL) as strings.
//! These deserializers accept both `12.5` and `"12.5"`.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(f64),
    Text(String),
    Null(()),
}

fn to_f64<E: serde::de::Error>(value: NumberOrText) -> Result<Option<f64>, E> {
    match value {
        NumberOrText::Number(n) => Ok(Some(n)),
        NumberOrText::Text(s) if s.trim().is_empty() => Ok(None),
        NumberOrText::Text(s) => s
            .trim()
            .parse::<f64>()
            .map(Some)
            .map_err(|_| E::custom(format!("invalid number '{}'", s))),
        NumberOrText::Null(()) => Ok(None),
    }
}

pub fn lenient_f64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    Ok(to_f64(NumberOrText::deserialize(deserializer)?)?.unwrap_or_default())
}

pub fn lenient_i64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    Ok(to_f64(NumberOrText::deserialize(deserializer)?)?
        .map(|n| n.round() as i64)
        .unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Deserialize)]
    struct Row {
        #[serde(deserialize_with = "lenient_f64")]
        total: f64,
        #[serde(deserialize_with = "lenient_i64", default)]
        units: i64,
    }

    #[test]
    fn test_accepts_numbers_strings_and_null() {
        let row: Row = serde_json::from_value(json!({"total": "1520.75", "units": 12})).unwrap();
        assert_eq!(row.total, 1520.75);
        assert_eq!(row.units, 12);

        let row: Row = serde_json::from_value(json!({"total": null, "units": "7"})).unwrap();
        assert_eq!(row.total, 0.0);
        assert_eq!(row.units, 7);

        let row: Row = serde_json::from_value(json!({"total": 3})).unwrap();
        assert_eq!(row.total, 3.0);
        assert_eq!(row.units, 0);
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(serde_json::from_value::<Row>(json!({"total": "abc"})).is_err());
    }
}
