//! Shared pieces of every REST-backed entity

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::shared::date::parse_iso_date;
use crate::shared::metadata::{EntityMetadataInfo, FieldMetadata};

// ============================================================================
// EntityRecord
// ============================================================================

/// A record of one REST resource, editable through metadata-driven forms.
///
/// Fields are addressed by their JSON name and exchanged with the form as raw
/// strings; `set_field` parses them according to the field's [`FieldKind`](crate::shared::metadata::FieldKind).
pub trait EntityRecord:
    Clone + Default + PartialEq + Serialize + DeserializeOwned + Send + Sync + 'static
{
    fn entity_metadata_info() -> &'static EntityMetadataInfo;

    fn field_metadata() -> &'static [FieldMetadata];

    /// Path segment of the record, `None` until the backend assigned one
    fn id_string(&self) -> Option<String>;

    /// Current value of a field as form input text
    fn field_raw(&self, name: &str) -> String;

    /// Parse form input into the field
    fn set_field(&mut self, name: &str, raw: &str) -> Result<(), String>;

    /// Short text for confirmations and modal titles
    fn display_name(&self) -> String;

    fn field(name: &str) -> Option<&'static FieldMetadata> {
        Self::field_metadata().iter().find(|f| f.name == name)
    }

    fn list_fields() -> Vec<&'static FieldMetadata> {
        Self::field_metadata()
            .iter()
            .filter(|f| f.visible_in_list())
            .collect()
    }

    fn form_fields() -> Vec<&'static FieldMetadata> {
        Self::field_metadata()
            .iter()
            .filter(|f| f.visible_in_form())
            .collect()
    }

    /// Validate the raw input against the field rules, then store it
    fn assign(&mut self, field: &FieldMetadata, raw: &str) -> Result<(), String> {
        field.validation.validate_string(raw, field.ui.label)?;
        self.set_field(field.name, raw)
            .map_err(|e| format!("{}: {}", field.ui.label, e))?;
        if field.kind.is_numeric() {
            if let Ok(value) = parse_decimal(raw) {
                field.validation.validate_number(value, field.ui.label)?;
            }
        }
        Ok(())
    }

    fn validate(&self) -> Result<(), String> {
        validate_required(self)
    }
}

/// First required form field left empty
pub fn validate_required<T: EntityRecord>(record: &T) -> Result<(), String> {
    for field in T::form_fields() {
        if field.validation.required && record.field_raw(field.name).trim().is_empty() {
            return Err(format!("El campo '{}' es obligatorio", field.ui.label));
        }
    }
    Ok(())
}

/// Unknown field name passed to `set_field`
pub fn unknown_field(name: &str) -> String {
    format!("campo desconocido '{}'", name)
}

// ============================================================================
// Raw input parsing
// ============================================================================

pub fn parse_opt_text(raw: &str) -> Option<String> {
    let value = raw.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

fn parse_decimal(raw: &str) -> Result<f64, String> {
    let value = raw.trim().replace(',', ".");
    value
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| format!("número no válido '{}'", raw.trim()))
}

pub fn parse_opt_decimal(raw: &str) -> Result<Option<f64>, String> {
    if raw.trim().is_empty() {
        return Ok(None);
    }
    parse_decimal(raw).map(Some)
}

pub fn parse_opt_int(raw: &str) -> Result<Option<i64>, String> {
    let value = raw.trim();
    if value.is_empty() {
        return Ok(None);
    }
    value
        .parse::<i64>()
        .map(Some)
        .map_err(|_| format!("número entero no válido '{}'", value))
}

/// Dates travel as `YYYY-MM-DD` strings
pub fn parse_opt_date(raw: &str) -> Result<Option<String>, String> {
    let value = raw.trim();
    if value.is_empty() {
        return Ok(None);
    }
    parse_iso_date(value)
        .map(|d| Some(d.format("%Y-%m-%d").to_string()))
        .ok_or_else(|| format!("fecha no válida '{}'", value))
}

pub fn parse_flag(raw: &str) -> Result<bool, String> {
    match raw.trim().to_lowercase().as_str() {
        "true" | "on" | "1" => Ok(true),
        "false" | "off" | "0" | "" => Ok(false),
        other => Err(format!("valor lógico no válido '{}'", other)),
    }
}

// ============================================================================
// Field values as form text
// ============================================================================

pub fn raw_text(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

pub fn raw_int(value: Option<i64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

pub fn raw_decimal(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

/// Date part only, so `1996-07-04T00:00:00` fits `<input type="date">`
pub fn raw_date(value: &Option<String>) -> String {
    match value {
        Some(v) => v.get(..10).unwrap_or(v).to_string(),
        None => String::new(),
    }
}

pub fn raw_flag(value: bool) -> String {
    value.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_numbers() {
        assert_eq!(parse_opt_int(" 42 "), Ok(Some(42)));
        assert_eq!(parse_opt_int(""), Ok(None));
        assert!(parse_opt_int("4.2").is_err());
        assert_eq!(parse_opt_decimal("18,5"), Ok(Some(18.5)));
        assert_eq!(parse_opt_decimal("  "), Ok(None));
        assert!(parse_opt_decimal("abc").is_err());
        assert!(parse_opt_decimal("NaN").is_err());
    }

    #[test]
    fn test_parse_flag() {
        for raw in ["true", "on", "1", "TRUE"] {
            assert_eq!(parse_flag(raw), Ok(true), "{raw}");
        }
        for raw in ["false", "0", "", "off"] {
            assert_eq!(parse_flag(raw), Ok(false), "{raw}");
        }
        assert!(parse_flag("maybe").is_err());
    }

    #[test]
    fn test_parse_dates() {
        assert_eq!(parse_opt_date("1996-07-04"), Ok(Some("1996-07-04".to_string())));
        assert_eq!(parse_opt_date("1996-07-04T00:00:00"), Ok(Some("1996-07-04".to_string())));
        assert_eq!(parse_opt_date(""), Ok(None));
        assert!(parse_opt_date("04/07/1996").is_err());
    }

    #[test]
    fn test_raw_date_keeps_date_part() {
        assert_eq!(raw_date(&Some("1996-07-04T00:00:00".into())), "1996-07-04");
        assert_eq!(raw_date(&None), "");
    }
}
