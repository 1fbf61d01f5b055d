//! Validation rules for metadata fields

/// Validation rules for a field
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ValidationRules {
    pub required: bool,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub max_length: Option<usize>,
}

impl ValidationRules {
    /// Create empty validation rules (all optional, no constraints)
    pub const fn none() -> Self {
        Self {
            required: false,
            min: None,
            max: None,
            max_length: None,
        }
    }

    /// Create validation rules for required field
    pub const fn required() -> Self {
        Self {
            required: true,
            min: None,
            max: None,
            max_length: None,
        }
    }

    pub const fn is_required(&self) -> bool {
        self.required
    }

    /// Validate raw form input against the rules
    pub fn validate_string(&self, value: &str, field_label: &str) -> Result<(), String> {
        if self.required && value.trim().is_empty() {
            return Err(format!("El campo '{}' es obligatorio", field_label));
        }

        if let Some(max) = self.max_length {
            if value.chars().count() > max {
                return Err(format!(
                    "El campo '{}' no puede superar {} caracteres",
                    field_label, max
                ));
            }
        }

        Ok(())
    }

    /// Validate a numeric value against min/max rules
    pub fn validate_number(&self, value: f64, field_label: &str) -> Result<(), String> {
        if let Some(min) = self.min {
            if value < min {
                return Err(format!("El campo '{}' debe ser al menos {}", field_label, min));
            }
        }

        if let Some(max) = self.max {
            if value > max {
                return Err(format!("El campo '{}' no puede ser mayor que {}", field_label, max));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_rejects_blank() {
        let rules = ValidationRules::required();
        assert!(rules.validate_string("  ", "Empresa").is_err());
        assert!(rules.validate_string("ACME", "Empresa").is_ok());
    }

    #[test]
    fn test_optional_accepts_blank() {
        assert!(ValidationRules::none().validate_string("", "Fax").is_ok());
    }

    #[test]
    fn test_number_bounds() {
        let rules = ValidationRules {
            min: Some(0.0),
            max: Some(100.0),
            ..ValidationRules::none()
        };
        assert!(rules.validate_number(-1.0, "Descuento").is_err());
        assert!(rules.validate_number(100.0, "Descuento").is_ok());
        assert!(rules.validate_number(100.5, "Descuento").is_err());
    }

    #[test]
    fn test_max_length_counts_chars() {
        let rules = ValidationRules {
            max_length: Some(3),
            ..ValidationRules::none()
        };
        assert!(rules.validate_string("ñña", "Código").is_ok());
        assert!(rules.validate_string("abcd", "Código").is_err());
    }
}
