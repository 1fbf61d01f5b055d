//! Core metadata types for entities and report projections
//!
//! All types use 'static lifetimes for zero-cost compile-time constants.

use super::field_type::FieldKind;
use super::validation::ValidationRules;

// ============================================================================
// Entity-level metadata
// ============================================================================

/// Metadata for a REST-backed entity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntityMetadataInfo {
    pub entity_name: &'static str,
    /// Tab key prefix, e.g. `a001`
    pub entity_index: &'static str,
    /// REST resource under the API base, e.g. `customers`
    pub collection_name: &'static str,
    pub ui: EntityUiMetadata,
}

impl EntityMetadataInfo {
    /// Key used by the tab registry, e.g. `a001_customer`
    pub fn tab_key(&self) -> String {
        format!("{}_{}", self.entity_index, self.entity_name)
    }
}

/// UI metadata for entity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntityUiMetadata {
    pub element_name: &'static str,
    pub list_name: &'static str,
    pub icon: Option<&'static str>,
}

// ============================================================================
// Field-level metadata
// ============================================================================

/// Metadata for a single field
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldMetadata {
    /// JSON name of the field
    pub name: &'static str,
    pub kind: FieldKind,
    pub ui: FieldUiMetadata,
    pub validation: ValidationRules,
    /// User-entered primary key: editable on create only
    pub key: bool,
}

impl FieldMetadata {
    pub const fn new(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            ui: FieldUiMetadata::labeled(label),
            validation: ValidationRules::none(),
            key: false,
        }
    }

    pub const fn text(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldKind::Text)
    }

    pub const fn integer(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldKind::Integer)
    }

    pub const fn decimal(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldKind::Decimal)
    }

    pub const fn date(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldKind::Date)
    }

    pub const fn required(self) -> Self {
        Self {
            validation: ValidationRules {
                required: true,
                ..self.validation
            },
            ..self
        }
    }

    pub const fn min(self, min: f64) -> Self {
        Self {
            validation: ValidationRules {
                min: Some(min),
                ..self.validation
            },
            ..self
        }
    }

    pub const fn max_length(self, max: usize) -> Self {
        Self {
            validation: ValidationRules {
                max_length: Some(max),
                ..self.validation
            },
            ..self
        }
    }

    pub const fn placeholder(self, placeholder: &'static str) -> Self {
        Self {
            ui: FieldUiMetadata {
                placeholder: Some(placeholder),
                ..self.ui
            },
            ..self
        }
    }

    /// Shown in the form only
    pub const fn form_only(self) -> Self {
        Self {
            ui: FieldUiMetadata {
                visible_in_list: false,
                ..self.ui
            },
            ..self
        }
    }

    /// Shown in the list only (server-assigned ids)
    pub const fn list_only(self) -> Self {
        Self {
            ui: FieldUiMetadata {
                visible_in_form: false,
                ..self.ui
            },
            ..self
        }
    }

    pub const fn key(self) -> Self {
        Self { key: true, ..self }
    }

    pub fn visible_in_list(&self) -> bool {
        self.ui.visible_in_list
    }

    pub fn visible_in_form(&self) -> bool {
        self.ui.visible_in_form
    }
}

/// UI metadata for a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldUiMetadata {
    pub label: &'static str,
    pub placeholder: Option<&'static str>,
    pub visible_in_list: bool,
    pub visible_in_form: bool,
}

impl FieldUiMetadata {
    pub const fn labeled(label: &'static str) -> Self {
        Self {
            label,
            placeholder: None,
            visible_in_list: true,
            visible_in_form: true,
        }
    }
}

impl Default for FieldUiMetadata {
    fn default() -> Self {
        Self::labeled("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PRICE: FieldMetadata = FieldMetadata::decimal("unitPrice", "Precio")
        .required()
        .min(0.0)
        .form_only();

    #[test]
    fn test_builder_chain_is_const() {
        assert_eq!(PRICE.name, "unitPrice");
        assert_eq!(PRICE.kind, FieldKind::Decimal);
        assert!(PRICE.validation.required);
        assert_eq!(PRICE.validation.min, Some(0.0));
        assert!(!PRICE.visible_in_list());
        assert!(PRICE.visible_in_form());
        assert!(!PRICE.key);
    }

    #[test]
    fn test_tab_key() {
        let meta = EntityMetadataInfo {
            entity_name: "customer",
            entity_index: "a001",
            collection_name: "customers",
            ui: EntityUiMetadata {
                element_name: "Cliente",
                list_name: "Clientes",
                icon: Some("customers"),
            },
        };
        assert_eq!(meta.tab_key(), "a001_customer");
    }
}
