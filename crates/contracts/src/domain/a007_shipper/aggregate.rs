use serde::{Deserialize, Serialize};

use crate::domain::common::{parse_opt_text, raw_int, raw_text, unknown_field, EntityRecord};
use crate::shared::metadata::{EntityMetadataInfo, EntityUiMetadata, FieldMetadata};

/// Remitente (empresa de transporte)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Shipper {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub company_name: Option<String>,
    pub phone: Option<String>,
}

pub const ENTITY_METADATA: EntityMetadataInfo = EntityMetadataInfo {
    entity_name: "shipper",
    entity_index: "a007",
    collection_name: "shippers",
    ui: EntityUiMetadata {
        element_name: "Remitente",
        list_name: "Remitentes",
        icon: Some("shippers"),
    },
};

pub const FIELDS: &[FieldMetadata] = &[
    FieldMetadata::integer("id", "ID").list_only(),
    FieldMetadata::text("companyName", "Empresa").required(),
    FieldMetadata::text("phone", "Teléfono").placeholder("(503) 555-9831"),
];

impl EntityRecord for Shipper {
    fn entity_metadata_info() -> &'static EntityMetadataInfo {
        &ENTITY_METADATA
    }

    fn field_metadata() -> &'static [FieldMetadata] {
        FIELDS
    }

    fn id_string(&self) -> Option<String> {
        self.id.map(|id| id.to_string())
    }

    fn field_raw(&self, name: &str) -> String {
        match name {
            "id" => raw_int(self.id),
            "companyName" => raw_text(&self.company_name),
            "phone" => raw_text(&self.phone),
            _ => String::new(),
        }
    }

    fn set_field(&mut self, name: &str, raw: &str) -> Result<(), String> {
        match name {
            "companyName" => self.company_name = parse_opt_text(raw),
            "phone" => self.phone = parse_opt_text(raw),
            _ => return Err(unknown_field(name)),
        }
        Ok(())
    }

    fn display_name(&self) -> String {
        raw_text(&self.company_name)
    }
}
