use serde::{Deserialize, Serialize};

use crate::domain::common::{parse_opt_int, parse_opt_text, raw_int, raw_text, unknown_field, EntityRecord};
use crate::shared::metadata::{EntityMetadataInfo, EntityUiMetadata, FieldMetadata};

/// Región. The id is entered by the user.
///
/// The list endpoint returns `regionID` while older payloads use `id`;
/// both decode, `regionID` is written.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Region {
    #[serde(rename = "regionID", alias = "id")]
    pub region_id: Option<i64>,
    #[serde(rename = "regionDescription")]
    pub region_description: Option<String>,
}

pub const ENTITY_METADATA: EntityMetadataInfo = EntityMetadataInfo {
    entity_name: "region",
    entity_index: "a008",
    collection_name: "region",
    ui: EntityUiMetadata {
        element_name: "Región",
        list_name: "Regiones",
        icon: Some("regions"),
    },
};

pub const FIELDS: &[FieldMetadata] = &[
    FieldMetadata::integer("regionID", "ID").required().key(),
    FieldMetadata::text("regionDescription", "Descripción").required(),
];

impl EntityRecord for Region {
    fn entity_metadata_info() -> &'static EntityMetadataInfo {
        &ENTITY_METADATA
    }

    fn field_metadata() -> &'static [FieldMetadata] {
        FIELDS
    }

    fn id_string(&self) -> Option<String> {
        self.region_id.map(|id| id.to_string())
    }

    fn field_raw(&self, name: &str) -> String {
        match name {
            "regionID" => raw_int(self.region_id),
            "regionDescription" => raw_text(&self.region_description),
            _ => String::new(),
        }
    }

    fn set_field(&mut self, name: &str, raw: &str) -> Result<(), String> {
        match name {
            "regionID" => self.region_id = parse_opt_int(raw)?,
            "regionDescription" => self.region_description = parse_opt_text(raw),
            _ => return Err(unknown_field(name)),
        }
        Ok(())
    }

    fn display_name(&self) -> String {
        raw_text(&self.region_description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decodes_both_id_names() {
        let listed: Region =
            serde_json::from_value(json!({"regionID": 1, "regionDescription": "Eastern"})).unwrap();
        let posted: Region =
            serde_json::from_value(json!({"id": 1, "regionDescription": "Eastern"})).unwrap();
        assert_eq!(listed, posted);
        assert_eq!(listed.id_string(), Some("1".to_string()));
    }

    #[test]
    fn test_writes_region_id() {
        let mut region = Region::default();
        region.set_field("regionID", "5").unwrap();
        region.set_field("regionDescription", "Andina").unwrap();
        assert_eq!(
            serde_json::to_value(&region).unwrap(),
            json!({"regionID": 5, "regionDescription": "Andina"})
        );
    }

    #[test]
    fn test_id_is_a_required_key() {
        let field = Region::field("regionID").unwrap();
        assert!(field.key);
        assert_eq!(
            Region::default().validate(),
            Err("El campo 'ID' es obligatorio".to_string())
        );
    }
}
