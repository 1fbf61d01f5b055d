use serde::{Deserialize, Serialize};

use crate::domain::common::{parse_opt_int, parse_opt_text, raw_int, raw_text, unknown_field, EntityRecord};
use crate::shared::metadata::{EntityMetadataInfo, EntityUiMetadata, FieldMetadata};

/// Territorio. The id (e.g. `01581`) is entered by the user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Territory {
    #[serde(rename = "id", alias = "territoryID")]
    pub id: Option<String>,
    #[serde(rename = "territoryDescription")]
    pub territory_description: Option<String>,
    #[serde(rename = "regionId", alias = "regionID")]
    pub region_id: Option<i64>,
}

pub const ENTITY_METADATA: EntityMetadataInfo = EntityMetadataInfo {
    entity_name: "territory",
    entity_index: "a009",
    collection_name: "territories",
    ui: EntityUiMetadata {
        element_name: "Territorio",
        list_name: "Territorios",
        icon: Some("territories"),
    },
};

pub const FIELDS: &[FieldMetadata] = &[
    FieldMetadata::text("id", "ID del Territorio").required().key().max_length(20),
    FieldMetadata::text("territoryDescription", "Descripción del Territorio").required(),
    FieldMetadata::integer("regionId", "ID de la Región").required(),
];

impl EntityRecord for Territory {
    fn entity_metadata_info() -> &'static EntityMetadataInfo {
        &ENTITY_METADATA
    }

    fn field_metadata() -> &'static [FieldMetadata] {
        FIELDS
    }

    fn id_string(&self) -> Option<String> {
        self.id.clone().filter(|id| !id.is_empty())
    }

    fn field_raw(&self, name: &str) -> String {
        match name {
            "id" => raw_text(&self.id),
            "territoryDescription" => raw_text(&self.territory_description),
            "regionId" => raw_int(self.region_id),
            _ => String::new(),
        }
    }

    fn set_field(&mut self, name: &str, raw: &str) -> Result<(), String> {
        match name {
            "id" => self.id = parse_opt_text(raw),
            "territoryDescription" => self.territory_description = parse_opt_text(raw),
            "regionId" => self.region_id = parse_opt_int(raw)?,
            _ => return Err(unknown_field(name)),
        }
        Ok(())
    }

    fn display_name(&self) -> String {
        raw_text(&self.territory_description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decodes_aliases() {
        let a: Territory = serde_json::from_value(json!({
            "territoryID": "01581",
            "territoryDescription": "Westboro",
            "regionID": 1
        }))
        .unwrap();
        let b: Territory = serde_json::from_value(json!({
            "id": "01581",
            "territoryDescription": "Westboro",
            "regionId": 1
        }))
        .unwrap();
        assert_eq!(a, b);
        assert_eq!(a.id_string(), Some("01581".to_string()));
        assert_eq!(a.field_raw("regionId"), "1");
    }

    #[test]
    fn test_id_keeps_leading_zeros() {
        let mut territory = Territory::default();
        territory.set_field("id", "02116").unwrap();
        let body = serde_json::to_value(&territory).unwrap();
        assert_eq!(body["id"], "02116");
    }
}
