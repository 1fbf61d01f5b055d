use serde::{Deserialize, Serialize};

use crate::domain::common::{parse_opt_text, raw_int, raw_text, unknown_field, EntityRecord};
use crate::shared::metadata::{EntityMetadataInfo, EntityUiMetadata, FieldKind, FieldMetadata};

/// Categoría de productos
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Category {
    #[serde(rename = "categoryID", alias = "id", skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i64>,
    #[serde(rename = "categoryName")]
    pub category_name: Option<String>,
    pub description: Option<String>,
    /// Image URL
    pub picture: Option<String>,
}

pub const ENTITY_METADATA: EntityMetadataInfo = EntityMetadataInfo {
    entity_name: "category",
    entity_index: "a005",
    collection_name: "categories",
    ui: EntityUiMetadata {
        element_name: "Categoría",
        list_name: "Categorías",
        icon: Some("categories"),
    },
};

pub const FIELDS: &[FieldMetadata] = &[
    FieldMetadata::text("categoryName", "Nombre").required(),
    FieldMetadata::new("description", "Descripción", FieldKind::LongText),
    FieldMetadata::new("picture", "Imagen", FieldKind::ImageUrl).placeholder("URL de Imagen"),
];

impl EntityRecord for Category {
    fn entity_metadata_info() -> &'static EntityMetadataInfo {
        &ENTITY_METADATA
    }

    fn field_metadata() -> &'static [FieldMetadata] {
        FIELDS
    }

    fn id_string(&self) -> Option<String> {
        self.category_id.map(|id| id.to_string())
    }

    fn field_raw(&self, name: &str) -> String {
        match name {
            "categoryID" => raw_int(self.category_id),
            "categoryName" => raw_text(&self.category_name),
            "description" => raw_text(&self.description),
            "picture" => raw_text(&self.picture),
            _ => String::new(),
        }
    }

    fn set_field(&mut self, name: &str, raw: &str) -> Result<(), String> {
        let value = parse_opt_text(raw);
        match name {
            "categoryName" => self.category_name = value,
            "description" => self.description = value,
            "picture" => self.picture = value,
            _ => return Err(unknown_field(name)),
        }
        Ok(())
    }

    fn display_name(&self) -> String {
        raw_text(&self.category_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_category_id_field_name() {
        let category: Category = serde_json::from_value(json!({
            "categoryID": 3,
            "categoryName": "Confections",
            "picture": null
        }))
        .unwrap();
        assert_eq!(category.id_string(), Some("3".to_string()));
        assert_eq!(category.field_raw("picture"), "");

        let body = serde_json::to_value(&category).unwrap();
        assert_eq!(body["categoryID"], 3);
    }
}
