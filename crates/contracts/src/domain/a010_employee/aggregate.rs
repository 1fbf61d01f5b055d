use serde::{Deserialize, Serialize};

use crate::domain::common::{parse_opt_text, raw_int, raw_text, unknown_field, EntityRecord};
use crate::shared::metadata::{EntityMetadataInfo, EntityUiMetadata, FieldKind, FieldMetadata};

/// Empleado
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Employee {
    #[serde(alias = "employeeID", alias = "id", skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<i64>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub title: Option<String>,
    pub country: Option<String>,
    pub city: Option<String>,
    pub home_phone: Option<String>,
    /// Base64 encoded JPEG
    pub photo: Option<String>,
}

pub const ENTITY_METADATA: EntityMetadataInfo = EntityMetadataInfo {
    entity_name: "employee",
    entity_index: "a010",
    collection_name: "employees",
    ui: EntityUiMetadata {
        element_name: "Empleado",
        list_name: "Empleados",
        icon: Some("employees"),
    },
};

pub const FIELDS: &[FieldMetadata] = &[
    FieldMetadata::integer("employeeId", "ID").list_only(),
    FieldMetadata::new("photo", "Foto", FieldKind::Photo),
    FieldMetadata::text("firstName", "Nombre").required(),
    FieldMetadata::text("lastName", "Apellido").required(),
    FieldMetadata::text("title", "Cargo"),
    FieldMetadata::text("city", "Ciudad"),
    FieldMetadata::text("country", "País"),
    FieldMetadata::text("homePhone", "Teléfono"),
];

impl Employee {
    pub fn full_name(&self) -> String {
        format!("{} {}", raw_text(&self.first_name), raw_text(&self.last_name))
            .trim()
            .to_string()
    }
}

impl EntityRecord for Employee {
    fn entity_metadata_info() -> &'static EntityMetadataInfo {
        &ENTITY_METADATA
    }

    fn field_metadata() -> &'static [FieldMetadata] {
        FIELDS
    }

    fn id_string(&self) -> Option<String> {
        self.employee_id.map(|id| id.to_string())
    }

    fn field_raw(&self, name: &str) -> String {
        match name {
            "employeeId" => raw_int(self.employee_id),
            "firstName" => raw_text(&self.first_name),
            "lastName" => raw_text(&self.last_name),
            "title" => raw_text(&self.title),
            "country" => raw_text(&self.country),
            "city" => raw_text(&self.city),
            "homePhone" => raw_text(&self.home_phone),
            "photo" => raw_text(&self.photo),
            _ => String::new(),
        }
    }

    fn set_field(&mut self, name: &str, raw: &str) -> Result<(), String> {
        let value = parse_opt_text(raw);
        match name {
            "firstName" => self.first_name = value,
            "lastName" => self.last_name = value,
            "title" => self.title = value,
            "country" => self.country = value,
            "city" => self.city = value,
            "homePhone" => self.home_phone = value,
            "photo" => self.photo = value,
            _ => return Err(unknown_field(name)),
        }
        Ok(())
    }

    fn display_name(&self) -> String {
        self.full_name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_employee() {
        let employee: Employee = serde_json::from_value(json!({
            "employeeId": 1,
            "firstName": "Nancy",
            "lastName": "Davolio",
            "photo": "/9j/4AAQ"
        }))
        .unwrap();
        assert_eq!(employee.id_string(), Some("1".to_string()));
        assert_eq!(employee.display_name(), "Nancy Davolio");
        assert_eq!(employee.field_raw("photo"), "/9j/4AAQ");
    }

    #[test]
    fn test_photo_is_optional() {
        let mut employee = Employee::default();
        employee.set_field("firstName", "Andrew").unwrap();
        employee.set_field("lastName", "Fuller").unwrap();
        assert!(employee.validate().is_ok());
        let body = serde_json::to_value(&employee).unwrap();
        assert!(body["photo"].is_null());
        assert!(body.get("employeeId").is_none());
    }
}
