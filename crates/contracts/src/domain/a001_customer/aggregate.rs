use serde::{Deserialize, Serialize};

use crate::domain::common::{parse_opt_text, raw_text, unknown_field, EntityRecord};
use crate::shared::metadata::{EntityMetadataInfo, EntityUiMetadata, FieldMetadata};

/// Cliente
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Customer {
    /// Assigned by the backend on create
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub company_name: Option<String>,
    pub contact_name: Option<String>,
    pub contact_title: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub region: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
    pub phone: Option<String>,
    pub fax: Option<String>,
}

pub const ENTITY_METADATA: EntityMetadataInfo = EntityMetadataInfo {
    entity_name: "customer",
    entity_index: "a001",
    collection_name: "customers",
    ui: EntityUiMetadata {
        element_name: "Cliente",
        list_name: "Clientes",
        icon: Some("customers"),
    },
};

pub const FIELDS: &[FieldMetadata] = &[
    FieldMetadata::text("id", "ID").list_only(),
    FieldMetadata::text("companyName", "Empresa").required(),
    FieldMetadata::text("contactName", "Contacto").required(),
    FieldMetadata::text("contactTitle", "Cargo"),
    FieldMetadata::text("address", "Dirección").form_only(),
    FieldMetadata::text("city", "Ciudad"),
    FieldMetadata::text("region", "Región").form_only(),
    FieldMetadata::text("postalCode", "Código Postal").form_only(),
    FieldMetadata::text("country", "País"),
    FieldMetadata::text("phone", "Teléfono"),
    FieldMetadata::text("fax", "Fax").form_only(),
];

impl EntityRecord for Customer {
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
            "companyName" => raw_text(&self.company_name),
            "contactName" => raw_text(&self.contact_name),
            "contactTitle" => raw_text(&self.contact_title),
            "address" => raw_text(&self.address),
            "city" => raw_text(&self.city),
            "region" => raw_text(&self.region),
            "postalCode" => raw_text(&self.postal_code),
            "country" => raw_text(&self.country),
            "phone" => raw_text(&self.phone),
            "fax" => raw_text(&self.fax),
            _ => String::new(),
        }
    }

    fn set_field(&mut self, name: &str, raw: &str) -> Result<(), String> {
        let value = parse_opt_text(raw);
        match name {
            "companyName" => self.company_name = value,
            "contactName" => self.contact_name = value,
            "contactTitle" => self.contact_title = value,
            "address" => self.address = value,
            "city" => self.city = value,
            "region" => self.region = value,
            "postalCode" => self.postal_code = value,
            "country" => self.country = value,
            "phone" => self.phone = value,
            "fax" => self.fax = value,
            _ => return Err(unknown_field(name)),
        }
        Ok(())
    }

    fn display_name(&self) -> String {
        raw_text(&self.company_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_ignores_unknown_and_missing_fields() {
        let customer: Customer = serde_json::from_value(json!({
            "id": "ALFKI",
            "companyName": "Alfreds Futterkiste",
            "contactName": "Maria Anders",
            "country": null,
            "orders": []
        }))
        .unwrap();
        assert_eq!(customer.id_string(), Some("ALFKI".to_string()));
        assert_eq!(customer.field_raw("companyName"), "Alfreds Futterkiste");
        assert_eq!(customer.country, None);
        assert_eq!(customer.field_raw("fax"), "");
    }

    #[test]
    fn test_new_customer_is_posted_without_id() {
        let mut customer = Customer::default();
        customer.set_field("companyName", " Around the Horn ").unwrap();
        let body = serde_json::to_value(&customer).unwrap();
        assert!(body.get("id").is_none());
        assert_eq!(body["companyName"], "Around the Horn");
    }

    #[test]
    fn test_validate_reports_first_missing_required_field() {
        let mut customer = Customer::default();
        customer.set_field("companyName", "ACME").unwrap();
        assert_eq!(
            customer.validate(),
            Err("El campo 'Contacto' es obligatorio".to_string())
        );
        customer.set_field("contactName", "Ana").unwrap();
        assert!(customer.validate().is_ok());
    }

    #[test]
    fn test_assign_checks_required() {
        let mut customer = Customer::default();
        let field = Customer::field("companyName").unwrap();
        assert!(customer.assign(field, "   ").is_err());
        assert!(customer.set_field("unknown", "x").is_err());
    }
}
