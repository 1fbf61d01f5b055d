use serde::{Deserialize, Serialize};

use crate::domain::common::{parse_opt_text, raw_int, raw_text, unknown_field, EntityRecord};
use crate::shared::metadata::{EntityMetadataInfo, EntityUiMetadata, FieldMetadata};

/// Proveedor
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Supplier {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
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
    pub home_page: Option<String>,
}

pub const ENTITY_METADATA: EntityMetadataInfo = EntityMetadataInfo {
    entity_name: "supplier",
    entity_index: "a006",
    collection_name: "suppliers",
    ui: EntityUiMetadata {
        element_name: "Proveedor",
        list_name: "Proveedores",
        icon: Some("suppliers"),
    },
};

pub const FIELDS: &[FieldMetadata] = &[
    FieldMetadata::integer("id", "ID").list_only(),
    FieldMetadata::text("companyName", "Empresa").required(),
    FieldMetadata::text("contactName", "Contacto").required(),
    FieldMetadata::text("contactTitle", "Cargo").form_only(),
    FieldMetadata::text("address", "Dirección").form_only(),
    FieldMetadata::text("city", "Ciudad"),
    FieldMetadata::text("region", "Región").form_only(),
    FieldMetadata::text("postalCode", "Código Postal").form_only(),
    FieldMetadata::text("country", "País"),
    FieldMetadata::text("phone", "Teléfono"),
    FieldMetadata::text("fax", "Fax").form_only(),
    FieldMetadata::text("homePage", "Página Web").form_only(),
];

impl EntityRecord for Supplier {
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
            "contactName" => raw_text(&self.contact_name),
            "contactTitle" => raw_text(&self.contact_title),
            "address" => raw_text(&self.address),
            "city" => raw_text(&self.city),
            "region" => raw_text(&self.region),
            "postalCode" => raw_text(&self.postal_code),
            "country" => raw_text(&self.country),
            "phone" => raw_text(&self.phone),
            "fax" => raw_text(&self.fax),
            "homePage" => raw_text(&self.home_page),
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
            "homePage" => self.home_page = value,
            _ => return Err(unknown_field(name)),
        }
        Ok(())
    }

    fn display_name(&self) -> String {
        raw_text(&self.company_name)
    }
}
