use serde::{Deserialize, Serialize};

use crate::domain::common::{
    parse_flag, parse_opt_decimal, parse_opt_int, parse_opt_text, raw_decimal, raw_flag, raw_int,
    raw_text, unknown_field, EntityRecord,
};
use crate::shared::metadata::{EntityMetadataInfo, EntityUiMetadata, FieldKind, FieldMetadata};

/// Producto
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Product {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub product_name: Option<String>,
    #[serde(alias = "supplierID")]
    pub supplier_id: Option<i64>,
    #[serde(alias = "categoryID")]
    pub category_id: Option<i64>,
    pub quantity_per_unit: Option<String>,
    pub unit_price: Option<f64>,
    pub units_in_stock: Option<i64>,
    pub units_on_order: Option<i64>,
    pub reorder_level: Option<i64>,
    pub discontinued: bool,
}

pub const ENTITY_METADATA: EntityMetadataInfo = EntityMetadataInfo {
    entity_name: "product",
    entity_index: "a004",
    collection_name: "products",
    ui: EntityUiMetadata {
        element_name: "Producto",
        list_name: "Productos",
        icon: Some("products"),
    },
};

pub const FIELDS: &[FieldMetadata] = &[
    FieldMetadata::integer("id", "ID").list_only(),
    FieldMetadata::text("productName", "Nombre del Producto").required(),
    FieldMetadata::integer("supplierId", "ID Proveedor").required(),
    FieldMetadata::integer("categoryId", "ID Categoría").required(),
    FieldMetadata::text("quantityPerUnit", "Cantidad por Unidad").placeholder("10 cajas x 20 bolsas"),
    FieldMetadata::decimal("unitPrice", "Precio Unitario").required().min(0.0),
    FieldMetadata::integer("unitsInStock", "Stock").min(0.0),
    FieldMetadata::integer("unitsOnOrder", "En Pedido").min(0.0).form_only(),
    FieldMetadata::integer("reorderLevel", "Nivel de Reorden").min(0.0).form_only(),
    FieldMetadata::new("discontinued", "Descontinuado", FieldKind::Bool),
];

impl EntityRecord for Product {
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
            "productName" => raw_text(&self.product_name),
            "supplierId" => raw_int(self.supplier_id),
            "categoryId" => raw_int(self.category_id),
            "quantityPerUnit" => raw_text(&self.quantity_per_unit),
            "unitPrice" => raw_decimal(self.unit_price),
            "unitsInStock" => raw_int(self.units_in_stock),
            "unitsOnOrder" => raw_int(self.units_on_order),
            "reorderLevel" => raw_int(self.reorder_level),
            "discontinued" => raw_flag(self.discontinued),
            _ => String::new(),
        }
    }

    fn set_field(&mut self, name: &str, raw: &str) -> Result<(), String> {
        match name {
            "productName" => self.product_name = parse_opt_text(raw),
            "supplierId" => self.supplier_id = parse_opt_int(raw)?,
            "categoryId" => self.category_id = parse_opt_int(raw)?,
            "quantityPerUnit" => self.quantity_per_unit = parse_opt_text(raw),
            "unitPrice" => self.unit_price = parse_opt_decimal(raw)?,
            "unitsInStock" => self.units_in_stock = parse_opt_int(raw)?,
            "unitsOnOrder" => self.units_on_order = parse_opt_int(raw)?,
            "reorderLevel" => self.reorder_level = parse_opt_int(raw)?,
            "discontinued" => self.discontinued = parse_flag(raw)?,
            _ => return Err(unknown_field(name)),
        }
        Ok(())
    }

    fn display_name(&self) -> String {
        raw_text(&self.product_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_product() {
        let product: Product = serde_json::from_value(json!({
            "id": 1,
            "productName": "Chai",
            "supplierId": 1,
            "categoryId": 1,
            "unitPrice": 18.0,
            "unitsInStock": 39,
            "discontinued": false
        }))
        .unwrap();
        assert_eq!(product.field_raw("unitPrice"), "18");
        assert_eq!(product.field_raw("discontinued"), "false");
        assert_eq!(product.field_raw("reorderLevel"), "");
    }

    #[test]
    fn test_set_discontinued_from_checkbox() {
        let mut product = Product::default();
        product.set_field("discontinued", "on").unwrap();
        assert!(product.discontinued);
        product.set_field("discontinued", "0").unwrap();
        assert!(!product.discontinued);
    }

    #[test]
    fn test_required_numbers_must_be_present() {
        let mut product = Product::default();
        product.set_field("productName", "Tofu").unwrap();
        product.set_field("supplierId", "6").unwrap();
        product.set_field("categoryId", "7").unwrap();
        assert_eq!(
            product.validate(),
            Err("El campo 'Precio Unitario' es obligatorio".to_string())
        );
        product.set_field("unitPrice", "23.25").unwrap();
        assert!(product.validate().is_ok());
    }
}
