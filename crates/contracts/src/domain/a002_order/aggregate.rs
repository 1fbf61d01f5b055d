use serde::{Deserialize, Serialize};

use crate::domain::common::{
    parse_opt_date, parse_opt_decimal, parse_opt_int, parse_opt_text, raw_date, raw_decimal,
    raw_int, raw_text, unknown_field, EntityRecord,
};
use crate::shared::metadata::{EntityMetadataInfo, EntityUiMetadata, FieldMetadata};

/// Orden (cabecera del pedido)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Order {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(rename = "customerID")]
    pub customer_id: Option<String>,
    #[serde(rename = "employeeID")]
    pub employee_id: Option<i64>,
    pub order_date: Option<String>,
    pub required_date: Option<String>,
    pub shipped_date: Option<String>,
    pub ship_via: Option<i64>,
    pub freight: Option<f64>,
    pub ship_name: Option<String>,
    pub ship_address: Option<String>,
    pub ship_city: Option<String>,
    pub ship_region: Option<String>,
    pub ship_postal_code: Option<String>,
    pub ship_country: Option<String>,
}

pub const ENTITY_METADATA: EntityMetadataInfo = EntityMetadataInfo {
    entity_name: "order",
    entity_index: "a002",
    collection_name: "orders",
    ui: EntityUiMetadata {
        element_name: "Orden",
        list_name: "Órdenes",
        icon: Some("orders"),
    },
};

pub const FIELDS: &[FieldMetadata] = &[
    FieldMetadata::integer("id", "ID").list_only(),
    FieldMetadata::text("customerID", "ID Cliente").required(),
    FieldMetadata::integer("employeeID", "ID Empleado").required(),
    FieldMetadata::date("orderDate", "Fecha de Orden").required(),
    FieldMetadata::date("requiredDate", "Fecha Requerida").required().form_only(),
    FieldMetadata::date("shippedDate", "Fecha de Envío"),
    FieldMetadata::integer("shipVia", "Enviado por (ID)").required().form_only(),
    FieldMetadata::decimal("freight", "Flete").required().min(0.0),
    FieldMetadata::text("shipName", "Nombre de Envío").required(),
    FieldMetadata::text("shipAddress", "Dirección de Envío").form_only(),
    FieldMetadata::text("shipCity", "Ciudad de Envío"),
    FieldMetadata::text("shipRegion", "Región de Envío").form_only(),
    FieldMetadata::text("shipPostalCode", "Código Postal").form_only(),
    FieldMetadata::text("shipCountry", "País de Envío"),
];

impl EntityRecord for Order {
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
            "customerID" => raw_text(&self.customer_id),
            "employeeID" => raw_int(self.employee_id),
            "orderDate" => raw_date(&self.order_date),
            "requiredDate" => raw_date(&self.required_date),
            "shippedDate" => raw_date(&self.shipped_date),
            "shipVia" => raw_int(self.ship_via),
            "freight" => raw_decimal(self.freight),
            "shipName" => raw_text(&self.ship_name),
            "shipAddress" => raw_text(&self.ship_address),
            "shipCity" => raw_text(&self.ship_city),
            "shipRegion" => raw_text(&self.ship_region),
            "shipPostalCode" => raw_text(&self.ship_postal_code),
            "shipCountry" => raw_text(&self.ship_country),
            _ => String::new(),
        }
    }

    fn set_field(&mut self, name: &str, raw: &str) -> Result<(), String> {
        match name {
            "customerID" => self.customer_id = parse_opt_text(raw),
            "employeeID" => self.employee_id = parse_opt_int(raw)?,
            "orderDate" => self.order_date = parse_opt_date(raw)?,
            "requiredDate" => self.required_date = parse_opt_date(raw)?,
            "shippedDate" => self.shipped_date = parse_opt_date(raw)?,
            "shipVia" => self.ship_via = parse_opt_int(raw)?,
            "freight" => self.freight = parse_opt_decimal(raw)?,
            "shipName" => self.ship_name = parse_opt_text(raw),
            "shipAddress" => self.ship_address = parse_opt_text(raw),
            "shipCity" => self.ship_city = parse_opt_text(raw),
            "shipRegion" => self.ship_region = parse_opt_text(raw),
            "shipPostalCode" => self.ship_postal_code = parse_opt_text(raw),
            "shipCountry" => self.ship_country = parse_opt_text(raw),
            _ => return Err(unknown_field(name)),
        }
        Ok(())
    }

    fn display_name(&self) -> String {
        match self.id {
            Some(id) => format!("Orden #{}", id),
            None => "Nueva orden".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_order_with_datetime() {
        let order: Order = serde_json::from_value(json!({
            "id": 10248,
            "customerID": "VINET",
            "employeeID": 5,
            "orderDate": "1996-07-04T00:00:00",
            "shipVia": 3,
            "freight": 32.38,
            "shipName": "Vins et alcools Chevalier"
        }))
        .unwrap();
        assert_eq!(order.id_string(), Some("10248".to_string()));
        assert_eq!(order.field_raw("orderDate"), "1996-07-04");
        assert_eq!(order.field_raw("freight"), "32.38");
        assert_eq!(order.field_raw("shippedDate"), "");
        assert_eq!(order.display_name(), "Orden #10248");
    }

    #[test]
    fn test_set_field_parses_by_kind() {
        let mut order = Order::default();
        order.set_field("employeeID", "7").unwrap();
        order.set_field("freight", "11,61").unwrap();
        order.set_field("orderDate", "2024-05-01").unwrap();
        assert_eq!(order.employee_id, Some(7));
        assert_eq!(order.freight, Some(11.61));
        assert_eq!(order.order_date.as_deref(), Some("2024-05-01"));

        assert!(order.set_field("shipVia", "tres").is_err());
        assert!(order.set_field("orderDate", "mañana").is_err());
    }

    #[test]
    fn test_assign_rejects_negative_freight() {
        let mut order = Order::default();
        let freight = Order::field("freight").unwrap();
        let err = order.assign(freight, "-1").unwrap_err();
        assert!(err.contains("Flete"));
    }

    #[test]
    fn test_serializes_backend_field_names() {
        let mut order = Order::default();
        order.set_field("customerID", "VINET").unwrap();
        order.set_field("employeeID", "5").unwrap();
        let body = serde_json::to_value(&order).unwrap();
        assert_eq!(body["customerID"], "VINET");
        assert_eq!(body["employeeID"], 5);
        assert!(body.get("id").is_none());
    }
}
