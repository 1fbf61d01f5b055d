//! Order lines: composite key, line arithmetic and the line form.

use serde::{Deserialize, Serialize};

use crate::domain::common::{parse_opt_decimal, parse_opt_int};
use crate::shared::metadata::{EntityMetadataInfo, EntityUiMetadata};

pub const ENTITY_METADATA: EntityMetadataInfo = EntityMetadataInfo {
    entity_name: "order_detail",
    entity_index: "a003",
    collection_name: "orderDetails",
    ui: EntityUiMetadata {
        element_name: "Detalle de Orden",
        list_name: "Detalles de la Orden",
        icon: Some("orders"),
    },
};

/// Composite key of an order line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OrderDetailKey {
    pub order_id: i64,
    pub product_id: i64,
}

impl OrderDetailKey {
    /// Path under `orderDetails/`
    pub fn path(&self) -> String {
        format!("order/{}/product/{}", self.order_id, self.product_id)
    }
}

/// One line of an order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OrderDetail {
    #[serde(alias = "orderID")]
    pub order_id: i64,
    #[serde(alias = "productID")]
    pub product_id: i64,
    pub unit_price: f64,
    pub quantity: i64,
    /// Fraction in 0..=1
    pub discount: f64,
}

impl OrderDetail {
    pub fn key(&self) -> OrderDetailKey {
        OrderDetailKey {
            order_id: self.order_id,
            product_id: self.product_id,
        }
    }

    /// `unitPrice * (1 - discount) * quantity`
    pub fn subtotal(&self) -> f64 {
        self.unit_price * (1.0 - self.discount) * self.quantity as f64
    }

    pub fn discount_percent(&self) -> f64 {
        self.discount * 100.0
    }
}

pub fn order_total(lines: &[OrderDetail]) -> f64 {
    lines.iter().map(OrderDetail::subtotal).sum()
}

/// Raw inputs of the line form; the discount is edited as a percentage
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderDetailForm {
    pub product_id: String,
    pub unit_price: String,
    pub quantity: String,
    pub discount_percent: String,
}

impl OrderDetailForm {
    pub fn from_detail(detail: &OrderDetail) -> Self {
        Self {
            product_id: detail.product_id.to_string(),
            unit_price: detail.unit_price.to_string(),
            quantity: detail.quantity.to_string(),
            discount_percent: format_percent(detail.discount_percent()),
        }
    }

    /// Validate and build the line of `order_id`
    pub fn to_detail(&self, order_id: i64) -> Result<OrderDetail, String> {
        let product_id = parse_opt_int(&self.product_id)
            .map_err(|e| format!("Producto: {}", e))?
            .ok_or("El campo 'ID Producto' es obligatorio")?;
        let unit_price = parse_opt_decimal(&self.unit_price)
            .map_err(|e| format!("Precio Unitario: {}", e))?
            .ok_or("El campo 'Precio Unitario' es obligatorio")?;
        let quantity = parse_opt_int(&self.quantity)
            .map_err(|e| format!("Cantidad: {}", e))?
            .ok_or("El campo 'Cantidad' es obligatorio")?;
        let percent = parse_opt_decimal(&self.discount_percent)
            .map_err(|e| format!("Descuento: {}", e))?
            .unwrap_or(0.0);

        if unit_price < 0.0 {
            return Err("El precio unitario no puede ser negativo".to_string());
        }
        if quantity <= 0 {
            return Err("La cantidad debe ser mayor que 0".to_string());
        }
        if !(0.0..=100.0).contains(&percent) {
            return Err("El descuento debe estar entre 0 y 100 %".to_string());
        }

        Ok(OrderDetail {
            order_id,
            product_id,
            unit_price,
            quantity,
            discount: percent / 100.0,
        })
    }
}

/// `10` for 0.1, `12.5` for 0.125; float noise from the *100 is rounded away
fn format_percent(percent: f64) -> String {
    let rounded = (percent * 100.0).round() / 100.0;
    rounded.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn line(unit_price: f64, quantity: i64, discount: f64) -> OrderDetail {
        OrderDetail {
            order_id: 10248,
            product_id: 11,
            unit_price,
            quantity,
            discount,
        }
    }

    #[test]
    fn test_subtotal() {
        assert_eq!(line(18.0, 5, 0.1).subtotal(), 81.0);
        assert_eq!(line(14.0, 12, 0.0).subtotal(), 168.0);
    }

    #[test]
    fn test_order_total() {
        let lines = vec![line(18.0, 5, 0.1), line(14.0, 12, 0.0), line(10.0, 0, 0.5)];
        assert_eq!(order_total(&lines), 249.0);
        assert_eq!(order_total(&[]), 0.0);
    }

    #[test]
    fn test_key_path() {
        assert_eq!(line(1.0, 1, 0.0).key().path(), "order/10248/product/11");
    }

    #[test]
    fn test_decode_with_id_aliases() {
        let detail: OrderDetail = serde_json::from_value(json!({
            "orderID": 10248,
            "productID": 42,
            "unitPrice": 9.5,
            "quantity": 10,
            "discount": 0.0
        }))
        .unwrap();
        assert_eq!(detail.key().path(), "order/10248/product/42");
        assert_eq!(detail.subtotal(), 95.0);
    }

    #[test]
    fn test_form_converts_percent_both_ways() {
        let detail = line(18.0, 5, 0.1);
        let form = OrderDetailForm::from_detail(&detail);
        assert_eq!(form.discount_percent, "10");
        assert_eq!(form.to_detail(10248), Ok(detail));

        let form = OrderDetailForm {
            product_id: "7".into(),
            unit_price: "30".into(),
            quantity: "2".into(),
            discount_percent: "".into(),
        };
        assert_eq!(form.to_detail(1).unwrap().discount, 0.0);
    }

    #[test]
    fn test_form_validation() {
        let valid = OrderDetailForm {
            product_id: "7".into(),
            unit_price: "30".into(),
            quantity: "2".into(),
            discount_percent: "15".into(),
        };
        assert!(valid.to_detail(1).is_ok());

        let missing_product = OrderDetailForm {
            product_id: " ".into(),
            ..valid.clone()
        };
        assert!(missing_product.to_detail(1).unwrap_err().contains("ID Producto"));

        let over_discount = OrderDetailForm {
            discount_percent: "120".into(),
            ..valid.clone()
        };
        assert!(over_discount.to_detail(1).is_err());

        let zero_quantity = OrderDetailForm {
            quantity: "0".into(),
            ..valid
        };
        assert!(zero_quantity.to_detail(1).is_err());
    }
}
