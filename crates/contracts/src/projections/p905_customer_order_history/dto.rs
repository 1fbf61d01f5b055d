use serde::{Deserialize, Serialize};

use crate::shared::number::lenient_f64;

/// Stored procedure endpoint, followed by `/{customerId}`
pub const ENDPOINT: &str = "procedimientos/historial-cliente";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomerOrderHistoryRow {
    #[serde(rename = "orderID", alias = "orderId")]
    pub order_id: i64,
    #[serde(rename = "orderDate")]
    pub order_date: Option<String>,
    #[serde(deserialize_with = "lenient_f64")]
    pub freight: f64,
    #[serde(rename = "shippedDate")]
    pub shipped_date: Option<String>,
}

impl CustomerOrderHistoryRow {
    pub fn is_shipped(&self) -> bool {
        self.shipped_date
            .as_deref()
            .map(|d| !d.trim().is_empty())
            .unwrap_or(false)
    }

    pub fn status_label(&self) -> &'static str {
        if self.is_shipped() {
            "Enviado"
        } else {
            "Pendiente"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_status_from_shipped_date() {
        let rows: Vec<CustomerOrderHistoryRow> = serde_json::from_value(json!([
            {"orderID": 10643, "orderDate": "1997-08-25T00:00:00", "freight": 29.46, "shippedDate": "1997-09-02T00:00:00"},
            {"orderID": 11011, "orderDate": "1998-04-09T00:00:00", "freight": "1.21", "shippedDate": null},
            {"orderId": 11012, "orderDate": "1998-04-09", "freight": 0.5, "shippedDate": ""}
        ]))
        .unwrap();
        assert_eq!(rows[0].status_label(), "Enviado");
        assert_eq!(rows[1].status_label(), "Pendiente");
        assert_eq!(rows[1].freight, 1.21);
        assert_eq!(rows[2].order_id, 11012);
        assert_eq!(rows[2].status_label(), "Pendiente");
    }
}
