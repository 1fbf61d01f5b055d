use serde::{Deserialize, Serialize};

use crate::shared::export::ExcelExportable;
use crate::shared::number::lenient_i64;

pub const ENDPOINT: &str = "reportes/productos-mas-vendidos";

/// Bars drawn on the dashboard chart
pub const CHART_LIMIT: usize = 10;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TopProductRow {
    pub product_name: String,
    #[serde(deserialize_with = "lenient_i64")]
    pub total_units_sold: i64,
}

/// The first `CHART_LIMIT` rows, in backend order (already ranked)
pub fn chart_rows(rows: &[TopProductRow]) -> &[TopProductRow] {
    &rows[..rows.len().min(CHART_LIMIT)]
}

impl ExcelExportable for TopProductRow {
    fn headers() -> Vec<&'static str> {
        vec!["Producto", "Unidades Vendidas"]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![self.product_name.clone(), self.total_units_sold.to_string()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_chart_rows_capped_at_ten() {
        let rows: Vec<TopProductRow> = (0..14)
            .map(|i| TopProductRow {
                product_name: format!("P{}", i),
                total_units_sold: 100 - i,
            })
            .collect();
        assert_eq!(chart_rows(&rows).len(), 10);
        assert_eq!(chart_rows(&rows[..3]).len(), 3);
    }

    #[test]
    fn test_decode_units_as_string() {
        let row: TopProductRow =
            serde_json::from_value(json!({"productName": "Camembert Pierrot", "totalUnitsSold": "1577"}))
                .unwrap();
        assert_eq!(row.total_units_sold, 1577);
    }
}
