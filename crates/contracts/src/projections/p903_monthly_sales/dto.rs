use serde::{Deserialize, Serialize};

use crate::shared::export::{csv_decimal, ExcelExportable};
use crate::shared::number::{lenient_f64, lenient_i64};

pub const ENDPOINT: &str = "reportes/ventas-mensuales";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MonthlySalesRow {
    #[serde(deserialize_with = "lenient_i64")]
    pub year: i64,
    #[serde(deserialize_with = "lenient_i64")]
    pub month: i64,
    #[serde(deserialize_with = "lenient_f64")]
    pub total_sales: f64,
}

impl MonthlySalesRow {
    /// `7/1996`
    pub fn label(&self) -> String {
        format!("{}/{}", self.month, self.year)
    }
}

/// Month with the highest sales; the earliest wins a tie
pub fn best_month(rows: &[MonthlySalesRow]) -> Option<&MonthlySalesRow> {
    rows.iter().fold(None, |best: Option<&MonthlySalesRow>, row| match best {
        Some(b) if b.total_sales >= row.total_sales => Some(b),
        _ => Some(row),
    })
}

pub fn total_sales(rows: &[MonthlySalesRow]) -> f64 {
    rows.iter().map(|r| r.total_sales).sum()
}

impl ExcelExportable for MonthlySalesRow {
    fn headers() -> Vec<&'static str> {
        vec!["Mes/Año", "Total Ventas"]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![self.label(), csv_decimal(self.total_sales)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_label_and_totals() {
        let rows: Vec<MonthlySalesRow> = serde_json::from_value(json!([
            {"year": 1996, "month": 7, "totalSales": "27861.90"},
            {"year": 1996, "month": 8, "totalSales": 25485.28},
            {"year": 1996, "month": 9, "totalSales": 26381.40}
        ]))
        .unwrap();
        assert_eq!(rows[0].label(), "7/1996");
        assert_eq!(best_month(&rows).map(MonthlySalesRow::label), Some("7/1996".to_string()));
        assert!((total_sales(&rows) - 79728.58).abs() < 1e-6);
        assert_eq!(best_month(&[]), None);
    }
}
