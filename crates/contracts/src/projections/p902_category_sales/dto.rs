use serde::{Deserialize, Serialize};

use crate::shared::export::{csv_decimal, ExcelExportable};
use crate::shared::number::{lenient_f64, lenient_i64};
use crate::shared::report_query::{ReportColumn, ReportRow, SortValue};

pub const ENDPOINT: &str = "reportes/ventas-por-categoria";
pub const EXPORT_PREFIX: &str = "ventas_por_categoria";

pub const COLUMNS: &[ReportColumn] = &[
    ReportColumn::text("nombreCategoria", "Categoría"),
    ReportColumn::number("totalPedidos", "Total Pedidos"),
    ReportColumn::number("totalUnidadesVendidas", "Unidades Vendidas"),
    ReportColumn::number("precioPromedioVenta", "Precio Promedio"),
];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CategorySalesRow {
    pub nombre_categoria: String,
    #[serde(deserialize_with = "lenient_i64")]
    pub total_pedidos: i64,
    #[serde(deserialize_with = "lenient_i64")]
    pub total_unidades_vendidas: i64,
    #[serde(deserialize_with = "lenient_f64")]
    pub precio_promedio_venta: f64,
}

impl ReportRow for CategorySalesRow {
    fn sort_value(&self, column: &str) -> SortValue {
        match column {
            "nombreCategoria" => (&self.nombre_categoria).into(),
            "totalPedidos" => self.total_pedidos.into(),
            "totalUnidadesVendidas" => self.total_unidades_vendidas.into(),
            "precioPromedioVenta" => self.precio_promedio_venta.into(),
            _ => SortValue::Empty,
        }
    }
}

impl ExcelExportable for CategorySalesRow {
    fn headers() -> Vec<&'static str> {
        vec!["Categoría", "Total Pedidos", "Unidades Vendidas", "Precio Promedio"]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.nombre_categoria.clone(),
            self.total_pedidos.to_string(),
            self.total_unidades_vendidas.to_string(),
            csv_decimal(self.precio_promedio_venta),
        ]
    }
}

/// Category with the most units sold
pub fn best_category(rows: &[CategorySalesRow]) -> Option<&CategorySalesRow> {
    rows.iter()
        .fold(None, |best: Option<&CategorySalesRow>, row| match best {
            Some(b) if b.total_unidades_vendidas >= row.total_unidades_vendidas => Some(b),
            _ => Some(row),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_and_best_category() {
        let rows: Vec<CategorySalesRow> = serde_json::from_value(json!([
            {"nombreCategoria": "Beverages", "totalPedidos": 354, "totalUnidadesVendidas": 9532, "precioPromedioVenta": 37.98},
            {"nombreCategoria": "Dairy Products", "totalPedidos": 366, "totalUnidadesVendidas": "9149", "precioPromedioVenta": "26.38"},
            {"nombreCategoria": "Seafood", "totalPedidos": 330, "totalUnidadesVendidas": 9532, "precioPromedioVenta": 20.68}
        ]))
        .unwrap();
        assert_eq!(rows[1].total_unidades_vendidas, 9149);
        // first one wins a tie
        assert_eq!(best_category(&rows).map(|r| r.nombre_categoria.as_str()), Some("Beverages"));
        assert_eq!(best_category(&[]), None);
    }
}
