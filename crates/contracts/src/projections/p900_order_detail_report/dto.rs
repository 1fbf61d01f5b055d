use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::shared::date::parse_iso_date;
use crate::shared::export::{csv_decimal, ExcelExportable};
use crate::shared::number::{lenient_f64, lenient_i64};
use crate::shared::report_query::{ReportColumn, ReportRow, SortValue};

pub const ENDPOINT: &str = "reportes/detalle-pedidos";
pub const EXPORT_PREFIX: &str = "detalle_pedidos";
pub const DEFAULT_SORT: &str = "cliente";

/// Columns shown in the table; the export writes every field
pub const COLUMNS: &[ReportColumn] = &[
    ReportColumn::text("cliente", "Cliente"),
    ReportColumn::text("producto", "Producto"),
    ReportColumn::number("cantidad", "Cantidad"),
    ReportColumn::number("precioUnitario", "Precio Unit."),
    ReportColumn::number("descuento", "Descuento"),
    ReportColumn::number("totalLinea", "Total Línea"),
];

/// One order line joined with customer, product and category
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OrderDetailReportRow {
    #[serde(deserialize_with = "lenient_i64")]
    pub id_pedido: i64,
    pub fecha_pedido: Option<String>,
    pub cliente: String,
    pub producto: String,
    pub categoria: String,
    pub ciudad: String,
    #[serde(deserialize_with = "lenient_i64")]
    pub cantidad: i64,
    #[serde(deserialize_with = "lenient_f64")]
    pub precio_unitario: f64,
    /// Fraction in 0..=1
    #[serde(deserialize_with = "lenient_f64")]
    pub descuento: f64,
    #[serde(deserialize_with = "lenient_f64")]
    pub total_linea: f64,
}

impl OrderDetailReportRow {
    /// `10%`
    pub fn discount_label(&self) -> String {
        format!("{:.0}%", self.descuento * 100.0)
    }
}

impl ReportRow for OrderDetailReportRow {
    fn sort_value(&self, column: &str) -> SortValue {
        match column {
            "idPedido" => self.id_pedido.into(),
            "fechaPedido" => self.row_date().into(),
            "cliente" => (&self.cliente).into(),
            "producto" => (&self.producto).into(),
            "categoria" => (&self.categoria).into(),
            "ciudad" => (&self.ciudad).into(),
            "cantidad" => self.cantidad.into(),
            "precioUnitario" => self.precio_unitario.into(),
            "descuento" => self.descuento.into(),
            "totalLinea" => self.total_linea.into(),
            _ => SortValue::Empty,
        }
    }

    fn row_date(&self) -> Option<NaiveDate> {
        self.fecha_pedido.as_deref().and_then(parse_iso_date)
    }
}

impl ExcelExportable for OrderDetailReportRow {
    fn headers() -> Vec<&'static str> {
        vec![
            "ID Pedido",
            "Fecha Pedido",
            "Cliente",
            "Producto",
            "Categoría",
            "Ciudad",
            "Cantidad",
            "Precio Unitario",
            "Descuento",
            "Total Línea",
        ]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.id_pedido.to_string(),
            self.row_date()
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
            self.cliente.clone(),
            self.producto.clone(),
            self.categoria.clone(),
            self.ciudad.clone(),
            self.cantidad.to_string(),
            csv_decimal(self.precio_unitario),
            self.discount_label(),
            csv_decimal(self.total_linea),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::export::build_csv;
    use crate::shared::report_query::{ReportFilter, ReportView, SortDirection, SortState};
    use serde_json::json;

    fn sample() -> Vec<OrderDetailReportRow> {
        serde_json::from_value(json!([
            {"idPedido": 10248, "fechaPedido": "1996-07-04", "cliente": "Vins et alcools Chevalier",
             "producto": "Queso Cabrales", "categoria": "Dairy Products", "ciudad": "Reims",
             "cantidad": 12, "precioUnitario": 14.0, "descuento": 0.0, "totalLinea": 168.0},
            {"idPedido": 10249, "fechaPedido": "1996-07-05T00:00:00", "cliente": "Toms Spezialitäten",
             "producto": "Tofu", "categoria": "Produce", "ciudad": "Münster",
             "cantidad": 9, "precioUnitario": "18.60", "descuento": 0.1, "totalLinea": "150.66"},
            {"idPedido": 10250, "fechaPedido": "1996-07-08", "cliente": "hanari carnes",
             "producto": "Jack's New England Clam Chowder", "categoria": "Seafood", "ciudad": "Rio de Janeiro",
             "cantidad": 10, "precioUnitario": 7.7, "descuento": 0.0, "totalLinea": 77.0}
        ]))
        .unwrap()
    }

    #[test]
    fn test_decode_rows_with_string_numbers() {
        let rows = sample();
        assert_eq!(rows[1].precio_unitario, 18.6);
        assert_eq!(rows[1].total_linea, 150.66);
        assert_eq!(rows[1].discount_label(), "10%");
        assert_eq!(rows[1].row_date(), NaiveDate::from_ymd_opt(1996, 7, 5));
    }

    #[test]
    fn test_default_sort_by_customer_ignores_case() {
        let view = ReportView {
            filter: ReportFilter::new(),
            sort: Some(SortState::new(DEFAULT_SORT, SortDirection::Asc)),
            page: 0,
            page_size: 10,
        };
        let page = view.apply(&sample());
        let ids: Vec<i64> = page.rows.iter().map(|r| r.id_pedido).collect();
        assert_eq!(ids, vec![10250, 10249, 10248]);
    }

    #[test]
    fn test_filters_by_customer_product_and_dates() {
        let filter = ReportFilter::new()
            .with_text("cliente", "")
            .with_text("producto", "TOFU")
            .with_date_range(NaiveDate::from_ymd_opt(1996, 7, 5), NaiveDate::from_ymd_opt(1996, 7, 5));
        let rows = filter.apply(&sample());
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id_pedido, 10249);
    }

    #[test]
    fn test_export_writes_all_fields() {
        let csv = build_csv(&sample()[..1]).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(
            lines[1],
            "10248;1996-07-04;Vins et alcools Chevalier;Queso Cabrales;Dairy Products;Reims;12;14.00;0%;168.00"
        );
    }
}
