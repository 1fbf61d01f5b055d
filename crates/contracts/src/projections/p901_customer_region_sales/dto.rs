use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::shared::date::parse_iso_date;
use crate::shared::export::{csv_decimal, ExcelExportable};
use crate::shared::number::{lenient_f64, lenient_i64};
use crate::shared::report_query::{ReportColumn, ReportRow, SortValue};

pub const ENDPOINT: &str = "reportes/ventas-cliente-region";
pub const EXPORT_PREFIX: &str = "ventas_cliente_region";
pub const DEFAULT_SORT: &str = "cliente";

/// Columns joined by the global search box
pub const SEARCH_COLUMNS: &[&str] = &["cliente", "pais", "ciudad", "region"];

pub const COLUMNS: &[ReportColumn] = &[
    ReportColumn::text("cliente", "Cliente"),
    ReportColumn::text("pais", "País"),
    ReportColumn::text("region", "Región"),
    ReportColumn::text("ciudad", "Ciudad"),
    ReportColumn::number("totalPedidos", "Total Pedidos"),
    ReportColumn::number("totalVendido", "Total Vendido"),
    ReportColumn::number("promedioLinea", "Promedio/Línea"),
];

/// Sales of one customer with its location
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomerRegionSalesRow {
    pub cliente: String,
    pub contacto: Option<String>,
    pub pais: String,
    pub region: Option<String>,
    pub ciudad: String,
    #[serde(deserialize_with = "lenient_i64")]
    pub total_pedidos: i64,
    #[serde(deserialize_with = "lenient_f64")]
    pub total_vendido: f64,
    #[serde(deserialize_with = "lenient_f64")]
    pub promedio_linea: f64,
    /// Not every backend version sends it
    pub fecha: Option<String>,
}

impl CustomerRegionSalesRow {
    /// Region or `N/A`
    pub fn region_label(&self) -> String {
        match self.region.as_deref().map(str::trim) {
            Some(region) if !region.is_empty() => region.to_string(),
            _ => "N/A".to_string(),
        }
    }
}

impl ReportRow for CustomerRegionSalesRow {
    fn sort_value(&self, column: &str) -> SortValue {
        match column {
            "cliente" => (&self.cliente).into(),
            "contacto" => self.contacto.as_deref().into(),
            "pais" => (&self.pais).into(),
            "region" => self.region.as_deref().into(),
            "ciudad" => (&self.ciudad).into(),
            "totalPedidos" => self.total_pedidos.into(),
            "totalVendido" => self.total_vendido.into(),
            "promedioLinea" => self.promedio_linea.into(),
            "fecha" => self.row_date().into(),
            _ => SortValue::Empty,
        }
    }

    fn row_date(&self) -> Option<NaiveDate> {
        self.fecha.as_deref().and_then(parse_iso_date)
    }
}

impl ExcelExportable for CustomerRegionSalesRow {
    fn headers() -> Vec<&'static str> {
        vec![
            "Cliente",
            "Contacto",
            "País",
            "Región",
            "Ciudad",
            "Total Pedidos",
            "Total Vendido",
            "Promedio/Línea",
        ]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.cliente.clone(),
            self.contacto.clone().unwrap_or_default(),
            self.pais.clone(),
            self.region_label(),
            self.ciudad.clone(),
            self.total_pedidos.to_string(),
            csv_decimal(self.total_vendido),
            csv_decimal(self.promedio_linea),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::report_query::{sort_rows, ReportFilter, SortDirection};
    use serde_json::json;

    fn sample() -> Vec<CustomerRegionSalesRow> {
        serde_json::from_value(json!([
            {"cliente": "Ernst Handel", "contacto": "Roland Mendel", "pais": "Austria",
             "region": null, "ciudad": "Graz", "totalPedidos": 30, "totalVendido": 104874.98,
             "promedioLinea": 1036.5},
            {"cliente": "Save-a-lot Markets", "pais": "USA", "region": "ID", "ciudad": "Boise",
             "totalPedidos": 31, "totalVendido": "104361.95", "promedioLinea": 900.0,
             "fecha": "1997-05-01"},
            {"cliente": "QUICK-Stop", "pais": "Germany", "region": "", "ciudad": "Cunewalde",
             "totalPedidos": 28, "totalVendido": 110277.31, "promedioLinea": 1218.3,
             "fecha": "1998-01-15"}
        ]))
        .unwrap()
    }

    #[test]
    fn test_region_label() {
        let rows = sample();
        assert_eq!(rows[0].region_label(), "N/A");
        assert_eq!(rows[1].region_label(), "ID");
        assert_eq!(rows[2].region_label(), "N/A");
    }

    #[test]
    fn test_global_search_spans_location_columns() {
        let rows = sample();
        let by_country = ReportFilter::new().with_search(SEARCH_COLUMNS, "usa");
        assert_eq!(by_country.apply(&rows)[0].cliente, "Save-a-lot Markets");

        let by_city = ReportFilter::new().with_search(SEARCH_COLUMNS, "graz");
        assert_eq!(by_city.apply(&rows).len(), 1);
    }

    #[test]
    fn test_date_range_keeps_rows_without_date() {
        let rows = sample();
        let filter = ReportFilter::new()
            .with_date_range(NaiveDate::from_ymd_opt(1998, 1, 1), None);
        let kept: Vec<String> = filter.apply(&rows).into_iter().map(|r| r.cliente).collect();
        assert_eq!(kept, vec!["Ernst Handel", "QUICK-Stop"]);
    }

    #[test]
    fn test_sort_by_total_sold_desc() {
        let mut rows = sample();
        sort_rows(&mut rows, "totalVendido", SortDirection::Desc);
        assert_eq!(rows[0].cliente, "QUICK-Stop");
        assert_eq!(rows[2].cliente, "Save-a-lot Markets");
    }
}
