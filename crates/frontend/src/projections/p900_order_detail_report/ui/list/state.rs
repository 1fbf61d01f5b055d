use contracts::projections::p900_order_detail_report::dto::{OrderDetailReportRow, DEFAULT_SORT};
use contracts::shared::date::parse_iso_date;
use contracts::shared::report_query::{ReportFilter, ReportView, SortDirection, SortState};
use leptos::prelude::*;

#[derive(Clone, Debug)]
pub struct OrderDetailReportState {
    pub rows: Vec<OrderDetailReportRow>,
    pub cliente: String,
    pub producto: String,
    /// `YYYY-MM-DD` or empty
    pub date_from: String,
    pub date_to: String,
    pub sort: SortState,
    pub is_loaded: bool,
    pub page: usize,
    pub page_size: usize,
}

impl Default for OrderDetailReportState {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            cliente: String::new(),
            producto: String::new(),
            date_from: String::new(),
            date_to: String::new(),
            sort: SortState::new(DEFAULT_SORT, SortDirection::Asc),
            is_loaded: false,
            page: 0,
            page_size: 10,
        }
    }
}

impl OrderDetailReportState {
    pub fn report_view(&self) -> ReportView {
        ReportView {
            filter: ReportFilter::new()
                .with_text("cliente", &self.cliente)
                .with_text("producto", &self.producto)
                .with_date_range(parse_iso_date(&self.date_from), parse_iso_date(&self.date_to)),
            sort: Some(self.sort.clone()),
            page: self.page,
            page_size: self.page_size,
        }
    }
}

pub fn create_state() -> RwSignal<OrderDetailReportState> {
    RwSignal::new(OrderDetailReportState::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn rows() -> Vec<OrderDetailReportRow> {
        serde_json::from_value(json!([
            {"idPedido": 1, "fechaPedido": "1996-07-04", "cliente": "Toms Spezialitäten", "producto": "Tofu", "cantidad": 9, "totalLinea": 167.4},
            {"idPedido": 2, "fechaPedido": "1996-07-08", "cliente": "Hanari Carnes", "producto": "Tofu", "cantidad": 10, "totalLinea": 186.0},
            {"idPedido": 3, "fechaPedido": "1996-08-01", "cliente": "Hanari Carnes", "producto": "Chai", "cantidad": 3, "totalLinea": 43.2}
        ]))
        .unwrap()
    }

    #[test]
    fn test_default_sort_by_customer() {
        let page = OrderDetailReportState::default().report_view().apply(&rows());
        let clientes: Vec<&str> = page.rows.iter().map(|r| r.cliente.as_str()).collect();
        assert_eq!(clientes, ["Hanari Carnes", "Hanari Carnes", "Toms Spezialitäten"]);
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn test_filters_combine() {
        let state = OrderDetailReportState {
            producto: "tofu".to_string(),
            date_to: "1996-07-31".to_string(),
            cliente: "hanari".to_string(),
            ..Default::default()
        };
        let page = state.report_view().apply(&rows());
        assert_eq!(page.total, 1);
        assert_eq!(page.rows[0].id_pedido, 2);
    }
}
