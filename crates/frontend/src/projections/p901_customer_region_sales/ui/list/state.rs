use contracts::projections::p901_customer_region_sales::dto::{
    CustomerRegionSalesRow, DEFAULT_SORT, SEARCH_COLUMNS,
};
use contracts::shared::date::parse_iso_date;
use contracts::shared::report_query::{ReportFilter, ReportView, SortDirection, SortState};
use leptos::prelude::*;

#[derive(Clone, Debug)]
pub struct CustomerRegionSalesState {
    pub rows: Vec<CustomerRegionSalesRow>,
    /// Matched against cliente, país, ciudad and región together
    pub search: String,
    pub date_from: String,
    pub date_to: String,
    pub sort: SortState,
    pub is_loaded: bool,
    pub page: usize,
    pub page_size: usize,
}

impl Default for CustomerRegionSalesState {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            search: String::new(),
            date_from: String::new(),
            date_to: String::new(),
            sort: SortState::new(DEFAULT_SORT, SortDirection::Asc),
            is_loaded: false,
            page: 0,
            page_size: 10,
        }
    }
}

impl CustomerRegionSalesState {
    pub fn report_view(&self) -> ReportView {
        ReportView {
            filter: ReportFilter::new()
                .with_search(SEARCH_COLUMNS, &self.search)
                .with_date_range(parse_iso_date(&self.date_from), parse_iso_date(&self.date_to)),
            sort: Some(self.sort.clone()),
            page: self.page,
            page_size: self.page_size,
        }
    }
}

pub fn create_state() -> RwSignal<CustomerRegionSalesState> {
    RwSignal::new(CustomerRegionSalesState::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn rows() -> Vec<CustomerRegionSalesRow> {
        serde_json::from_value(json!([
            {"cliente": "Wartian Herkku", "pais": "Finland", "ciudad": "Oulu", "totalVendido": 15648.7},
            {"cliente": "Great Lakes Food Market", "pais": "USA", "region": "OR", "ciudad": "Eugene", "totalVendido": 19711.1},
            {"cliente": "Ana Trujillo", "pais": "Mexico", "ciudad": "México D.F.", "totalVendido": 1402.95}
        ]))
        .unwrap()
    }

    #[test]
    fn test_search_and_paging() {
        let mut state = CustomerRegionSalesState {
            page_size: 2,
            ..Default::default()
        };
        let page = state.report_view().apply(&rows());
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.rows[0].cliente, "Ana Trujillo");

        state.search = "or".to_string(); // region OR
        let page = state.report_view().apply(&rows());
        assert_eq!(page.total, 1);
        assert_eq!(page.rows[0].pais, "USA");
    }
}
