use contracts::projections::p902_category_sales::dto::CategorySalesRow;
use contracts::shared::report_query::{ReportFilter, ReportView, SortState};
use leptos::prelude::*;

use crate::shared::charts::ChartPoint;

#[derive(Clone, Debug)]
pub struct CategorySalesState {
    pub rows: Vec<CategorySalesRow>,
    /// Backend order until a header is clicked
    pub sort: Option<SortState>,
    pub is_loaded: bool,
    pub page: usize,
    pub page_size: usize,
}

impl Default for CategorySalesState {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            sort: None,
            is_loaded: false,
            page: 0,
            page_size: 10,
        }
    }
}

impl CategorySalesState {
    pub fn report_view(&self) -> ReportView {
        ReportView {
            filter: ReportFilter::new(),
            sort: self.sort.clone(),
            page: self.page,
            page_size: self.page_size,
        }
    }

    pub fn toggle_sort(&mut self, column: &str) {
        match &mut self.sort {
            Some(sort) => sort.toggle(column),
            None => self.sort = Some(SortState::new(column, Default::default())),
        }
        self.page = 0;
    }
}

/// Units sold per category
pub fn pie_data(rows: &[CategorySalesRow]) -> Vec<ChartPoint> {
    rows.iter()
        .map(|r| (r.nombre_categoria.clone(), r.total_unidades_vendidas as f64))
        .collect()
}

pub fn create_state() -> RwSignal<CategorySalesState> {
    RwSignal::new(CategorySalesState::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::report_query::SortDirection;

    fn row(name: &str, units: i64) -> CategorySalesRow {
        CategorySalesRow {
            nombre_categoria: name.to_string(),
            total_unidades_vendidas: units,
            ..Default::default()
        }
    }

    #[test]
    fn test_pie_data_uses_units() {
        let data = pie_data(&[row("Beverages", 9532), row("Condiments", 5298)]);
        assert_eq!(data[0], ("Beverages".to_string(), 9532.0));
        assert_eq!(data.len(), 2);
    }

    #[test]
    fn test_toggle_sort_from_backend_order() {
        let mut state = CategorySalesState {
            rows: vec![row("Seafood", 7681), row("Beverages", 9532), row("Produce", 2990)],
            page: 1,
            ..Default::default()
        };
        assert_eq!(state.report_view().apply(&state.rows).rows.len(), 0);

        state.toggle_sort("totalUnidadesVendidas");
        assert_eq!(state.page, 0);
        assert_eq!(
            state.sort,
            Some(SortState::new("totalUnidadesVendidas", SortDirection::Asc))
        );
        state.toggle_sort("totalUnidadesVendidas");
        let page = state.report_view().apply(&state.rows);
        assert_eq!(page.rows[0].nombre_categoria, "Beverages");
    }
}
