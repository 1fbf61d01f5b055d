//! Stat card figures of the sales dashboard

use contracts::projections::p902_category_sales::dto::{best_category, CategorySalesRow};
use contracts::projections::p903_monthly_sales::dto::{best_month, total_sales, MonthlySalesRow};
use contracts::projections::p904_top_products::dto::TopProductRow;

use crate::shared::charts::ChartPoint;
use crate::shared::components::table::{format_money, format_number_int};

/// A figure and its hint line
#[derive(Debug, Clone, PartialEq)]
pub struct StatValue {
    pub value: String,
    pub subtitle: Option<String>,
}

pub fn total_sales_stat(months: &[MonthlySalesRow]) -> StatValue {
    StatValue {
        value: format_money(total_sales(months)),
        subtitle: Some(format!("{} meses", months.len())),
    }
}

pub fn categories_stat(categories: &[CategorySalesRow]) -> StatValue {
    StatValue {
        value: categories.len().to_string(),
        subtitle: best_category(categories).map(|c| format!("Líder: {}", c.nombre_categoria)),
    }
}

pub fn best_month_stat(months: &[MonthlySalesRow]) -> StatValue {
    match best_month(months) {
        Some(m) => StatValue {
            value: m.label(),
            subtitle: Some(format_money(m.total_sales)),
        },
        None => StatValue {
            value: "-".to_string(),
            subtitle: None,
        },
    }
}

/// Rows arrive ranked, so the first one is the best seller
pub fn top_product_stat(products: &[TopProductRow]) -> StatValue {
    match products.first() {
        Some(p) => StatValue {
            value: p.product_name.clone(),
            subtitle: Some(format!("{} unidades", format_number_int(p.total_units_sold as f64))),
        },
        None => StatValue {
            value: "-".to_string(),
            subtitle: None,
        },
    }
}

pub fn monthly_points(months: &[MonthlySalesRow]) -> Vec<ChartPoint> {
    months.iter().map(|m| (m.label(), m.total_sales)).collect()
}

pub fn category_points(categories: &[CategorySalesRow]) -> Vec<ChartPoint> {
    categories
        .iter()
        .map(|c| (c.nombre_categoria.clone(), c.total_unidades_vendidas as f64))
        .collect()
}

pub fn product_points(products: &[TopProductRow]) -> Vec<ChartPoint> {
    products
        .iter()
        .map(|p| (p.product_name.clone(), p.total_units_sold as f64))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn month(year: i64, month: i64, total_sales: f64) -> MonthlySalesRow {
        MonthlySalesRow {
            year,
            month,
            total_sales,
        }
    }

    #[test]
    fn test_month_stats() {
        let months = vec![month(1996, 7, 1000.0), month(1996, 8, 2500.5), month(1996, 9, 500.0)];
        assert_eq!(total_sales_stat(&months).value, "$4,000.50");
        let best = best_month_stat(&months);
        assert_eq!(best.value, "8/1996");
        assert_eq!(best.subtitle.as_deref(), Some("$2,500.50"));
        assert_eq!(best_month_stat(&[]).value, "-");
    }

    #[test]
    fn test_top_product_is_first_row() {
        let products = vec![
            TopProductRow {
                product_name: "Camembert Pierrot".to_string(),
                total_units_sold: 1577,
            },
            TopProductRow {
                product_name: "Raclette Courdavault".to_string(),
                total_units_sold: 1496,
            },
        ];
        let stat = top_product_stat(&products);
        assert_eq!(stat.value, "Camembert Pierrot");
        assert_eq!(stat.subtitle.as_deref(), Some("1,577 unidades"));
        assert_eq!(product_points(&products)[1].1, 1496.0);
    }

    #[test]
    fn test_categories_stat_names_leader() {
        let categories = vec![
            CategorySalesRow {
                nombre_categoria: "Beverages".to_string(),
                total_unidades_vendidas: 9532,
                ..Default::default()
            },
            CategorySalesRow {
                nombre_categoria: "Dairy Products".to_string(),
                total_unidades_vendidas: 9149,
                ..Default::default()
            },
        ];
        let stat = categories_stat(&categories);
        assert_eq!(stat.value, "2");
        assert_eq!(stat.subtitle.as_deref(), Some("Líder: Beverages"));
        assert_eq!(category_points(&categories).len(), 2);
    }
}
