//! Tab key to screen

use leptos::prelude::*;

use crate::dashboards::d400_sales_dashboard::ui::SalesDashboard;
use crate::domain::a001_customer::ui::list::CustomerList;
use crate::domain::a002_order::ui::list::OrderList;
use crate::domain::a004_product::ui::list::ProductList;
use crate::domain::a005_category::ui::list::CategoryList;
use crate::domain::a006_supplier::ui::list::SupplierList;
use crate::domain::a007_shipper::ui::list::ShipperList;
use crate::domain::a008_region::ui::list::RegionList;
use crate::domain::a009_territory::ui::list::TerritoryList;
use crate::domain::a010_employee::ui::list::EmployeeList;
use crate::projections::p900_order_detail_report::ui::list::OrderDetailReport;
use crate::projections::p901_customer_region_sales::ui::list::CustomerRegionSalesReport;
use crate::projections::p902_category_sales::ui::list::CategorySalesReport;

pub fn render_tab_content(key: &str) -> AnyView {
    match key {
        // ── Entities ──────────────────────────────────────────────────────
        "a001_customer" => view! { <CustomerList /> }.into_any(),
        "a002_order" => view! { <OrderList /> }.into_any(),
        "a004_product" => view! { <ProductList /> }.into_any(),
        "a005_category" => view! { <CategoryList /> }.into_any(),
        "a006_supplier" => view! { <SupplierList /> }.into_any(),
        "a007_shipper" => view! { <ShipperList /> }.into_any(),
        "a008_region" => view! { <RegionList /> }.into_any(),
        "a009_territory" => view! { <TerritoryList /> }.into_any(),
        "a010_employee" => view! { <EmployeeList /> }.into_any(),

        // ── Reports ───────────────────────────────────────────────────────
        "p900_order_detail_report" => view! { <OrderDetailReport /> }.into_any(),
        "p901_customer_region_sales" => view! { <CustomerRegionSalesReport /> }.into_any(),
        "p902_category_sales" => view! { <CategorySalesReport /> }.into_any(),

        // ── Dashboards ────────────────────────────────────────────────────
        "d400_sales_dashboard" => view! { <SalesDashboard /> }.into_any(),

        _ => {
            log::warn!("unknown tab key: {}", key);
            view! { <div class="placeholder">"Pantalla no disponible"</div> }.into_any()
        }
    }
}
