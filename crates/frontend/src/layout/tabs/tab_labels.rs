//! Tab titles. Entity screens take `list_name` from their metadata.

use contracts::domain::a001_customer::aggregate::ENTITY_METADATA as A001;
use contracts::domain::a002_order::aggregate::ENTITY_METADATA as A002;
use contracts::domain::a004_product::aggregate::ENTITY_METADATA as A004;
use contracts::domain::a005_category::aggregate::ENTITY_METADATA as A005;
use contracts::domain::a006_supplier::aggregate::ENTITY_METADATA as A006;
use contracts::domain::a007_shipper::aggregate::ENTITY_METADATA as A007;
use contracts::domain::a008_region::aggregate::ENTITY_METADATA as A008;
use contracts::domain::a009_territory::aggregate::ENTITY_METADATA as A009;
use contracts::domain::a010_employee::aggregate::ENTITY_METADATA as A010;

/// Readable title for a tab key, empty when the key is unknown
pub fn tab_label_for_key(key: &str) -> &'static str {
    match key {
        // ── Entities (a0xx) ───────────────────────────────────────────────
        "a001_customer" => A001.ui.list_name,
        "a002_order" => A002.ui.list_name,
        "a004_product" => A004.ui.list_name,
        "a005_category" => A005.ui.list_name,
        "a006_supplier" => A006.ui.list_name,
        "a007_shipper" => A007.ui.list_name,
        "a008_region" => A008.ui.list_name,
        "a009_territory" => A009.ui.list_name,
        "a010_employee" => A010.ui.list_name,

        // ── Reports (p9xx) ────────────────────────────────────────────────
        "p900_order_detail_report" => "Detalle Pedidos",
        "p901_customer_region_sales" => "Ventas Cliente/Región",
        "p902_category_sales" => "Ventas por Categoría",

        // ── Dashboards (d4xx) ─────────────────────────────────────────────
        "d400_sales_dashboard" => "Dashboard",

        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_follow_entity_metadata() {
        assert_eq!(tab_label_for_key(&A001.tab_key()), "Clientes");
        assert_eq!(tab_label_for_key(&A009.tab_key()), "Territorios");
        assert_eq!(tab_label_for_key("d400_sales_dashboard"), "Dashboard");
        assert_eq!(tab_label_for_key("nope"), "");
    }
}
