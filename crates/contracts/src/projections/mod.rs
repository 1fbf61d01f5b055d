pub mod p900_order_detail_report;
pub mod p901_customer_region_sales;
pub mod p902_category_sales;
pub mod p903_monthly_sales;
pub mod p904_top_products;
pub mod p905_customer_order_history;
