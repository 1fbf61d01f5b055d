pub mod a001_customer;
pub mod a002_order;
pub mod a003_order_detail;
pub mod a004_product;
pub mod a005_category;
pub mod a006_supplier;
pub mod a007_shipper;
pub mod a008_region;
pub mod a009_territory;
pub mod a010_employee;
