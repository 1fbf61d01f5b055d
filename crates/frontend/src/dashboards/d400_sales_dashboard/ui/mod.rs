mod dashboard;
mod summary;

pub use dashboard::{SalesDashboard, TAB_KEY};
