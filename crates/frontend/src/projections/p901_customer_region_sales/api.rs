use contracts::projections::p901_customer_region_sales::dto::{CustomerRegionSalesRow, ENDPOINT};

use crate::shared::api_utils::get_json;

/// Full result set; the screen filters, sorts and paginates it
pub async fn fetch_rows() -> Result<Vec<CustomerRegionSalesRow>, String> {
    get_json(ENDPOINT).await
}
