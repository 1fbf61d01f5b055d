use contracts::projections::p902_category_sales::dto::{CategorySalesRow, ENDPOINT};

use crate::shared::api_utils::get_json;

/// Full result set; the screen filters, sorts and paginates it
pub async fn fetch_rows() -> Result<Vec<CategorySalesRow>, String> {
    get_json(ENDPOINT).await
}
