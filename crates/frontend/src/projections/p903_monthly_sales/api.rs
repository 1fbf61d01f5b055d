use contracts::projections::p903_monthly_sales::dto::{MonthlySalesRow, ENDPOINT};

use crate::shared::api_utils::get_json;

/// Months in chronological order
pub async fn fetch_rows() -> Result<Vec<MonthlySalesRow>, String> {
    get_json(ENDPOINT).await
}
