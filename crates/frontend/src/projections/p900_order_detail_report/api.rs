use contracts::projections::p900_order_detail_report::dto::{OrderDetailReportRow, ENDPOINT};

use crate::shared::api_utils::get_json;

/// Full result set; the screen filters, sorts and paginates it
pub async fn fetch_rows() -> Result<Vec<OrderDetailReportRow>, String> {
    get_json(ENDPOINT).await
}
