use contracts::projections::p904_top_products::dto::{TopProductRow, ENDPOINT};

use crate::shared::api_utils::get_json;

/// Products ranked by units sold
pub async fn fetch_rows() -> Result<Vec<TopProductRow>, String> {
    get_json(ENDPOINT).await
}
