use contracts::domain::a003_order_detail::aggregate::{OrderDetail, OrderDetailKey, ENTITY_METADATA};

use crate::shared::api_utils::{delete, get_json, post_json, put_json};

fn order_path(order_id: i64) -> String {
    format!("{}/order/{}", ENTITY_METADATA.collection_name, order_id)
}

fn line_path(key: &OrderDetailKey) -> String {
    format!("{}/{}", ENTITY_METADATA.collection_name, key.path())
}

pub async fn fetch_by_order(order_id: i64) -> Result<Vec<OrderDetail>, String> {
    get_json(&order_path(order_id)).await
}

pub async fn create(detail: &OrderDetail) -> Result<(), String> {
    post_json(ENTITY_METADATA.collection_name, detail).await
}

pub async fn update(key: &OrderDetailKey, detail: &OrderDetail) -> Result<(), String> {
    put_json(&line_path(key), detail).await
}

pub async fn remove(key: &OrderDetailKey) -> Result<(), String> {
    delete(&line_path(key)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        assert_eq!(order_path(10248), "orderDetails/order/10248");
        let key = OrderDetailKey {
            order_id: 10248,
            product_id: 11,
        };
        assert_eq!(line_path(&key), "orderDetails/order/10248/product/11");
    }
}
