use contracts::domain::common::EntityRecord;
use contracts::shared::page::{Page, PageRequest};

use crate::shared::api_utils::{delete, get_json, post_json, put_json};

fn collection<T: EntityRecord>() -> &'static str {
    T::entity_metadata_info().collection_name
}

/// `{collection}/{id}` with the id percent-encoded
pub fn resource_path(collection: &str, id: &str) -> String {
    format!("{}/{}", collection, urlencoding::encode(id))
}

pub fn page_path(collection: &str, request: &PageRequest) -> String {
    format!("{}?{}", collection, request.to_query())
}

pub async fn fetch_page<T: EntityRecord>(request: PageRequest) -> Result<Page<T>, String> {
    get_json(&page_path(collection::<T>(), &request)).await
}

pub async fn fetch_by_id<T: EntityRecord>(id: &str) -> Result<T, String> {
    get_json(&resource_path(collection::<T>(), id)).await
}

pub async fn create<T: EntityRecord>(record: &T) -> Result<(), String> {
    post_json(collection::<T>(), record).await
}

pub async fn update<T: EntityRecord>(id: &str, record: &T) -> Result<(), String> {
    put_json(&resource_path(collection::<T>(), id), record).await
}

pub async fn remove<T: EntityRecord>(id: &str) -> Result<(), String> {
    delete(&resource_path(collection::<T>(), id)).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_customer::aggregate::Customer;
    use contracts::domain::a008_region::aggregate::Region;

    #[test]
    fn test_resource_path() {
        assert_eq!(resource_path("customers", "ALFKI"), "customers/ALFKI");
        assert_eq!(resource_path("territories", "01581"), "territories/01581");
        assert_eq!(resource_path("customers", "A B"), "customers/A%20B");
    }

    #[test]
    fn test_page_path() {
        assert_eq!(
            page_path(collection::<Customer>(), &PageRequest::new(2, 10)),
            "customers?page=2&size=10"
        );
        assert_eq!(collection::<Region>(), "region");
    }
}
