use serde::{Deserialize, Serialize};

/// One slice of a paginated collection as returned by the list endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    #[serde(default = "Vec::new")]
    pub content: Vec<T>,
    #[serde(default)]
    pub total_elements: u64,
    #[serde(default)]
    pub total_pages: u32,
    /// 0-based page index
    #[serde(default)]
    pub number: u32,
    #[serde(default)]
    pub size: u32,
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            content: Vec::new(),
            total_elements: 0,
            total_pages: 0,
            number: 0,
            size: 0,
        }
    }
}

impl<T> Page<T> {
    /// Number of pages, derived from `totalElements` when the backend omitted it
    pub fn page_count(&self) -> u32 {
        if self.total_pages > 0 || self.size == 0 {
            return self.total_pages;
        }
        self.total_elements.div_ceil(self.size as u64) as u32
    }
}

/// Requested page of a list endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub size: u32,
}

impl PageRequest {
    pub const DEFAULT_SIZE: u32 = 10;

    pub fn new(page: u32, size: u32) -> Self {
        Self { page, size }
    }

    pub fn to_query(&self) -> String {
        format!("page={}&size={}", self.page, self.size)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(0, Self::DEFAULT_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_spring_page() {
        let raw = json!({
            "content": [1, 2, 3],
            "totalElements": 23,
            "totalPages": 3,
            "number": 0,
            "size": 10,
            "pageable": {"sort": {"sorted": false}}
        });
        let page: Page<i32> = serde_json::from_value(raw).unwrap();
        assert_eq!(page.content, vec![1, 2, 3]);
        assert_eq!(page.total_elements, 23);
        assert_eq!(page.page_count(), 3);
    }

    #[test]
    fn test_decode_partial_page() {
        let page: Page<i32> = serde_json::from_value(json!({"content": []})).unwrap();
        assert!(page.content.is_empty());
        assert_eq!(page.page_count(), 0);
    }

    #[test]
    fn test_page_count_derived_from_total() {
        let page: Page<i32> =
            serde_json::from_value(json!({"content": [], "totalElements": 21, "size": 10}))
                .unwrap();
        assert_eq!(page.page_count(), 3);
    }

    #[test]
    fn test_page_request_query() {
        assert_eq!(PageRequest::new(2, 10).to_query(), "page=2&size=10");
        assert_eq!(PageRequest::default().to_query(), "page=0&size=10");
    }
}
