//! HTTP paths shared by the backend router and the frontend fetchers

/// Base path of the item read endpoint
pub const ITEMS_API_PATH: &str = "/api/v1/items";

/// Health check path
pub const HEALTH_PATH: &str = "/health";

/// Path of a single item, e.g. `/api/v1/items/55747713-...`
pub fn item_path(id: &str) -> String {
    format!("{}/{}", ITEMS_API_PATH, id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_path() {
        assert_eq!(item_path("abc"), "/api/v1/items/abc");
        assert_eq!(
            item_path("55747713-9cd4-45f7-a4cd-9916ed17a61d"),
            "/api/v1/items/55747713-9cd4-45f7-a4cd-9916ed17a61d"
        );
    }
}
