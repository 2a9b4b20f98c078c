//! API utilities for frontend-backend communication

/// Port the catalog backend listens on
pub const BACKEND_PORT: u16 = 8080;

/// Get the base URL for API requests
///
/// Built from the current window location with the backend port, e.g.
/// "http://localhost:8080". Empty when there is no window.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    base_url(&protocol, &hostname)
}

fn base_url(protocol: &str, hostname: &str) -> String {
    format!("{}//{}:{}", protocol, hostname, BACKEND_PORT)
}

/// Full URL of a single catalog item
pub fn item_url(id: &str) -> String {
    format!("{}{}", api_base(), contracts::shared::api::item_path(id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url() {
        assert_eq!(base_url("http:", "localhost"), "http://localhost:8080");
        assert_eq!(
            base_url("https:", "shop.example.com"),
            "https://shop.example.com:8080"
        );
    }
}
