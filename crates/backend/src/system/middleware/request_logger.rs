use axum::body::{to_bytes, Body};
use axum::http::{Method, Request, StatusCode};
use axum::middleware::Next;
use axum::response::Response;
use chrono::Local;

use crate::shared::format::format_number;

/// Prints one line per request: time, duration, body size, status, method, path.
///
/// The response body is buffered to measure its real size.
pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let response = next.run(req).await;
    let (parts, body) = response.into_parts();

    match to_bytes(body, usize::MAX).await {
        Ok(bytes) => {
            println!(
                "{}",
                log_line(
                    parts.status,
                    &method,
                    &path,
                    start.elapsed().as_millis(),
                    &format_number(bytes.len())
                )
            );
            Response::from_parts(parts, Body::from(bytes))
        }
        Err(e) => {
            tracing::warn!("Failed to read response body for {} {}: {}", method, path, e);
            println!(
                "{}",
                log_line(parts.status, &method, &path, start.elapsed().as_millis(), "error")
            );
            Response::from_parts(parts, Body::default())
        }
    }
}

/// Cyan time for 200, brown for everything else
fn log_line(status: StatusCode, method: &Method, path: &str, millis: u128, size: &str) -> String {
    let color_code = if status == StatusCode::OK { "36" } else { "33" };
    format!(
        "\x1b[{}m{}\x1b[0m | {:>5}ms | {:>12} | {} {:>6} {}",
        color_code,
        Local::now().format("%H:%M:%S"),
        millis,
        size,
        status.as_u16(),
        method.as_str(),
        path
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_line_colors() {
        let ok = log_line(StatusCode::OK, &Method::GET, "/health", 3, "61");
        assert!(ok.starts_with("\x1b[36m"));
        assert!(ok.ends_with("200    GET /health"));

        let missing = log_line(StatusCode::NOT_FOUND, &Method::GET, "/api/v1/items/x", 1, "52");
        assert!(missing.starts_with("\x1b[33m"));
        assert!(missing.contains("| 404 "));
    }
}
