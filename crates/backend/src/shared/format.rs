use chrono::{DateTime, Utc};

/// Groups thousands with dots, as printed by the request log
///
/// ```ignore
/// assert_eq!(format_number(1234567), "1.234.567");
/// assert_eq!(format_number(42), "42");
/// ```
pub fn format_number(n: usize) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push('.');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

/// Display date of reviews and questions, e.g. `08 Aug 2025`.
///
/// The client shows this string as-is.
pub fn format_display_date(at: &DateTime<Utc>) -> String {
    at.format("%d %b %Y").to_string()
}
