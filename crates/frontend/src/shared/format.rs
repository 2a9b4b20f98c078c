/// Colombian peso style price without decimals, e.g. `$ 1.299.900`
pub fn format_price(price: i64) -> String {
    let digits = price.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    if price < 0 {
        format!("-$ {}", grouped)
    } else {
        format!("$ {}", grouped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(1_299_900), "$ 1.299.900");
        assert_eq!(format_price(0), "$ 0");
        assert_eq!(format_price(999), "$ 999");
        assert_eq!(format_price(1000), "$ 1.000");
        assert_eq!(format_price(-25_000), "-$ 25.000");
    }
}
