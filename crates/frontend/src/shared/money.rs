/// Format a price in dirhams: whole amounts drop the decimals, fractional
/// ones keep two.
/// Example: 149.0 -> "149 DH", 149.5 -> "149.50 DH"
pub fn format_price(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{} DH", value as i64)
    } else {
        format!("{value:.2} DH")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(149.0), "149 DH");
        assert_eq!(format_price(149.5), "149.50 DH");
        assert_eq!(format_price(0.0), "0 DH");
        assert_eq!(format_price(19.99), "19.99 DH");
    }
}
