/// Lenient `?page=` parsing: absent, non-numeric and non-positive values all
/// fall back to the first page.
pub fn parse_page(raw: Option<&str>) -> u32 {
    raw.and_then(|s| s.trim().parse::<i64>().ok())
        .filter(|&n| n >= 1)
        .map(|n| n.min(u32::MAX as i64) as u32)
        .unwrap_or(1)
}

pub fn validate_page_size(size: u32) -> u32 {
    size.max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_page_defaults_to_first() {
        assert_eq!(parse_page(None), 1);
    }

    #[test]
    fn numeric_page_is_used() {
        assert_eq!(parse_page(Some("3")), 3);
        assert_eq!(parse_page(Some(" 7 ")), 7);
    }

    #[test]
    fn invalid_pages_clamp_to_first() {
        assert_eq!(parse_page(Some("abc")), 1);
        assert_eq!(parse_page(Some("0")), 1);
        assert_eq!(parse_page(Some("-4")), 1);
        assert_eq!(parse_page(Some("")), 1);
        assert_eq!(parse_page(Some("2.5")), 1);
    }

    #[test]
    fn huge_pages_saturate() {
        assert_eq!(parse_page(Some("99999999999")), u32::MAX);
    }

    #[test]
    fn page_size_is_at_least_one() {
        assert_eq!(validate_page_size(0), 1);
        assert_eq!(validate_page_size(25), 25);
    }
}
