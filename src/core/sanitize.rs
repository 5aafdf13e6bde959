// src/core/sanitize.rs

/// Remove every occurrence of `unit` (e.g. " MHz") and trim what is left.
pub fn strip_unit<'a>(s: &'a str, unit: &str) -> std::borrow::Cow<'a, str> {
    if unit.is_empty() || !s.contains(unit) {
        return std::borrow::Cow::Borrowed(s.trim());
    }
    std::borrow::Cow::Owned(s.replace(unit, "").trim().to_string())
}

/// Parse a finite number; anything else is `None`.
pub fn parse_number(s: &str) -> Option<f64> {
    let t = s.trim();
    if t.is_empty() { return None; }
    t.parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_unit_variants() {
        assert_eq!(strip_unit("1800 MHz", " MHz"), "1800");
        assert_eq!(strip_unit(" 1800 ", " MHz"), "1800");
        assert_eq!(strip_unit("1800MHz", " MHz"), "1800MHz");
        assert_eq!(strip_unit("N/A", ""), "N/A");
    }

    #[test]
    fn parse_number_rejects_junk() {
        assert_eq!(parse_number("1313"), Some(1313.0));
        assert_eq!(parse_number(" 1.5 "), Some(1.5));
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("N/A"), None);
        assert_eq!(parse_number("inf"), None);
        assert_eq!(parse_number("NaN"), None);
    }
}
