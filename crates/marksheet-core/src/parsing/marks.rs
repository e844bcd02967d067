use crate::model::{Mark, Sentinel};
use regex::Regex;
use std::sync::LazyLock;

static COMPENSATED_SUM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\$?\s*(\d+)\s*\+\s*(\d+)$").expect("valid regex"));

/// Parse a raw mark string into a typed Mark.
///
/// Handles formats like:
/// - "45" -> Numeric(45)
/// - "* 10" -> Carried(10)
/// - "$ 8 + 4" or "8 + 4" -> Numeric(12)
/// - "AB", "-", "*" -> Sentinel
///
/// Returns None for anything else (including empty strings); callers treat
/// that as a zero contribution.
pub fn parse_mark(s: &str) -> Option<Mark> {
    let s = s.trim();

    match s {
        "AB" => return Some(Mark::Sentinel(Sentinel::Absent)),
        "-" => return Some(Mark::Sentinel(Sentinel::NotApplicable)),
        "*" => return Some(Mark::Sentinel(Sentinel::Unresolved)),
        _ => {}
    }

    if is_digits(s) {
        return s.parse().ok().map(Mark::Numeric);
    }

    if s.contains('*') {
        let parts: Vec<&str> = s.split_whitespace().collect();
        return match parts.as_slice() {
            ["*", n] if is_digits(n) => n.parse().ok().map(Mark::Carried),
            _ => None,
        };
    }

    let caps = COMPENSATED_SUM.captures(s)?;
    let a: u32 = caps[1].parse().ok()?;
    let b: u32 = caps[2].parse().ok()?;
    a.checked_add(b).map(Mark::Numeric)
}

/// Non-empty and ASCII digits only.
pub fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_integer() {
        assert_eq!(parse_mark("45"), Some(Mark::Numeric(45)));
        assert_eq!(parse_mark(" 07 "), Some(Mark::Numeric(7)));
    }

    #[test]
    fn test_carried_total() {
        assert_eq!(parse_mark("* 10"), Some(Mark::Carried(10)));
    }

    #[test]
    fn test_star_without_separate_value_is_unreadable() {
        assert_eq!(parse_mark("*10"), None);
        assert_eq!(parse_mark("* x"), None);
    }

    #[test]
    fn test_dollar_sum() {
        assert_eq!(parse_mark("$ 8 + 4"), Some(Mark::Numeric(12)));
        assert_eq!(parse_mark("$14+2"), Some(Mark::Numeric(16)));
        assert_eq!(parse_mark("12 + 3"), Some(Mark::Numeric(15)));
    }

    #[test]
    fn test_sentinels() {
        assert_eq!(parse_mark("AB"), Some(Mark::Sentinel(Sentinel::Absent)));
        assert_eq!(parse_mark("-"), Some(Mark::Sentinel(Sentinel::NotApplicable)));
        assert_eq!(parse_mark("*"), Some(Mark::Sentinel(Sentinel::Unresolved)));
    }

    #[test]
    fn test_unreadable_values() {
        assert_eq!(parse_mark(""), None);
        assert_eq!(parse_mark("abc"), None);
        assert_eq!(parse_mark("99999999999"), None);
    }

    #[test]
    fn test_is_digits() {
        assert!(is_digits("0123"));
        assert!(!is_digits(""));
        assert!(!is_digits("+2"));
        assert!(!is_digits("١٢"));
    }
}
