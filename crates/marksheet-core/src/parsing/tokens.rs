use crate::model::SubjectRecord;
use crate::parsing::marks::is_digits;

const CODE_POS: usize = 0;
const UA_POS: usize = 3;
const CA_POS: usize = 5;
const TOTAL_POS: usize = 8;

/// A subject line shorter than this carries no total and is dropped.
pub const MIN_SUBJECT_TOKENS: usize = TOTAL_POS + 1;

/// The status column is only trusted on full-width lines.
const STATUS_MIN_TOKENS: usize = 13;

/// Collapse variable-width mark encodings into single tokens.
///
/// Rules, first match wins:
/// 1. `*` `N`       -> `"* N"` (carry-forward keeps its marker)
/// 2. `$` `N` `+M`  -> `N+M`
/// 3. `N` `+` `M`   -> `N+M`
/// 4. `+M`          -> `M`
/// 5. lone `$`/`+`  -> dropped
/// 6. anything else -> verbatim
///
/// After this every mark occupies exactly one token, which restores the
/// column positions of the printed table.
pub fn normalize_tokens<S: AsRef<str>>(words: &[S]) -> Vec<String> {
    let words: Vec<&str> = words.iter().map(|w| w.as_ref()).collect();
    let mut parts = Vec::with_capacity(words.len());
    let mut i = 0;

    while i < words.len() {
        let word = words[i];
        let next = words.get(i + 1).copied();
        let after = words.get(i + 2).copied();

        if word == "*" && next.is_some_and(is_digits) {
            parts.push(format!("* {}", words[i + 1]));
            i += 2;
        } else if let Some(sum) = dollar_sum(word, next, after) {
            parts.push(sum.to_string());
            i += 3;
        } else if let Some(sum) = plus_sum(word, next, after) {
            parts.push(sum.to_string());
            i += 3;
        } else if let Some(rest) = word.strip_prefix('+').filter(|r| is_digits(r)) {
            parts.push(rest.to_string());
            i += 1;
        } else if word == "$" || word == "+" {
            i += 1;
        } else {
            parts.push(word.to_string());
            i += 1;
        }
    }

    parts
}

fn dollar_sum(word: &str, next: Option<&str>, after: Option<&str>) -> Option<u64> {
    if word != "$" {
        return None;
    }
    let base = next.filter(|n| is_digits(n))?;
    let bonus = after?.strip_prefix('+').filter(|r| is_digits(r))?;
    add(base, bonus)
}

fn plus_sum(word: &str, next: Option<&str>, after: Option<&str>) -> Option<u64> {
    if !is_digits(word) || next != Some("+") {
        return None;
    }
    let bonus = after.filter(|a| is_digits(a))?;
    add(word, bonus)
}

fn add(a: &str, b: &str) -> Option<u64> {
    a.parse::<u64>().ok()?.checked_add(b.parse().ok()?)
}

/// Map normalized positions onto a subject record.
///
/// Returns None when the sequence is too short to carry a total.
pub fn subject_from_tokens(parts: &[String]) -> Option<SubjectRecord> {
    if parts.len() < MIN_SUBJECT_TOKENS {
        return None;
    }

    let at = |pos: usize| parts.get(pos).cloned().unwrap_or_default();
    let subject_status = if parts.len() >= STATUS_MIN_TOKENS {
        at(parts.len() - 2)
    } else {
        String::new()
    };

    Some(SubjectRecord {
        code: at(CODE_POS),
        internal_assessment: at(UA_POS),
        continuous_assessment: at(CA_POS),
        total: at(TOTAL_POS),
        subject_status,
    })
}

/// Tokenize, normalize and map one subject line.
pub fn parse_subject_line(line: &str) -> Option<SubjectRecord> {
    let words: Vec<&str> = line.split_whitespace().collect();
    subject_from_tokens(&normalize_tokens(&words))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn norm(line: &str) -> Vec<String> {
        let words: Vec<&str> = line.split_whitespace().collect();
        normalize_tokens(&words)
    }

    #[test]
    fn test_star_keeps_marker() {
        assert_eq!(norm("* 12"), vec!["* 12"]);
    }

    #[test]
    fn test_dollar_plus_prefix_resolves_to_sum() {
        assert_eq!(norm("$ 14 +2"), vec!["16"]);
    }

    #[test]
    fn test_dollar_with_spaced_plus_resolves_to_sum() {
        // `$` is dropped on its own, then `14 + 2` is summed.
        assert_eq!(norm("$ 14 + 2"), vec!["16"]);
    }

    #[test]
    fn test_plain_plus_sum() {
        assert_eq!(norm("12 + 3"), vec!["15"]);
    }

    #[test]
    fn test_standalone_plus_prefix() {
        assert_eq!(norm("40 +5"), vec!["40", "5"]);
    }

    #[test]
    fn test_lone_markers_are_dropped() {
        assert_eq!(norm("AB $ - +"), vec!["AB", "-"]);
    }

    #[test]
    fn test_star_before_non_digit_is_verbatim() {
        assert_eq!(norm("* AB"), vec!["*", "AB"]);
    }

    #[test]
    fn test_overflowing_sum_is_not_resolved() {
        assert_eq!(
            norm("99999999999999999999 + 1"),
            vec!["99999999999999999999", "1"]
        );
    }

    #[test]
    fn test_full_line_positions() {
        let line = "BCA-201 Java 4 28 P 12 P 40 * 10 P 3 C P 1";
        let rec = parse_subject_line(line).unwrap();
        assert_eq!(rec.code, "BCA-201");
        assert_eq!(rec.internal_assessment, "28");
        assert_eq!(rec.continuous_assessment, "12");
        assert_eq!(rec.total, "* 10");
        assert_eq!(rec.subject_status, "P");
    }

    #[test]
    fn test_dollar_total_in_line() {
        let line = "ECS-203 Networks 4 30 P 10 P 40 $ 38 +2 P 4 B+ P 4";
        let rec = parse_subject_line(line).unwrap();
        assert_eq!(rec.total, "40");
        assert_eq!(rec.subject_status, "P");
    }

    #[test]
    fn test_short_line_without_status() {
        let line = "ENG-201 English 2 AB F 10 P 40 10 F";
        let rec = parse_subject_line(line).unwrap();
        assert_eq!(rec.internal_assessment, "AB");
        assert_eq!(rec.total, "10");
        assert_eq!(rec.subject_status, "");
    }

    #[test]
    fn test_line_too_short_is_dropped() {
        assert!(parse_subject_line("BCA Semester II").is_none());
    }

    #[test]
    fn test_normalization_is_idempotent() {
        let lines = [
            "BCA-201 Java 4 28 P 12 P 40 * 10 P 3 C P 1",
            "ECS-203 Networks 4 30 P 10 P 40 $ 38 +2 P 4 B+ P 4",
            "CC-204 Sports 2 - - 12 + 3 P 40 15 P 2 O P 2",
            "ENS-205 Env 2 AB F 20 P 40 AB F 0 F F 0",
        ];
        for line in lines {
            let once = norm(line);
            assert_eq!(normalize_tokens(&once), once, "line: {line}");
        }
    }

    #[test]
    fn test_star_before_plus_prefixed_mark_needs_second_pass() {
        // A lone `*` is only merged with a token that is already digits,
        // so `+N` after it resolves one pass too late.
        let once = norm("* +5");
        assert_eq!(once, vec!["*", "5"]);
        assert_eq!(normalize_tokens(&once), vec!["* 5"]);

        let once = norm("40 * + 12 P");
        assert_eq!(once, vec!["40", "*", "12", "P"]);
        assert_eq!(normalize_tokens(&once), vec!["40", "* 12", "P"]);
    }
}
