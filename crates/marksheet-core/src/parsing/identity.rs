use crate::model::StudentRecord;
use crate::template::{COLLEGE_LABEL, PERCENTAGE_LABEL, PRN_LABEL, SEAT_LABEL, STATUS_LABEL};
use regex::Regex;
use std::sync::LazyLock;

static NAME_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.\s+[A-Z\s]+$").expect("valid regex"));

static SEAT_NO: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Seat No:\s*(\d+)").expect("valid regex"));

/// Identity fields a line can fill in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentityField {
    Name,
    SeatNo,
    RegistrationNo,
    Status,
    Percentage,
}

type Extractor = fn(&str) -> Option<String>;

/// Label-anchored extraction rules, applied to every line in this order.
const RULES: [(IdentityField, Extractor); 5] = [
    (IdentityField::Name, extract_name),
    (IdentityField::SeatNo, extract_seat_no),
    (IdentityField::RegistrationNo, extract_registration_no),
    (IdentityField::Status, extract_status),
    (IdentityField::Percentage, extract_percentage),
];

/// Field updates found on a single line.
pub fn scan_line(line: &str) -> Vec<(IdentityField, String)> {
    RULES
        .iter()
        .filter_map(|(field, extract)| extract(line).map(|value| (*field, value)))
        .collect()
}

/// Apply every rule to every line. Later lines overwrite earlier matches;
/// a label that never appears leaves its field unset.
pub fn apply_identity_rules(student: &mut StudentRecord, lines: &[&str]) {
    for line in lines {
        for (field, value) in scan_line(line) {
            let slot = match field {
                IdentityField::Name => &mut student.name,
                IdentityField::SeatNo => &mut student.seat_no,
                IdentityField::RegistrationNo => &mut student.registration_no,
                IdentityField::Status => &mut student.overall_status,
                IdentityField::Percentage => &mut student.percentage,
            };
            *slot = Some(value);
        }
    }
}

/// `12. ASHA RAJESH PATIL` -> `ASHA RAJESH PATIL`
fn extract_name(line: &str) -> Option<String> {
    let line = line.trim();
    if !NAME_LINE.is_match(line) {
        return None;
    }
    let (_, name) = line.split_once('.')?;
    non_empty(name.trim())
}

/// Only the combined seat / PRN / college header line carries the seat number.
fn extract_seat_no(line: &str) -> Option<String> {
    if !(line.contains(SEAT_LABEL) && line.contains(PRN_LABEL) && line.contains(COLLEGE_LABEL)) {
        return None;
    }
    SEAT_NO.captures(line).map(|caps| caps[1].to_string())
}

fn extract_registration_no(line: &str) -> Option<String> {
    first_token_after(line, PRN_LABEL)
}

fn extract_status(line: &str) -> Option<String> {
    first_token_after(line, STATUS_LABEL)
}

/// `Percentage: 72.50 %` -> `72.50`
fn extract_percentage(line: &str) -> Option<String> {
    let (_, after) = line.rsplit_once(PERCENTAGE_LABEL)?;
    let value = after.split('%').next().unwrap_or_default();
    non_empty(value.trim())
}

/// First whitespace-delimited token after the last occurrence of `label`.
fn first_token_after(line: &str, label: &str) -> Option<String> {
    let (_, after) = line.rsplit_once(label)?;
    after.split_whitespace().next().map(|t| t.to_string())
}

fn non_empty(s: &str) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEAT_LINE: &str =
        "Seat No: 4012345   PRN No. 2022016400123456   College Code: SANG   Centre: Sangola";

    #[test]
    fn test_name_line() {
        assert_eq!(
            extract_name("  12. ASHA RAJESH PATIL "),
            Some("ASHA RAJESH PATIL".into())
        );
        assert_eq!(extract_name("12. Asha Patil"), None);
        assert_eq!(extract_name("Name: ASHA"), None);
    }

    #[test]
    fn test_seat_requires_full_header_line() {
        assert_eq!(extract_seat_no(SEAT_LINE), Some("4012345".into()));
        assert_eq!(extract_seat_no("Seat No: 4012345"), None);
    }

    #[test]
    fn test_registration_no() {
        assert_eq!(
            extract_registration_no(SEAT_LINE),
            Some("2022016400123456".into())
        );
        assert_eq!(extract_registration_no("PRN No."), None);
    }

    #[test]
    fn test_status_and_percentage() {
        let line = "Total: 652/900   Percentage: 72.44 %   Status: ATKT";
        assert_eq!(extract_status(line), Some("ATKT".into()));
        assert_eq!(extract_percentage(line), Some("72.44".into()));
    }

    #[test]
    fn test_percentage_without_value() {
        assert_eq!(extract_percentage("Percentage: %"), None);
    }

    #[test]
    fn test_scan_line_reports_all_matches() {
        let fields: Vec<IdentityField> = scan_line(SEAT_LINE).into_iter().map(|(f, _)| f).collect();
        assert_eq!(fields, vec![IdentityField::SeatNo, IdentityField::RegistrationNo]);
    }

    #[test]
    fn test_missing_labels_leave_fields_unset() {
        let mut student = StudentRecord::default();
        apply_identity_rules(&mut student, &["3. RAHUL MANE", "nothing else here"]);
        assert_eq!(student.name.as_deref(), Some("RAHUL MANE"));
        assert!(student.seat_no.is_none());
        assert!(student.percentage.is_none());
    }

    #[test]
    fn test_later_lines_overwrite() {
        let mut student = StudentRecord::default();
        apply_identity_rules(&mut student, &["Status: Fail", "Result Status: Pass"]);
        assert_eq!(student.overall_status.as_deref(), Some("Pass"));
    }
}
