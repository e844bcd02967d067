use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Typed view of a raw mark string, used where marks are added up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mark {
    /// Plain integer, or a `$`/`+` compensation already resolved to a sum.
    Numeric(u32),
    /// Carry-forward total printed as `* N`.
    Carried(u32),
    Sentinel(Sentinel),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sentinel {
    /// `AB`
    Absent,
    /// `-`
    NotApplicable,
    /// A lone `*` with no value.
    Unresolved,
}

impl Mark {
    /// Marks this value adds to an aggregate total.
    pub fn contribution(&self) -> u32 {
        match self {
            Mark::Numeric(v) | Mark::Carried(v) => *v,
            Mark::Sentinel(_) => 0,
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mark::Numeric(v) => write!(f, "{v}"),
            Mark::Carried(v) => write!(f, "* {v}"),
            Mark::Sentinel(Sentinel::Absent) => write!(f, "AB"),
            Mark::Sentinel(Sentinel::NotApplicable) => write!(f, "-"),
            Mark::Sentinel(Sentinel::Unresolved) => write!(f, "*"),
        }
    }
}

/// Result status printed on the document for a whole student.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OverallStatus {
    Pass,
    /// Allowed to keep term: conditional pass with backlog.
    #[serde(rename = "ATKT")]
    Atkt,
    Fail,
}

impl OverallStatus {
    /// Parse the status exactly as printed (`Pass`, `ATKT`, `Fail`).
    pub fn from_printed(s: &str) -> Option<OverallStatus> {
        match s.trim() {
            "Pass" => Some(OverallStatus::Pass),
            "ATKT" => Some(OverallStatus::Atkt),
            "Fail" => Some(OverallStatus::Fail),
            _ => None,
        }
    }

    /// ATKT counts as failed in every aggregate unless a view isolates it.
    pub fn is_failed(&self) -> bool {
        matches!(self, OverallStatus::Atkt | OverallStatus::Fail)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OverallStatus::Pass => "Pass",
            OverallStatus::Atkt => "ATKT",
            OverallStatus::Fail => "Fail",
        }
    }
}

impl fmt::Display for OverallStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OverallStatus {
    type Err = String;

    /// Case-insensitive, for user input such as CLI filters.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pass" => Ok(OverallStatus::Pass),
            "atkt" => Ok(OverallStatus::Atkt),
            "fail" => Ok(OverallStatus::Fail),
            other => Err(format!("unknown status '{other}' (expected Pass, ATKT or Fail)")),
        }
    }
}

/// One subject's result for one student. Fields are kept verbatim for display.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectRecord {
    pub code: String,
    /// Unit assessment (UA).
    pub internal_assessment: String,
    /// Continuous assessment (CA).
    pub continuous_assessment: String,
    pub total: String,
    /// `P` for a passed subject; empty when the line had no status column.
    pub subject_status: String,
}

impl SubjectRecord {
    pub fn total_mark(&self) -> Option<Mark> {
        crate::parsing::marks::parse_mark(&self.total)
    }

    pub fn is_passed(&self) -> bool {
        self.subject_status == "P"
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StudentRecord {
    pub seat_no: Option<String>,
    pub name: Option<String>,
    /// Permanent registration number (PRN).
    pub registration_no: Option<String>,
    /// Percentage as printed on the document.
    pub percentage: Option<String>,
    /// Status as printed on the document.
    pub overall_status: Option<String>,
    /// Source page the record was read from.
    pub page_number: usize,
    pub subjects: Vec<SubjectRecord>,
}

impl StudentRecord {
    pub fn has_seat_no(&self) -> bool {
        self.seat_no.as_deref().is_some_and(|s| !s.trim().is_empty())
    }

    pub fn status(&self) -> Option<OverallStatus> {
        self.overall_status.as_deref().and_then(OverallStatus::from_printed)
    }

    pub fn percentage_value(&self) -> Option<Decimal> {
        self.percentage.as_deref().and_then(parse_percentage)
    }
}

/// Parse a printed percentage; `None` when it is not a number.
pub fn parse_percentage(s: &str) -> Option<Decimal> {
    Decimal::from_str(s.trim().trim_end_matches('%').trim()).ok()
}

/// Flat per-student row of the summary dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryRow {
    #[serde(rename = "Seat No")]
    pub seat_no: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Percentage")]
    pub percentage: String,
    #[serde(rename = "Status")]
    pub status: String,
}

impl SummaryRow {
    pub fn from_student(student: &StudentRecord) -> Self {
        SummaryRow {
            seat_no: student.seat_no.clone().unwrap_or_default(),
            name: student.name.clone().unwrap_or_default(),
            percentage: student.percentage.clone().unwrap_or_default(),
            status: student.overall_status.clone().unwrap_or_default(),
        }
    }

    /// Printed percentage as a decimal. Unreadable values count as zero.
    pub fn percentage_value(&self) -> Decimal {
        parse_percentage(&self.percentage).unwrap_or(Decimal::ZERO)
    }

    pub fn overall_status(&self) -> Option<OverallStatus> {
        OverallStatus::from_printed(&self.status)
    }

    pub fn is_failed(&self) -> bool {
        self.overall_status().is_some_and(|s| s.is_failed())
    }
}

/// Per-student record with index-aligned subject columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailRecord {
    #[serde(rename = "Seat No")]
    pub seat_no: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "PRN No", skip_serializing_if = "Option::is_none", default)]
    pub registration_no: Option<String>,
    #[serde(rename = "Percentage")]
    pub percentage: String,
    #[serde(rename = "Status")]
    pub status: String,
    #[serde(rename = "Code")]
    pub codes: Vec<String>,
    #[serde(rename = "UA")]
    pub internal_assessment: Vec<String>,
    #[serde(rename = "CA")]
    pub continuous_assessment: Vec<String>,
    #[serde(rename = "Total")]
    pub totals: Vec<String>,
    #[serde(rename = "Status1")]
    pub subject_status: Vec<String>,
}

impl DetailRecord {
    pub fn from_student(student: &StudentRecord) -> Self {
        let subjects = &student.subjects;
        DetailRecord {
            seat_no: student.seat_no.clone().unwrap_or_default(),
            name: student.name.clone().unwrap_or_default(),
            registration_no: student.registration_no.clone(),
            percentage: student.percentage.clone().unwrap_or_default(),
            status: student.overall_status.clone().unwrap_or_default(),
            codes: subjects.iter().map(|s| s.code.clone()).collect(),
            internal_assessment: subjects
                .iter()
                .map(|s| s.internal_assessment.clone())
                .collect(),
            continuous_assessment: subjects
                .iter()
                .map(|s| s.continuous_assessment.clone())
                .collect(),
            totals: subjects.iter().map(|s| s.total.clone()).collect(),
            subject_status: subjects.iter().map(|s| s.subject_status.clone()).collect(),
        }
    }

    pub fn subject_count(&self) -> usize {
        self.codes.len()
    }

    /// Rebuild the subject at `index` from the parallel columns.
    pub fn subject(&self, index: usize) -> Option<SubjectRecord> {
        let column = |c: &[String]| c.get(index).cloned().unwrap_or_default();
        self.codes.get(index).map(|code| SubjectRecord {
            code: code.clone(),
            internal_assessment: column(&self.internal_assessment),
            continuous_assessment: column(&self.continuous_assessment),
            total: column(&self.totals),
            subject_status: column(&self.subject_status),
        })
    }

    pub fn subjects(&self) -> impl Iterator<Item = SubjectRecord> + '_ {
        (0..self.subject_count()).filter_map(|i| self.subject(i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn subject(code: &str, total: &str, status: &str) -> SubjectRecord {
        SubjectRecord {
            code: code.into(),
            internal_assessment: "30".into(),
            continuous_assessment: "12".into(),
            total: total.into(),
            subject_status: status.into(),
        }
    }

    #[test]
    fn test_mark_display_round_trips_raw_forms() {
        assert_eq!(Mark::Carried(10).to_string(), "* 10");
        assert_eq!(Mark::Sentinel(Sentinel::Absent).to_string(), "AB");
        assert_eq!(Mark::Sentinel(Sentinel::Unresolved).to_string(), "*");
    }

    #[test]
    fn test_sentinel_contributes_nothing() {
        assert_eq!(Mark::Sentinel(Sentinel::NotApplicable).contribution(), 0);
        assert_eq!(Mark::Carried(12).contribution(), 12);
    }

    #[test]
    fn test_atkt_is_failed() {
        assert!(OverallStatus::Atkt.is_failed());
        assert!(OverallStatus::Fail.is_failed());
        assert!(!OverallStatus::Pass.is_failed());
        assert_eq!(OverallStatus::from_printed("pass"), None);
        assert_eq!("atkt".parse::<OverallStatus>(), Ok(OverallStatus::Atkt));
    }

    #[test]
    fn test_summary_row_projection() {
        let student = StudentRecord {
            seat_no: Some("1001".into()),
            name: Some("ASHA PATIL".into()),
            percentage: Some("72.50".into()),
            overall_status: Some("ATKT".into()),
            ..Default::default()
        };
        let row = SummaryRow::from_student(&student);
        assert_eq!(row.seat_no, "1001");
        assert_eq!(row.percentage_value(), dec!(72.50));
        assert!(row.is_failed());
    }

    #[test]
    fn test_unreadable_percentage_is_zero() {
        let row = SummaryRow {
            seat_no: "1".into(),
            name: "X".into(),
            percentage: "N/A".into(),
            status: "Pass".into(),
        };
        assert_eq!(row.percentage_value(), Decimal::ZERO);
    }

    #[test]
    fn test_detail_record_columns_are_aligned() {
        let student = StudentRecord {
            seat_no: Some("1001".into()),
            subjects: vec![subject("BCA-201", "65", "P"), subject("ENG-202", "* 12", "F")],
            ..Default::default()
        };
        let detail = DetailRecord::from_student(&student);
        assert_eq!(detail.codes, vec!["BCA-201", "ENG-202"]);
        assert_eq!(detail.totals, vec!["65", "* 12"]);
        assert_eq!(detail.subject(1).unwrap(), student.subjects[1]);
        assert!(detail.subject(2).is_none());
    }

    #[test]
    fn test_detail_json_field_names() {
        let detail = DetailRecord::from_student(&StudentRecord {
            seat_no: Some("7".into()),
            ..Default::default()
        });
        let json = serde_json::to_value(&detail).unwrap();
        assert_eq!(json["Seat No"], "7");
        assert!(json.get("PRN No").is_none());
        assert!(json["Status1"].as_array().unwrap().is_empty());
    }
}
