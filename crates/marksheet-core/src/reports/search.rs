use crate::dataset::Batch;
use crate::error::MarksheetError;
use crate::model::{DetailRecord, SubjectRecord, SummaryRow};
use crate::parsing::marks::is_digits;
use serde::Serialize;

/// Case-insensitive substring search over seat number and name.
///
/// A blank term matches nothing.
pub fn search<'a>(batch: &'a Batch, term: &str) -> Vec<&'a SummaryRow> {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return Vec::new();
    }
    batch
        .summary()
        .iter()
        .filter(|r| r.seat_no.to_lowercase().contains(&term) || r.name.to_lowercase().contains(&term))
        .collect()
}

/// Marks table for one student plus a small summary.
#[derive(Debug, Clone, Serialize)]
pub struct StudentDetail<'a> {
    pub record: &'a DetailRecord,
    pub subjects: Vec<SubjectRecord>,
    /// Sum of plain integer totals over every subject.
    pub total_marks: u64,
    pub passed_subjects: usize,
}

pub fn student_detail<'a>(batch: &'a Batch, seat_no: &str) -> Result<StudentDetail<'a>, MarksheetError> {
    let record = batch
        .detail_for(seat_no)
        .ok_or_else(|| MarksheetError::UnknownSeat(seat_no.trim().to_string()))?;

    let subjects: Vec<SubjectRecord> = record.subjects().collect();
    let total_marks = subjects
        .iter()
        .filter(|s| is_digits(&s.total))
        .filter_map(|s| s.total.parse::<u64>().ok())
        .sum();
    let passed_subjects = subjects.iter().filter(|s| s.is_passed()).count();

    Ok(StudentDetail {
        record,
        subjects,
        total_marks,
        passed_subjects,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::StudentRecord;
    use crate::reports::fixtures::batch;

    #[test]
    fn test_search_by_name_and_seat() {
        let b = batch(&[
            ("4012345", "ASHA PATIL", "70.00", "Pass"),
            ("4012346", "RAHUL PAWAR", "50.00", "ATKT"),
        ]);
        assert_eq!(search(&b, "patil").len(), 1);
        assert_eq!(search(&b, " 40123 ").len(), 2);
        assert_eq!(search(&b, "PAWAR")[0].seat_no, "4012346");
        assert!(search(&b, "   ").is_empty());
        assert!(search(&b, "zzz").is_empty());
    }

    #[test]
    fn test_student_detail() {
        let subject = |code: &str, total: &str, status: &str| SubjectRecord {
            code: code.into(),
            total: total.into(),
            subject_status: status.into(),
            ..Default::default()
        };
        let b = Batch::from_students(vec![StudentRecord {
            seat_no: Some("9".into()),
            name: Some("KIRAN".into()),
            subjects: vec![
                subject("BCA-201", "60", "P"),
                subject("BCA-202", "* 10", "P"),
                subject("BCA-203", "AB", "F"),
            ],
            ..Default::default()
        }]);
        let detail = student_detail(&b, "9").unwrap();
        assert_eq!(detail.record.name, "KIRAN");
        assert_eq!(detail.subjects.len(), 3);
        assert_eq!(detail.total_marks, 60);
        assert_eq!(detail.passed_subjects, 2);
    }

    #[test]
    fn test_unknown_seat() {
        let b = Batch::default();
        assert!(matches!(
            student_detail(&b, "1"),
            Err(MarksheetError::UnknownSeat(_))
        ));
    }
}
