use crate::model::{DetailRecord, StudentRecord, SummaryRow};
use crate::parsing::{ParsedStudents, SkippedLine, SkippedPage};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A student left out of the summary dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExcludedRecord {
    pub page_number: usize,
    pub name: Option<String>,
    pub reason: String,
}

/// Everything the extraction passed over, for display next to the results.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Diagnostics {
    pub skipped_pages: Vec<SkippedPage>,
    pub skipped_lines: Vec<SkippedLine>,
    pub excluded_from_summary: Vec<ExcludedRecord>,
}

/// All results extracted from one document.
///
/// Built once and never mutated afterwards; report and export functions
/// take it by reference.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Batch {
    students: Vec<StudentRecord>,
    summary: Vec<SummaryRow>,
    detail: Vec<DetailRecord>,
    #[serde(skip)]
    detail_index: HashMap<String, usize>,
    diagnostics: Diagnostics,
}

impl Batch {
    /// Derive the summary and detail datasets from assembled students.
    ///
    /// Students without a seat number stay in the detail dataset but are not
    /// given a summary row, since the seat number is the summary's key.
    pub fn from_students(students: Vec<StudentRecord>) -> Self {
        Self::from_parsed(ParsedStudents {
            students,
            ..Default::default()
        })
    }

    pub fn from_parsed(parsed: ParsedStudents) -> Self {
        let mut diagnostics = Diagnostics {
            skipped_pages: parsed.skipped_pages,
            skipped_lines: parsed.skipped_lines,
            excluded_from_summary: Vec::new(),
        };

        let mut summary = Vec::with_capacity(parsed.students.len());
        let mut detail = Vec::with_capacity(parsed.students.len());
        let mut detail_index = HashMap::new();

        for student in &parsed.students {
            let record = DetailRecord::from_student(student);

            if student.has_seat_no() {
                summary.push(SummaryRow::from_student(student));
                detail_index.entry(record.seat_no.clone()).or_insert(detail.len());
            } else {
                tracing::warn!(
                    page = student.page_number,
                    name = student.name.as_deref().unwrap_or(""),
                    "student has no seat number; left out of the summary"
                );
                diagnostics.excluded_from_summary.push(ExcludedRecord {
                    page_number: student.page_number,
                    name: student.name.clone(),
                    reason: "missing seat number".into(),
                });
            }

            detail.push(record);
        }

        Batch {
            students: parsed.students,
            summary,
            detail,
            detail_index,
            diagnostics,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn students(&self) -> &[StudentRecord] {
        &self.students
    }

    /// Flat rows: seat number, name, percentage, status.
    pub fn summary(&self) -> &[SummaryRow] {
        &self.summary
    }

    /// Per-student records with index-aligned subject columns.
    pub fn detail(&self) -> &[DetailRecord] {
        &self.detail
    }

    /// Detail record for a seat number. With duplicate seat numbers the
    /// first record in document order is returned.
    pub fn detail_for(&self, seat_no: &str) -> Option<&DetailRecord> {
        self.detail_index
            .get(seat_no.trim())
            .and_then(|&i| self.detail.get(i))
    }

    pub fn student_for(&self, seat_no: &str) -> Option<&StudentRecord> {
        self.detail_index
            .get(seat_no.trim())
            .and_then(|&i| self.students.get(i))
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }
}
