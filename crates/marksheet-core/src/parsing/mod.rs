pub mod identity;
pub mod marks;
pub mod tokens;

use crate::extraction::PageContent;
use crate::model::StudentRecord;
use crate::template::{DATA_PAGE_OFFSET, INSTITUTION_MARKER, SUBJECT_PREFIXES};
use identity::apply_identity_rules;
use serde::{Deserialize, Serialize};
use tokens::parse_subject_line;

/// A data page that produced no student.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedPage {
    pub page_number: usize,
    pub reason: String,
}

/// A subject line that was recognized but could not be turned into a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedLine {
    pub page_number: usize,
    pub line_text: String,
    pub reason: String,
}

/// Students assembled from a document, with what was passed over on the way.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParsedStudents {
    pub students: Vec<StudentRecord>,
    pub skipped_pages: Vec<SkippedPage>,
    pub skipped_lines: Vec<SkippedLine>,
}

/// Assemble student records from extracted pages.
///
/// Front-matter pages are ignored. Each remaining page is one student
/// block; blocks without the institutional marker produce nothing. None of
/// this is an error: a document of the wrong shape simply yields no
/// students.
pub fn parse_students(pages: &[PageContent]) -> ParsedStudents {
    let mut parsed = ParsedStudents::default();

    for page in pages {
        if page.page_number <= DATA_PAGE_OFFSET {
            continue;
        }

        if page.lines.iter().all(|l| l.trim().is_empty()) {
            tracing::debug!(page = page.page_number, "skipping blank page");
            parsed.skipped_pages.push(SkippedPage {
                page_number: page.page_number,
                reason: "blank page".into(),
            });
            continue;
        }

        if !page.contains(INSTITUTION_MARKER) {
            tracing::debug!(page = page.page_number, "page has no institutional marker");
            parsed.skipped_pages.push(SkippedPage {
                page_number: page.page_number,
                reason: format!("missing '{INSTITUTION_MARKER}'"),
            });
            continue;
        }

        let lines: Vec<&str> = page.lines.iter().map(|s| s.as_str()).collect();
        let student = parse_student_block(page.page_number, &lines, &mut parsed.skipped_lines);
        parsed.students.push(student);
    }

    parsed
}

/// Parse one student block: identity fields first, then subject lines in
/// document order.
pub fn parse_student_block(
    page_number: usize,
    lines: &[&str],
    skipped_lines: &mut Vec<SkippedLine>,
) -> StudentRecord {
    let mut student = StudentRecord {
        page_number,
        ..Default::default()
    };

    apply_identity_rules(&mut student, lines);

    for line in lines.iter().filter(|l| is_subject_line(l)) {
        match parse_subject_line(line) {
            Some(subject) => student.subjects.push(subject),
            None => {
                tracing::debug!(page = page_number, line = line.trim(), "dropping short subject line");
                skipped_lines.push(SkippedLine {
                    page_number,
                    line_text: line.trim().to_string(),
                    reason: "too few tokens for a subject record".into(),
                });
            }
        }
    }

    student
}

/// Check if a line mentions one of the subject-code families.
pub fn is_subject_line(line: &str) -> bool {
    SUBJECT_PREFIXES.iter().any(|p| line.contains(p))
}
