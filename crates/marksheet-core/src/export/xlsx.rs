use crate::dataset::Batch;
use crate::error::MarksheetError;
use crate::export::recompute::recompute;
use crate::model::SubjectRecord;
use rust_xlsxwriter::{Format, Workbook, Worksheet};
use std::collections::HashMap;

pub const SHEET_NAME: &str = "Student Results";

const BLOCK_LABELS: [&str; 4] = ["UA", "CA", "Total", "Subject_Status"];

/// Distinct subject codes across the batch, in first-seen order.
pub fn subject_columns(batch: &Batch) -> Vec<String> {
    let mut codes: Vec<String> = Vec::new();
    for student in batch.students() {
        for subject in &student.subjects {
            if !subject.code.is_empty() && !codes.contains(&subject.code) {
                codes.push(subject.code.clone());
            }
        }
    }
    codes
}

/// Header row: seat and name, one five-column block per subject code, a
/// spacer, then the recomputed total, status and percentage.
pub fn header_row(codes: &[String]) -> Vec<String> {
    let mut header = vec!["Seat No".to_string(), "Name".to_string()];
    for code in codes {
        header.push(code.clone());
        header.extend(BLOCK_LABELS.iter().map(|s| s.to_string()));
    }
    header.extend(["", "Total", "Status", "Percentage"].map(String::from));
    header
}

/// Render the whole batch as an xlsx workbook.
pub fn write_workbook(batch: &Batch) -> Result<Vec<u8>, MarksheetError> {
    let codes = subject_columns(batch);
    let bold = Format::new().set_bold();

    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_NAME)?;

    for (col, title) in header_row(&codes).iter().enumerate() {
        sheet.write_string_with_format(0, col_index(col)?, title, &bold)?;
    }

    for (i, student) in batch.students().iter().enumerate() {
        let row = u32::try_from(i + 1)
            .map_err(|_| MarksheetError::Export("too many students for one sheet".into()))?;

        if let Some(seat_no) = student.seat_no.as_deref().filter(|s| !s.is_empty()) {
            sheet.write_string_with_format(row, 0, seat_no, &bold)?;
        }
        write_text(sheet, row, 1, student.name.as_deref().unwrap_or(""))?;

        // Last record wins when a code repeats.
        let by_code: HashMap<&str, &SubjectRecord> = student
            .subjects
            .iter()
            .map(|s| (s.code.as_str(), s))
            .collect();

        let mut col = 2;
        for code in &codes {
            // The code column itself stays blank; the header names it.
            if let Some(subject) = by_code.get(code.as_str()) {
                let cells = [
                    &subject.internal_assessment,
                    &subject.continuous_assessment,
                    &subject.total,
                    &subject.subject_status,
                ];
                for (offset, value) in cells.iter().enumerate() {
                    write_text(sheet, row, col_index(col + 1 + offset)?, value)?;
                }
            }
            col += 1 + BLOCK_LABELS.len();
        }

        let result = recompute(&student.subjects);
        col += 1;
        sheet.write_number(row, col_index(col)?, result.total as f64)?;
        write_text(sheet, row, col_index(col + 1)?, result.status.as_str())?;
        write_text(sheet, row, col_index(col + 2)?, &result.percentage)?;
    }

    tracing::info!(
        students = batch.len(),
        subjects = codes.len(),
        "built results workbook"
    );

    Ok(workbook.save_to_buffer()?)
}

/// Empty strings are left as blank cells.
fn write_text(sheet: &mut Worksheet, row: u32, col: u16, value: &str) -> Result<(), MarksheetError> {
    if !value.is_empty() {
        sheet.write_string(row, col, value)?;
    }
    Ok(())
}

fn col_index(col: usize) -> Result<u16, MarksheetError> {
    u16::try_from(col).map_err(|_| MarksheetError::Export("too many subject columns".into()))
}
