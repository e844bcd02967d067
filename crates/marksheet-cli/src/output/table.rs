use marksheet_core::model::{DetailRecord, SummaryRow};
use marksheet_core::reports::division::Band;
use marksheet_core::reports::search::StudentDetail;
use marksheet_core::reports::subjects::SubjectStats;
use marksheet_core::reports::DashboardStats;
use std::fmt::Write;

/// Seat, name, percentage and status, one student per line.
pub fn format_summary(rows: &[&SummaryRow]) -> String {
    if rows.is_empty() {
        return "  (no students)".into();
    }

    let name_width = rows
        .iter()
        .map(|r| r.name.chars().count())
        .max()
        .unwrap_or(4)
        .max(4);

    let mut out = String::new();
    let _ = writeln!(
        out,
        "  {:>4}  {:<10}  {:<name_width$}  {:>10}  Status",
        "No.", "Seat No", "Name", "Percentage"
    );
    for (i, row) in rows.iter().enumerate() {
        let _ = writeln!(
            out,
            "  {:>4}  {:<10}  {:<name_width$}  {:>10}  {}",
            i + 1,
            row.seat_no,
            row.name,
            row.percentage,
            row.status
        );
    }
    out.trim_end().to_string()
}

/// One block per student with the subject marks underneath.
pub fn format_detail(records: &[DetailRecord]) -> String {
    let mut out = String::new();
    for (i, record) in records.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        let _ = writeln!(
            out,
            "--- {} {} ({}%, {}) ---",
            display_or_dash(&record.seat_no),
            record.name,
            display_or_dash(&record.percentage),
            display_or_dash(&record.status)
        );
        if let Some(prn) = &record.registration_no {
            let _ = writeln!(out, "  PRN No: {prn}");
        }
        let _ = writeln!(out, "{}", subject_table(record));
    }
    out.trim_end().to_string()
}

fn subject_table(record: &DetailRecord) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "  {:<10} {:>6} {:>6} {:>8}  Status",
        "Code", "UA", "CA", "Total"
    );
    for s in record.subjects() {
        let _ = writeln!(
            out,
            "  {:<10} {:>6} {:>6} {:>8}  {}",
            s.code, s.internal_assessment, s.continuous_assessment, s.total, s.subject_status
        );
    }
    out.trim_end().to_string()
}

pub fn print_student_detail(detail: &StudentDetail<'_>) {
    let record = detail.record;
    println!("Seat No:    {}", record.seat_no);
    println!("Name:       {}", record.name);
    if let Some(prn) = &record.registration_no {
        println!("PRN No:     {prn}");
    }
    println!("Percentage: {}", display_or_dash(&record.percentage));
    println!("Status:     {}\n", display_or_dash(&record.status));
    println!("{}\n", subject_table(record));
    println!(
        "  Total marks: {}   Passed subjects: {}/{}",
        detail.total_marks,
        detail.passed_subjects,
        detail.subjects.len()
    );
}

pub fn print_dashboard(stats: &DashboardStats) {
    println!("  Students:           {}", stats.total_students);
    println!("  Average percentage: {}%", stats.average_percentage);
    println!("  Highest percentage: {}%", stats.highest_percentage);
    println!("  Pass rate:          {}%\n", stats.pass_rate);
    println!("  Pass: {}   ATKT: {}   Fail: {}", stats.passed, stats.atkt, stats.failed);
    if stats.other > 0 {
        println!("  Other or missing status: {}", stats.other);
    }
}

pub fn print_bands(bands: &[Band]) {
    println!("  Percentage distribution:");
    for band in bands {
        println!("    {:<8} {}", band.label, band.count);
    }
}

pub fn format_subjects(stats: &[SubjectStats]) -> String {
    if stats.is_empty() {
        return "  (no subjects with numeric totals)".into();
    }

    let mut out = String::new();
    let _ = writeln!(
        out,
        "  {:<10} {:>9} {:>10} {:>8} {:>6} {:>6}",
        "Subject", "Average", "Pass rate", "Students", "Passed", "Failed"
    );
    for s in stats {
        let _ = writeln!(
            out,
            "  {:<10} {:>9} {:>9}% {:>8} {:>6} {:>6}",
            s.code,
            s.average_marks.to_string(),
            s.pass_rate.to_string(),
            s.students,
            s.passed,
            s.failed
        );
    }
    out.trim_end().to_string()
}

fn display_or_dash(s: &str) -> &str {
    if s.is_empty() {
        "-"
    } else {
        s
    }
}
