//! Read-only views over a processed batch.
//!
//! Nothing here mutates the batch; every view borrows from it.

pub mod division;
pub mod search;
pub mod subjects;

use crate::dataset::Batch;
use crate::model::{OverallStatus, SummaryRow};
use rust_decimal::Decimal;
use serde::Serialize;

/// Students strictly above this percentage qualify as top students.
pub const TOP_THRESHOLD: Decimal = Decimal::from_parts(8900, 0, 0, false, 2);

pub const TOP_LIMIT: usize = 10;

/// Headline numbers for the whole batch.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardStats {
    pub total_students: usize,
    pub average_percentage: Decimal,
    /// Share of students with status `Pass`, in percent.
    pub pass_rate: Decimal,
    pub highest_percentage: Decimal,
    pub passed: usize,
    pub atkt: usize,
    pub failed: usize,
    /// Statuses that are none of Pass, ATKT, Fail (including empty).
    pub other: usize,
}

pub fn dashboard(batch: &Batch) -> DashboardStats {
    let rows = batch.summary();
    let total = rows.len();

    let mut sum = Decimal::ZERO;
    let mut highest = Decimal::ZERO;
    let (mut passed, mut atkt, mut failed, mut other) = (0, 0, 0, 0);

    for row in rows {
        let pct = row.percentage_value();
        sum += pct;
        highest = highest.max(pct);
        match row.overall_status() {
            Some(OverallStatus::Pass) => passed += 1,
            Some(OverallStatus::Atkt) => atkt += 1,
            Some(OverallStatus::Fail) => failed += 1,
            None => other += 1,
        }
    }

    let (average_percentage, pass_rate) = if total == 0 {
        (Decimal::ZERO, Decimal::ZERO)
    } else {
        let n = Decimal::from(total);
        (
            (sum / n).round_dp(2),
            (Decimal::from(passed) * Decimal::ONE_HUNDRED / n).round_dp(2),
        )
    };

    DashboardStats {
        total_students: total,
        average_percentage,
        pass_rate,
        highest_percentage: highest,
        passed,
        atkt,
        failed,
        other,
    }
}

/// Passed students versus failed ones, where failed covers ATKT and Fail.
#[derive(Debug, Clone, Serialize)]
pub struct PassFailSplit<'a> {
    pub passed: Vec<&'a SummaryRow>,
    pub failed: Vec<&'a SummaryRow>,
}

pub fn pass_fail(batch: &Batch) -> PassFailSplit<'_> {
    let rows = batch.summary();
    PassFailSplit {
        passed: rows
            .iter()
            .filter(|r| r.overall_status() == Some(OverallStatus::Pass))
            .collect(),
        failed: rows.iter().filter(|r| r.is_failed()).collect(),
    }
}

/// Top students and how many cleared the threshold overall.
#[derive(Debug, Clone, Serialize)]
pub struct TopStudents<'a> {
    pub above_threshold: usize,
    pub ranked: Vec<&'a SummaryRow>,
}

/// Students strictly above `threshold`, best first, at most `limit`.
pub fn top_students(batch: &Batch, threshold: Decimal, limit: usize) -> TopStudents<'_> {
    let mut ranked: Vec<&SummaryRow> = batch
        .summary()
        .iter()
        .filter(|r| r.percentage_value() > threshold)
        .collect();
    // Stable sort keeps document order among equal percentages.
    ranked.sort_by(|a, b| b.percentage_value().cmp(&a.percentage_value()));

    let above_threshold = ranked.len();
    ranked.truncate(limit);
    TopStudents {
        above_threshold,
        ranked,
    }
}
