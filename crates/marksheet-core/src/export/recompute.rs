use crate::model::{OverallStatus, SubjectRecord};
use crate::template::{GRADED_SUBJECTS, MAX_MARKS, STATUS_SCAN_LIMIT};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

/// Total, status and percentage derived from the subject marks alone,
/// independent of the summary printed on the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recomputed {
    pub total: u64,
    pub status: OverallStatus,
    /// Two decimal places, e.g. `40.78`.
    pub percentage: String,
}

/// Recompute one student's result.
///
/// Sums the first nine subject totals (sentinels and unreadable totals add
/// nothing) and fails the student when any of the first sixteen subject
/// statuses is `F`. The two caps differ on the printed template and are
/// kept that way.
pub fn recompute(subjects: &[SubjectRecord]) -> Recomputed {
    let total: u64 = subjects
        .iter()
        .take(GRADED_SUBJECTS)
        .map(|s| s.total_mark().map_or(0, |m| u64::from(m.contribution())))
        .sum();

    let failed = subjects
        .iter()
        .take(STATUS_SCAN_LIMIT)
        .any(|s| s.subject_status == "F");

    Recomputed {
        total,
        status: if failed {
            OverallStatus::Fail
        } else {
            OverallStatus::Pass
        },
        percentage: format_percentage(total),
    }
}

/// `total / 900 * 100`, rounded half away from zero to two places.
pub fn format_percentage(total: u64) -> String {
    let pct = Decimal::from(total) * Decimal::ONE_HUNDRED / Decimal::from(MAX_MARKS);
    let rounded = pct.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{rounded:.2}")
}
