use crate::dataset::Batch;
use crate::parsing::marks::is_digits;
use rust_decimal::Decimal;
use serde::Serialize;

/// Aggregate marks for one subject code across the batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubjectStats {
    pub code: String,
    pub average_marks: Decimal,
    /// Passed students over counted students, in percent.
    pub pass_rate: Decimal,
    pub students: usize,
    pub passed: usize,
    pub failed: usize,
}

#[derive(Default)]
struct Tally {
    marks: u64,
    count: usize,
    passed: usize,
}

/// Per-subject statistics in first-seen order.
///
/// Only plain integer totals are counted; carried (`* N`) and absent marks
/// are left out of both the average and the pass rate. Subjects with no
/// countable totals are omitted.
pub fn subject_statistics(batch: &Batch) -> Vec<SubjectStats> {
    let mut tallies: Vec<(String, Tally)> = Vec::new();

    for subject in batch.students().iter().flat_map(|s| s.subjects.iter()) {
        let pos = match tallies.iter().position(|(code, _)| *code == subject.code) {
            Some(pos) => pos,
            None => {
                tallies.push((subject.code.clone(), Tally::default()));
                tallies.len() - 1
            }
        };

        if !is_digits(&subject.total) {
            continue;
        }
        let Ok(mark) = subject.total.parse::<u64>() else {
            continue;
        };

        let tally = &mut tallies[pos].1;
        tally.marks += mark;
        tally.count += 1;
        if subject.is_passed() {
            tally.passed += 1;
        }
    }

    tallies
        .into_iter()
        .filter(|(_, t)| t.count > 0)
        .map(|(code, t)| {
            let n = Decimal::from(t.count);
            SubjectStats {
                code,
                average_marks: (Decimal::from(t.marks) / n).round_dp(2),
                pass_rate: (Decimal::from(t.passed) * Decimal::ONE_HUNDRED / n).round_dp(2),
                students: t.count,
                passed: t.passed,
                failed: t.count - t.passed,
            }
        })
        .collect()
}
