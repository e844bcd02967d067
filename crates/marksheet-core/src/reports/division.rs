use crate::dataset::Batch;
use crate::error::MarksheetError;
use crate::model::{OverallStatus, SummaryRow};
use rust_decimal::Decimal;
use serde::Serialize;

/// Selection of students by percentage range and printed status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DivisionFilter {
    /// Inclusive lower bound.
    pub min: Decimal,
    /// Inclusive upper bound.
    pub max: Decimal,
    pub statuses: Vec<OverallStatus>,
}

impl DivisionFilter {
    pub fn new(min: Decimal, max: Decimal, statuses: Vec<OverallStatus>) -> Result<Self, MarksheetError> {
        if min > max {
            return Err(MarksheetError::InvalidFilter(format!(
                "minimum percentage {min} is above maximum {max}"
            )));
        }
        if min < Decimal::ZERO || max > Decimal::ONE_HUNDRED {
            return Err(MarksheetError::InvalidFilter(
                "percentages must lie between 0 and 100".into(),
            ));
        }
        Ok(DivisionFilter { min, max, statuses })
    }

    /// Passing students from 60% up to the best percentage in the batch,
    /// capped at 100.
    pub fn default_for(batch: &Batch) -> Self {
        DivisionFilter {
            min: Decimal::from(60),
            max: highest_percentage(batch)
                .max(Decimal::from(60))
                .min(Decimal::ONE_HUNDRED),
            statuses: vec![OverallStatus::Pass],
        }
    }

    pub fn matches(&self, row: &SummaryRow) -> bool {
        let pct = row.percentage_value();
        self.min <= pct
            && pct <= self.max
            && row
                .overall_status()
                .is_some_and(|s| self.statuses.contains(&s))
    }

    /// `Students with percentage between 60% and 100%`
    pub fn describe(&self) -> String {
        format!(
            "Students with percentage between {}% and {}%",
            self.min.normalize(),
            self.max.normalize()
        )
    }
}

/// Highest printed percentage, or 100 for an empty batch.
pub fn highest_percentage(batch: &Batch) -> Decimal {
    batch
        .summary()
        .iter()
        .map(|r| r.percentage_value())
        .max()
        .unwrap_or(Decimal::ONE_HUNDRED)
}

/// Students matching the filter, sorted by name.
pub fn division<'a>(batch: &'a Batch, filter: &DivisionFilter) -> Vec<&'a SummaryRow> {
    let mut rows: Vec<&SummaryRow> = batch.summary().iter().filter(|r| filter.matches(r)).collect();
    rows.sort_by(|a, b| a.name.cmp(&b.name));
    rows
}

/// Count of students in one percentage band.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Band {
    pub label: &'static str,
    pub count: usize,
}

const BANDS: [(&str, u32, u32); 5] = [
    ("<60%", 0, 60),
    ("60-70%", 60, 70),
    ("70-80%", 70, 80),
    ("80-90%", 80, 90),
    ("90-100%", 90, 100),
];

/// Bucket rows into left-closed percentage bands; 100 lands in the top band.
pub fn percentage_bands(rows: &[&SummaryRow]) -> Vec<Band> {
    let mut counts = [0usize; BANDS.len()];
    for row in rows {
        let pct = row.percentage_value();
        let slot = BANDS.iter().position(|&(_, lo, hi)| {
            let (lo, hi) = (Decimal::from(lo), Decimal::from(hi));
            lo <= pct && (pct < hi || (hi == Decimal::ONE_HUNDRED && pct == hi))
        });
        if let Some(i) = slot {
            counts[i] += 1;
        }
    }
    BANDS
        .iter()
        .zip(counts)
        .map(|(&(label, _, _), count)| Band { label, count })
        .collect()
}
