//! Fixed layout facts about the university result document.
//!
//! They describe a single document template and are not configurable.

/// Pages before this 0-based index are front matter.
pub const DATA_PAGE_OFFSET: usize = 4;

/// A student block is only read when it carries this string.
pub const INSTITUTION_MARKER: &str = "College Code: SANG";

/// A line is a subject line when it contains any of these.
pub const SUBJECT_PREFIXES: [&str; 6] = ["BCA", "ECS", "CC-", "ENG-", "ENS", "SEC"];

/// Number of graded subjects summed by the export recomputation.
pub const GRADED_SUBJECTS: usize = 9;

/// Number of subject-status entries scanned for an `F`.
pub const STATUS_SCAN_LIMIT: usize = 16;

/// Maximum marks across the graded subjects.
pub const MAX_MARKS: u32 = 900;

pub const SEAT_LABEL: &str = "Seat No:";
pub const PRN_LABEL: &str = "PRN No.";
pub const COLLEGE_LABEL: &str = "College Code:";
pub const STATUS_LABEL: &str = "Status:";
pub const PERCENTAGE_LABEL: &str = "Percentage:";
