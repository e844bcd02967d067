pub mod listing;
pub mod pdf;
pub mod recompute;
pub mod xlsx;

pub use listing::write_listing_csv;
pub use pdf::{write_division_pdf, write_listing};
pub use recompute::{recompute, Recomputed};
pub use xlsx::write_workbook;
