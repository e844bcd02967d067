use crate::error::MarksheetError;
use crate::model::SummaryRow;

const HEADER: [&str; 4] = ["Seat No", "Name", "Percentage", "Status"];

/// Summary rows as CSV with a `Seat No,Name,Percentage,Status` header.
///
/// The header is written even when there are no rows.
pub fn write_listing_csv(rows: &[&SummaryRow]) -> Result<Vec<u8>, MarksheetError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());

    writer.write_record(HEADER)?;
    for row in rows {
        writer.serialize(row)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| MarksheetError::Export(format!("csv: {}", e.error())))?;
    tracing::info!(rows = rows.len(), "built csv listing");
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(seat: &str, name: &str, pct: &str) -> SummaryRow {
        SummaryRow {
            seat_no: seat.into(),
            name: name.into(),
            percentage: pct.into(),
            status: "Pass".into(),
        }
    }

    #[test]
    fn test_rows_read_back_under_header() {
        let rows = [row("101", "PATIL, ASHA", "72.50"), row("102", "RAHUL MANE", "64.00")];
        let refs: Vec<&SummaryRow> = rows.iter().collect();
        let bytes = write_listing_csv(&refs).unwrap();

        let mut reader = csv::Reader::from_reader(bytes.as_slice());
        assert_eq!(
            reader.headers().unwrap().iter().collect::<Vec<_>>(),
            vec!["Seat No", "Name", "Percentage", "Status"]
        );
        let back: Vec<SummaryRow> = reader.deserialize().collect::<Result<_, _>>().unwrap();
        assert_eq!(back, rows);
    }

    #[test]
    fn test_empty_listing_has_header_only() {
        let bytes = write_listing_csv(&[]).unwrap();
        assert_eq!(String::from_utf8(bytes).unwrap(), "Seat No,Name,Percentage,Status\n");
    }
}
