use crate::error::MarksheetError;
use crate::model::SummaryRow;
use crate::reports::division::DivisionFilter;
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, ObjectId, Stream};

pub const DEFAULT_INSTITUTION: &str = "Sangola College";

const PAGE_WIDTH: f32 = 595.0;
const PAGE_HEIGHT: f32 = 842.0;
const MARGIN: f32 = 40.0;
const ROW_HEIGHT: f32 = 20.0;
const NAME_MAX_CHARS: usize = 35;

/// (heading, width in points, centered)
const COLUMNS: [(&str, f32, bool); 5] = [
    ("No.", 42.0, true),
    ("Seat No", 85.0, true),
    ("Name", 227.0, false),
    ("Percentage", 85.0, true),
    ("Status", 85.0, true),
];

/// Render a division listing: title, range subtitle and one table row per
/// student, split over as many A4 pages as needed.
pub fn write_division_pdf(
    institution: &str,
    filter: &DivisionFilter,
    rows: &[&SummaryRow],
) -> Result<Vec<u8>, MarksheetError> {
    let title = format!(
        "{institution} - Division {}-{}",
        filter.min.normalize(),
        filter.max.normalize()
    );
    write_listing(&title, &filter.describe(), rows)
}

/// Render a titled student table.
pub fn write_listing(
    title: &str,
    subtitle: &str,
    rows: &[&SummaryRow],
) -> Result<Vec<u8>, MarksheetError> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let regular = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });
    let bold = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica-Bold",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => regular,
            "F2" => bold,
        },
    });

    let table_width: f32 = COLUMNS.iter().map(|c| c.1).sum();
    let left = (PAGE_WIDTH - table_width) / 2.0;

    let mut page_ids: Vec<ObjectId> = Vec::new();
    let mut remaining = rows.iter().enumerate().peekable();
    let mut first_page = true;

    loop {
        let mut ops = Vec::new();
        let mut y = PAGE_HEIGHT - MARGIN;

        if first_page {
            y -= 16.0;
            centered_text(&mut ops, "F2", 16.0, title, y);
            y -= 24.0;
            centered_text(&mut ops, "F1", 12.0, subtitle, y);
            y -= 28.0;
        }

        y -= ROW_HEIGHT;
        let headings: Vec<String> = COLUMNS.iter().map(|c| c.0.to_string()).collect();
        table_row(&mut ops, left, y, &headings, "F2", true);

        while y - ROW_HEIGHT >= MARGIN {
            let Some((i, row)) = remaining.next() else {
                break;
            };
            y -= ROW_HEIGHT;
            let cells = vec![
                (i + 1).to_string(),
                row.seat_no.clone(),
                row.name.chars().take(NAME_MAX_CHARS).collect(),
                row.percentage.clone(),
                row.status.clone(),
            ];
            table_row(&mut ops, left, y, &cells, "F1", false);
        }

        let content = Content { operations: ops };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode()?));
        page_ids.push(doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        }));

        first_page = false;
        if remaining.peek().is_none() {
            break;
        }
    }

    let page_count = page_ids.len() as i64;
    let pages = dictionary! {
        "Type" => "Pages",
        "Kids" => page_ids.into_iter().map(Object::from).collect::<Vec<_>>(),
        "Count" => page_count,
        "Resources" => resources_id,
        "MediaBox" => vec![0_i64.into(), 0_i64.into(), PAGE_WIDTH.into(), PAGE_HEIGHT.into()],
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages));

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut buf = Vec::new();
    doc.save_to(&mut buf)
        .map_err(|e| MarksheetError::Export(format!("pdf: {e}")))?;

    tracing::info!(rows = rows.len(), pages = page_count, "built division listing");
    Ok(buf)
}

fn centered_text(ops: &mut Vec<Operation>, font: &str, size: f32, text: &str, y: f32) {
    let x = ((PAGE_WIDTH - approx_width(text, size)) / 2.0).max(MARGIN);
    text_at(ops, font, size, x, y, text);
}

/// One bordered table row. Header rows get a light blue fill.
fn table_row(ops: &mut Vec<Operation>, left: f32, y: f32, cells: &[String], font: &str, header: bool) {
    let mut x = left;
    for ((_, width, centered), cell) in COLUMNS.iter().zip(cells) {
        if header {
            ops.push(Operation::new("rg", vec![0.78_f32.into(), 0.86_f32.into(), 1.0_f32.into()]));
            ops.push(Operation::new("re", vec![x.into(), y.into(), (*width).into(), ROW_HEIGHT.into()]));
            ops.push(Operation::new("f", vec![]));
            ops.push(Operation::new("rg", vec![0_i64.into(), 0_i64.into(), 0_i64.into()]));
        }
        ops.push(Operation::new("re", vec![x.into(), y.into(), (*width).into(), ROW_HEIGHT.into()]));
        ops.push(Operation::new("S", vec![]));

        let size = 10.0;
        let text_x = if *centered {
            x + (width - approx_width(cell, size)) / 2.0
        } else {
            x + 4.0
        };
        text_at(ops, font, size, text_x, y + 6.0, cell);
        x += width;
    }
}

fn text_at(ops: &mut Vec<Operation>, font: &str, size: f32, x: f32, y: f32, text: &str) {
    ops.push(Operation::new("BT", vec![]));
    ops.push(Operation::new("Tf", vec![Object::Name(font.as_bytes().to_vec()), size.into()]));
    ops.push(Operation::new("Td", vec![x.into(), y.into()]));
    ops.push(Operation::new("Tj", vec![Object::string_literal(text)]));
    ops.push(Operation::new("ET", vec![]));
}

/// Helvetica averages about half an em per character.
fn approx_width(text: &str, size: f32) -> f32 {
    text.chars().count() as f32 * size * 0.5
}
