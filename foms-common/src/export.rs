//! Spreadsheet export
//!
//! Pure transform from an ordered slice of registration records to a
//! single-sheet XLSX byte buffer. No persistent state and no side effects.

use rust_xlsxwriter::Workbook;

use crate::model::RegistrationRecord;
use crate::{Error, Result};

/// Output columns in order: header text and column width.
const COLUMNS: [(&str, f64); 6] = [
    ("Name", 20.0),
    ("Email", 30.0),
    ("Phone", 15.0),
    ("Group", 15.0),
    ("School", 25.0),
    ("Location", 25.0),
];

/// Render records into a workbook with a single `Submissions` sheet.
///
/// Row 0 is always the header row, followed by one data row per record in
/// the order given. Every cell is written as plain text; zero records still
/// produce a validly-formed sheet.
pub fn render(records: &[RegistrationRecord]) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name("Submissions").map_err(xlsx_err)?;

    for (col, (header, width)) in COLUMNS.iter().enumerate() {
        let col = col as u16;
        sheet.set_column_width(col, *width).map_err(xlsx_err)?;
        sheet.write_string(0, col, *header).map_err(xlsx_err)?;
    }

    for (i, record) in records.iter().enumerate() {
        let row = (i + 1) as u32;
        sheet.write_string(row, 0, record.name.as_str()).map_err(xlsx_err)?;
        sheet.write_string(row, 1, record.email.as_str()).map_err(xlsx_err)?;
        sheet.write_string(row, 2, record.phone.as_str()).map_err(xlsx_err)?;
        sheet.write_string(row, 3, record.group.as_str()).map_err(xlsx_err)?;
        sheet.write_string(row, 4, record.school.as_str()).map_err(xlsx_err)?;
        sheet
            .write_string(row, 5, record.location.as_str())
            .map_err(xlsx_err)?;
    }

    workbook.save_to_buffer().map_err(xlsx_err)
}

fn xlsx_err(e: rust_xlsxwriter::XlsxError) -> Error {
    Error::Export(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(phone: &str, name: &str) -> RegistrationRecord {
        RegistrationRecord {
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            phone: phone.to_string(),
            group: "G1".to_string(),
            school: "S1".to_string(),
            location: "L1".to_string(),
        }
    }

    #[test]
    fn zero_records_still_renders_valid_workbook() {
        let buffer = render(&[]).expect("empty render should succeed");
        // XLSX is a zip container
        assert_eq!(&buffer[..2], b"PK");
    }

    #[test]
    fn data_rows_change_rendered_output() {
        let empty = render(&[]).unwrap();
        let populated = render(&[record("555", "Ann"), record("556", "Bob")]).unwrap();
        assert_eq!(&populated[..2], b"PK");
        assert_ne!(populated, empty);
    }
}
