// Shared fixture helpers for integration tests
// Builds small eGRID-shaped workbooks on disk with umya-spreadsheet

use std::path::{Path, PathBuf};

/// A cell value to place in a fixture worksheet.
#[allow(dead_code)]
pub enum FixtureCell {
    Text(&'static str),
    Number(f64),
}

/// Write a single-sheet workbook to `dir`, returning its path.
///
/// Row 1 gets the header labels; data rows follow, one per entry.
#[allow(dead_code)]
pub fn write_workbook(
    dir: &Path,
    file_name: &str,
    sheet_name: &str,
    header: &[&str],
    rows: &[Vec<FixtureCell>],
) -> PathBuf {
    let mut book = umya_spreadsheet::new_file();
    let sheet = book.get_active_sheet_mut();
    sheet.set_name(sheet_name);

    for (col, label) in header.iter().enumerate() {
        sheet
            .get_cell_mut(((col + 1) as u32, 1_u32))
            .set_value_string(*label);
    }

    for (row_idx, row) in rows.iter().enumerate() {
        let sheet_row = (row_idx + 2) as u32;
        for (col, cell) in row.iter().enumerate() {
            let coord = ((col + 1) as u32, sheet_row);
            match cell {
                FixtureCell::Text(s) => {
                    sheet.get_cell_mut(coord).set_value_string(*s);
                }
                FixtureCell::Number(n) => {
                    sheet.get_cell_mut(coord).set_value_number(*n);
                }
            }
        }
    }

    let path = dir.join(file_name);
    umya_spreadsheet::writer::xlsx::write(&book, &path).expect("Failed to write fixture workbook");
    path
}

/// Write a workbook whose one sheet has no cells at all.
#[allow(dead_code)]
pub fn write_empty_workbook(dir: &Path, file_name: &str, sheet_name: &str) -> PathBuf {
    let mut book = umya_spreadsheet::new_file();
    book.get_active_sheet_mut().set_name(sheet_name);

    let path = dir.join(file_name);
    umya_spreadsheet::writer::xlsx::write(&book, &path).expect("Failed to write fixture workbook");
    path
}
