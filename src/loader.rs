use calamine::{open_workbook, Data, Reader, Xlsx};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::table::{Cell, Table};

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Workbook not found: {0}")]
    FileNotFound(String),

    #[error("Failed to read workbook {path}: {source}")]
    Workbook {
        path: String,
        #[source]
        source: calamine::XlsxError,
    },

    #[error("Sheet not found: {0}")]
    SheetNotFound(String),

    #[error("Sheet {0} has no header row")]
    EmptyHeader(String),
}

/// Reader for eGRID workbooks (format: eGRIDyyyy_data.xlsx).
///
/// Each worksheet carries one header row of human-readable column labels
/// followed by one record per row.
pub struct WorkbookLoader {
    workbook_path: String,
}

impl WorkbookLoader {
    pub fn new(workbook_path: impl Into<String>) -> Self {
        Self {
            workbook_path: workbook_path.into(),
        }
    }

    /// Load one named worksheet into a [`Table`].
    ///
    /// Row 1 becomes the column names; rows 2.. become data rows, padded
    /// with empty cells to the header width. The workbook handle is scoped
    /// to this call and released on every return path.
    pub fn load_sheet(&self, sheet_name: &str) -> Result<Table, LoadError> {
        info!(
            "Loading sheet {} from workbook {}",
            sheet_name, self.workbook_path
        );

        if !Path::new(&self.workbook_path).exists() {
            return Err(LoadError::FileNotFound(self.workbook_path.clone()));
        }

        let mut workbook: Xlsx<BufReader<File>> =
            open_workbook(&self.workbook_path).map_err(|e| LoadError::Workbook {
                path: self.workbook_path.clone(),
                source: e,
            })?;

        let range = match workbook.worksheet_range(sheet_name) {
            Ok(range) => range,
            Err(_) => return Err(LoadError::SheetNotFound(sheet_name.to_string())),
        };

        let mut sheet_rows = range.rows();

        let columns = match sheet_rows.next() {
            Some(header) => header_names(header),
            None => Vec::new(),
        };
        if columns.is_empty() {
            return Err(LoadError::EmptyHeader(sheet_name.to_string()));
        }
        debug!("Found {} columns in sheet {}", columns.len(), sheet_name);

        let rows: Vec<Vec<Cell>> = sheet_rows
            .map(|row| {
                let mut cells: Vec<Cell> =
                    row.iter().take(columns.len()).map(Cell::from).collect();
                cells.resize(columns.len(), Cell::Empty);
                cells
            })
            .collect();

        info!(
            "Loaded {} rows x {} columns from sheet {}",
            rows.len(),
            columns.len(),
            sheet_name
        );
        Ok(Table::new(columns, rows))
    }

    /// Names of all worksheets in the workbook, in workbook order.
    pub fn sheet_names(&self) -> Result<Vec<String>, LoadError> {
        if !Path::new(&self.workbook_path).exists() {
            return Err(LoadError::FileNotFound(self.workbook_path.clone()));
        }

        let workbook: Xlsx<BufReader<File>> =
            open_workbook(&self.workbook_path).map_err(|e| LoadError::Workbook {
                path: self.workbook_path.clone(),
                source: e,
            })?;

        Ok(workbook.sheet_names())
    }
}

/// Header labels from row 1, left to right, stopping at the first blank cell.
fn header_names(row: &[Data]) -> Vec<String> {
    let mut names = Vec::new();

    for cell in row {
        match cell {
            Data::String(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    break;
                }
                names.push(trimmed.to_string());
            }
            Data::Int(i) => names.push(i.to_string()),
            Data::Float(f) => names.push(f.to_string()),
            Data::Bool(b) => names.push(b.to_string()),
            Data::Empty => break,
            other => {
                warn!("Unexpected header cell {other:?}, stopping header scan");
                break;
            }
        }
    }

    names
}
