use calamine::Data;
use serde::Serialize;
use serde_json::{Map as JsonMap, Value as JsonValue};
use std::fmt;

/// A single cell value from a worksheet.
///
/// eGRID sheets mix text (state abbreviations, subregion codes), numbers
/// (generation, emission rates) and blanks; everything else calamine can
/// report is folded into these variants.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Cell {
    Empty,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl From<&Data> for Cell {
    fn from(data: &Data) -> Self {
        match data {
            Data::Empty => Cell::Empty,
            Data::Bool(b) => Cell::Bool(*b),
            Data::Int(i) => Cell::Int(*i),
            Data::Float(f) => Cell::Float(*f),
            Data::String(s) => Cell::Text(s.clone()),
            // Date/duration cells keep their serial value; the eGRID sheets
            // we consume carry no date columns, so no calendar conversion.
            Data::DateTime(dt) => Cell::Float(dt.as_f64()),
            Data::DateTimeIso(s) | Data::DurationIso(s) => Cell::Text(s.clone()),
            // Formula error cells (#DIV/0! etc.) carry no usable value
            Data::Error(_) => Cell::Empty,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Empty => Ok(()),
            Cell::Bool(b) => write!(f, "{b}"),
            Cell::Int(i) => write!(f, "{i}"),
            Cell::Float(v) => write!(f, "{v}"),
            Cell::Text(s) => write!(f, "{s}"),
        }
    }
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }
}

/// An in-memory worksheet: an ordered header plus ordered data rows.
///
/// Every row holds exactly `columns.len()` cells; the loader pads short
/// rows with `Cell::Empty` to keep that invariant.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl Table {
    pub fn new(columns: Vec<String>, rows: Vec<Vec<Cell>>) -> Self {
        debug_assert!(rows.iter().all(|r| r.len() == columns.len()));
        Table { columns, rows }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.rows.iter().map(|r| r.as_slice())
    }

    /// Position of a column by its current name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&Cell> {
        self.rows.get(row).and_then(|r| r.get(col))
    }

    /// Replace the header with `columns`, leaving every row untouched.
    ///
    /// The replacement must match the current column count; renaming never
    /// adds, drops, or reorders data.
    pub fn rename_columns(&mut self, columns: Vec<String>) {
        assert_eq!(
            columns.len(),
            self.columns.len(),
            "renamed header must keep the column count"
        );
        self.columns = columns;
    }

    /// The table as one JSON object per row, keyed by column name.
    pub fn to_records(&self) -> Vec<JsonMap<String, JsonValue>> {
        self.rows
            .iter()
            .map(|row| {
                self.columns
                    .iter()
                    .zip(row)
                    .map(|(name, cell)| {
                        let value = serde_json::to_value(cell).unwrap_or(JsonValue::Null);
                        (name.clone(), value)
                    })
                    .collect()
            })
            .collect()
    }
}
