//! Spreadsheet-style addressing of records.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error raised when a string is not a valid `COLUMN ROW` cell address.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("'{0}' is not a legal representation of a cell")]
pub struct InvalidCell(pub String);

/// Column/row address of a record within its grade sheet, e.g. `B21`.
///
/// Columns are normalized to upper case, so `b21` and `B21` address the same
/// record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CellRef {
    column: String,
    row: u32,
}

impl CellRef {
    /// Creates a cell address from a column label and a row number.
    ///
    /// # Errors
    ///
    /// Fails if the column is empty or contains non-ASCII-letter characters,
    /// or if the row is zero.
    pub fn new(column: &str, row: u32) -> Result<Self, InvalidCell> {
        if column.is_empty() || !column.chars().all(|c| c.is_ascii_alphabetic()) || row == 0 {
            return Err(InvalidCell(format!("{column}{row}")));
        }
        Ok(Self {
            column: column.to_ascii_uppercase(),
            row,
        })
    }

    pub fn column(&self) -> &str {
        &self.column
    }

    pub fn row(&self) -> u32 {
        self.row
    }
}

impl FromStr for CellRef {
    type Err = InvalidCell;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let split = s
            .find(|c: char| !c.is_ascii_alphabetic())
            .ok_or_else(|| InvalidCell(s.to_string()))?;
        let (column, digits) = s.split_at(split);
        if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(InvalidCell(s.to_string()));
        }
        let row = digits
            .parse::<u32>()
            .map_err(|_| InvalidCell(s.to_string()))?;
        Self::new(column, row).map_err(|_| InvalidCell(s.to_string()))
    }
}

impl TryFrom<String> for CellRef {
    type Error = InvalidCell;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CellRef> for String {
    fn from(cell: CellRef) -> Self {
        cell.to_string()
    }
}

impl fmt::Display for CellRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.column, self.row)
    }
}

/// Fully qualified location of a record: grade sheet plus cell, `$GII.B21`.
///
/// Every diagnostic produced by the engine points at one of these so the
/// offending spreadsheet cell can be found directly.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellLocation {
    pub sheet: String,
    pub cell: CellRef,
}

impl CellLocation {
    pub fn new(sheet: impl Into<String>, cell: CellRef) -> Self {
        Self {
            sheet: sheet.into(),
            cell,
        }
    }
}

impl fmt::Display for CellLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}.{}", self.sheet, self.cell)
    }
}
