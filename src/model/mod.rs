//! Exam records, grades and the raw input model.
//!
//! [`InputModel`] is what the spreadsheet reader produces: raw strings per
//! record. [`Record`] is the compiled form used by the rest of the engine,
//! addressed by a [`RecordId`] arena index.

mod cell;
mod input;
mod record;
mod selection;

pub use cell::{CellLocation, CellRef, InvalidCell};
pub use input::{GradeSheet, InputModel, RawRecord};
pub use record::{Grade, GradeId, Record, RecordId};
pub use selection::Selection;
