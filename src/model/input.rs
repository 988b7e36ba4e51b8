//! Raw input model handed over by the spreadsheet reader.

use super::CellRef;
use crate::pool::DayEntry;
use serde::{Deserialize, Serialize};

/// Everything the engine needs for one run: the timeslot pool and every grade
/// sheet with its records, in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InputModel {
    #[serde(default)]
    pub pool: Vec<DayEntry>,
    #[serde(default)]
    pub grades: Vec<GradeSheet>,
}

impl InputModel {
    pub fn new(pool: Vec<DayEntry>, grades: Vec<GradeSheet>) -> Self {
        Self { pool, grades }
    }

    /// Total number of records across all grades.
    pub fn record_count(&self) -> usize {
        self.grades.iter().map(|g| g.records.len()).sum()
    }
}

/// One grade (sheet) and its records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradeSheet {
    pub name: String,
    #[serde(default)]
    pub records: Vec<RawRecord>,
}

impl GradeSheet {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            records: Vec::new(),
        }
    }

    pub fn with_record(mut self, record: RawRecord) -> Self {
        self.records.push(record);
        self
    }
}

/// One exam row as read from a grade sheet, before compilation.
///
/// `date` and `time` hold the raw comma-separated constraint expressions. Any
/// spreadsheet-specific escaping (e.g. the leading space that keeps `= ...`
/// from being read as a formula) must already have been removed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawRecord {
    pub subject: String,
    pub course: u32,
    pub semester: u32,
    pub cell: CellRef,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub time: String,
    /// Setup time override in hours; `None` means the configured default.
    #[serde(default)]
    pub setup_hours: Option<u32>,
}

impl RawRecord {
    pub fn new(subject: impl Into<String>, course: u32, semester: u32, cell: CellRef) -> Self {
        Self {
            subject: subject.into(),
            course,
            semester,
            cell,
            date: String::new(),
            time: String::new(),
            setup_hours: None,
        }
    }

    pub fn with_date(mut self, expr: impl Into<String>) -> Self {
        self.date = expr.into();
        self
    }

    pub fn with_time(mut self, expr: impl Into<String>) -> Self {
        self.time = expr.into();
        self
    }

    pub fn with_setup_hours(mut self, hours: u32) -> Self {
        self.setup_hours = Some(hours);
        self
    }
}
