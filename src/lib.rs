//! examplan - exam timetabling as a constraint satisfaction problem
//!
//! Given a pool of available (date, time) slots and a set of exam records
//! grouped by grade, each carrying date and time constraints written in a
//! small expression language, the engine finds one slot per exam such that
//! every constraint holds and exams of the same grade and course are spaced
//! by their setup time.
//!
//! ```
//! use examplan::model::{CellRef, GradeSheet, InputModel, RawRecord, Selection};
//! use examplan::pool::DayEntry;
//! use chrono::{NaiveDate, NaiveTime};
//!
//! let day = NaiveDate::from_ymd_opt(2021, 5, 21).unwrap();
//! let nine = NaiveTime::from_hms_opt(9, 0, 0).unwrap();
//! let model = InputModel::new(
//!     vec![DayEntry::new(day, vec![nine])],
//!     vec![GradeSheet::new("GII")
//!         .with_record(RawRecord::new("Cálculo", 1, 1, CellRef::new("A", 2).unwrap()))],
//! );
//!
//! let assignment = examplan::schedule(&model, &Selection::all(), false).unwrap();
//! assert_eq!(assignment.find_subject("Cálculo").unwrap().date(), day);
//! ```

pub mod algorithms;
pub mod assignment;
pub mod config;
pub mod constraints;
pub mod engine;
pub mod error;
pub mod model;
pub mod pool;
pub mod record_graph;
pub mod solution_space;
pub mod units;

pub use assignment::{Assignment, Origin, Placement};
pub use config::{EngineConfig, OutsideReferencePolicy};
pub use engine::{schedule, schedule_with_config, Engine};
pub use error::SchedulingError;

// Re-export unit conversion traits for ergonomic use
pub use units::{convert, SameDim};
