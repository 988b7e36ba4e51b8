use crate::constraints::Field;
use crate::model::CellLocation;
use thiserror::Error;

/// Why a single constraint term could not be parsed.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ParseFailure {
    #[error("not a date, time or cell reference")]
    Unrecognised,

    #[error("a time literal cannot appear in a date cell")]
    TimeInDateCell,

    #[error("a date literal cannot appear in a time cell")]
    DateInTimeCell,

    #[error("the literal is out of range")]
    OutOfRange,
}

/// Why a cell reference did not resolve to an included record.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceProblem {
    #[error("no such sheet")]
    UnknownSheet,

    #[error("no record at that cell")]
    UnknownCell,

    #[error("the record is outside the selection and indirect loading is disabled")]
    OutsideSelection,
}

/// Fatal failures of a scheduling run.
///
/// The engine never returns a partial assignment: any of these aborts the run.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SchedulingError {
    #[error("Timeslot pool is empty: no schedule can exist")]
    PoolEmpty,

    #[error("Syntax error in {location} ({field}): '{term}' is not a valid constraint: {reason}")]
    Parse {
        location: CellLocation,
        field: Field,
        term: String,
        reason: ParseFailure,
    },

    #[error("Unresolved reference '{target}' in {location} ({field}): {problem}")]
    Reference {
        location: CellLocation,
        field: Field,
        target: String,
        problem: ReferenceProblem,
    },

    #[error("Reference cycle detected: {}", format_path(.path))]
    Cycle { path: Vec<CellLocation> },

    #[error("Empty domain for {record} '{subject}': no feasible {}", describe_field(.field))]
    DomainEmpty {
        record: CellLocation,
        subject: String,
        field: Option<Field>,
    },

    #[error("No solution found after exploring {nodes} search nodes")]
    Unsatisfiable { nodes: u64 },

    #[error("Search budget of {limit} nodes exhausted without a solution")]
    BudgetExhausted { limit: u64 },

    #[error("Grade '{0}' is declared more than once")]
    DuplicateGrade(String),

    #[error("Cell {0} holds more than one record")]
    DuplicateCell(CellLocation),
}

impl SchedulingError {
    /// True for search failures: exhaustion, or an exhausted node budget which
    /// callers treat the same way.
    pub fn is_unsatisfiable(&self) -> bool {
        matches!(
            self,
            SchedulingError::Unsatisfiable { .. } | SchedulingError::BudgetExhausted { .. }
        )
    }
}

fn format_path(path: &[CellLocation]) -> String {
    path.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" -> ")
}

fn describe_field(field: &Option<Field>) -> &'static str {
    match field {
        Some(Field::Date) => "date",
        Some(Field::Time) => "time",
        None => "date and time combination",
    }
}
