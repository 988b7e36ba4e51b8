//! Record constraints: typed representation, term parser and compiler.
//!
//! Raw date and time expressions are compiled once, before any search, into
//! [`Constraint`] values whose references are already resolved to
//! [`RecordId`](crate::model::RecordId)s.

mod compiler;
mod constraint;
pub mod parser;

pub use compiler::compile;
pub use constraint::{Constraint, Field, Literal, Operator};
