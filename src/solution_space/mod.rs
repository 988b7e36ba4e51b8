//! Solution space: the candidate slots of every record.
//!
//! Unit constraints are applied once, here, so the solver only ever sees slots
//! that already satisfy them. Binary and spacing constraints are left to the
//! search.

mod domain;
mod space;

pub use domain::RecordDomain;
pub use space::SolutionSpace;
