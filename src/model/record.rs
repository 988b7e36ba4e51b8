use super::CellLocation;
use crate::constraints::{Constraint, Field};
use crate::units::Hours;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable arena index of a record, assigned once when all grades are loaded.
///
/// Ids follow declaration order: grades in input order, records in row order
/// within each grade. Ordering by id is therefore ordering by declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RecordId(pub usize);

impl RecordId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Index of a grade in input order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GradeId(pub usize);

/// A compiled exam: identity, attributes and its typed constraints.
///
/// # Invariants
///
/// - every constraint in `date_constraints` has field [`Field::Date`], and
///   likewise for `time_constraints`
/// - binary targets are resolved [`RecordId`]s; no textual reference survives
///   compilation
/// - `setup` already has the default applied
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub(crate) id: RecordId,
    pub(crate) grade: GradeId,
    pub(crate) location: CellLocation,
    pub(crate) subject: String,
    pub(crate) course: u32,
    pub(crate) semester: u32,
    pub(crate) setup: Hours,
    pub(crate) date_constraints: Vec<Constraint>,
    pub(crate) time_constraints: Vec<Constraint>,
}

impl Record {
    pub fn id(&self) -> RecordId {
        self.id
    }

    pub fn grade(&self) -> GradeId {
        self.grade
    }

    /// Name of the grade sheet this record was declared in.
    pub fn grade_name(&self) -> &str {
        &self.location.sheet
    }

    pub fn location(&self) -> &CellLocation {
        &self.location
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn course(&self) -> u32 {
        self.course
    }

    pub fn semester(&self) -> u32 {
        self.semester
    }

    pub fn setup(&self) -> Hours {
        self.setup
    }

    pub fn constraints(&self, field: Field) -> &[Constraint] {
        match field {
            Field::Date => &self.date_constraints,
            Field::Time => &self.time_constraints,
        }
    }

    /// Iterates over all constraints of both fields, date first.
    pub fn all_constraints(&self) -> impl Iterator<Item = &Constraint> {
        self.date_constraints.iter().chain(self.time_constraints.iter())
    }

    pub fn unit_constraints(&self, field: Field) -> impl Iterator<Item = &Constraint> {
        self.constraints(field).iter().filter(|c| c.is_unit())
    }

    /// Records targeted by this record's binary constraints, in declaration
    /// order of the constraints (duplicates preserved).
    pub fn binary_targets(&self) -> impl Iterator<Item = RecordId> + '_ {
        self.all_constraints().filter_map(Constraint::target)
    }

    /// Same grade and same course: the pair is subject to the spacing rule.
    pub fn shares_course_with(&self, other: &Record) -> bool {
        self.grade == other.grade && self.course == other.course
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{:<12}] {} [{}.{}] >{:>4}",
            self.location.to_string(),
            self.subject,
            self.course,
            self.semester,
            self.setup.value()
        )?;
        for field in [Field::Date, Field::Time] {
            let constraints = self.constraints(field);
            if constraints.is_empty() {
                continue;
            }
            write!(f, " | {field}:")?;
            for c in constraints {
                write!(f, " {c}")?;
            }
        }
        Ok(())
    }
}

/// A grade sheet after loading: its name and the ids of its records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grade {
    pub(crate) id: GradeId,
    pub(crate) name: String,
    pub(crate) records: Vec<RecordId>,
}

impl Grade {
    pub fn id(&self) -> GradeId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn records(&self) -> &[RecordId] {
        &self.records
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraints::{Literal, Operator};
    use crate::model::CellRef;
    use crate::units::hours;
    use chrono::NaiveDate;

    fn record(id: usize, grade: usize, course: u32) -> Record {
        Record {
            id: RecordId(id),
            grade: GradeId(grade),
            location: CellLocation::new("GII", CellRef::new("A", id as u32 + 2).unwrap()),
            subject: format!("Subject {id}"),
            course,
            semester: 1,
            setup: hours(24),
            date_constraints: Vec::new(),
            time_constraints: Vec::new(),
        }
    }

    #[test]
    fn spacing_applies_only_within_grade_and_course() {
        let a = record(0, 0, 1);
        let b = record(1, 0, 1);
        let c = record(2, 0, 2);
        let d = record(3, 1, 1);
        assert!(a.shares_course_with(&b));
        assert!(!a.shares_course_with(&c));
        assert!(!a.shares_course_with(&d));
    }

    #[test]
    fn binary_targets_skip_unit_constraints() {
        let mut r = record(0, 0, 1);
        r.date_constraints = vec![
            Constraint::Unit {
                operator: Operator::Ge,
                value: Literal::Date(NaiveDate::from_ymd_opt(2021, 5, 24).unwrap()),
            },
            Constraint::Binary {
                field: Field::Date,
                operator: Operator::Lt,
                target: RecordId(4),
            },
        ];
        r.time_constraints = vec![Constraint::Binary {
            field: Field::Time,
            operator: Operator::Eq,
            target: RecordId(7),
        }];
        let targets: Vec<_> = r.binary_targets().collect();
        assert_eq!(targets, vec![RecordId(4), RecordId(7)]);
        assert_eq!(r.unit_constraints(Field::Date).count(), 1);
        assert_eq!(r.unit_constraints(Field::Time).count(), 0);
    }

    #[test]
    fn display_lists_constraints_per_field() {
        let mut r = record(0, 0, 1);
        r.date_constraints = vec![Constraint::Unit {
            operator: Operator::Ne,
            value: Literal::Date(NaiveDate::from_ymd_opt(2021, 5, 21).unwrap()),
        }];
        let s = r.to_string();
        assert!(s.contains("$GII.A2"));
        assert!(s.contains("Subject 0 [1.1]"));
        assert!(s.contains("date: != 2021-05-21"));
        assert!(!s.contains("time:"));
    }
}
