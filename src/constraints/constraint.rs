//! Typed constraints attached to a record field.

use crate::model::RecordId;
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Which component of a slot a constraint talks about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Date,
    Time,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Date => f.write_str("date"),
            Field::Time => f.write_str("time"),
        }
    }
}

/// Comparison operator of a constraint term. A term without operator means `=`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    #[default]
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
}

impl Operator {
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Eq => "=",
            Operator::Ne => "!=",
            Operator::Lt => "<",
            Operator::Le => "<=",
            Operator::Gt => ">",
            Operator::Ge => ">=",
        }
    }

    /// Evaluates `lhs op rhs`.
    pub fn holds<T: Ord>(self, lhs: &T, rhs: &T) -> bool {
        self.accepts(lhs.cmp(rhs))
    }

    /// Returns true if an ordering between lhs and rhs satisfies the operator.
    pub fn accepts(self, ordering: Ordering) -> bool {
        match self {
            Operator::Eq => ordering == Ordering::Equal,
            Operator::Ne => ordering != Ordering::Equal,
            Operator::Lt => ordering == Ordering::Less,
            Operator::Le => ordering != Ordering::Greater,
            Operator::Gt => ordering == Ordering::Greater,
            Operator::Ge => ordering != Ordering::Less,
        }
    }

    /// The operator with its operands swapped: `a op b` iff `b op.mirrored() a`.
    pub fn mirrored(self) -> Self {
        match self {
            Operator::Lt => Operator::Gt,
            Operator::Le => Operator::Ge,
            Operator::Gt => Operator::Lt,
            Operator::Ge => Operator::Le,
            same => same,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A constant operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Literal {
    Date(NaiveDate),
    Time(NaiveTime),
}

impl Literal {
    /// The field this literal belongs to.
    pub fn field(&self) -> Field {
        match self {
            Literal::Date(_) => Field::Date,
            Literal::Time(_) => Field::Time,
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Date(d) => write!(f, "{d}"),
            Literal::Time(t) => write!(f, "{}", t.format("%H:%M:%S")),
        }
    }
}

/// A compiled constraint of one record field.
///
/// Unit constraints restrict the field against a constant. Binary constraints
/// relate the field to the same field of another record, already resolved to
/// its [`RecordId`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Constraint {
    Unit {
        operator: Operator,
        value: Literal,
    },
    Binary {
        field: Field,
        operator: Operator,
        target: RecordId,
    },
}

impl Constraint {
    pub fn field(&self) -> Field {
        match self {
            Constraint::Unit { value, .. } => value.field(),
            Constraint::Binary { field, .. } => *field,
        }
    }

    pub fn operator(&self) -> Operator {
        match self {
            Constraint::Unit { operator, .. } | Constraint::Binary { operator, .. } => *operator,
        }
    }

    pub fn is_unit(&self) -> bool {
        matches!(self, Constraint::Unit { .. })
    }

    pub fn is_binary(&self) -> bool {
        matches!(self, Constraint::Binary { .. })
    }

    pub fn target(&self) -> Option<RecordId> {
        match self {
            Constraint::Binary { target, .. } => Some(*target),
            Constraint::Unit { .. } => None,
        }
    }

    /// Returns true if `candidate` satisfies this unit constraint.
    ///
    /// Binary constraints and literals of the other field always pass; they
    /// are not this check's business.
    pub fn admits(&self, candidate: &Literal) -> bool {
        match (self, candidate) {
            (
                Constraint::Unit {
                    operator,
                    value: Literal::Date(bound),
                },
                Literal::Date(c),
            ) => operator.holds(c, bound),
            (
                Constraint::Unit {
                    operator,
                    value: Literal::Time(bound),
                },
                Literal::Time(c),
            ) => operator.holds(c, bound),
            _ => true,
        }
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Constraint::Unit { operator, value } => write!(f, "{operator} {value}"),
            Constraint::Binary {
                operator, target, ..
            } => write!(f, "{operator} {target}"),
        }
    }
}
