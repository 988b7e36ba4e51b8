//! Compilation of a raw field expression into typed constraints.

use super::parser::{parse_term, split_terms, Operand};
use super::{Constraint, Field, Literal};
use crate::error::{ParseFailure, ReferenceProblem, SchedulingError};
use crate::model::{CellLocation, CellRef, RecordId};
use tracing::trace;

/// Compiles the `field` expression of the record at `location`.
///
/// `resolve` maps a reference (optional sheet, cell) to the record it names;
/// an unqualified reference addresses the record's own grade. Every error
/// carries `location` and `field`.
pub fn compile<F>(
    expr: &str,
    field: Field,
    location: &CellLocation,
    mut resolve: F,
) -> Result<Vec<Constraint>, SchedulingError>
where
    F: FnMut(Option<&str>, &CellRef) -> Result<RecordId, ReferenceProblem>,
{
    let mut constraints = Vec::new();

    for raw in split_terms(expr) {
        let parse_error = |reason| SchedulingError::Parse {
            location: location.clone(),
            field,
            term: raw.to_string(),
            reason,
        };

        let term = parse_term(raw).map_err(parse_error)?;
        let constraint = match term.operand {
            Operand::Literal(value) => {
                match (field, value) {
                    (Field::Date, Literal::Time(_)) => {
                        return Err(parse_error(ParseFailure::TimeInDateCell))
                    }
                    (Field::Time, Literal::Date(_)) => {
                        return Err(parse_error(ParseFailure::DateInTimeCell))
                    }
                    _ => {}
                }
                Constraint::Unit {
                    operator: term.operator,
                    value,
                }
            }
            Operand::Reference { sheet, cell } => {
                let target = resolve(sheet.as_deref(), &cell).map_err(|problem| {
                    let sheet = sheet.unwrap_or_else(|| location.sheet.clone());
                    SchedulingError::Reference {
                        location: location.clone(),
                        field,
                        target: CellLocation::new(sheet, cell.clone()).to_string(),
                        problem,
                    }
                })?;
                Constraint::Binary {
                    field,
                    operator: term.operator,
                    target,
                }
            }
        };

        trace!(%location, %field, term = raw, constraint = %constraint, "constraint compiled");
        constraints.push(constraint);
    }

    Ok(constraints)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraints::Operator;
    use chrono::{NaiveDate, NaiveTime};

    fn here() -> CellLocation {
        CellLocation::new("GII", CellRef::new("A", 3).unwrap())
    }

    fn resolver(sheet: Option<&str>, cell: &CellRef) -> Result<RecordId, ReferenceProblem> {
        match (sheet.unwrap_or("GII"), cell.to_string().as_str()) {
            ("GII", "A2") => Ok(RecordId(0)),
            ("GIB", "B21") => Ok(RecordId(7)),
            ("GII" | "GIB", _) => Err(ReferenceProblem::UnknownCell),
            _ => Err(ReferenceProblem::UnknownSheet),
        }
    }

    #[test]
    fn empty_expression_compiles_to_nothing() {
        assert!(compile("", Field::Date, &here(), resolver).unwrap().is_empty());
        assert!(compile(" , ", Field::Time, &here(), resolver).unwrap().is_empty());
    }

    #[test]
    fn mixed_terms_keep_their_order() {
        let got = compile(">= 2021-05-24, != A2, = $GIB.B21", Field::Date, &here(), resolver).unwrap();
        assert_eq!(
            got,
            vec![
                Constraint::Unit {
                    operator: Operator::Ge,
                    value: Literal::Date(NaiveDate::from_ymd_opt(2021, 5, 24).unwrap()),
                },
                Constraint::Binary {
                    field: Field::Date,
                    operator: Operator::Ne,
                    target: RecordId(0),
                },
                Constraint::Binary {
                    field: Field::Date,
                    operator: Operator::Eq,
                    target: RecordId(7),
                },
            ]
        );
    }

    #[test]
    fn time_field_compiles_time_literals() {
        let got = compile("12:30", Field::Time, &here(), resolver).unwrap();
        assert_eq!(
            got,
            vec![Constraint::Unit {
                operator: Operator::Eq,
                value: Literal::Time(NaiveTime::from_hms_opt(12, 30, 0).unwrap()),
            }]
        );
    }

    #[test]
    fn literal_of_the_wrong_field_is_a_parse_error() {
        let err = compile("12:30", Field::Date, &here(), resolver).unwrap_err();
        assert!(matches!(
            err,
            SchedulingError::Parse {
                field: Field::Date,
                reason: ParseFailure::TimeInDateCell,
                ..
            }
        ));

        let err = compile("2021-05-24", Field::Time, &here(), resolver).unwrap_err();
        assert!(matches!(
            err,
            SchedulingError::Parse {
                reason: ParseFailure::DateInTimeCell,
                ..
            }
        ));
    }

    #[test]
    fn syntax_error_reports_the_offending_term() {
        let err = compile(">= 2021-05-24, soon", Field::Date, &here(), resolver).unwrap_err();
        match err {
            SchedulingError::Parse { location, term, reason, .. } => {
                assert_eq!(location, here());
                assert_eq!(term, "soon");
                assert_eq!(reason, ParseFailure::Unrecognised);
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn unresolved_references_name_the_full_target() {
        let err = compile("= A9", Field::Date, &here(), resolver).unwrap_err();
        assert_eq!(
            err,
            SchedulingError::Reference {
                location: here(),
                field: Field::Date,
                target: "$GII.A9".to_string(),
                problem: ReferenceProblem::UnknownCell,
            }
        );

        let err = compile("= $GXX.A2", Field::Time, &here(), resolver).unwrap_err();
        assert!(matches!(
            err,
            SchedulingError::Reference {
                problem: ReferenceProblem::UnknownSheet,
                ..
            }
        ));
    }
}
