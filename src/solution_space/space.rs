use super::RecordDomain;
use crate::constraints::{Field, Literal};
use crate::error::SchedulingError;
use crate::model::{Record, RecordId};
use crate::pool::Pool;
use crate::record_graph::ResolvedModel;
use tracing::{debug, info};

/// Reduced domains of every record in a resolved model.
///
/// Domains are indexed by the record's position in the [`ResolvedModel`],
/// which is also its variable index in the solver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolutionSpace {
    domains: Vec<RecordDomain>,
}

impl SolutionSpace {
    /// Intersects the pool with the unit constraints of every record.
    ///
    /// # Errors
    ///
    /// `DomainEmpty` naming the field if no pool date (or time) survives the
    /// record's unit constraints, or with no field if every surviving date
    /// and time exist separately but never together in one slot.
    pub fn build(pool: &Pool, model: &ResolvedModel) -> Result<Self, SchedulingError> {
        let domains = model
            .records()
            .iter()
            .map(|record| Self::reduce(pool, record))
            .collect::<Result<Vec<_>, _>>()?;

        info!(values = pool.len(), records = domains.len(), "values generated");
        Ok(Self { domains })
    }

    fn reduce(pool: &Pool, record: &Record) -> Result<RecordDomain, SchedulingError> {
        let empty = |field| SchedulingError::DomainEmpty {
            record: record.location().clone(),
            subject: record.subject().to_string(),
            field,
        };

        let dates: Vec<_> = pool
            .dates()
            .iter()
            .copied()
            .filter(|d| {
                record
                    .unit_constraints(Field::Date)
                    .all(|c| c.admits(&Literal::Date(*d)))
            })
            .collect();
        if dates.is_empty() {
            return Err(empty(Some(Field::Date)));
        }

        let times: Vec<_> = pool
            .times()
            .iter()
            .copied()
            .filter(|t| {
                record
                    .unit_constraints(Field::Time)
                    .all(|c| c.admits(&Literal::Time(*t)))
            })
            .collect();
        if times.is_empty() {
            return Err(empty(Some(Field::Time)));
        }

        let slots: Vec<_> = pool
            .slots()
            .iter()
            .filter(|s| {
                dates.binary_search(&s.date()).is_ok() && times.binary_search(&s.time()).is_ok()
            })
            .map(|s| s.index())
            .collect();
        if slots.is_empty() {
            return Err(empty(None));
        }

        debug!(
            record = %record.location(),
            subject = record.subject(),
            dates = dates.len(),
            times = times.len(),
            slots = slots.len(),
            "domain reduced"
        );
        Ok(RecordDomain {
            dates,
            times,
            slots,
        })
    }

    pub fn len(&self) -> usize {
        self.domains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }

    /// Domain of the record at `position` in the resolved model.
    pub fn domain(&self, position: usize) -> Option<&RecordDomain> {
        self.domains.get(position)
    }

    /// Domain of a record by id.
    pub fn domain_of(&self, model: &ResolvedModel, id: RecordId) -> Option<&RecordDomain> {
        model.position(id).and_then(|i| self.domain(i))
    }

    pub fn domains(&self) -> &[RecordDomain] {
        &self.domains
    }
}
