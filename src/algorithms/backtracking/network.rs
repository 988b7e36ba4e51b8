//! Constraint network: binary checks between solver variables.

use crate::constraints::{Constraint, Field, Operator};
use crate::pool::{Pool, SlotIndex};
use crate::record_graph::ResolvedModel;
use crate::units::{at_least, max_hours, Hours};

/// A relation between the value of the arc's owner and the value of its
/// neighbour.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Check {
    /// `mine.field operator theirs.field`
    Field { field: Field, operator: Operator },
    /// At least `min` hours between the two slots, in either order.
    Spacing { min: Hours },
}

impl Check {
    pub(crate) fn allows(&self, pool: &Pool, mine: SlotIndex, theirs: SlotIndex) -> bool {
        let (a, b) = (&pool.slots()[mine.index()], &pool.slots()[theirs.index()]);
        match *self {
            Check::Field {
                field: Field::Date,
                operator,
            } => operator.holds(&a.date(), &b.date()),
            Check::Field {
                field: Field::Time,
                operator,
            } => operator.holds(&a.time(), &b.time()),
            Check::Spacing { min } => at_least(pool.elapsed_hours(mine, theirs), min),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Arc {
    pub(crate) to: usize,
    pub(crate) check: Check,
}

/// Arcs per variable. Every constraint is posted in both directions so
/// forward checking can prune from whichever side is assigned first.
#[derive(Debug, Clone, Default)]
pub(crate) struct Network {
    arcs: Vec<Vec<Arc>>,
    constraints: usize,
}

impl Network {
    pub(crate) fn build(model: &ResolvedModel) -> Self {
        let n = model.len();
        let mut network = Self {
            arcs: vec![Vec::new(); n],
            constraints: 0,
        };

        for (i, record) in model.records().iter().enumerate() {
            for c in record.all_constraints() {
                let Constraint::Binary {
                    field,
                    operator,
                    target,
                } = *c
                else {
                    continue;
                };
                // Targets outside the model are ignored by policy.
                let Some(j) = model.position(target) else {
                    continue;
                };
                network.post(i, j, Check::Field { field, operator });
                network.post(
                    j,
                    i,
                    Check::Field {
                        field,
                        operator: operator.mirrored(),
                    },
                );
                network.constraints += 1;
            }
        }

        let records = model.records();
        for i in 0..n {
            for j in i + 1..n {
                if records[i].shares_course_with(&records[j]) {
                    let min = max_hours(records[i].setup(), records[j].setup());
                    network.post(i, j, Check::Spacing { min });
                    network.post(j, i, Check::Spacing { min });
                    network.constraints += 1;
                }
            }
        }

        network
    }

    fn post(&mut self, from: usize, to: usize, check: Check) {
        self.arcs[from].push(Arc { to, check });
    }

    pub(crate) fn arcs(&self, var: usize) -> &[Arc] {
        &self.arcs[var]
    }

    /// Number of constraints posted, each counted once.
    pub(crate) fn constraint_count(&self) -> usize {
        self.constraints
    }
}
