//! Chronological backtracking with forward checking.
//!
//! One variable per included record, whose values are the slots of its
//! reduced domain. Posted constraints:
//!
//! 1. every binary date or time constraint between two included records
//! 2. the spacing rule: two records of the same grade and course must be at
//!    least `max(setup_a, setup_b)` hours apart, whichever comes first
//!
//! # Search
//!
//! - **Variable order**: minimum remaining values, ties by declaration order
//! - **Value order**: ascending slot index, i.e. chronological
//! - **Propagation**: after each assignment the domains of unassigned
//!   neighbours are filtered; a wipe-out rejects the value immediately
//!
//! The search keeps an explicit stack of [`frame`]s and a trail of saved
//! domains, so backtracking restores state without recursion.
//!
//! # Module Structure
//!
//! - [`network`] - constraint arcs between variables
//! - [`ordering`] - variable selection
//! - [`frame`] - search stack frames and their trail
//! - [`engine`] - search loop and forward checking

mod engine;
mod frame;
mod network;
mod ordering;


use super::SchedulingAlgorithm;
use crate::assignment::{Assignment, Placement};
use crate::error::SchedulingError;
use crate::pool::Pool;
use crate::record_graph::ResolvedModel;
use crate::solution_space::SolutionSpace;
use network::Network;
use tracing::{info, warn};

/// Backtracking CSP solver.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BacktrackingSolver {
    node_limit: Option<u64>,
}

impl BacktrackingSolver {
    /// Creates a solver that searches exhaustively.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stops the search with [`SchedulingError::BudgetExhausted`] after
    /// `limit` value assignments.
    pub fn with_node_limit(mut self, limit: u64) -> Self {
        self.node_limit = Some(limit);
        self
    }

    pub fn node_limit(&self) -> Option<u64> {
        self.node_limit
    }
}

impl SchedulingAlgorithm for BacktrackingSolver {
    fn solve(
        &self,
        pool: &Pool,
        model: &ResolvedModel,
        space: &SolutionSpace,
    ) -> Result<Assignment, SchedulingError> {
        let network = Network::build(model);
        info!(
            variables = model.len(),
            constraints = network.constraint_count(),
            "constraints posted"
        );

        let domains = space.domains().iter().map(|d| d.slots().to_vec()).collect();
        let search = match engine::search(pool, &network, domains, self.node_limit) {
            Ok(search) => search,
            Err(err) => {
                warn!(%err, "no solution found");
                return Err(err);
            }
        };
        info!(nodes = search.nodes, "solution found");

        let placements = model
            .iter()
            .zip(&search.values)
            .map(|((record, origin), slot)| {
                Placement::new(record, pool.slots()[slot.index()], origin)
            })
            .collect();
        Ok(Assignment::new(placements))
    }
}
