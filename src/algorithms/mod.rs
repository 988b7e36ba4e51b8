pub mod backtracking;

pub use backtracking::BacktrackingSolver;

use crate::assignment::Assignment;
use crate::error::SchedulingError;
use crate::pool::Pool;
use crate::record_graph::ResolvedModel;
use crate::solution_space::SolutionSpace;

/// Algorithm that assigns a slot to every record of a resolved model.
pub trait SchedulingAlgorithm {
    /// Finds a complete assignment satisfying every posted constraint.
    ///
    /// # Arguments
    ///
    /// * `pool` - The timeslot pool the domains were built from
    /// * `model` - Included records, in variable order
    /// * `space` - Reduced domain of each record
    ///
    /// # Returns
    ///
    /// An [`Assignment`] covering every record of `model`, or the reason
    /// none exists. Partial assignments are never returned.
    fn solve(
        &self,
        pool: &Pool,
        model: &ResolvedModel,
        space: &SolutionSpace,
    ) -> Result<Assignment, SchedulingError>;
}
