//! Pipeline entry points.

use crate::algorithms::{BacktrackingSolver, SchedulingAlgorithm};
use crate::assignment::Assignment;
use crate::config::EngineConfig;
use crate::error::SchedulingError;
use crate::model::{InputModel, Selection};
use crate::pool::Pool;
use crate::record_graph::RecordGraph;
use crate::solution_space::SolutionSpace;
use tracing::info;

/// Runs the whole pipeline: pool, record graph, closure, domains, search.
#[derive(Debug, Clone, Default)]
pub struct Engine {
    config: EngineConfig,
}

impl Engine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Schedules the records of `model` picked by `selection`.
    ///
    /// With `load_indirects`, records referenced (transitively) by selected
    /// records are scheduled too and tagged indirect in the result.
    ///
    /// # Errors
    ///
    /// Any [`SchedulingError`]; no partial assignment is ever returned.
    pub fn schedule(
        &self,
        model: &InputModel,
        selection: &Selection,
        load_indirects: bool,
    ) -> Result<Assignment, SchedulingError> {
        let pool = Pool::new(&model.pool)?;
        let graph = RecordGraph::build(model, self.config.default_setup())?;
        let resolved = graph.resolve(selection, load_indirects, self.config.outside_references)?;
        let space = SolutionSpace::build(&pool, &resolved)?;

        let solver = match self.config.node_limit {
            Some(limit) => BacktrackingSolver::new().with_node_limit(limit),
            None => BacktrackingSolver::new(),
        };
        let assignment = solver.solve(&pool, &resolved, &space)?;

        info!(
            direct = resolved.direct_count(),
            indirect = resolved.indirect_count(),
            "schedule complete"
        );
        Ok(assignment)
    }
}

/// Schedules with the default configuration.
pub fn schedule(
    model: &InputModel,
    selection: &Selection,
    load_indirects: bool,
) -> Result<Assignment, SchedulingError> {
    Engine::default().schedule(model, selection, load_indirects)
}

/// Schedules with an explicit configuration.
pub fn schedule_with_config(
    model: &InputModel,
    selection: &Selection,
    load_indirects: bool,
    config: &EngineConfig,
) -> Result<Assignment, SchedulingError> {
    Engine::new(config.clone()).schedule(model, selection, load_indirects)
}
