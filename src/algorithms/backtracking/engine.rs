//! Depth-first search with forward checking on an explicit frame stack.

use super::frame::Frame;
use super::network::Network;
use super::ordering::select_variable;
use crate::error::SchedulingError;
use crate::pool::{Pool, SlotIndex};
use tracing::trace;

/// Outcome of a completed search.
pub(crate) struct Search {
    pub(crate) values: Vec<SlotIndex>,
    pub(crate) nodes: u64,
}

/// Runs the search over `domains` (one per variable, ascending slot order).
///
/// Values are tried in ascending slot order and the first complete
/// assignment is returned, so identical inputs always yield the same result.
pub(crate) fn search(
    pool: &Pool,
    network: &Network,
    mut domains: Vec<Vec<SlotIndex>>,
    node_limit: Option<u64>,
) -> Result<Search, SchedulingError> {
    let mut assigned: Vec<Option<SlotIndex>> = vec![None; domains.len()];
    let mut stack: Vec<Frame> = Vec::new();
    let mut nodes: u64 = 0;

    loop {
        let Some(var) = select_variable(&domains, &assigned) else {
            let values = assigned.into_iter().flatten().collect();
            return Ok(Search { values, nodes });
        };
        stack.push(Frame::new(var, domains[var].clone()));

        // Find a value for the top frame, popping exhausted frames.
        loop {
            let Some(frame) = stack.last_mut() else {
                return Err(SchedulingError::Unsatisfiable { nodes });
            };
            frame.undo(&mut domains);
            assigned[frame.var] = None;

            let Some(value) = frame.next_value() else {
                trace!(var = frame.var, "values exhausted, backtracking");
                stack.pop();
                continue;
            };

            nodes += 1;
            if let Some(limit) = node_limit {
                if nodes > limit {
                    return Err(SchedulingError::BudgetExhausted { limit });
                }
            }

            assigned[frame.var] = Some(value);
            if forward_check(pool, network, frame, value, &mut domains, &assigned) {
                break;
            }
        }
    }
}

/// Prunes the domains of unassigned neighbours of `frame.var` against
/// `value`, saving each overwritten domain on the frame's trail. Returns false
/// on a domain wipe-out.
fn forward_check(
    pool: &Pool,
    network: &Network,
    frame: &mut Frame,
    value: SlotIndex,
    domains: &mut [Vec<SlotIndex>],
    assigned: &[Option<SlotIndex>],
) -> bool {
    for arc in network.arcs(frame.var) {
        if assigned[arc.to].is_some() {
            continue;
        }
        let current = &domains[arc.to];
        let kept: Vec<SlotIndex> = current
            .iter()
            .copied()
            .filter(|&theirs| arc.check.allows(pool, value, theirs))
            .collect();
        if kept.len() == current.len() {
            continue;
        }

        let wiped = kept.is_empty();
        let saved = std::mem::replace(&mut domains[arc.to], kept);
        frame.trail.push((arc.to, saved));
        if wiped {
            return false;
        }
    }
    true
}
