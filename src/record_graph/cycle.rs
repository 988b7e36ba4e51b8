use crate::constraints::Field;
use crate::model::RecordId;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::Direction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    Unvisited,
    OnPath,
    Done,
}

struct Frame {
    node: NodeIndex,
    successors: Vec<NodeIndex>,
    cursor: usize,
}

impl Frame {
    fn new(graph: &DiGraph<RecordId, Field>, node: NodeIndex) -> Self {
        let mut successors: Vec<NodeIndex> =
            graph.neighbors_directed(node, Direction::Outgoing).collect();
        successors.sort_unstable();
        successors.dedup();
        Self {
            node,
            successors,
            cursor: 0,
        }
    }
}

/// Finds a directed cycle, returning it as a closed walk `[a, .., a]` of
/// record ids.
///
/// Iterative depth-first search over roots and successors in index order, so
/// the reported cycle is deterministic and deep reference chains cannot
/// overflow the call stack. A self-reference is reported as `[a, a]`.
pub(crate) fn find_cycle(graph: &DiGraph<RecordId, Field>) -> Option<Vec<RecordId>> {
    let mut marks = vec![Mark::Unvisited; graph.node_count()];

    for root in graph.node_indices() {
        if marks[root.index()] != Mark::Unvisited {
            continue;
        }
        marks[root.index()] = Mark::OnPath;
        let mut stack = vec![Frame::new(graph, root)];

        while let Some(top) = stack.last_mut() {
            let node = top.node;
            let next = top.successors.get(top.cursor).copied();
            top.cursor += 1;

            let Some(next) = next else {
                marks[node.index()] = Mark::Done;
                stack.pop();
                continue;
            };

            match marks[next.index()] {
                Mark::Unvisited => {
                    marks[next.index()] = Mark::OnPath;
                    stack.push(Frame::new(graph, next));
                }
                Mark::OnPath => {
                    let start = stack.iter().position(|f| f.node == next).unwrap_or(0);
                    let mut path: Vec<RecordId> =
                        stack[start..].iter().map(|f| graph[f.node]).collect();
                    path.push(graph[next]);
                    return Some(path);
                }
                Mark::Done => {}
            }
        }
    }

    None
}
