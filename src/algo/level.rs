/*!
# Level Graph Construction

A **level graph** labels every vertex with its BFS distance from the super-source along
residual edges, i.e. edges `(u, v)` with `flow(u, v) < capacity(u, v)`. The augmenting
search of a phase only advances along edges that climb exactly one level, which is what
bounds the number of phases of Dinic's algorithm.

Levels are only consistent within a single phase: they must be recomputed from the
current flow before every blocking-flow pass and never reused across phases.
*/

use std::collections::VecDeque;

use crate::{node::*, ops::*, repr::FlowMatrix};

/// BFS distances from the super-source (vertex `0`) in the residual graph of one phase.
pub struct Levels {
    level: Vec<Node>,
}

impl Levels {
    /// Runs a BFS from vertex `0` over all residual edges and records the distance of
    /// every reached vertex. Unreached vertices keep the [`INVALID_NODE`] sentinel.
    /// ** Panics if the graph has no nodes or `capacity` and `flow` disagree in size **
    pub fn compute<G>(capacity: &G, flow: &FlowMatrix) -> Self
    where
        G: CapacityView,
    {
        assert_eq!(capacity.number_of_nodes(), flow.number_of_nodes());

        let mut level = vec![INVALID_NODE; capacity.len()];
        level[0] = 0;

        let mut queue = VecDeque::from(vec![0 as Node]);
        while let Some(u) = queue.pop_front() {
            for v in capacity.vertices_range() {
                if level[v as usize] == INVALID_NODE && flow.flow(u, v) < capacity.capacity(u, v)
                {
                    level[v as usize] = level[u as usize] + 1;
                    queue.push_back(v);
                }
            }
        }

        Self { level }
    }

    /// Returns the level of `u`, or `None` if `u` was not reached this phase.
    /// ** Panics if `u >= n` **
    pub fn of(&self, u: Node) -> Option<Node> {
        let level = self.level[u as usize];
        (level != INVALID_NODE).then_some(level)
    }

    /// Returns *true* if `v` lies exactly one level above `u`, i.e. if the edge `(u, v)`
    /// may be used by the augmenting search of this phase.
    pub fn is_successor(&self, u: Node, v: Node) -> bool {
        match (self.of(u), self.of(v)) {
            (Some(lu), Some(lv)) => lv == lu + 1,
            _ => false,
        }
    }

    /// Returns *true* if the super-sink (the last vertex) was reached. Once this turns
    /// false, no augmenting path exists and the search terminates.
    pub fn sink_reachable(&self) -> bool {
        *self.level.last().unwrap() != INVALID_NODE
    }
}
