/*!
# Maximum Flow (Dinic)

This module implements **Dinic's blocking-flow algorithm** on consolidated networks.

## Core concepts
- A **phase** starts by building a fresh level graph ([`Levels`]) from the current flow.
- Within a phase, a DFS restricted to level-climbing residual edges extracts
  **one augmenting path per call** and pushes its bottleneck amount.
- Once a DFS comes up empty, the level graph is rebuilt; once the super-sink becomes
  unreachable, the algorithm terminates.

## Implementations
- [`DinicSearch`] runs the search as an iterator: every item is the amount pushed along
  one augmenting path, and the sum of all items is the maximum flow.
- [`MaxFlow`] is the high-level entry point implemented on every capacity storage: it
  consolidates the given source/sink sets and drains a [`DinicSearch`].

Note that a single DFS call returns on its *first* successful path instead of saturating
all paths through a vertex before backtracking. A dead end therefore only exhausts a
vertex implicitly, through the saturation of its residual edges. This per-call behavior
is kept deliberately for output-compatible flow matrices, at the price of some redundant
re-scans compared to a pruning blocking-flow implementation.
*/

use crate::{flow::*, node::*, ops::*, repr::FlowMatrix};

use super::{Consolidate, Levels};

/// Dinic's algorithm on a consolidated network with super-source `0` and super-sink
/// `n - 1`, run as an iterator over augmenting-path amounts.
///
/// The flow and level state lives on the search object itself and is dropped with it, so
/// the underlying capacity storage can be reused for further, independent searches.
pub struct DinicSearch<G> {
    network: G,
    flow: FlowMatrix,
    levels: Levels,
}

impl<G> DinicSearch<G>
where
    G: CapacityView,
{
    /// Creates a new search on a consolidated network. The initial flow is zero and the
    /// first level graph is built immediately.
    /// ** Panics if the network has less than two nodes **
    pub fn new(network: G) -> Self {
        assert!(network.number_of_nodes() >= 2);

        let flow = FlowMatrix::new(network.number_of_nodes());
        let levels = Levels::compute(&network, &flow);
        Self {
            network,
            flow,
            levels,
        }
    }

    /// Returns the net flow pushed so far. Only after the iterator is drained does this
    /// describe a maximum flow.
    pub fn flow(&self) -> &FlowMatrix {
        &self.flow
    }

    /// Returns the network the search runs on
    pub fn network(&self) -> &G {
        &self.network
    }

    fn sink(&self) -> Node {
        self.network.number_of_nodes() - 1
    }

    /// Tries to push at most `bound` units of flow from `u` to the super-sink along
    /// edges that climb exactly one level and have positive residual capacity.
    ///
    /// Neighbors are scanned in vertex-index order; the first recursive call that
    /// reports a positive amount settles the path, i.e. the flow on `(u, v)` and
    /// `(v, u)` is updated and the amount returned unchanged to the caller. Returns `0`
    /// if no neighbor yields flow, marking `u` as a dead end for this phase.
    fn augment(&mut self, u: Node, bound: Flow) -> Flow {
        if u == self.sink() {
            return bound;
        }

        for v in self.network.vertices_range() {
            if !self.levels.is_successor(u, v) {
                continue;
            }

            let residual = self.network.capacity(u, v) - self.flow.flow(u, v);
            if residual <= 0 {
                continue;
            }

            let pushed = self.augment(v, bound.min(residual));
            if pushed > 0 {
                self.flow.push(u, v, pushed);
                return pushed;
            }
        }

        0
    }
}

impl<G> Iterator for DinicSearch<G>
where
    G: CapacityView,
{
    type Item = Flow;

    /// Extracts the next augmenting path and returns the amount pushed along it.
    /// Rebuilds the level graph whenever the current one is exhausted; returns `None`
    /// once the super-sink is unreachable in the residual graph.
    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if !self.levels.sink_reachable() {
                return None;
            }

            let pushed = self.augment(0, INF_FLOW);
            if pushed > 0 {
                return Some(pushed);
            }

            // phase over: recompute levels from the current flow. A freshly built level
            // graph that still reaches the sink always admits another path, so this
            // loops at most twice per call.
            self.levels = Levels::compute(&self.network, &self.flow);
        }
    }
}

/// High-level maximum flow queries on capacity storages.
pub trait MaxFlow: Consolidate {
    /// Returns the maximum flow deliverable from any combination of `sources` to any
    /// combination of `sinks`, treating all sources as a single logical origin and all
    /// sinks as a single logical destination. Only the aggregate total is optimal; how
    /// it distributes over individual sources and sinks is unspecified.
    ///
    /// Empty source or sink sets yield `0`. A vertex appearing in both sets admits an
    /// unbounded path through the super-terminals; the returned total then saturates at
    /// [`INF_FLOW`]. The graph itself is not modified and repeated calls with identical
    /// arguments return identical results.
    ///
    /// # Errors
    /// [`FlowError::NodeOutOfRange`] if any source or sink index is `>= n`.
    ///
    /// # Examples
    /// ```
    /// use cgraphs::{algo::*, prelude::*};
    ///
    /// let mut graph = CapacityMatrix::new(3);
    /// graph.set_capacity(0, 1, 3);
    /// graph.set_capacity(1, 2, 2);
    ///
    /// assert_eq!(graph.max_flow([0], [2]), Ok(2));
    /// ```
    fn max_flow<S, T>(&self, sources: S, sinks: T) -> Result<Flow, FlowError>
    where
        S: IntoIterator<Item = Node>,
        T: IntoIterator<Item = Node>,
    {
        let network = self.consolidated(sources, sinks)?;
        Ok(DinicSearch::new(network).fold(0, |total, pushed| INF_FLOW.min(total + pushed)))
    }
}

impl<G> MaxFlow for G where G: Consolidate {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repr::CapacityMatrix;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;
    use std::collections::VecDeque;

    fn reference_graph() -> CapacityMatrix {
        CapacityMatrix::from_rows(vec![
            vec![0, 0, 6, 4, 0, 0],
            vec![0, 0, 2, 5, 0, 0],
            vec![0, 0, 0, 0, 6, 6],
            vec![0, 0, 0, 0, 4, 4],
            vec![0, 0, 0, 0, 0, 0],
            vec![0, 0, 0, 0, 0, 0],
        ])
        .unwrap()
    }

    /// Independent shortest-augmenting-path max flow used to cross-check Dinic totals
    fn edmonds_karp(network: &CapacityMatrix) -> Flow {
        let n = network.number_of_nodes();
        let (s, t) = (0, n - 1);
        let mut flow = FlowMatrix::new(n);
        let mut total = 0;

        loop {
            let mut predecessor = vec![INVALID_NODE; n as usize];
            predecessor[s as usize] = s;

            let mut queue = VecDeque::from(vec![s]);
            while let Some(u) = queue.pop_front() {
                for v in network.vertices() {
                    if predecessor[v as usize] == INVALID_NODE
                        && flow.flow(u, v) < network.capacity(u, v)
                    {
                        predecessor[v as usize] = u;
                        queue.push_back(v);
                    }
                }
            }

            if predecessor[t as usize] == INVALID_NODE {
                return total;
            }

            let mut bottleneck = INF_FLOW;
            let mut v = t;
            while v != s {
                let u = predecessor[v as usize];
                bottleneck = bottleneck.min(network.capacity(u, v) - flow.flow(u, v));
                v = u;
            }

            let mut v = t;
            while v != s {
                let u = predecessor[v as usize];
                flow.push(u, v, bottleneck);
                v = u;
            }

            total += bottleneck;
        }
    }

    fn random_graph<R: Rng>(rng: &mut R, n: NumNodes) -> CapacityMatrix {
        let mut graph = CapacityMatrix::new(n);
        for u in 0..n {
            for v in 0..n {
                if u != v && rng.random_bool(0.35) {
                    graph.set_capacity(u, v, rng.random_range(1..10));
                }
            }
        }
        graph
    }

    #[test]
    fn reference_scenario() {
        let graph = reference_graph();

        assert_eq!(graph.max_flow([0, 1], [4, 5]), Ok(16));
        assert_eq!(graph.max_flow([1], [3, 5]), Ok(7));
    }

    #[test]
    fn single_source_single_sink() {
        let mut graph = CapacityMatrix::new(6);
        for (u, v, c) in [
            (0, 1, 10),
            (0, 2, 10),
            (1, 3, 4),
            (1, 4, 8),
            (2, 4, 9),
            (3, 5, 10),
            (4, 3, 6),
            (4, 5, 10),
        ] {
            graph.set_capacity(u, v, c);
        }

        assert_eq!(graph.max_flow([0], [5]), Ok(19));
    }

    #[test]
    fn empty_source_or_sink_set() {
        let graph = reference_graph();

        assert_eq!(graph.max_flow([], [4, 5]), Ok(0));
        assert_eq!(graph.max_flow([0, 1], []), Ok(0));
        assert_eq!(graph.max_flow([], []), Ok(0));
    }

    #[test]
    fn disconnected_sink() {
        let mut graph = CapacityMatrix::new(4);
        graph.set_capacity(0, 1, 10);
        graph.set_capacity(2, 3, 5);

        assert_eq!(graph.max_flow([0], [3]), Ok(0));
    }

    #[test]
    fn overlapping_terminals_saturate_at_inf_flow() {
        // every vertex is both source and sink: one unbounded path each
        let graph = CapacityMatrix::new(3);
        assert_eq!(graph.max_flow([0, 1, 2], [0, 1, 2]), Ok(INF_FLOW));

        // a single overlapping vertex saturates the total as well
        let graph = reference_graph();
        assert_eq!(graph.max_flow([0, 1], [1, 4]), Ok(INF_FLOW));
    }

    #[test]
    fn out_of_range_nodes_are_rejected() {
        let graph = reference_graph();

        assert_eq!(
            graph.max_flow([6], [4]),
            Err(FlowError::NodeOutOfRange {
                node: 6,
                num_nodes: 6
            })
        );
    }

    #[test]
    fn repeated_queries_are_identical() {
        let graph = reference_graph();

        for _ in 0..3 {
            assert_eq!(graph.max_flow([0, 1], [4, 5]), Ok(16));
            assert_eq!(graph.max_flow([1], [3, 5]), Ok(7));
        }
    }

    #[test]
    fn search_yields_positive_increments() {
        let graph = reference_graph();
        let network = graph.consolidated([0, 1], [4, 5]).unwrap();

        let increments: Vec<Flow> = DinicSearch::new(network).collect();
        assert!(increments.iter().all(|&pushed| pushed > 0));
        assert_eq!(increments.iter().sum::<Flow>(), 16);
    }

    #[test]
    fn final_flow_invariants() {
        let graph = reference_graph();
        let network = graph.consolidated([0, 1], [4, 5]).unwrap();

        let mut search = DinicSearch::new(network.clone());
        let total: Flow = search.by_ref().sum();
        assert_eq!(total, 16);

        let flow = search.flow();
        let n = network.number_of_nodes();

        for u in network.vertices() {
            for v in network.vertices() {
                // antisymmetry and capacity respect
                assert_eq!(flow.flow(u, v), -flow.flow(v, u));
                assert!(flow.flow(u, v) <= network.capacity(u, v));
            }
        }

        // conservation: interior vertices have zero net flow, the super-source emits
        // the total and the super-sink absorbs it
        for u in 1..n - 1 {
            let net: Flow = network.vertices().map(|v| flow.flow(u, v)).sum();
            assert_eq!(net, 0, "vertex {u} violates conservation");
        }
        let source_net: Flow = network.vertices().map(|v| flow.flow(0, v)).sum();
        let sink_net: Flow = network.vertices().map(|v| flow.flow(n - 1, v)).sum();
        assert_eq!(source_net, total);
        assert_eq!(sink_net, -total);
    }

    #[test]
    fn matches_shortest_augmenting_path_reference() {
        let rng = &mut Pcg64Mcg::seed_from_u64(7);

        for n in [2 as NumNodes, 4, 6, 9] {
            for _ in 0..20 {
                let graph = random_graph(rng, n);
                let network = graph.consolidated([0], [n - 1]).unwrap();

                let dinic: Flow = DinicSearch::new(network.clone()).sum();
                assert_eq!(dinic, edmonds_karp(&network));
            }
        }
    }

    #[test]
    fn multi_terminal_matches_reference() {
        let rng = &mut Pcg64Mcg::seed_from_u64(11);

        for _ in 0..20 {
            let n = 8;
            let graph = random_graph(rng, n);
            let sources = [0, 1, 2];
            let sinks = [5, 6, 7];

            let network = graph.consolidated(sources, sinks).unwrap();
            assert_eq!(
                graph.max_flow(sources, sinks),
                Ok(edmonds_karp(&network))
            );
        }
    }

    #[test]
    fn raising_capacities_never_lowers_the_flow() {
        let rng = &mut Pcg64Mcg::seed_from_u64(23);

        for _ in 0..20 {
            let n = 7;
            let graph = random_graph(rng, n);
            let before = graph.max_flow([0, 1], [n - 1]).unwrap();

            let mut raised = graph.clone();
            let u = rng.random_range(0..n);
            let v = rng.random_range(0..n);
            raised.set_capacity(u, v, raised.capacity(u, v) + rng.random_range(0..5));

            assert!(raised.max_flow([0, 1], [n - 1]).unwrap() >= before);
        }
    }
}
