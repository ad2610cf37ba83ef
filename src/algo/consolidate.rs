/*!
# Source/Sink Consolidation

Rewrites a multi-source/multi-sink instance into a single-source/single-sink one by
attaching a synthetic **super-source** and **super-sink**:

- original vertex `i` is relabeled `i + 1`,
- vertex `0` becomes the super-source with an [`INF_FLOW`] edge to every source,
- vertex `n + 1` becomes the super-sink with an [`INF_FLOW`] edge from every sink.

Since the attached edges are unbounded, the max flow of the consolidated network equals
the aggregate max flow from any combination of the sources to any combination of the
sinks of the original graph.
*/

use fxhash::FxHashSet;

use crate::{flow::*, node::*, ops::*, repr::CapacityMatrix};

/// Consolidation of source/sink sets into a super-source and super-sink.
pub trait Consolidate: CapacityView {
    /// Returns a fresh `(n + 2) x (n + 2)` capacity matrix with the super-source at
    /// index `0`, the super-sink at index `n + 1` and every original vertex `i`
    /// relabeled to `i + 1`. The input graph is not modified.
    ///
    /// Duplicate entries in `sources`/`sinks` are deduplicated. Empty sets are allowed
    /// and simply leave the super-source or super-sink isolated, so the max flow of the
    /// consolidated network is zero.
    ///
    /// # Errors
    /// [`FlowError::NodeOutOfRange`] if any source or sink index is `>= n`.
    fn consolidated<S, T>(&self, sources: S, sinks: T) -> Result<CapacityMatrix, FlowError>
    where
        S: IntoIterator<Item = Node>,
        T: IntoIterator<Item = Node>;
}

impl<G> Consolidate for G
where
    G: CapacityView,
{
    fn consolidated<S, T>(&self, sources: S, sinks: T) -> Result<CapacityMatrix, FlowError>
    where
        S: IntoIterator<Item = Node>,
        T: IntoIterator<Item = Node>,
    {
        let n = self.number_of_nodes();
        let mut network = CapacityMatrix::new(n + 2);

        for u in self.vertices() {
            for v in self.neighbors_of(u) {
                network.set_capacity(u + 1, v + 1, self.capacity(u, v));
            }
        }

        for source in checked_node_set(sources, n)? {
            network.set_capacity(0, source + 1, INF_FLOW);
        }

        for sink in checked_node_set(sinks, n)? {
            network.set_capacity(sink + 1, n + 1, INF_FLOW);
        }

        Ok(network)
    }
}

/// Deduplicates a node collection and rejects out-of-range indices
fn checked_node_set<I>(nodes: I, n: NumNodes) -> Result<FxHashSet<Node>, FlowError>
where
    I: IntoIterator<Item = Node>,
{
    let nodes: FxHashSet<Node> = nodes.into_iter().collect();

    match nodes.iter().find(|&&u| u >= n) {
        Some(&node) => Err(FlowError::NodeOutOfRange { node, num_nodes: n }),
        None => Ok(nodes),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relabels_and_attaches_super_nodes() {
        let graph = CapacityMatrix::from_rows(vec![vec![0, 7, 0], vec![0, 0, 2], vec![0, 0, 0]])
            .unwrap();

        let network = graph.consolidated([0], [2]).unwrap();

        assert_eq!(network.number_of_nodes(), 5);

        // original edges shifted by one
        assert_eq!(network.capacity(1, 2), 7);
        assert_eq!(network.capacity(2, 3), 2);

        // super edges
        assert_eq!(network.capacity(0, 1), INF_FLOW);
        assert_eq!(network.capacity(3, 4), INF_FLOW);

        // nothing else
        let special = [(1, 2), (2, 3), (0, 1), (3, 4)];
        for u in network.vertices() {
            for v in network.vertices() {
                if !special.contains(&(u, v)) {
                    assert_eq!(network.capacity(u, v), 0, "unexpected edge ({u},{v})");
                }
            }
        }
    }

    #[test]
    fn input_is_not_modified() {
        let graph = CapacityMatrix::from_rows(vec![vec![0, 1], vec![0, 0]]).unwrap();
        let copy = graph.clone();

        graph.consolidated([0], [1]).unwrap();
        assert_eq!(graph, copy);
    }

    #[test]
    fn duplicates_are_deduplicated() {
        let graph = CapacityMatrix::from_rows(vec![vec![0, 1], vec![0, 0]]).unwrap();

        let network = graph.consolidated([0, 0, 0], [1, 1]).unwrap();
        let expected = graph.consolidated([0], [1]).unwrap();
        assert_eq!(network, expected);
    }

    #[test]
    fn empty_sets_leave_super_nodes_isolated() {
        let graph = CapacityMatrix::from_rows(vec![vec![0, 1], vec![0, 0]]).unwrap();

        let network = graph.consolidated([], [0, 1]).unwrap();
        assert_eq!(network.degree_of(0), 0);

        let network = graph.consolidated([0], []).unwrap();
        assert!(network
            .vertices()
            .all(|u| network.capacity(u, network.number_of_nodes() - 1) == 0));
    }

    #[test]
    fn out_of_range_nodes_are_rejected() {
        let graph = CapacityMatrix::from_rows(vec![vec![0, 1], vec![0, 0]]).unwrap();

        assert_eq!(
            graph.consolidated([2], [1]).unwrap_err(),
            FlowError::NodeOutOfRange {
                node: 2,
                num_nodes: 2
            }
        );
        assert_eq!(
            graph.consolidated([0], [5]).unwrap_err(),
            FlowError::NodeOutOfRange {
                node: 5,
                num_nodes: 2
            }
        );
    }
}
