/*!
# Flow Values

Capacities and flows are signed 64-bit integers: flows must be signed since the net flow
on the reverse of a used edge is negative, and 64 bits leave enough headroom that the
sum of all capacities of any realistic input stays below [`INF_FLOW`].
*/

use thiserror::Error;

use crate::node::{Node, NumNodes};

/// Amount of flow on an edge, or an edge capacity. Zero capacity means "no edge".
pub type Flow = i64;

/// Capacity value treated as unbounded.
///
/// Used for the edges attaching the super-source/super-sink and as the initial bound of
/// the augmenting search. Inputs are rejected at construction if their total capacity
/// reaches this value, so every finite flow compares strictly below it.
pub const INF_FLOW: Flow = Flow::MAX / 2;

/// Reasons a capacity matrix or a source/sink set is rejected.
///
/// All malformed inputs fail fast with one of these; empty source or sink sets are *not*
/// an error (the resulting max flow is simply zero).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FlowError {
    /// A row of the capacity matrix does not match the number of rows
    #[error("row {row} has {len} entries but the matrix has {expected} rows")]
    NonSquareMatrix {
        row: usize,
        len: usize,
        expected: usize,
    },

    /// A capacity entry is negative
    #[error("capacity of edge ({from},{to}) is negative: {capacity}")]
    NegativeCapacity { from: Node, to: Node, capacity: Flow },

    /// A source/sink index does not exist in the graph
    #[error("node {node} is out of range for a graph with {num_nodes} nodes")]
    NodeOutOfRange { node: Node, num_nodes: NumNodes },

    /// The total input capacity reaches [`INF_FLOW`], which would corrupt comparisons
    /// against the sentinel
    #[error("total capacity reaches INF_FLOW")]
    CapacityOverflow,
}
