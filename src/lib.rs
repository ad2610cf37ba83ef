/*!
`cgraphs` is a small library for **c**apacitated directed **graphs** whose one job is
computing the **maximum flow** between arbitrary sets of source and sink vertices using
Dinic's blocking-flow algorithm.

# Representation

We represent **nodes** as `u32` in the range `0..n` where `n` is the number of nodes in
the graph. **Capacities** and **flows** are signed 64-bit integers ([`flow::Flow`]); a
zero capacity means "no edge" and the net flow on the reverse of a used edge is negative.
Both are stored as dense `n x n` matrices ([`repr::CapacityMatrix`],
[`repr::FlowMatrix`]), which is adequate for the small graphs this crate targets.

# Design

Multi-source/multi-sink queries are reduced to single-source/single-sink ones by
consolidation: a synthetic super-source and super-sink are attached to the given vertex
sets with unbounded edges ([`algo::Consolidate`]). The search itself alternates between
building level graphs via BFS ([`algo::Levels`]) and extracting augmenting paths via a
level-restricted DFS, exposed as an iterator over pushed amounts
([`algo::DinicSearch`]). Most users only need the [`algo::MaxFlow`] trait, which is
implemented for every capacity storage.

# Usage

```rust
use cgraphs::{algo::*, prelude::*};

let graph = CapacityMatrix::from_rows(vec![
    vec![0, 0, 6, 4, 0, 0],
    vec![0, 0, 2, 5, 0, 0],
    vec![0, 0, 0, 0, 6, 6],
    vec![0, 0, 0, 0, 4, 4],
    vec![0, 0, 0, 0, 0, 0],
    vec![0, 0, 0, 0, 0, 0],
]).unwrap();

assert_eq!(graph.max_flow([0, 1], [4, 5]), Ok(16));
assert_eq!(graph.max_flow([1], [3, 5]), Ok(7));
```

Malformed inputs (non-square matrices, negative capacities, out-of-range source/sink
indices, capacity sums reaching [`flow::INF_FLOW`]) fail fast with a
[`flow::FlowError`]; empty source or sink sets are not an error and yield zero flow.
*/

pub mod algo;
pub mod flow;
pub mod node;
pub mod ops;
pub mod repr;

/// `cgraphs::prelude` includes definitions for nodes and flow values, the graph
/// operation traits as well as all implemented storage backends.
pub mod prelude {
    pub use super::{flow::*, node::*, ops::*, repr::*};
}
