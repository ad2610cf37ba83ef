/*!
# Node Representation

Nodes are plain `u32` indices in `0..n`. The graphs this crate targets stay far below
`2^32` nodes, and the narrower type keeps the dense matrices compact while still
allowing direct arithmetic on node values.

BFS levels are hop counts from the super-source and therefore bounded by the number of
nodes, so they share the `Node` representation. [`INVALID_NODE`] doubles as the
"not reached this phase" sentinel in a level array.
*/

/// A vertex index; every value below [`INVALID_NODE`] is a legal node
pub type Node = u32;

/// Sentinel for "no node here", used as the unreached marker in level arrays
pub const INVALID_NODE: Node = Node::MAX;

/// Number of nodes in a graph; bounded by [`INVALID_NODE`]
pub type NumNodes = Node;
