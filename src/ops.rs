use std::ops::Range;

use crate::{flow::Flow, node::*};

/// Provides getters pertaining to the node-size of a graph
pub trait GraphNodeOrder {
    /// Returns the number of nodes of the graph
    fn number_of_nodes(&self) -> NumNodes;

    /// Return the number of nodes as usize
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Returns a range over V.
    ///
    /// In contrast to `self.vertices()`, the returned range does not borrow self and
    /// hence may be used where additional mutable references of self are needed
    fn vertices_range(&self) -> Range<Node> {
        0..self.number_of_nodes()
    }

    /// Returns an iterator over V.
    fn vertices(&self) -> impl Iterator<Item = Node> + '_ {
        self.vertices_range()
    }

    /// Returns *true* if the graph has no nodes (and thus no edges)
    fn is_empty(&self) -> bool {
        self.number_of_nodes() == 0
    }
}

/// Read-access to edge capacities.
///
/// Algorithms in [`crate::algo`] are generic over this seam, so any storage backend that
/// can answer capacity queries can be consolidated and searched.
pub trait CapacityView: GraphNodeOrder {
    /// Returns the capacity of the directed edge `(u, v)`. Zero means "no edge".
    /// ** Panics if `u >= n || v >= n` **
    fn capacity(&self, u: Node, v: Node) -> Flow;

    /// Returns an iterator over all nodes `v` with `capacity(u, v) > 0` in index order.
    /// ** Panics if `u >= n` **
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.vertices_range().filter(move |&v| self.capacity(u, v) > 0)
    }

    /// Returns the number of outgoing edges of `u` with positive capacity.
    /// ** Panics if `u >= n` **
    fn degree_of(&self, u: Node) -> NumNodes {
        self.neighbors_of(u).count() as NumNodes
    }
}
