/*!
# Dense Matrix Storage

Capacities and flows are stored as flat row-major `V x V` matrices. Dense storage is
adequate for the small graphs this crate targets; an adjacency-list with paired residual
edges is the natural generalization for larger graphs, and the algorithms in
[`crate::algo`] only depend on the [`CapacityView`] seam.
*/

use super::*;

/// Dense `V x V` storage of non-negative edge capacities.
///
/// `capacity(u, v)` is the maximum flow allowed on the directed edge `(u, v)`;
/// a zero entry means the edge does not exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapacityMatrix {
    n: NumNodes,
    capacities: Vec<Flow>,
    finite_total: Flow,
}

/// Contribution of a single entry to the finite capacity total. [`INF_FLOW`] marks an
/// unbounded edge and is exempt.
fn finite_part(capacity: Flow) -> Flow {
    if capacity == INF_FLOW {
        0
    } else {
        capacity
    }
}

impl CapacityMatrix {
    /// Creates a graph with `n` nodes and no edges
    pub fn new(n: NumNodes) -> Self {
        Self {
            n,
            capacities: vec![0; n as usize * n as usize],
            finite_total: 0,
        }
    }

    /// Builds a graph from nested capacity rows where `rows[u][v]` is the capacity of
    /// the edge `(u, v)`.
    ///
    /// # Errors
    /// - [`FlowError::NonSquareMatrix`] if any row length differs from the number of rows
    /// - [`FlowError::NegativeCapacity`] for any negative entry
    /// - [`FlowError::CapacityOverflow`] if the entries sum to [`INF_FLOW`] or beyond
    pub fn from_rows(rows: Vec<Vec<Flow>>) -> Result<Self, FlowError> {
        let n = rows.len();
        let mut capacities = Vec::with_capacity(n * n);
        let mut total: Flow = 0;

        for (u, row) in rows.iter().enumerate() {
            if row.len() != n {
                return Err(FlowError::NonSquareMatrix {
                    row: u,
                    len: row.len(),
                    expected: n,
                });
            }

            for (v, &capacity) in row.iter().enumerate() {
                if capacity < 0 {
                    return Err(FlowError::NegativeCapacity {
                        from: u as Node,
                        to: v as Node,
                        capacity,
                    });
                }

                total = total
                    .checked_add(capacity)
                    .ok_or(FlowError::CapacityOverflow)?;
                capacities.push(capacity);
            }
        }

        if total >= INF_FLOW {
            return Err(FlowError::CapacityOverflow);
        }

        Ok(Self {
            n: n as NumNodes,
            capacities,
            finite_total: total,
        })
    }

    /// Sets the capacity of the directed edge `(u, v)`. A capacity of exactly
    /// [`INF_FLOW`] marks an unbounded edge and does not count towards the finite
    /// capacity total.
    /// ** Panics if `u >= n || v >= n`, if `capacity` is outside `0..=INF_FLOW`, or if
    /// the finite capacities would sum to `INF_FLOW` or beyond **
    pub fn set_capacity(&mut self, u: Node, v: Node, capacity: Flow) {
        assert!((0..=INF_FLOW).contains(&capacity));
        let entry = self.entry_of(u, v);
        let total =
            self.finite_total - finite_part(self.capacities[entry]) + finite_part(capacity);
        assert!(total < INF_FLOW, "total capacity reaches INF_FLOW");
        self.finite_total = total;
        self.capacities[entry] = capacity;
    }

    fn entry_of(&self, u: Node, v: Node) -> usize {
        assert!(u < self.n && v < self.n);
        u as usize * self.n as usize + v as usize
    }
}

impl GraphNodeOrder for CapacityMatrix {
    fn number_of_nodes(&self) -> NumNodes {
        self.n
    }
}

impl CapacityView for CapacityMatrix {
    fn capacity(&self, u: Node, v: Node) -> Flow {
        self.capacities[self.entry_of(u, v)]
    }
}

/// Dense `V x V` storage of the net flow currently pushed on each directed edge.
///
/// Antisymmetry `flow(u, v) == -flow(v, u)` is maintained by construction: [`Self::push`]
/// is the only mutation primitive and always updates both directions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowMatrix {
    n: NumNodes,
    flows: Vec<Flow>,
}

impl FlowMatrix {
    /// Creates an all-zero flow over `n` nodes
    pub fn new(n: NumNodes) -> Self {
        Self {
            n,
            flows: vec![0; n as usize * n as usize],
        }
    }

    /// Returns the net flow on the directed edge `(u, v)`. Negative values indicate flow
    /// pushed in the opposite direction.
    /// ** Panics if `u >= n || v >= n` **
    pub fn flow(&self, u: Node, v: Node) -> Flow {
        self.flows[self.entry_of(u, v)]
    }

    /// Pushes `amount` over the edge `(u, v)`: increases `flow(u, v)` and decreases
    /// `flow(v, u)` by `amount`, keeping the matrix antisymmetric.
    /// ** Panics if `u >= n || v >= n` **
    pub fn push(&mut self, u: Node, v: Node, amount: Flow) {
        let forward = self.entry_of(u, v);
        let backward = self.entry_of(v, u);
        self.flows[forward] += amount;
        self.flows[backward] -= amount;
    }

    fn entry_of(&self, u: Node, v: Node) -> usize {
        assert!(u < self.n && v < self.n);
        u as usize * self.n as usize + v as usize
    }
}

impl GraphNodeOrder for FlowMatrix {
    fn number_of_nodes(&self) -> NumNodes {
        self.n
    }
}
