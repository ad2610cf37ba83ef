/*!
# Flow Algorithms

This module provides the building blocks of Dinic's blocking-flow algorithm on top of the
storage backends in [`crate::repr`]. All submodules are re-exported at the top level of
this module, so you can simply do:
```rust
use cgraphs::algo::*;
```
and gain access to source/sink consolidation, level-graph construction and the max-flow
search itself. The search is provided as an **iterator** over augmenting-path amounts,
making it easy to consume results lazily; [`MaxFlow`] wraps it for the common case.
*/

mod consolidate;
mod level;
mod max_flow;

pub use consolidate::*;
pub use level::*;
pub use max_flow::*;
