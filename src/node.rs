/*!
# Node Representation

We choose `Node = u32` as almost all use-cases involve less than `2^32` vertices.
This saves space compared to `usize`/`u64` and allows manipulating vertex values directly.

Unlike dense, index-based stores, the incidence map does not require ids to be
contiguous or zero-based: a vertex exists exactly when it appears as a key of the
incidence structure, so ids like `8` and `42` can coexist with `0..4`.
*/

/// Nodes can be any unsigned integer from `0` to `Node::MAX`
pub type Node = u32;

/// There can be at most `2^32 - 1` nodes in a graph!
pub type NumNodes = Node;
