/*!
`mgraphs` is a graph data structure & algorithms library for networks that are
- **m**ulti : several distinct, individually-identified edges may join the same vertex pair
- weighted : each edge may carry a route payload whose length acts as its weight
- undirected : an edge `{i, j}` is the same object seen from either endpoint

# Representation

We represent **vertices** as `u32` ids that need not be contiguous: the store keeps one
incidence set per vertex, keyed by id, so vertices can be added and removed arbitrarily.
**Edges** are unordered pairs with an optional [`route::Route`] payload; edges with equal
endpoints but different payload identities are distinct, which is how parallel routes
between the same two cities are modelled.

See the [`repr`] module for the storage backend ([`repr::IncidenceGraph`]).

# Design

Basic graph operations live in traits ([`ops`]) implemented by the store; algorithms are
provided as traits in [`algo`] that are blanket-implemented on top of those operations,
making them usable directly on the graph (`graph.shortest_path(a, b, true)`,
`graph.is_bridge(&e)`, ...).

Operations on absent vertices or edges answer with empty/zero/false results instead of
failing; panics are reserved for genuine caller errors (constructing a self-loop).

# Usage

There are *4* core submodules you probably want to interact with:
- [`prelude`] includes vertex/edge/route definitions, the operation traits and the store,
- [`algo`] includes algorithm traits implemented on the graph itself, such as traversal,
  connectivity and bridge probing, structural classification, shortest paths (plain,
  stock-bounded and waypoint-chained), and blocking edge sets,
- [`repr`] holds the incidence-map representation,
- [`route`] defines the payload attached to edges by the surrounding game logic.

In most use-cases, `use mgraphs::{prelude::*, algo::*};` suffices for your needs.
*/

pub mod algo;
pub mod edge;
pub mod node;
pub mod ops;
pub mod repr;
pub mod route;

/// `mgraphs::prelude` includes definitions for vertices, edges and routes, the basic
/// graph operation traits as well as the incidence-map representation.
pub mod prelude {
    pub use super::{edge::*, node::*, ops::*, repr::*, route::*};
}
