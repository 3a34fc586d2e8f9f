/*!
# Graph Representation

A single storage backend: [`IncidenceGraph`], one incidence set per vertex,
keyed by arbitrary vertex ids. Multigraph semantics (parallel edges
distinguished by payload) rule out the usual array- or matrix-backed
neighborhoods, so the store builds on hash maps throughout.
*/

mod incidence;

pub use incidence::*;
