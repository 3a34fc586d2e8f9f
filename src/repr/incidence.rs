use std::fmt::{self, Display};

use fxhash::{FxHashMap, FxHashSet};
use itertools::Itertools;

use crate::{edge::*, node::*, ops::*};

/// A weighted undirected multigraph stored as one incidence set per vertex.
///
/// Core invariant: every edge appears in exactly the two incidence sets of
/// its endpoints. If the set of `u` contains the edge `{u,v}`, so does the
/// set of `v`.
///
/// Vertex ids are arbitrary: a vertex exists exactly when it is a key of the
/// map, so an explicitly added isolated vertex survives until removed.
#[derive(Clone, Default)]
pub struct IncidenceGraph {
    incidence: FxHashMap<Node, FxHashSet<Edge>>,
}

impl IncidenceGraph {
    /// Creates an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a graph with vertices `0..n` and no edges
    pub fn with_nodes(n: NumNodes) -> Self {
        Self {
            incidence: (0..n).map(|u| (u, FxHashSet::default())).collect(),
        }
    }

    /// Creates a graph from a collection of edges, auto-adding all endpoints
    pub fn from_edges(edges: impl IntoIterator<Item = impl Into<Edge>>) -> Self {
        let mut graph = Self::new();
        graph.add_edges(edges);
        graph
    }

    /// Builds the subgraph induced by a vertex subset with copy semantics:
    /// `self` is untouched and vertex ids are preserved. Members of `nodes`
    /// that are not vertices of `self` are ignored.
    pub fn vertex_induced(&self, nodes: &FxHashSet<Node>) -> Self {
        let mut sub = Self::new();
        for &u in nodes {
            let Some(edges) = self.incidence.get(&u) else {
                continue;
            };
            sub.add_node(u);
            for e in edges {
                if nodes.contains(&e.other_endpoint(u)) {
                    sub.try_add_edge(e.clone());
                }
            }
        }
        sub
    }
}

impl GraphOrder for IncidenceGraph {
    fn number_of_nodes(&self) -> NumNodes {
        self.incidence.len() as NumNodes
    }

    fn number_of_edges(&self) -> NumEdges {
        // every edge is double-counted, once per endpoint
        (self.incidence.values().map(|edges| edges.len()).sum::<usize>() / 2) as NumEdges
    }

    fn vertices(&self) -> impl Iterator<Item = Node> + '_ {
        self.incidence.keys().copied()
    }

    fn has_node(&self, u: Node) -> bool {
        self.incidence.contains_key(&u)
    }
}

impl AdjacencyList for IncidenceGraph {
    fn edges_of(&self, u: Node) -> impl Iterator<Item = &Edge> + '_ {
        self.incidence.get(&u).into_iter().flatten()
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.incidence.get(&u).map_or(0, |edges| edges.len() as NumNodes)
    }

    fn has_edge(&self, e: &Edge) -> bool {
        self.incidence
            .get(&e.i())
            .is_some_and(|edges| edges.contains(e))
    }
}

impl GraphEdgeEditing for IncidenceGraph {
    fn add_node(&mut self, u: Node) {
        self.incidence.entry(u).or_default();
    }

    fn try_add_edge(&mut self, e: Edge) -> bool {
        if self.has_edge(&e) {
            return false;
        }
        let (i, j) = e.endpoints();
        self.incidence.entry(j).or_default().insert(e.clone());
        self.incidence.entry(i).or_default().insert(e);
        true
    }

    fn try_remove_edge(&mut self, e: &Edge) -> bool {
        if !self.has_edge(e) {
            return false;
        }
        for u in [e.i(), e.j()] {
            if let Some(edges) = self.incidence.get_mut(&u) {
                edges.remove(e);
            }
        }
        true
    }

    fn remove_node(&mut self, u: Node) {
        let Some(edges) = self.incidence.remove(&u) else {
            return;
        };
        for e in edges {
            if let Some(other) = self.incidence.get_mut(&e.other_endpoint(u)) {
                other.remove(&e);
            }
        }
    }

    fn merge_nodes(&mut self, i: Node, j: Node) {
        if i == j || !self.has_node(i) || !self.has_node(j) {
            return;
        }

        let survivor = i.min(j);
        let mut carried = Vec::new();
        for u in [i, j] {
            for e in self.edges_of(u) {
                let other = e.other_endpoint(u);
                // edges joining the merged pair are dropped, never turned into loops
                if other != i && other != j {
                    carried.push(match e.route() {
                        Some(route) => Edge::new(survivor, other, route.clone()),
                        None => Edge::between(survivor, other),
                    });
                }
            }
        }

        self.remove_node(i);
        self.remove_node(j);
        self.add_node(survivor);
        for e in carried {
            self.try_add_edge(e);
        }
    }
}

impl Display for IncidenceGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for u in self.vertices().sorted_unstable() {
            writeln!(
                f,
                "{} : {}",
                u,
                self.edges_of(u).map(|e| e.to_string()).join(", ")
            )?;
        }
        Ok(())
    }
}
