use fxhash::FxHashSet;
use itertools::Itertools;

use crate::{edge::*, node::*};

/// Provides getters pertaining to the size of a graph
pub trait GraphOrder {
    /// Returns the number of vertices of the graph
    fn number_of_nodes(&self) -> NumNodes;

    /// Returns the number of edges of the graph. Parallel edges all count;
    /// every edge sits in exactly two incidence sets, so implementations
    /// halve the summed set sizes.
    fn number_of_edges(&self) -> NumEdges;

    /// Returns an iterator over V
    fn vertices(&self) -> impl Iterator<Item = Node> + '_;

    /// Returns *true* if `u` is a vertex of the graph
    fn has_node(&self, u: Node) -> bool;

    /// Returns *true* if the graph has no vertices (and thus no edges)
    fn is_empty(&self) -> bool {
        self.number_of_nodes() == 0
    }
}

/// Getters for neighborhoods and incident edges.
///
/// The store is keyed by arbitrary vertex ids, so queries on absent vertices
/// yield empty results and zero degrees rather than panicking.
pub trait AdjacencyList: GraphOrder + Sized {
    /// Returns an iterator over the edges incident to a given vertex
    /// (empty for absent vertices)
    fn edges_of(&self, u: Node) -> impl Iterator<Item = &Edge> + '_;

    /// Returns the set of distinct other-endpoints of `u`'s incident edges.
    /// Parallel edges contribute a single neighbor.
    fn neighbors_of(&self, u: Node) -> FxHashSet<Node> {
        self.edges_of(u).map(|e| e.other_endpoint(u)).collect()
    }

    /// Returns the incidence-set size of `u`; parallel edges count with
    /// multiplicity, so `degree_of` can exceed `neighbors_of(u).len()`
    fn degree_of(&self, u: Node) -> NumNodes {
        self.edges_of(u).count() as NumNodes
    }

    /// Returns the maximum degree in the graph, `None` on an empty graph
    fn max_degree(&self) -> Option<NumNodes> {
        self.vertices().map(|u| self.degree_of(u)).max()
    }

    /// Returns all vertex degrees in descending order
    fn degree_sequence(&self) -> Vec<NumNodes> {
        let mut degrees = self.vertices().map(|u| self.degree_of(u)).collect_vec();
        degrees.sort_unstable_by(|a, b| b.cmp(a));
        degrees
    }

    /// Returns *true* if an edge equal to `e` is present in the graph
    fn has_edge(&self, e: &Edge) -> bool {
        self.edges_of(e.i()).any(|f| f == e)
    }

    /// Returns *true* if at least one edge joins `i` and `j`
    fn are_adjacent(&self, i: Node, j: Node) -> bool {
        self.edges_of(i).any(|e| e.other_endpoint(i) == j)
    }

    /// Returns an iterator over all edges of the graph. Each edge is yielded
    /// exactly once, from its smaller endpoint.
    fn edges(&self) -> impl Iterator<Item = &Edge> + '_ {
        self.vertices().flat_map(move |u| {
            self.edges_of(u)
                .filter(move |e| e.normalized_endpoints().0 == u)
        })
    }
}

/// Provides functions to insert/delete vertices and edges.
///
/// All mutations follow the silent-no-op taxonomy: inserting something
/// already present or removing something absent leaves the graph unchanged.
pub trait GraphEdgeEditing {
    /// Adds a vertex with an empty incidence set; no-op when already present
    fn add_node(&mut self, u: Node);

    /// Adds an edge if no equal edge is present, auto-adding missing
    /// endpoints. Returns *true* exactly if the edge was inserted.
    fn try_add_edge(&mut self, e: Edge) -> bool;

    /// Adds all edges in the collection
    fn add_edges(&mut self, edges: impl IntoIterator<Item = impl Into<Edge>>) {
        for e in edges {
            self.try_add_edge(e.into());
        }
    }

    /// Removes the edge equal to `e` from both incidence sets; no-op when
    /// absent. Returns *true* exactly if the edge was removed.
    fn try_remove_edge(&mut self, e: &Edge) -> bool;

    /// Removes a vertex and cascades to every edge incident to it;
    /// no-op when absent
    fn remove_node(&mut self, u: Node);

    /// Contracts `i` and `j` into the surviving vertex `min(i, j)`: edges
    /// directly joining the pair are dropped (no self-loop creation), all
    /// remaining edges of either vertex are re-attached to the survivor with
    /// their payloads intact. No-op if either vertex is absent.
    fn merge_nodes(&mut self, i: Node, j: Node);
}
