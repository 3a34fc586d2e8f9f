/*!
Depth-first traversal over the incidence structure.

The iterator keeps an explicit frontier stack instead of recursing, so chains
of arbitrary length cannot overflow the call stack. It can additionally mask
a single edge, which is what the bridge probe
[`Connectivity::is_bridge`] builds on.
*/

use fxhash::FxHashSet;

use super::*;

/// Lazy depth-first iterator over the vertices reachable from a start vertex.
///
/// Maintains an explicit stack of vertices to visit and a set of visited
/// vertices. The iterator is empty when the start vertex is absent.
pub struct DepthFirst<'a, G: AdjacencyList> {
    graph: &'a G,
    visited: FxHashSet<Node>,
    stack: Vec<Node>,
    masked_edge: Option<&'a Edge>,
}

impl<'a, G: AdjacencyList> DepthFirst<'a, G> {
    /// Creates a new traversal starting from `start`
    pub fn new(graph: &'a G, start: Node) -> Self {
        let mut visited = FxHashSet::default();
        let mut stack = Vec::new();
        if graph.has_node(start) {
            visited.insert(start);
            stack.push(start);
        }
        Self {
            graph,
            visited,
            stack,
            masked_edge: None,
        }
    }

    /// Treats exactly one edge (payload-equal match) as absent. A parallel
    /// twin of the masked edge is still taken.
    pub fn set_edge_masked(&mut self, e: &'a Edge) {
        self.masked_edge = Some(e);
    }

    /// Treats exactly one edge (payload-equal match) as absent. A parallel
    /// twin of the masked edge is still taken.
    pub fn with_edge_masked(mut self, e: &'a Edge) -> Self {
        self.set_edge_masked(e);
        self
    }

    /// Tries to restart the search at a yet unvisited vertex and returns
    /// true iff successful. Requires that the search came to a hold earlier,
    /// i.e. `self.next()` returned `None`.
    pub fn try_restart_at_unvisited(&mut self) -> bool {
        debug_assert!(self.stack.is_empty());
        match self.graph.vertices().find(|u| !self.visited.contains(u)) {
            None => false,
            Some(u) => {
                self.visited.insert(u);
                self.stack.push(u);
                true
            }
        }
    }
}

impl<G: AdjacencyList> Iterator for DepthFirst<'_, G> {
    type Item = Node;

    fn next(&mut self) -> Option<Self::Item> {
        let u = self.stack.pop()?;
        for e in self.graph.edges_of(u) {
            if self.masked_edge.is_some_and(|masked| masked == e) {
                continue;
            }
            let v = e.other_endpoint(u);
            if self.visited.insert(v) {
                self.stack.push(v);
            }
        }
        Some(u)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (
            self.stack.len(),
            Some(self.graph.number_of_nodes() as usize - self.visited.len() + self.stack.len()),
        )
    }
}

/// Provides traversal methods directly on graph types
pub trait Traversal: AdjacencyList + Sized {
    /// Returns an iterator that traverses vertices reachable from `start`
    /// in depth-first order
    fn dfs(&self, start: Node) -> DepthFirst<'_, Self> {
        DepthFirst::new(self, start)
    }
}

impl<G: AdjacencyList + Sized> Traversal for G {}

#[cfg(test)]
mod test {
    use itertools::Itertools;

    use super::*;

    #[test]
    fn dfs_reaches_the_component() {
        let graph = IncidenceGraph::from_edges([(0, 1), (0, 3), (1, 2), (2, 3), (8, 42)]);

        let order = graph.dfs(0).collect_vec();
        assert_eq!(order[0], 0);
        assert_eq!(order.iter().copied().sorted().collect_vec(), vec![0, 1, 2, 3]);

        assert_eq!(graph.dfs(8).sorted().collect_vec(), vec![8, 42]);
    }

    #[test]
    fn absent_start_yields_nothing() {
        let graph = IncidenceGraph::from_edges([(0, 1)]);
        assert_eq!(graph.dfs(7).count(), 0);
    }

    #[test]
    fn restart_covers_all_vertices() {
        let graph = IncidenceGraph::from_edges([(0, 1), (2, 3)]);

        let mut dfs = graph.dfs(0);
        let mut seen = dfs.by_ref().collect_vec();
        while dfs.try_restart_at_unvisited() {
            seen.extend(dfs.by_ref());
        }
        assert_eq!(seen.iter().copied().sorted().collect_vec(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn masked_edge_is_not_taken() {
        let graph = IncidenceGraph::from_edges([(0, 1), (1, 2)]);
        let cut = Edge::between(1, 2);

        let reached = graph.dfs(0).with_edge_masked(&cut).sorted().collect_vec();
        assert_eq!(reached, vec![0, 1]);
    }
}
