use fxhash::FxHashSet;

use super::*;

/// Iterator over the connected components of a graph.
///
/// Drains one depth-first search at a time, then restarts at a yet
/// unvisited vertex until the vertex set is exhausted. Isolated vertices
/// form singleton components.
pub struct ConnectedComponents<'a, G: AdjacencyList> {
    dfs: DepthFirst<'a, G>,
}

impl<'a, G: AdjacencyList> ConnectedComponents<'a, G> {
    pub fn new(graph: &'a G) -> Self {
        // an arbitrary key serves as the first root; the empty graph yields
        // an immediately exhausted traversal
        let start = graph.vertices().next().unwrap_or(0);
        Self {
            dfs: DepthFirst::new(graph, start),
        }
    }

    /// Treats exactly one edge as absent while partitioning (bridge probe)
    pub fn set_edge_masked(&mut self, e: &'a Edge) {
        self.dfs.set_edge_masked(e);
    }

    /// Treats exactly one edge as absent while partitioning (bridge probe)
    pub fn with_edge_masked(mut self, e: &'a Edge) -> Self {
        self.set_edge_masked(e);
        self
    }
}

impl<G: AdjacencyList> Iterator for ConnectedComponents<'_, G> {
    type Item = FxHashSet<Node>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let cc: FxHashSet<Node> = self.dfs.by_ref().collect();
            if !cc.is_empty() {
                return Some(cc);
            }

            if !self.dfs.try_restart_at_unvisited() {
                return None;
            }
        }
    }
}

/// Connectivity queries built on depth-first traversal
pub trait Connectivity: AdjacencyList + Traversal + Sized {
    /// Returns the set of vertices reachable from `v`, including `v` itself.
    /// Empty set when `v` is absent. Runs in O(V+E) on the component.
    fn connected_component(&self, v: Node) -> FxHashSet<Node> {
        self.dfs(v).collect()
    }

    /// Returns an iterator that partitions the vertex set into connected
    /// components
    fn connected_components(&self) -> ConnectedComponents<'_, Self> {
        ConnectedComponents::new(self)
    }

    /// Returns the number of connected components
    fn number_of_components(&self) -> usize {
        self.connected_components().count()
    }

    /// Returns *true* if all vertices lie in a single component.
    /// The empty graph is vacuously connected.
    fn is_connected(&self) -> bool {
        self.number_of_components() <= 1
    }

    /// Returns *true* iff `e` exists and masking it strictly increases the
    /// number of connected components.
    ///
    /// This probes by re-partitioning with the single edge masked out rather
    /// than running a linear-time all-bridges pass, which is fine at the
    /// expected network sizes. A parallel twin keeps the endpoints connected,
    /// so only singly-connecting edges qualify.
    fn is_bridge(&self, e: &Edge) -> bool {
        self.has_edge(e)
            && self.connected_components().with_edge_masked(e).count() > self.number_of_components()
    }
}

impl<G: AdjacencyList + Sized> Connectivity for G {}

#[cfg(test)]
mod test {
    use itertools::Itertools;

    use super::*;
    use crate::route::{Route, RouteColor};

    #[test]
    fn components_partition_the_vertex_set() {
        let mut graph = IncidenceGraph::from_edges([(0, 1), (0, 3), (1, 2), (2, 3), (8, 42)]);
        graph.add_node(100);

        let components = graph
            .connected_components()
            .map(|cc| cc.into_iter().sorted().collect_vec())
            .sorted()
            .collect_vec();
        assert_eq!(components, vec![vec![0, 1, 2, 3], vec![8, 42], vec![100]]);

        assert_eq!(graph.number_of_components(), 3);
        assert!(!graph.is_connected());
    }

    #[test]
    fn component_of_a_vertex() {
        let graph = IncidenceGraph::from_edges([(0, 1), (0, 3), (1, 2), (2, 3), (8, 42)]);

        assert_eq!(
            graph.connected_component(1),
            FxHashSet::from_iter([0, 1, 2, 3])
        );
        assert_eq!(graph.connected_component(42), FxHashSet::from_iter([8, 42]));
        assert!(graph.connected_component(7).is_empty());
    }

    #[test]
    fn empty_graph_is_connected() {
        let graph = IncidenceGraph::new();
        assert_eq!(graph.number_of_components(), 0);
        assert!(graph.is_connected());
    }

    #[test]
    fn path_edges_are_bridges() {
        let graph = IncidenceGraph::from_edges([(0, 1), (1, 2), (2, 3)]);
        for e in [Edge::between(0, 1), Edge::between(1, 2), Edge::between(2, 3)] {
            assert!(graph.is_bridge(&e));
        }
        assert!(!graph.is_bridge(&Edge::between(0, 3)));
    }

    #[test]
    fn cycle_edges_are_not_bridges() {
        let graph = IncidenceGraph::from_edges([(0, 1), (1, 2), (2, 0), (2, 3)]);
        assert!(!graph.is_bridge(&Edge::between(0, 1)));
        assert!(graph.is_bridge(&Edge::between(2, 3)));
    }

    #[test]
    fn parallel_twin_keeps_the_pair_connected() {
        let mut graph = IncidenceGraph::from_edges([(0, 1)]);
        assert!(graph.is_bridge(&Edge::between(0, 1)));

        let twin = Edge::new(0, 1, Route::sea("r1", "Lima", "Valparaiso", RouteColor::Gray, 2));
        graph.try_add_edge(twin.clone());
        assert!(!graph.is_bridge(&Edge::between(0, 1)));
        assert!(!graph.is_bridge(&twin));
    }
}
