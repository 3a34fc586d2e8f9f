use std::collections::VecDeque;

use fxhash::{FxHashMap, FxHashSet};

use super::*;

/// Extraction of a small edge set separating two vertices
pub trait BlockingSet: AdjacencyList + Sized {
    /// Returns a smallest-cardinality set of edges whose removal cuts every
    /// route the search considered between `from` and `to`.
    ///
    /// Computes hop-distance labels from `from`, then walks backward from
    /// `to`: at each step one incident edge whose far endpoint sits exactly
    /// one label closer is collected and the walk continues from that
    /// endpoint until `from` is reached. The result is one hop-minimal
    /// path's worth of edges: minimal in cardinality along that
    /// shortest-path tree, **not** a global minimum cut when disjoint
    /// alternative routes exist.
    ///
    /// Empty set when either vertex is absent, when both coincide, or when
    /// `to` is unreachable.
    fn blocking_edges(&self, from: Node, to: Node) -> FxHashSet<Edge> {
        let mut blocking = FxHashSet::default();
        if !self.has_node(from) || !self.has_node(to) || from == to {
            return blocking;
        }

        // hop-distance labels from `from`
        let mut dist: FxHashMap<Node, u64> = FxHashMap::default();
        dist.insert(from, 0);
        let mut queue = VecDeque::from([from]);
        while let Some(u) = queue.pop_front() {
            let d = dist[&u];
            for e in self.edges_of(u) {
                let v = e.other_endpoint(u);
                if !dist.contains_key(&v) {
                    dist.insert(v, d + 1);
                    queue.push_back(v);
                }
            }
        }

        if !dist.contains_key(&to) {
            return blocking;
        }

        let mut at = to;
        while at != from {
            let d = dist[&at];
            let descending = self
                .edges_of(at)
                .find(|e| dist.get(&e.other_endpoint(at)).is_some_and(|&dv| dv + 1 == d))
                .expect("a labelled vertex always has a descending edge");
            at = descending.other_endpoint(at);
            blocking.insert(descending.clone());
        }
        blocking
    }
}

impl<G: AdjacencyList + Sized> BlockingSet for G {}

#[cfg(test)]
mod test {
    use itertools::Itertools;

    use super::*;
    use crate::route::{Route, RouteColor};

    #[test]
    fn single_path_blocks_with_its_edges() {
        let graph = IncidenceGraph::from_edges([(0, 1), (1, 2), (2, 3)]);
        let blocking = graph.blocking_edges(0, 3);
        assert_eq!(
            blocking,
            FxHashSet::from_iter([
                Edge::between(0, 1),
                Edge::between(1, 2),
                Edge::between(2, 3)
            ])
        );
    }

    #[test]
    fn diamond_yields_one_branch() {
        let graph = IncidenceGraph::from_edges([(0, 1), (1, 3), (0, 2), (2, 3)]);
        let blocking = graph.blocking_edges(0, 3);

        // one two-edge branch of the diamond, forming a 3-0 walk
        assert_eq!(blocking.len(), 2);
        let endpoints = blocking
            .iter()
            .flat_map(|e| [e.i(), e.j()])
            .sorted()
            .dedup()
            .collect_vec();
        assert!(endpoints == vec![0, 1, 3] || endpoints == vec![0, 2, 3]);
    }

    #[test]
    fn removing_the_set_disconnects_a_tree() {
        // in a forest the walked path is the unique route, so removing the
        // set genuinely separates the endpoints
        let mut graph = IncidenceGraph::from_edges([(0, 1), (1, 2), (1, 3), (3, 4)]);
        for e in graph.blocking_edges(0, 4) {
            graph.try_remove_edge(&e);
        }
        assert!(!graph.connected_component(0).contains(&4));
    }

    #[test]
    fn degenerate_queries_yield_nothing() {
        let graph = IncidenceGraph::from_edges([(0, 1), (8, 42)]);
        assert!(graph.blocking_edges(0, 42).is_empty());
        assert!(graph.blocking_edges(0, 0).is_empty());
        assert!(graph.blocking_edges(0, 99).is_empty());
    }

    #[test]
    fn payload_routes_are_collected() {
        let graph = IncidenceGraph::from_edges([
            Edge::new(0, 1, Route::rail("r1", "Lima", "Cusco", RouteColor::Red, 2)),
            Edge::new(1, 2, Route::sea("s1", "Cusco", "Callao", RouteColor::Blue, 3)),
        ]);

        let names = graph
            .blocking_edges(0, 2)
            .iter()
            .filter_map(|e| e.route().map(|r| r.name().to_string()))
            .sorted()
            .collect_vec();
        assert_eq!(names, vec!["r1", "s1"]);
    }
}
