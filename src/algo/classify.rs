use itertools::Itertools;

use super::*;

/// Structural predicates over the whole graph.
///
/// `is_chain`, `is_cycle` and `is_forest` are degree-based tests kept
/// deliberately cheap: they do not verify single-component-ness or run a
/// full acyclicity check, so a disjoint union whose members satisfy the
/// degree bounds also passes. Callers needing the strict property combine
/// them with [`Connectivity::is_connected`].
pub trait Classify: AdjacencyList + Connectivity + Sized {
    /// Returns *true* if no two incident edges of any vertex share the same
    /// endpoint pair. Self-loops cannot be constructed, so simplicity
    /// reduces to the absence of parallel edges: each vertex has as many
    /// distinct neighbors as incident edges.
    fn is_simple(&self) -> bool {
        self.vertices()
            .all(|u| self.degree_of(u) as usize == self.neighbors_of(u).len())
    }

    /// Returns *true* if every unordered pair of distinct vertices is joined
    /// by at least one edge
    fn is_complete(&self) -> bool {
        let vertices = self.vertices().collect_vec();
        vertices
            .iter()
            .tuple_combinations()
            .all(|(&u, &v)| self.are_adjacent(u, v))
    }

    /// Degree test for a simple open path: every degree at most 2 and
    /// exactly two degree-1 endpoint vertices. The empty graph is vacuously
    /// a chain; a closed tour (no endpoints) is not.
    fn is_chain(&self) -> bool {
        let mut endpoints = 0;
        for u in self.vertices() {
            match self.degree_of(u) {
                1 => endpoints += 1,
                d if d > 2 => return false,
                _ => {}
            }
        }
        endpoints == 2 || (endpoints == 0 && self.is_empty())
    }

    /// Degree test for a simple closed tour. The empty graph counts as a
    /// cycle; two vertices joined by two parallel edges do **not** (their
    /// degrees are 2, but a two-vertex graph only qualifies with a single
    /// joining edge).
    fn is_cycle(&self) -> bool {
        match self.number_of_nodes() {
            0 => true,
            1 | 2 => self.vertices().all(|u| self.degree_of(u) == 1),
            _ => self.vertices().all(|u| self.degree_of(u) == 2),
        }
    }

    /// Returns *true* if every connected component passes the tree test:
    /// components of size at most 1 trivially, pairs exactly when a single
    /// edge joins them, larger components when every member has whole-graph
    /// degree 1 or 2.
    fn is_forest(&self) -> bool {
        self.connected_components().all(|cc| match cc.len() {
            0 | 1 => true,
            2 => cc.iter().all(|&u| self.degree_of(u) == 1),
            _ => cc.iter().all(|&u| matches!(self.degree_of(u), 1 | 2)),
        })
    }
}

impl<G: AdjacencyList + Connectivity + Sized> Classify for G {}
