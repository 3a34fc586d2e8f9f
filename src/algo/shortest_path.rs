/*!
Shortest-path engines over the incidence structure.

Three variants share the same label-setting core: a plain Dijkstra
relaxation (hop-counted or weighted by route length), a stock-bounded
search in the `(vertex, cars, ships)` state space, and an ordered
waypoint chainer splicing point-to-point paths together.

All engines assume non-negative weights. Unreachable targets and absent
endpoints answer with an empty sequence; the predecessor chain is only
ever walked after a reachability check.
*/

use std::{cmp::Reverse, collections::BinaryHeap};

use fxhash::FxHashMap;

use super::*;

type Cost = u64;

/// Stock of train cars and ships available to the bounded search
type Stock = (u32, u32);

pub trait ShortestPaths: AdjacencyList + Sized {
    /// Classic label-setting relaxation between two vertices.
    ///
    /// Edge cost is one hop when `weighted` is *false* and the payload
    /// length otherwise (payload-less edges always cost one hop). Returns
    /// the inclusive vertex sequence `source → … → target`; the empty
    /// sequence when either endpoint is absent or the target is
    /// unreachable. `shortest_path(a, a, _)` is `[a]`.
    fn shortest_path(&self, source: Node, target: Node, weighted: bool) -> Vec<Node> {
        if !self.has_node(source) || !self.has_node(target) {
            return Vec::new();
        }

        let mut dist: FxHashMap<Node, Cost> = FxHashMap::default();
        let mut pred: FxHashMap<Node, Node> = FxHashMap::default();
        let mut heap = BinaryHeap::new();

        dist.insert(source, 0);
        heap.push(Reverse((0, source)));

        while let Some(Reverse((d, u))) = heap.pop() {
            if d > dist[&u] {
                continue; // stale heap entry
            }
            if u == target {
                break;
            }
            for e in self.edges_of(u) {
                let v = e.other_endpoint(u);
                let next = d + e.weight(weighted);
                if dist.get(&v).is_none_or(|&cur| next < cur) {
                    dist.insert(v, next);
                    pred.insert(v, u);
                    heap.push(Reverse((next, v)));
                }
            }
        }

        if !dist.contains_key(&target) {
            return Vec::new();
        }

        let mut path = vec![target];
        let mut u = target;
        while u != source {
            u = pred[&u];
            path.push(u);
        }
        path.reverse();
        path
    }

    /// Hop-minimal path that keeps the consumed train cars and ships within
    /// the given stocks.
    ///
    /// Runs the relaxation in the `(vertex, cars used, ships used)` state
    /// space and filters steps that would overdraw either stock: a `Rail`
    /// route consumes its length in cars, a `Sea` route its length in
    /// ships, payload-less edges consume nothing. Ties between equal-hop
    /// paths are broken arbitrarily, but both stocks hold simultaneously
    /// along the returned path.
    fn shortest_path_with_stock(
        &self,
        source: Node,
        target: Node,
        cars: u32,
        ships: u32,
    ) -> Vec<Node> {
        if !self.has_node(source) || !self.has_node(target) {
            return Vec::new();
        }

        let mut dist: FxHashMap<(Node, Stock), Cost> = FxHashMap::default();
        let mut pred: FxHashMap<(Node, Stock), (Node, Stock)> = FxHashMap::default();
        let mut heap = BinaryHeap::new();

        let start = (source, (0, 0));
        dist.insert(start, 0);
        heap.push(Reverse((0, start)));

        while let Some(Reverse((d, state))) = heap.pop() {
            if d > dist[&state] {
                continue;
            }

            let (u, (used_cars, used_ships)) = state;
            if u == target {
                let mut path = vec![u];
                let mut at = state;
                while at != start {
                    at = pred[&at];
                    path.push(at.0);
                }
                path.reverse();
                return path;
            }

            for e in self.edges_of(u) {
                let (cost_cars, cost_ships) = match e.route() {
                    Some(route) if route.kind() == RouteKind::Rail => (route.length(), 0),
                    Some(route) => (0, route.length()),
                    None => (0, 0),
                };
                let used = (used_cars + cost_cars, used_ships + cost_ships);
                if used.0 > cars || used.1 > ships {
                    continue;
                }

                let next_state = (e.other_endpoint(u), used);
                let next = d + 1;
                if dist.get(&next_state).is_none_or(|&cur| next < cur) {
                    dist.insert(next_state, next);
                    pred.insert(next_state, state);
                    heap.push(Reverse((next, next_state)));
                }
            }
        }

        Vec::new()
    }

    /// Chains unweighted point-to-point shortest paths through the given
    /// waypoints in order, dropping the duplicated junction vertex at each
    /// splice.
    ///
    /// Intermediate vertices may repeat between legs, but the waypoints
    /// appear in the given relative order. An empty input yields an empty
    /// path, a one-element input the single-vertex path; if any leg has no
    /// route the whole result is empty.
    fn visit_in_order(&self, waypoints: &[Node]) -> Vec<Node> {
        let Some((&first, rest)) = waypoints.split_first() else {
            return Vec::new();
        };

        let mut path = vec![first];
        let mut at = first;
        for &next in rest {
            let leg = self.shortest_path(at, next, false);
            if leg.is_empty() {
                return Vec::new();
            }
            path.extend_from_slice(&leg[1..]);
            at = next;
        }
        path
    }
}

impl<G: AdjacencyList + Sized> ShortestPaths for G {}
