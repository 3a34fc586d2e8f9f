use std::{
    fmt::{Debug, Display},
    hash::{Hash, Hasher},
};

use crate::{node::Node, route::Route};

/// We limit the number of edges to `2^32 - 1`.
/// CHANGE it to `u64` if this does not suffice (which it usually should).
pub type NumEdges = u32;

/// An edge is defined by an unordered pair of endpoints plus an optional
/// [`Route`] payload.
///
/// Two edges with the same endpoint pair but different payloads are distinct,
/// which is how the store supports parallel routes between the same pair of
/// cities. Endpoint-only edges (no payload) occupy a single logical slot: a
/// second payload-less edge between the same endpoints equals the first.
///
/// Equality ignores endpoint order and compares payloads exactly; a
/// payload-carrying edge never equals a payload-less one. The hand-written
/// [`Hash`] is consistent with that (order-independent over the endpoints,
/// payload-dependent).
#[derive(Clone)]
pub struct Edge {
    i: Node,
    j: Node,
    route: Option<Route>,
}

impl Edge {
    /// Creates an edge carrying a route payload.
    /// ** Panics if `i == j` ** (self-loops are a caller error, not a runtime condition)
    pub fn new(i: Node, j: Node, route: Route) -> Self {
        assert_ne!(i, j, "self-loops are not allowed");
        Self {
            i,
            j,
            route: Some(route),
        }
    }

    /// Creates a bare edge with no payload.
    /// ** Panics if `i == j` **
    pub fn between(i: Node, j: Node) -> Self {
        assert_ne!(i, j, "self-loops are not allowed");
        Self { i, j, route: None }
    }

    pub fn i(&self) -> Node {
        self.i
    }

    pub fn j(&self) -> Node {
        self.j
    }

    pub fn endpoints(&self) -> (Node, Node) {
        (self.i, self.j)
    }

    pub fn route(&self) -> Option<&Route> {
        self.route.as_ref()
    }

    /// Returns *true* if `v` is one of the two endpoints
    pub fn is_incident_to(&self, v: Node) -> bool {
        self.i == v || self.j == v
    }

    /// Given one endpoint, returns the other. The caller guarantees that `v`
    /// is an endpoint; for any other value the first endpoint is returned.
    pub fn other_endpoint(&self, v: Node) -> Node {
        if v == self.i { self.j } else { self.i }
    }

    /// Returns the endpoint pair such that the smaller value comes first
    pub fn normalized_endpoints(&self) -> (Node, Node) {
        (self.i.min(self.j), self.i.max(self.j))
    }

    /// Edge cost used by the path engines: the payload length when `weighted`
    /// and a payload is present, one hop otherwise.
    pub fn weight(&self, weighted: bool) -> u64 {
        match &self.route {
            Some(route) if weighted => route.length() as u64,
            _ => 1,
        }
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.normalized_endpoints() == other.normalized_endpoints() && self.route == other.route
    }
}

impl Eq for Edge {}

impl Hash for Edge {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let (a, b) = self.normalized_endpoints();
        a.hash(state);
        b.hash(state);
        self.route.hash(state);
    }
}

impl Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.route {
            Some(route) => write!(f, "({},{};{})", self.i, self.j, route.name()),
            None => write!(f, "({},{})", self.i, self.j),
        }
    }
}

impl Debug for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

impl From<(Node, Node)> for Edge {
    fn from(value: (Node, Node)) -> Self {
        Edge::between(value.0, value.1)
    }
}

impl From<(Node, Node, Route)> for Edge {
    fn from(value: (Node, Node, Route)) -> Self {
        Edge::new(value.0, value.1, value.2)
    }
}

#[cfg(test)]
mod test {
    use std::hash::{BuildHasher, RandomState};

    use super::*;
    use crate::route::RouteColor;

    fn route(name: &str, length: u32) -> Route {
        Route::rail(name, "Lima", "Valparaiso", RouteColor::Gray, length)
    }

    #[test]
    fn endpoint_order_is_irrelevant() {
        assert_eq!(Edge::between(1, 2), Edge::between(2, 1));
        assert_eq!(
            Edge::new(1, 2, route("r1", 2)),
            Edge::new(2, 1, route("r1", 2))
        );

        let hasher = RandomState::new();
        assert_eq!(
            hasher.hash_one(Edge::between(1, 2)),
            hasher.hash_one(Edge::between(2, 1))
        );
    }

    #[test]
    fn payload_identity_distinguishes_parallel_edges() {
        let a = Edge::new(1, 2, route("r1", 2));
        let b = Edge::new(1, 2, route("r2", 2));
        assert_ne!(a, b);
        assert_eq!(a, a.clone());
    }

    #[test]
    fn payload_never_equals_bare() {
        assert_ne!(Edge::new(1, 2, route("r1", 2)), Edge::between(1, 2));
    }

    #[test]
    fn incidence_and_other_endpoint() {
        let e = Edge::between(3, 7);
        assert!(e.is_incident_to(3));
        assert!(e.is_incident_to(7));
        assert!(!e.is_incident_to(5));
        assert_eq!(e.other_endpoint(3), 7);
        assert_eq!(e.other_endpoint(7), 3);
    }

    #[test]
    fn weight_falls_back_to_one_hop() {
        let e = Edge::new(0, 1, route("r1", 4));
        assert_eq!(e.weight(true), 4);
        assert_eq!(e.weight(false), 1);
        assert_eq!(Edge::between(0, 1).weight(true), 1);
    }

    #[test]
    #[should_panic]
    fn self_loop_is_rejected() {
        let _ = Edge::between(4, 4);
    }
}
