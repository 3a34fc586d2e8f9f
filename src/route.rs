/*!
# Route Payloads

A [`Route`] is the payload a caller attaches to an edge: the named,
colored, length-carrying connection between two cities of the network.
The core interprets only three of its attributes: the `length` (edge
weight), the `kind` (resource category consumed by the stock-bounded
path search) and its identity (two routes with equal endpoints but
different names are distinct, which is what makes parallel edges
possible). Everything else is carried opaquely.

Callers that need color-aware routing filter their edge collection by
[`Route::color`] *before* building the graph; the core never looks at it.
*/

/// Color demanded by a route. `Gray` places no restriction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RouteColor {
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Purple,
    White,
    Black,
    Gray,
}

/// Resource category a route consumes: train cars for rail links,
/// ships for sea links.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RouteKind {
    Rail,
    Sea,
}

/// The payload attached to an edge of the network.
///
/// The `start`/`end` city names duplicate the edge endpoints and are not
/// interpreted. Equality compares all fields; in practice the `name` is what
/// distinguishes two routes between the same cities with the same length,
/// and such routes form distinct parallel edges.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Route {
    name: String,
    start: String,
    end: String,
    kind: RouteKind,
    color: RouteColor,
    length: u32,
}

impl Route {
    pub fn new(
        name: impl Into<String>,
        start: impl Into<String>,
        end: impl Into<String>,
        kind: RouteKind,
        color: RouteColor,
        length: u32,
    ) -> Self {
        Self {
            name: name.into(),
            start: start.into(),
            end: end.into(),
            kind,
            color,
            length,
        }
    }

    /// Shorthand for a rail route
    pub fn rail(
        name: impl Into<String>,
        start: impl Into<String>,
        end: impl Into<String>,
        color: RouteColor,
        length: u32,
    ) -> Self {
        Self::new(name, start, end, RouteKind::Rail, color, length)
    }

    /// Shorthand for a sea route
    pub fn sea(
        name: impl Into<String>,
        start: impl Into<String>,
        end: impl Into<String>,
        color: RouteColor,
        length: u32,
    ) -> Self {
        Self::new(name, start, end, RouteKind::Sea, color, length)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn start(&self) -> &str {
        &self.start
    }

    pub fn end(&self) -> &str {
        &self.end
    }

    pub fn kind(&self) -> RouteKind {
        self.kind
    }

    pub fn color(&self) -> RouteColor {
        self.color
    }

    /// The length of the route, used as edge weight by the path engines
    pub fn length(&self) -> u32 {
        self.length
    }
}
