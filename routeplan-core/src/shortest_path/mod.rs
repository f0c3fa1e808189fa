//! Single-source shortest routes over an undirected road network.
//!
//! The solver is a label-setting search whose frontier is ordered by
//! `(distance, discovery round, connection id)`. The discovery round is the
//! number of points finalised before the candidate was enqueued, so among
//! equal-distance arrivals the one found earlier wins, and the connection id
//! only decides within a round. Selection therefore never depends on the order
//! connections were supplied in.

mod frontier;

use std::collections::{BTreeMap, HashMap};

use tracing::{Span, field, instrument, trace};

use crate::connection::{Connection, PointName};

use self::frontier::{Candidate, Frontier};

/// Best known arrival at a point during one solver run.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PathEdge {
    point: PointName,
    from: PointName,
    connection: Option<Connection>,
    distance: u64,
    discovery_round: u64,
}

impl PathEdge {
    fn origin(start: PointName) -> Self {
        Self {
            point: start.clone(),
            from: start,
            connection: None,
            distance: 0,
            discovery_round: 0,
        }
    }

    /// Returns the point this arrival reaches.
    #[must_use]
    #[rustfmt::skip]
    pub fn point(&self) -> &PointName { &self.point }

    /// Returns the point the arrival came from. The start point maps to itself.
    #[must_use]
    #[rustfmt::skip]
    pub fn from(&self) -> &PointName { &self.from }

    /// Returns the connection used to arrive, or `None` for the start point.
    #[must_use]
    #[rustfmt::skip]
    pub fn connection(&self) -> Option<&Connection> { self.connection.as_ref() }

    /// Returns the cumulative distance from the start point.
    #[must_use]
    #[rustfmt::skip]
    pub fn distance(&self) -> u64 { self.distance }

    /// Returns the finalisation round in which this arrival was discovered.
    #[must_use]
    #[rustfmt::skip]
    pub fn discovery_round(&self) -> u64 { self.discovery_round }

    /// Returns `true` for the zero-distance self-edge of the start point.
    #[must_use]
    pub fn is_origin(&self) -> bool {
        self.connection.is_none()
    }
}

/// Arrival table produced by [`solve`]: one [`PathEdge`] per reachable point.
#[derive(Clone, Debug, PartialEq)]
pub struct ShortestPathTree {
    start: PointName,
    arrivals: BTreeMap<PointName, PathEdge>,
}

impl ShortestPathTree {
    /// Returns the point the search started from.
    #[must_use]
    #[rustfmt::skip]
    pub fn start(&self) -> &PointName { &self.start }

    /// Returns the arrival recorded for `point`, if it is reachable.
    #[must_use]
    pub fn arrival(&self, point: &str) -> Option<&PathEdge> {
        self.arrivals.get(point)
    }

    /// Returns the shortest distance to `point`, if it is reachable.
    #[must_use]
    pub fn distance_to(&self, point: &str) -> Option<u64> {
        self.arrival(point).map(PathEdge::distance)
    }

    /// Returns `true` when `point` is reachable from the start.
    #[must_use]
    pub fn contains(&self, point: &str) -> bool {
        self.arrivals.contains_key(point)
    }

    /// Returns the number of reachable points, including the start.
    #[must_use]
    pub fn len(&self) -> usize {
        self.arrivals.len()
    }

    /// Always `false`: the start point is present in every tree.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.arrivals.is_empty()
    }

    /// Iterates over the arrivals ordered by point name.
    pub fn iter(&self) -> impl Iterator<Item = &PathEdge> {
        self.arrivals.values()
    }

    /// Returns the route from the start point to `end`.
    ///
    /// See [`extract_path`].
    #[must_use]
    pub fn path_to(&self, end: &str) -> Vec<Connection> {
        extract_path(self, &self.start, end)
    }
}

/// Computes the shortest route from `start` to every point reachable through
/// `connections`.
///
/// A start point that no connection touches yields a tree containing only the
/// start itself.
///
/// # Examples
/// ```
/// use routeplan_core::{Connection, solve};
///
/// let roads = vec![
///     Connection::new("A", "B", 4, 1)?,
///     Connection::new("A", "C", 2, 2)?,
///     Connection::new("C", "B", 1, 3)?,
/// ];
/// let tree = solve("A", &roads);
/// assert_eq!(tree.distance_to("B"), Some(3));
/// assert_eq!(tree.path_to("B").iter().map(|road| road.id()).collect::<Vec<_>>(), vec![2, 3]);
/// # Ok::<(), routeplan_core::ConnectionError>(())
/// ```
#[instrument(
    name = "core.solve",
    skip_all,
    fields(
        start = %start,
        connections = connections.len(),
        reached = field::Empty,
        stale = field::Empty,
    ),
)]
pub fn solve(start: &str, connections: &[Connection]) -> ShortestPathTree {
    let adjacency = adjacency(connections);
    let origin: PointName = start.into();

    let mut arrivals = BTreeMap::new();
    arrivals.insert(origin.clone(), PathEdge::origin(origin.clone()));

    let mut frontier = Frontier::default();
    enqueue_neighbours(&mut frontier, &adjacency, &arrivals, &origin, 0, 0);

    let mut round: u64 = 1;
    let mut stale: usize = 0;
    while let Some(candidate) = frontier.pop() {
        if arrivals.contains_key(candidate.to()) {
            stale += 1;
            trace!(point = %candidate.to(), "discarding stale candidate");
            continue;
        }

        let arrival = candidate.into_path_edge();
        let point = arrival.point.clone();
        let distance = arrival.distance;
        arrivals.insert(point.clone(), arrival);
        enqueue_neighbours(&mut frontier, &adjacency, &arrivals, &point, distance, round);
        round += 1;
    }

    let span = Span::current();
    span.record("reached", arrivals.len());
    span.record("stale", stale);

    ShortestPathTree {
        start: origin,
        arrivals,
    }
}

/// Returns the connections leading from `start` to `end`, in travel order.
///
/// The walk follows each arrival's connection backwards from `end`. An `end`
/// that the tree never reached yields an empty route, as does `end == start`.
///
/// # Examples
/// ```
/// use routeplan_core::{Connection, extract_path, solve};
///
/// let roads = vec![Connection::new("A", "B", 4, 1)?, Connection::new("C", "D", 1, 2)?];
/// let tree = solve("A", &roads);
/// assert_eq!(extract_path(&tree, "A", "B").len(), 1);
/// assert!(extract_path(&tree, "A", "D").is_empty());
/// # Ok::<(), routeplan_core::ConnectionError>(())
/// ```
#[must_use]
pub fn extract_path(tree: &ShortestPathTree, start: &str, end: &str) -> Vec<Connection> {
    let mut route = Vec::new();
    let mut current: &str = end;
    while current != start {
        let Some(arrival) = tree.arrival(current) else {
            return Vec::new();
        };
        let Some(connection) = arrival.connection() else {
            return Vec::new();
        };
        route.push(connection.clone());
        current = arrival.from().as_ref();
    }
    route.reverse();
    route
}

type Adjacency<'a> = HashMap<&'a str, Vec<&'a Connection>>;

fn adjacency(connections: &[Connection]) -> Adjacency<'_> {
    let mut adjacency: Adjacency<'_> = HashMap::new();
    for connection in connections {
        adjacency
            .entry(connection.from().as_ref())
            .or_default()
            .push(connection);
        if connection.to() != connection.from() {
            adjacency
                .entry(connection.to().as_ref())
                .or_default()
                .push(connection);
        }
    }
    adjacency
}

fn enqueue_neighbours<'a>(
    frontier: &mut Frontier<'a>,
    adjacency: &Adjacency<'a>,
    arrivals: &BTreeMap<PointName, PathEdge>,
    point: &PointName,
    distance: u64,
    round: u64,
) {
    let Some(connections) = adjacency.get(&**point) else {
        return;
    };
    for &connection in connections {
        let Some(neighbour) = connection.other_endpoint_name(point) else {
            continue;
        };
        if arrivals.contains_key(neighbour) {
            continue;
        }
        frontier.push(Candidate::new(
            distance.saturating_add(connection.weight()),
            round,
            connection,
            point.clone(),
            neighbour.clone(),
        ));
    }
}

#[cfg(test)]
mod property;
