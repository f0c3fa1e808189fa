//! Route planning pipeline.
//!
//! Solves the shortest route over the full network, reduces the network to its
//! minimum connecting subset, solves again over the reduced network, and
//! compares the two. The planner only holds the immutable road list, so one
//! instance may serve concurrent queries.

use tracing::{Span, field, info, instrument};

use crate::{
    comparison::{NetworkComparison, compare_networks, total_weight},
    connection::{Connection, PointName},
    shortest_path::solve,
    spanning::{ConnectingNetwork, minimum_connecting_network},
};

/// Entry point for planning routes over a road network.
///
/// # Examples
/// ```
/// use routeplan_core::{Connection, RoutePlanner};
///
/// let planner = RoutePlanner::new(vec![
///     Connection::new("A", "B", 4, 1)?,
///     Connection::new("B", "D", 6, 2)?,
///     Connection::new("A", "C", 2, 3)?,
///     Connection::new("C", "D", 3, 4)?,
///     Connection::new("A", "D", 10, 5)?,
/// ]);
/// let report = planner.plan("A", "D");
/// assert_eq!(report.original_distance(), 5);
/// assert_eq!(report.reduced_network().total_weight(), 9);
/// assert_eq!(report.comparison().material_ratio(), 0.36);
/// assert_eq!(report.comparison().route_ratio(), 1.0);
/// # Ok::<(), routeplan_core::ConnectionError>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct RoutePlanner {
    connections: Vec<Connection>,
}

impl RoutePlanner {
    /// Creates a planner over `connections`.
    #[must_use]
    pub fn new(connections: Vec<Connection>) -> Self {
        Self { connections }
    }

    /// Returns the roads of the original network in input order.
    #[must_use]
    #[rustfmt::skip]
    pub fn connections(&self) -> &[Connection] { &self.connections }

    /// Returns the shortest route from `start` to `end` using only
    /// `connections`, or an empty route when `end` is unreachable.
    #[must_use]
    pub fn shortest_route(start: &str, end: &str, connections: &[Connection]) -> Vec<Connection> {
        solve(start, connections).path_to(end)
    }

    /// Computes the minimum connecting network of the original roads.
    #[must_use]
    pub fn connecting_network(&self) -> ConnectingNetwork {
        minimum_connecting_network(&self.connections)
    }

    /// Runs the full comparison between the original and reduced networks for
    /// the `start` to `end` query.
    ///
    /// Unreachable endpoints are not an error: both routes come back empty and
    /// the route ratio is `0.0`.
    #[instrument(
        name = "core.plan",
        skip_all,
        fields(
            start = %start,
            end = %end,
            connections = self.connections.len(),
            original_distance = field::Empty,
            reduced_distance = field::Empty,
        ),
    )]
    pub fn plan(&self, start: &str, end: &str) -> RouteReport {
        let original_route = Self::shortest_route(start, end, &self.connections);
        let reduced_network = self.connecting_network();
        let reduced_route = Self::shortest_route(start, end, reduced_network.connections());
        let comparison = compare_networks(
            &self.connections,
            reduced_network.connections(),
            &original_route,
            &reduced_route,
        );

        let span = Span::current();
        span.record("original_distance", comparison.original_route());
        span.record("reduced_distance", comparison.reduced_route());
        info!(
            material_ratio = comparison.material_ratio(),
            route_ratio = comparison.route_ratio(),
            reachable = !original_route.is_empty() || start == end,
            "route plan completed"
        );

        RouteReport {
            start: start.into(),
            end: end.into(),
            original_route,
            reduced_network,
            reduced_route,
            comparison,
        }
    }
}

/// Outcome of [`RoutePlanner::plan`].
#[derive(Clone, Debug, PartialEq)]
pub struct RouteReport {
    start: PointName,
    end: PointName,
    original_route: Vec<Connection>,
    reduced_network: ConnectingNetwork,
    reduced_route: Vec<Connection>,
    comparison: NetworkComparison,
}

impl RouteReport {
    /// Returns the queried start point.
    #[must_use]
    #[rustfmt::skip]
    pub fn start(&self) -> &PointName { &self.start }

    /// Returns the queried end point.
    #[must_use]
    #[rustfmt::skip]
    pub fn end(&self) -> &PointName { &self.end }

    /// Returns the shortest route over the original network.
    #[must_use]
    #[rustfmt::skip]
    pub fn original_route(&self) -> &[Connection] { &self.original_route }

    /// Returns the minimum connecting network.
    #[must_use]
    #[rustfmt::skip]
    pub fn reduced_network(&self) -> &ConnectingNetwork { &self.reduced_network }

    /// Returns the shortest route over the reduced network.
    #[must_use]
    #[rustfmt::skip]
    pub fn reduced_route(&self) -> &[Connection] { &self.reduced_route }

    /// Returns the weight totals and ratios.
    #[must_use]
    #[rustfmt::skip]
    pub fn comparison(&self) -> &NetworkComparison { &self.comparison }

    /// Returns the length of the original route (zero when unreachable).
    #[must_use]
    pub fn original_distance(&self) -> u64 {
        total_weight(&self.original_route)
    }

    /// Returns the length of the reduced route (zero when unreachable).
    #[must_use]
    pub fn reduced_distance(&self) -> u64 {
        total_weight(&self.reduced_route)
    }
}
