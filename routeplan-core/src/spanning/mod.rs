//! Minimum connecting network construction.
//!
//! Builds the cheapest subset of roads that keeps every point reachable from
//! every other point it was reachable from before (a minimum spanning forest)
//! using Kruskal's algorithm over a [`DisjointSet`] created per call.

use tracing::{Span, debug, field, instrument};

use crate::{comparison::total_weight, connection::Connection, union_find::DisjointSet};

/// The output of a minimum connecting network computation.
///
/// When the input network is connected the result is a minimum spanning tree.
#[derive(Clone, Debug, PartialEq)]
pub struct ConnectingNetwork {
    connections: Vec<Connection>,
    point_count: usize,
    component_count: usize,
}

impl ConnectingNetwork {
    /// Returns the selected roads in selection order (ascending
    /// `(weight, id)`).
    #[must_use]
    #[rustfmt::skip]
    pub fn connections(&self) -> &[Connection] { &self.connections }

    /// Consumes the network and returns the selected roads.
    #[must_use]
    pub fn into_connections(self) -> Vec<Connection> {
        self.connections
    }

    /// Returns the number of distinct points in the input network.
    #[must_use]
    #[rustfmt::skip]
    pub fn point_count(&self) -> usize { self.point_count }

    /// Returns the number of connected components in the resulting forest.
    #[must_use]
    #[rustfmt::skip]
    pub fn component_count(&self) -> usize { self.component_count }

    /// Returns the summed weight of the selected roads.
    #[must_use]
    pub fn total_weight(&self) -> u64 {
        total_weight(&self.connections)
    }

    /// Returns `true` when the network spans a single connected component.
    #[must_use]
    pub fn is_tree(&self) -> bool {
        self.component_count == 1
    }
}

/// Computes the minimum connecting network of `connections`.
///
/// Roads are considered in ascending `(weight, id)` order and kept whenever
/// they join two separate components. Roads that would close a cycle,
/// including self-loops, are skipped. Disconnected input yields a minimum
/// spanning forest with one tree per component.
///
/// # Examples
/// ```
/// use routeplan_core::{Connection, minimum_connecting_network};
///
/// let roads = vec![
///     Connection::new("A", "B", 4, 1)?,
///     Connection::new("B", "C", 1, 2)?,
///     Connection::new("A", "C", 2, 3)?,
/// ];
/// let network = minimum_connecting_network(&roads);
/// assert!(network.is_tree());
/// assert_eq!(network.total_weight(), 3);
/// # Ok::<(), routeplan_core::ConnectionError>(())
/// ```
#[instrument(
    name = "core.build_network",
    skip_all,
    fields(
        connections = connections.len(),
        points = field::Empty,
        selected = field::Empty,
        components = field::Empty,
    ),
)]
pub fn minimum_connecting_network(connections: &[Connection]) -> ConnectingNetwork {
    let mut components = DisjointSet::new();
    let mut endpoints = Vec::with_capacity(connections.len());
    for connection in connections {
        let from = components.insert(connection.from().clone());
        let to = components.insert(connection.to().clone());
        endpoints.push((connection, from, to));
    }
    let point_count = components.len();

    // Stable sort on (weight, id) keeps equal-weight selection reproducible.
    endpoints.sort_by_key(|(connection, _, _)| (connection.weight(), connection.id()));

    let mut selected = Vec::with_capacity(point_count.saturating_sub(1));
    for (connection, from, to) in endpoints {
        if components.union_indices(from, to) {
            selected.push(connection.clone());
        }
        if is_spanning_tree_complete(point_count, &components) {
            debug!(selected = selected.len(), "network fully connected");
            break;
        }
    }

    let span = Span::current();
    span.record("points", point_count);
    span.record("selected", selected.len());
    span.record("components", components.components());

    ConnectingNetwork {
        connections: selected,
        point_count,
        component_count: components.components(),
    }
}

fn is_spanning_tree_complete(point_count: usize, components: &DisjointSet) -> bool {
    point_count > 0 && components.components() == 1
}

#[cfg(test)]
mod property;
