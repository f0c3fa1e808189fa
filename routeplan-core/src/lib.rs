//! Routeplan core library.
//!
//! Computes the shortest route between two points of an undirected road
//! network, reduces the network to its minimum connecting subset, and compares
//! the two networks on route length and material usage.

mod comparison;
mod connection;
mod error;
mod planner;
mod shortest_path;
mod spanning;
mod union_find;

#[cfg(test)]
pub(crate) mod test_utils;

pub use crate::{
    comparison::{NetworkComparison, compare_networks, ratio, total_weight},
    connection::{Connection, PointName},
    error::{ConnectionError, ConnectionErrorCode, Result},
    planner::{RoutePlanner, RouteReport},
    shortest_path::{PathEdge, ShortestPathTree, extract_path, solve},
    spanning::{ConnectingNetwork, minimum_connecting_network},
    union_find::DisjointSet,
};
