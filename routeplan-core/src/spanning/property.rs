//! Property-based tests for the minimum connecting network builder.
//!
//! For generated networks, verifies:
//!
//! - **Acyclicity**: no selected road closes a cycle.
//! - **Edge count**: `V - C` roads for `C` connected components.
//! - **Connectivity**: two points are joined in the output exactly when they
//!   were joined in the input.
//! - **Minimality**: total weight matches an independent Prim oracle.
//! - **Determinism**: input order does not change the selection.

use std::collections::BTreeSet;

use proptest::prelude::*;
use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::test_utils::{NetworkFixture, network_strategy, suite_proptest_config};
use crate::{Connection, DisjointSet};

use super::minimum_connecting_network;

fn run_forest_property(fixture: &NetworkFixture) -> TestCaseResult {
    let network = minimum_connecting_network(&fixture.connections);

    let mut forest = DisjointSet::new();
    for (index, connection) in network.connections().iter().enumerate() {
        if !forest.union(connection.from().clone(), connection.to().clone()) {
            return Err(TestCaseError::fail(format!(
                "road {index} ({connection}) creates a cycle"
            )));
        }
    }

    let mut original = DisjointSet::new();
    for connection in &fixture.connections {
        original.union(connection.from().clone(), connection.to().clone());
    }

    prop_assert_eq!(network.point_count(), original.len());
    prop_assert!(network.point_count() <= fixture.point_count);
    prop_assert_eq!(network.component_count(), original.components());
    prop_assert!(network.connections().len() <= original.len().saturating_sub(1));
    prop_assert_eq!(
        network.connections().len(),
        original.len() - original.components()
    );

    let points: BTreeSet<&str> = fixture
        .connections
        .iter()
        .flat_map(|connection| [&**connection.from(), &**connection.to()])
        .collect();
    for left in &points {
        for right in &points {
            prop_assert_eq!(
                forest.connected(left, right) || left == right,
                original.connected(left, right),
                "connectivity of {} and {} changed",
                left,
                right
            );
        }
    }
    Ok(())
}

fn run_minimality_property(fixture: &NetworkFixture) -> TestCaseResult {
    let network = minimum_connecting_network(&fixture.connections);
    prop_assert_eq!(network.total_weight(), prim_weight(&fixture.connections));
    Ok(())
}

/// Sums a minimum spanning forest weight by growing each component with Prim.
fn prim_weight(connections: &[Connection]) -> u64 {
    let mut unvisited: BTreeSet<&str> = connections
        .iter()
        .flat_map(|connection| [&**connection.from(), &**connection.to()])
        .collect();
    let mut total = 0;

    while let Some(seed) = unvisited.pop_first() {
        let mut tree = BTreeSet::from([seed]);
        loop {
            let cheapest = connections
                .iter()
                .filter_map(|connection| {
                    let from_in = tree.contains(&**connection.from());
                    let to_in = tree.contains(&**connection.to());
                    match (from_in, to_in) {
                        (true, false) => Some((connection.weight(), &**connection.to())),
                        (false, true) => Some((connection.weight(), &**connection.from())),
                        _ => None,
                    }
                })
                .min();
            let Some((weight, point)) = cheapest else {
                break;
            };
            total += weight;
            tree.insert(point);
            unvisited.remove(point);
        }
    }
    total
}

fn run_determinism_property(fixture: &NetworkFixture) -> TestCaseResult {
    let baseline = minimum_connecting_network(&fixture.connections);
    let mut reversed = fixture.connections.clone();
    reversed.reverse();
    prop_assert_eq!(baseline, minimum_connecting_network(&reversed));
    Ok(())
}

proptest! {
    #![proptest_config(suite_proptest_config(256))]

    #[test]
    fn builds_spanning_forest(fixture in network_strategy()) {
        run_forest_property(&fixture)?;
    }

    #[test]
    fn matches_prim_weight(fixture in network_strategy()) {
        run_minimality_property(&fixture)?;
    }

    #[test]
    fn selection_ignores_input_order(fixture in network_strategy()) {
        run_determinism_property(&fixture)?;
    }
}
