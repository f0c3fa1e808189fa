//! Property-based tests for the shortest-route solver.
//!
//! Checks on generated networks that every extracted route is a connected
//! walk whose weights sum to the recorded distance, that recorded distances
//! are optimal against a Bellman-Ford oracle, that every point is reached
//! over the same road and in the same round as a linear-scan solver that
//! re-sorts all candidates each step, and that solving is deterministic under
//! input reordering.

use std::collections::{BTreeMap, HashMap};

use proptest::prelude::*;
use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::Connection;
use crate::test_utils::{NetworkFixture, network_strategy, point_name, suite_proptest_config};

use super::{ShortestPathTree, solve};

fn run_path_validity_property(fixture: &NetworkFixture) -> TestCaseResult {
    let start = point_name(0);
    let tree = solve(&start, &fixture.connections);

    for arrival in tree.iter() {
        let end = arrival.point();
        let route = tree.path_to(end);
        validate_walk(&start, end, &route)?;
        let total: u64 = route.iter().map(Connection::weight).sum();
        prop_assert_eq!(total, arrival.distance(), "route to {} has wrong weight", end);
    }
    Ok(())
}

fn validate_walk(start: &str, end: &str, route: &[Connection]) -> TestCaseResult {
    let mut current = start;
    for (index, connection) in route.iter().enumerate() {
        current = connection.other_endpoint(current).ok_or_else(|| {
            TestCaseError::fail(format!(
                "road {index} ({connection}) does not continue from {current}"
            ))
        })?;
    }
    prop_assert_eq!(current, end);
    Ok(())
}

fn run_optimality_property(fixture: &NetworkFixture) -> TestCaseResult {
    let start = point_name(0);
    let tree = solve(&start, &fixture.connections);
    let oracle = bellman_ford(&start, &fixture.connections);

    prop_assert_eq!(tree.len(), oracle.len());
    for (point, distance) in &oracle {
        prop_assert_eq!(tree.distance_to(point), Some(*distance));
    }
    Ok(())
}

fn bellman_ford(start: &str, connections: &[Connection]) -> HashMap<String, u64> {
    let mut distances = HashMap::from([(start.to_owned(), 0_u64)]);
    loop {
        let mut changed = false;
        for connection in connections {
            for (from, to) in [
                (connection.from(), connection.to()),
                (connection.to(), connection.from()),
            ] {
                let Some(&base) = distances.get(&**from) else {
                    continue;
                };
                let candidate = base + connection.weight();
                let entry = distances.entry(to.to_string()).or_insert(u64::MAX);
                if candidate < *entry {
                    *entry = candidate;
                    changed = true;
                }
            }
        }
        if !changed {
            return distances;
        }
    }
}

/// Road id and discovery round chosen for a point by [`linear_scan`].
#[derive(Debug, PartialEq)]
struct Selection {
    id: Option<i64>,
    round: u64,
}

/// Label-setting solver over an unsorted candidate list. Every step sorts the
/// whole list by distance, round and road id, then settles the head.
fn linear_scan(start: &str, connections: &[Connection]) -> BTreeMap<String, Selection> {
    let expand = |point: &str, distance: u64, round: u64, settled: &BTreeMap<String, Selection>| {
        connections
            .iter()
            .filter_map(|connection| {
                let next = connection.other_endpoint(point)?;
                (next != start && !settled.contains_key(next)).then(|| {
                    (distance + connection.weight(), round, connection.id(), next.to_owned())
                })
            })
            .collect::<Vec<_>>()
    };

    let mut settled = BTreeMap::new();
    let mut candidates = expand(start, 0, 0, &settled);
    let mut round = 1;
    while !candidates.is_empty() {
        candidates.sort_by_key(|(distance, discovered, id, _)| (*distance, *discovered, *id));
        let (distance, discovered, id, point) = candidates.remove(0);
        if settled.contains_key(&point) {
            continue;
        }
        settled.insert(
            point.clone(),
            Selection {
                id: Some(id),
                round: discovered,
            },
        );
        candidates.extend(expand(&point, distance, round, &settled));
        round += 1;
    }
    settled
}

fn run_linear_scan_property(fixture: &NetworkFixture) -> TestCaseResult {
    let start = point_name(0);
    let tree = solve(&start, &fixture.connections);
    let expected = linear_scan(&start, &fixture.connections);

    prop_assert_eq!(tree.len(), expected.len() + 1);
    for (point, selection) in &expected {
        let arrival = tree
            .arrival(point)
            .ok_or_else(|| TestCaseError::fail(format!("{point} was never reached")))?;
        let chosen = Selection {
            id: arrival.connection().map(Connection::id),
            round: arrival.discovery_round(),
        };
        prop_assert_eq!(&chosen, selection, "different road chosen for {}", point);
    }
    Ok(())
}

fn run_determinism_property(fixture: &NetworkFixture) -> TestCaseResult {
    let start = point_name(0);
    let baseline: ShortestPathTree = solve(&start, &fixture.connections);

    let mut reversed = fixture.connections.clone();
    reversed.reverse();
    prop_assert_eq!(&baseline, &solve(&start, &reversed));

    let mut rotated = fixture.connections.clone();
    if !rotated.is_empty() {
        let mid = rotated.len() / 2;
        rotated.rotate_left(mid);
    }
    prop_assert_eq!(&baseline, &solve(&start, &rotated));
    Ok(())
}

proptest! {
    #![proptest_config(suite_proptest_config(256))]

    #[test]
    fn routes_are_valid_walks(fixture in network_strategy()) {
        run_path_validity_property(&fixture)?;
    }

    #[test]
    fn distances_match_oracle(fixture in network_strategy()) {
        run_optimality_property(&fixture)?;
    }

    #[test]
    fn selections_match_linear_scan(fixture in network_strategy()) {
        run_linear_scan_property(&fixture)?;
    }

    #[test]
    fn solving_ignores_input_order(fixture in network_strategy()) {
        run_determinism_property(&fixture)?;
    }
}
