//! Shared test utilities for `routeplan-core`.

use proptest::prelude::*;
use proptest::test_runner::Config as ProptestConfig;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use routeplan_test_support::ci::property_test_profile::ProptestRunProfile;

use crate::connection::Connection;

/// Builds a standard proptest configuration from the shared CI profile.
///
/// This keeps property suites aligned on the same `PROGTEST_CASES` and
/// `ROUTEPLAN_PBT_FORK` interpretation.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = ProptestRunProfile::load(default_cases, false);
    ProptestConfig {
        cases: profile.cases(),
        fork: profile.fork(),
        ..ProptestConfig::default()
    }
}

/// Builds a connection, panicking on invalid fixture data.
pub(crate) fn road(from: &str, to: &str, weight: u64, id: i64) -> Connection {
    match Connection::new(from, to, weight, id) {
        Ok(connection) => connection,
        Err(err) => panic!("invalid fixture connection {from}-{to}: {err}"),
    }
}

/// The four-point, five-road network used throughout the docs.
pub(crate) fn diamond() -> Vec<Connection> {
    vec![
        road("A", "B", 4, 1),
        road("B", "D", 6, 2),
        road("A", "C", 2, 3),
        road("C", "D", 3, 4),
        road("A", "D", 10, 5),
    ]
}

/// Returns the canonical name of the point with the given index.
pub(crate) fn point_name(index: usize) -> String {
    format!("P{index}")
}

/// A randomly generated road network.
#[derive(Clone, Debug)]
pub(crate) struct NetworkFixture {
    /// Number of distinct point names that may appear.
    pub point_count: usize,
    /// Generated roads with unique ids in input order.
    pub connections: Vec<Connection>,
}

/// Generates networks with a small weight range so equal-weight ties are
/// frequent. Roughly one network in four is split into two halves with no
/// road between them.
pub(crate) fn network_strategy() -> impl Strategy<Value = NetworkFixture> {
    any::<u64>().prop_map(|seed| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_network(&mut rng)
    })
}

/// Generates a network from an explicit RNG for targeted cases.
pub(crate) fn generate_network(rng: &mut SmallRng) -> NetworkFixture {
    let point_count = rng.gen_range(2..=16);
    let split = rng.gen_bool(0.25);
    let half = point_count / 2;
    let edge_probability = rng.gen_range(0.2..=0.8);
    let mut connections = Vec::new();
    let mut id = 0_i64;

    for left in 0..point_count {
        for right in (left + 1)..point_count {
            if split && (left < half) != (right < half) {
                continue;
            }
            if rng.gen_bool(edge_probability) {
                let weight = rng.gen_range(1..=4);
                connections.push(road(&point_name(left), &point_name(right), weight, id));
                id += 1;
            }
        }
    }

    NetworkFixture {
        point_count,
        connections,
    }
}
