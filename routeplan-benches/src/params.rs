//! Benchmark parameter types.

use std::fmt;

/// Parameters identifying one benchmark input size.
#[derive(Clone, Debug)]
pub struct NetworkBenchParams {
    /// Number of points in the network.
    pub point_count: usize,
    /// Number of roads in the network.
    pub road_count: usize,
}

impl fmt::Display for NetworkBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},e={}", self.point_count, self.road_count)
    }
}
