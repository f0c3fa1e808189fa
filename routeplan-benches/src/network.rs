//! Seeded synthetic road networks.
//!
//! Every network is connected: each point after the first is joined to a
//! random earlier point, then extra random roads add cycles for the solver and
//! the builder to work through.

use rand::{Rng, SeedableRng, rngs::SmallRng};
use routeplan_core::Connection;

use crate::error::BenchSetupError;

/// Configuration for [`SyntheticNetwork::generate`].
#[derive(Clone, Copy, Debug)]
pub struct SyntheticNetworkConfig {
    /// Number of points; at least two.
    pub point_count: usize,
    /// Extra roads per point on top of the connecting backbone.
    pub extra_roads_per_point: usize,
    /// Largest road length; lengths are drawn from `1..=max_weight`.
    pub max_weight: u64,
    /// Seed for the generator.
    pub seed: u64,
}

/// A generated network ready for benchmarking.
#[derive(Clone, Debug)]
pub struct SyntheticNetwork {
    connections: Vec<Connection>,
    point_count: usize,
}

impl SyntheticNetwork {
    /// Generates a connected network from `config`.
    ///
    /// # Errors
    /// Returns [`BenchSetupError::TooSmall`] for fewer than two points or a zero
    /// `max_weight`, and [`BenchSetupError::TooLarge`] when the road count
    /// overflows.
    ///
    /// # Examples
    /// ```
    /// use routeplan_benches::network::{SyntheticNetwork, SyntheticNetworkConfig};
    ///
    /// let network = SyntheticNetwork::generate(&SyntheticNetworkConfig {
    ///     point_count: 10,
    ///     extra_roads_per_point: 2,
    ///     max_weight: 50,
    ///     seed: 7,
    /// })?;
    /// assert_eq!(network.point_count(), 10);
    /// assert!(network.connections().len() >= 9);
    /// # Ok::<(), routeplan_benches::error::BenchSetupError>(())
    /// ```
    pub fn generate(config: &SyntheticNetworkConfig) -> Result<Self, BenchSetupError> {
        if config.point_count < 2 {
            return Err(BenchSetupError::TooSmall {
                context: "point_count",
                minimum: 2,
            });
        }
        if config.max_weight == 0 {
            return Err(BenchSetupError::TooSmall {
                context: "max_weight",
                minimum: 1,
            });
        }

        let extra = config
            .point_count
            .checked_mul(config.extra_roads_per_point)
            .ok_or(BenchSetupError::TooLarge)?;
        let mut rng = SmallRng::seed_from_u64(config.seed);
        let mut endpoints = Vec::with_capacity(config.point_count.saturating_add(extra));

        for point in 1..config.point_count {
            endpoints.push((rng.gen_range(0..point), point));
        }
        for _ in 0..extra {
            let from = rng.gen_range(0..config.point_count);
            let to = rng.gen_range(0..config.point_count);
            if from != to {
                endpoints.push((from, to));
            }
        }

        let connections = endpoints
            .into_iter()
            .enumerate()
            .map(|(index, (from, to))| {
                let id = i64::try_from(index).map_err(|_| BenchSetupError::TooLarge)?;
                let weight = rng.gen_range(1..=config.max_weight);
                Connection::new(point_name(from), point_name(to), weight, id)
                    .map_err(BenchSetupError::from)
            })
            .collect::<Result<Vec<_>, BenchSetupError>>()?;

        Ok(Self {
            connections,
            point_count: config.point_count,
        })
    }

    /// Returns the generated roads in id order.
    #[must_use]
    #[rustfmt::skip]
    pub fn connections(&self) -> &[Connection] { &self.connections }

    /// Returns the number of points.
    #[must_use]
    #[rustfmt::skip]
    pub const fn point_count(&self) -> usize { self.point_count }

    /// Returns the name of the first point, a convenient query start.
    #[must_use]
    pub fn first_point(&self) -> String {
        point_name(0)
    }

    /// Returns the name of the last point, a convenient query end.
    #[must_use]
    pub fn last_point(&self) -> String {
        point_name(self.point_count.saturating_sub(1))
    }
}

fn point_name(index: usize) -> String {
    format!("P{index}")
}

#[cfg(test)]
#[expect(clippy::expect_used, reason = "tests require contextual panics")]
mod tests {
    use super::*;

    use rstest::rstest;
    use routeplan_core::{minimum_connecting_network, solve};

    fn config(point_count: usize, seed: u64) -> SyntheticNetworkConfig {
        SyntheticNetworkConfig {
            point_count,
            extra_roads_per_point: 3,
            max_weight: 20,
            seed,
        }
    }

    #[rstest]
    #[case(2, 1)]
    #[case(50, 2)]
    #[case(200, 3)]
    fn generated_networks_are_connected(#[case] point_count: usize, #[case] seed: u64) {
        let network = SyntheticNetwork::generate(&config(point_count, seed))
            .expect("generation must succeed");
        let tree = solve(&network.first_point(), network.connections());
        assert_eq!(tree.len(), point_count);
        assert!(minimum_connecting_network(network.connections()).is_tree());
    }

    #[test]
    fn same_seed_same_network() {
        let first = SyntheticNetwork::generate(&config(40, 9)).expect("generation must succeed");
        let second = SyntheticNetwork::generate(&config(40, 9)).expect("generation must succeed");
        assert_eq!(first.connections(), second.connections());
    }

    #[rstest]
    #[case::one_point(SyntheticNetworkConfig { point_count: 1, ..config(1, 0) })]
    #[case::zero_weight(SyntheticNetworkConfig { max_weight: 0, ..config(5, 0) })]
    fn rejects_degenerate_configs(#[case] bad: SyntheticNetworkConfig) {
        let err = SyntheticNetwork::generate(&bad).expect_err("config must be rejected");
        assert!(matches!(err, BenchSetupError::TooSmall { .. }));
    }

    #[test]
    fn rejects_overflowing_road_counts() {
        let bad = SyntheticNetworkConfig {
            extra_roads_per_point: usize::MAX,
            ..config(3, 0)
        };
        let err = SyntheticNetwork::generate(&bad).expect_err("overflow must be rejected");
        assert!(matches!(err, BenchSetupError::TooLarge));
    }
}
