//! Aggregate weights and ratios between the original and reduced networks.

use crate::connection::Connection;

/// Sums the weights of `connections`.
///
/// Used both for material usage (a whole network) and for route length (a
/// path). An empty slice sums to zero. The sum saturates at `u64::MAX`, as
/// solver distances do.
#[must_use]
pub fn total_weight(connections: &[Connection]) -> u64 {
    connections
        .iter()
        .map(Connection::weight)
        .fold(0, u64::saturating_add)
}

/// Divides two totals with explicit handling of a zero denominator.
///
/// `0 / 0` is defined as `0.0` (nothing was compared, nothing changed) and a
/// positive numerator over zero is `f64::INFINITY`. No rounding is applied.
///
/// # Examples
/// ```
/// use routeplan_core::ratio;
///
/// assert_eq!(ratio(9, 25), 0.36);
/// assert_eq!(ratio(0, 0), 0.0);
/// assert!(ratio(3, 0).is_infinite());
/// ```
#[must_use]
pub fn ratio(numerator: u64, denominator: u64) -> f64 {
    match (numerator, denominator) {
        (0, 0) => 0.0,
        (_, 0) => f64::INFINITY,
        _ => numerator as f64 / denominator as f64,
    }
}

/// Weight totals of both networks and both routes, with the derived ratios.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct NetworkComparison {
    original_material: u64,
    reduced_material: u64,
    original_route: u64,
    reduced_route: u64,
}

impl NetworkComparison {
    /// Returns the total weight of the original network.
    #[must_use]
    #[rustfmt::skip]
    pub fn original_material(&self) -> u64 { self.original_material }

    /// Returns the total weight of the reduced network.
    #[must_use]
    #[rustfmt::skip]
    pub fn reduced_material(&self) -> u64 { self.reduced_material }

    /// Returns the length of the shortest route on the original network.
    #[must_use]
    #[rustfmt::skip]
    pub fn original_route(&self) -> u64 { self.original_route }

    /// Returns the length of the shortest route on the reduced network.
    #[must_use]
    #[rustfmt::skip]
    pub fn reduced_route(&self) -> u64 { self.reduced_route }

    /// Reduced network weight divided by original network weight.
    #[must_use]
    pub fn material_ratio(&self) -> f64 {
        ratio(self.reduced_material, self.original_material)
    }

    /// Reduced route length divided by original route length.
    #[must_use]
    pub fn route_ratio(&self) -> f64 {
        ratio(self.reduced_route, self.original_route)
    }
}

/// Compares the original network and route with their reduced counterparts.
///
/// # Examples
/// ```
/// use routeplan_core::{Connection, compare_networks};
///
/// let original = vec![
///     Connection::new("A", "B", 2, 1)?,
///     Connection::new("B", "C", 2, 2)?,
///     Connection::new("A", "C", 3, 3)?,
/// ];
/// let reduced = vec![original[0].clone(), original[1].clone()];
/// let comparison = compare_networks(&original, &reduced, &original[2..], &reduced);
/// assert_eq!(comparison.original_material(), 7);
/// assert!(comparison.route_ratio() > 1.0);
/// # Ok::<(), routeplan_core::ConnectionError>(())
/// ```
#[must_use]
pub fn compare_networks(
    original_network: &[Connection],
    reduced_network: &[Connection],
    original_route: &[Connection],
    reduced_route: &[Connection],
) -> NetworkComparison {
    NetworkComparison {
        original_material: total_weight(original_network),
        reduced_material: total_weight(reduced_network),
        original_route: total_weight(original_route),
        reduced_route: total_weight(reduced_route),
    }
}
