//! Undirected weighted connections between named points.

use std::{fmt, sync::Arc};

use crate::error::{ConnectionError, Result};

/// Name of a point in the road network.
///
/// Names are reference counted so the solver, the builder, and their outputs
/// can share endpoints without copying strings.
pub type PointName = Arc<str>;

/// An undirected road between two points.
///
/// `from` and `to` are interchangeable: `(a, b)` and `(b, a)` describe the
/// same road. The `id` is only used to break ties deterministically.
///
/// # Examples
/// ```
/// use routeplan_core::Connection;
///
/// let road = Connection::new("A", "B", 4, 1).expect("weight is positive");
/// assert_eq!(road.other_endpoint("B"), Some("A"));
/// assert_eq!(road.to_string(), "A\tB\t4\t1");
/// ```
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Connection {
    from: PointName,
    to: PointName,
    weight: u64,
    id: i64,
}

impl Connection {
    /// Creates a connection after validating its weight and endpoint names.
    ///
    /// # Errors
    /// Returns [`ConnectionError::NonPositiveWeight`] when `weight == 0` and
    /// [`ConnectionError::BlankEndpoint`] when either endpoint is empty or whitespace.
    pub fn new(
        from: impl Into<PointName>,
        to: impl Into<PointName>,
        weight: u64,
        id: i64,
    ) -> Result<Self> {
        let from = from.into();
        let to = to.into();
        if weight == 0 {
            return Err(ConnectionError::NonPositiveWeight { id });
        }
        if from.trim().is_empty() || to.trim().is_empty() {
            return Err(ConnectionError::BlankEndpoint { id });
        }
        Ok(Self {
            from,
            to,
            weight,
            id,
        })
    }

    /// Returns the first endpoint as written in the input.
    #[must_use]
    #[rustfmt::skip]
    pub fn from(&self) -> &PointName { &self.from }

    /// Returns the second endpoint as written in the input.
    #[must_use]
    #[rustfmt::skip]
    pub fn to(&self) -> &PointName { &self.to }

    /// Returns the road length.
    #[must_use]
    #[rustfmt::skip]
    pub fn weight(&self) -> u64 { self.weight }

    /// Returns the tie-break identifier.
    #[must_use]
    #[rustfmt::skip]
    pub fn id(&self) -> i64 { self.id }

    /// Returns `true` when `point` is one of the endpoints.
    #[must_use]
    pub fn touches(&self, point: &str) -> bool {
        &*self.from == point || &*self.to == point
    }

    /// Returns the endpoint opposite to `point`, or `None` when the
    /// connection does not touch `point`.
    #[must_use]
    pub fn other_endpoint(&self, point: &str) -> Option<&str> {
        self.other_endpoint_name(point).map(|name| &**name)
    }

    pub(crate) fn other_endpoint_name(&self, point: &str) -> Option<&PointName> {
        if &*self.from == point {
            Some(&self.to)
        } else if &*self.to == point {
            Some(&self.from)
        } else {
            None
        }
    }
}

impl fmt::Display for Connection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}\t{}\t{}", self.from, self.to, self.weight, self.id)
    }
}
