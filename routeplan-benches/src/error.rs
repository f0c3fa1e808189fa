//! Benchmark setup error type.

use routeplan_core::ConnectionError;

/// Errors that may occur while preparing benchmark inputs.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// A configuration value was below its minimum.
    #[error("{context} must be at least {minimum}")]
    TooSmall {
        /// The parameter that was too small.
        context: &'static str,
        /// Smallest accepted value.
        minimum: u64,
    },
    /// The requested road count does not fit in memory or in an id.
    #[error("requested network is too large")]
    TooLarge,
    /// A generated road failed validation.
    #[error("generated road was rejected: {0}")]
    Connection(#[from] ConnectionError),
}
