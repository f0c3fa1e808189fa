//! Benchmark support crate for routeplan.
//!
//! Provides seeded synthetic road networks and parameter types used by the
//! Criterion benchmarks for the shortest-path solver, the minimum connecting
//! network builder, and the full planning pipeline.

pub mod error;
pub mod network;
pub mod params;
