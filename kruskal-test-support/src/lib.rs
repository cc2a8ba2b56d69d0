//! Shared test utilities used across the kruskal crates.

pub mod ci;
pub mod tracing;
