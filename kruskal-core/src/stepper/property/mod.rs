//! Property-based tests for the Kruskal stepper.
//!
//! Checks the per-step invariants (monotonic step, sort before process,
//! acyclic tree, edge-count bound), equivalence with a replay oracle that
//! rebuilds component membership from the accepted edges on every step, and
//! determinism across resets.

mod invariants;
mod replay;
mod strategies;
