//! Stepper properties checked against every generated fixture.
//!
//! - **Sort before process**: the first call sorts stably and accepts nothing.
//! - **Monotonic step**: every call before completion adds exactly one.
//! - **Acyclic tree**: the accepted edges never close a cycle.
//! - **Edge-count bound**: at most `nodes - 1` edges are accepted.
//! - **Idempotent completion**: extra calls change nothing but the message.
//! - **Replay equivalence**: decisions match the replay oracle.
//! - **Reset purity**: a reset run reproduces the first run exactly.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{Phase, StepOutcome};

use super::oracle::{OracleDecision, forest_components, replay_decisions, sorted_by_weight};
use super::replay::{RunTrace, build_stepper, run_to_completion};
use super::types::GraphFixture;

/// Checks the structural per-step invariants for `fixture`.
pub(super) fn run_step_invariants_property(fixture: &GraphFixture) -> TestCaseResult {
    let mut stepper = build_stepper(fixture)?;
    let trace = run_to_completion(&mut stepper, fixture)?;

    validate_sort_step(fixture, &trace)?;
    validate_growth(fixture, &trace)?;
    validate_forest(fixture, &trace)?;

    if trace.final_step != fixture.edges.len() + 1 {
        return Err(TestCaseError::fail(format!(
            "final step {} != edge count + 1 ({})",
            trace.final_step,
            fixture.context()
        )));
    }

    stepper.set_auto_playing(true);
    for _ in 0..3 {
        let outcome = stepper
            .advance()
            .map_err(|err| TestCaseError::fail(format!("completion failed: {err}")))?;
        let unchanged = outcome == StepOutcome::Finished
            && stepper.step() == trace.final_step
            && stepper.mst_edges() == trace.mst_edges.as_slice()
            && stepper.phase() == Phase::Complete
            && !stepper.is_auto_playing();
        if !unchanged {
            return Err(TestCaseError::fail(format!(
                "completion was not absorbing ({})",
                fixture.context()
            )));
        }
    }

    Ok(())
}

/// Checks the stepper's decisions against the replay oracle.
pub(super) fn run_replay_equivalence_property(fixture: &GraphFixture) -> TestCaseResult {
    let mut stepper = build_stepper(fixture)?;
    let trace = run_to_completion(&mut stepper, fixture)?;

    let decisions: Vec<OracleDecision> = trace
        .records
        .iter()
        .filter_map(|record| match record.outcome {
            StepOutcome::Accepted(_) => Some(OracleDecision::Accept),
            StepOutcome::Skipped(_) => Some(OracleDecision::Skip),
            StepOutcome::Sorted | StepOutcome::Finished => None,
        })
        .collect();
    let expected = replay_decisions(fixture.node_count, &trace.sorted_edges);

    if decisions != expected {
        return Err(TestCaseError::fail(format!(
            "decisions diverged from replay oracle: stepper={decisions:?}, oracle={expected:?} ({})",
            fixture.context()
        )));
    }
    Ok(())
}

/// Checks that a reset run reproduces the first run.
pub(super) fn run_reset_determinism_property(fixture: &GraphFixture) -> TestCaseResult {
    let mut stepper = build_stepper(fixture)?;
    let first = run_to_completion(&mut stepper, fixture)?;

    stepper.reset();
    if stepper.step() != 0
        || !stepper.mst_edges().is_empty()
        || stepper.edges() != fixture.edges.as_slice()
        || !stepper.explanation().is_empty()
    {
        return Err(TestCaseError::fail(format!(
            "reset left residual state ({})",
            fixture.context()
        )));
    }

    let second = run_to_completion(&mut stepper, fixture)?;
    if first != second {
        return Err(TestCaseError::fail(format!(
            "reset run diverged ({})",
            fixture.context()
        )));
    }
    Ok(())
}

fn validate_sort_step(fixture: &GraphFixture, trace: &RunTrace) -> TestCaseResult {
    let Some(first) = trace.records.first() else {
        return Err(TestCaseError::fail("no calls were recorded"));
    };
    if first.outcome != StepOutcome::Sorted || first.tree_len != 0 || first.step != 1 {
        return Err(TestCaseError::fail(format!(
            "first call must only sort, got {:?} ({})",
            first.outcome,
            fixture.context()
        )));
    }
    if trace.sorted_edges != sorted_by_weight(&fixture.edges) {
        return Err(TestCaseError::fail(format!(
            "edges are not stably sorted by weight ({})",
            fixture.context()
        )));
    }
    if trace
        .sorted_edges
        .iter()
        .any(|edge| edge.weight().is_sign_negative())
    {
        return Err(TestCaseError::fail(format!(
            "a sorted weight kept a negative sign ({})",
            fixture.context()
        )));
    }
    Ok(())
}

fn validate_growth(fixture: &GraphFixture, trace: &RunTrace) -> TestCaseResult {
    let bound = fixture.node_count.saturating_sub(1);
    let mut previous = 0;
    for record in &trace.records {
        if record.tree_len > previous + 1 || record.tree_len < previous {
            return Err(TestCaseError::fail(format!(
                "tree grew from {previous} to {} in one call ({})",
                record.tree_len,
                fixture.context()
            )));
        }
        if record.tree_len > bound {
            return Err(TestCaseError::fail(format!(
                "tree has {} edges, more than nodes - 1 ({})",
                record.tree_len,
                fixture.context()
            )));
        }
        if record.explanation != record.outcome.to_string() {
            return Err(TestCaseError::fail("explanation does not match outcome"));
        }
        previous = record.tree_len;
    }
    Ok(())
}

fn validate_forest(fixture: &GraphFixture, trace: &RunTrace) -> TestCaseResult {
    let Some(components) = forest_components(fixture.node_count, &trace.mst_edges) else {
        return Err(TestCaseError::fail(format!(
            "accepted edges contain a cycle ({})",
            fixture.context()
        )));
    };
    if components != trace.component_count {
        return Err(TestCaseError::fail(format!(
            "component count mismatch: stepper={}, independent={components} ({})",
            trace.component_count,
            fixture.context()
        )));
    }
    if trace.mst_edges.len() != fixture.node_count - components {
        return Err(TestCaseError::fail(format!(
            "forest has {} edges for {components} components ({})",
            trace.mst_edges.len(),
            fixture.context()
        )));
    }
    Ok(())
}
