//! Drives a stepper to completion and records what every call did.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{Edge, StepOutcome, Stepper};

use super::types::GraphFixture;

/// Observable state captured after one `advance` call.
#[derive(Clone, Debug, PartialEq)]
pub(super) struct StepRecord {
    pub step: usize,
    pub outcome: StepOutcome,
    pub explanation: String,
    pub tree_len: usize,
}

/// Full record of a run from construction to completion.
#[derive(Clone, Debug, PartialEq)]
pub(super) struct RunTrace {
    pub records: Vec<StepRecord>,
    pub sorted_edges: Vec<Edge>,
    pub mst_edges: Vec<Edge>,
    pub final_step: usize,
    pub component_count: usize,
}

/// Builds a stepper for `fixture`, failing the case if construction fails.
pub(super) fn build_stepper(fixture: &GraphFixture) -> Result<Stepper, TestCaseError> {
    Stepper::with_node_count(fixture.node_count, fixture.edges.clone()).map_err(|err| {
        TestCaseError::fail(format!(
            "stepper construction failed: {err} ({})",
            fixture.context()
        ))
    })
}

/// Advances until complete, checking the step counter after every call.
pub(super) fn run_to_completion(
    stepper: &mut Stepper,
    fixture: &GraphFixture,
) -> Result<RunTrace, TestCaseError> {
    let mut records = Vec::new();
    // The sort step plus one step per edge.
    let budget = fixture.edges.len() + 1;

    while !stepper.is_complete() {
        if records.len() >= budget {
            return Err(TestCaseError::fail(format!(
                "stepper did not complete within {budget} calls ({})",
                fixture.context()
            )));
        }
        let before = stepper.step();
        let outcome = stepper.advance().map_err(|err| {
            TestCaseError::fail(format!("advance failed: {err} ({})", fixture.context()))
        })?;
        check_step_increment(before, stepper.step(), fixture)?;
        records.push(StepRecord {
            step: stepper.step(),
            outcome,
            explanation: stepper.explanation(),
            tree_len: stepper.mst_edges().len(),
        });
    }

    Ok(RunTrace {
        records,
        sorted_edges: stepper.edges().to_vec(),
        mst_edges: stepper.mst_edges().to_vec(),
        final_step: stepper.step(),
        component_count: stepper.component_count(),
    })
}

fn check_step_increment(before: usize, after: usize, fixture: &GraphFixture) -> TestCaseResult {
    if after == before + 1 {
        Ok(())
    } else {
        Err(TestCaseError::fail(format!(
            "step moved from {before} to {after}; expected exactly one ({})",
            fixture.context()
        )))
    }
}
