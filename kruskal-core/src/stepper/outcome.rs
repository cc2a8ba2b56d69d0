//! What a single call to [`crate::Stepper::advance`] did.

use std::fmt;

use crate::graph::Edge;

/// Result of one stepper transition.
///
/// The [`fmt::Display`] form is the human-readable explanation shown to the
/// learner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StepOutcome {
    /// The edges were sorted ascending by weight.
    Sorted,
    /// The edge joined two components and was added to the tree.
    Accepted(Edge),
    /// The edge joined a component to itself and was skipped.
    Skipped(Edge),
    /// Every edge had already been decided.
    Finished,
}

impl StepOutcome {
    /// Returns the edge this outcome decided, if any.
    #[must_use]
    pub const fn edge(&self) -> Option<Edge> {
        match self {
            Self::Accepted(edge) | Self::Skipped(edge) => Some(*edge),
            Self::Sorted | Self::Finished => None,
        }
    }

    /// Returns a short machine-readable label for logs and transcripts.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Sorted => "sorted",
            Self::Accepted(_) => "accepted",
            Self::Skipped(_) => "skipped",
            Self::Finished => "finished",
        }
    }
}

impl fmt::Display for StepOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sorted => f.write_str("First, we sort all edges by weight in ascending order."),
            Self::Accepted(edge) => write!(
                f,
                "Adding edge ({} - {}) with weight {} to the MST.",
                edge.from(),
                edge.to(),
                edge.weight()
            ),
            Self::Skipped(edge) => write!(
                f,
                "Skipping edge ({} - {}) to avoid creating a cycle.",
                edge.from(),
                edge.to()
            ),
            Self::Finished => f.write_str(
                "The algorithm is complete. We have found the Minimum Spanning Tree!",
            ),
        }
    }
}
