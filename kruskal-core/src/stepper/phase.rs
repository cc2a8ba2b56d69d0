//! Explicit stepper states and their transitions.

/// Where a [`crate::Stepper`] is in its run.
///
/// The first call to [`crate::Stepper::advance`] sorts the edges and counts as
/// a step, so while running the reported step is always one more than the
/// sorted index of the edge that the next call examines.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Phase {
    /// No call has been made since construction or the last reset.
    NotStarted,
    /// Edges are sorted and `next` is the sorted index still to examine.
    Running {
        /// Index into the sorted edge order of the next edge to examine.
        next: usize,
    },
    /// Every edge has been examined.
    Complete,
}

impl Phase {
    /// State entered once the edges have been sorted.
    pub(crate) const fn after_sort(edge_count: usize) -> Self {
        Self::resume_at(0, edge_count)
    }

    /// State entered once the edge at sorted index `examined` was decided.
    pub(crate) const fn after_edge(examined: usize, edge_count: usize) -> Self {
        Self::resume_at(examined.saturating_add(1), edge_count)
    }

    const fn resume_at(next: usize, edge_count: usize) -> Self {
        if next < edge_count {
            Self::Running { next }
        } else {
            Self::Complete
        }
    }

    /// Returns the step counter for this state.
    ///
    /// # Examples
    /// ```
    /// use kruskal_core::Phase;
    ///
    /// assert_eq!(Phase::NotStarted.step(6), 0);
    /// assert_eq!(Phase::Running { next: 2 }.step(6), 3);
    /// assert_eq!(Phase::Complete.step(6), 7);
    /// ```
    #[must_use]
    pub const fn step(self, edge_count: usize) -> usize {
        match self {
            Self::NotStarted => 0,
            Self::Running { next } => next.saturating_add(1),
            Self::Complete => edge_count.saturating_add(1),
        }
    }

    /// Returns the label a driver shows for its primary control.
    #[must_use]
    pub const fn action(self) -> StepAction {
        match self {
            Self::NotStarted => StepAction::Start,
            Self::Running { .. } => StepAction::NextStep,
            Self::Complete => StepAction::Done,
        }
    }
}

/// What the next manual step would do, for labelling a step control.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum StepAction {
    /// The next step sorts the edges.
    Start,
    /// The next step examines an edge.
    NextStep,
    /// All edges are decided; further steps only repeat the completion message.
    Done,
}

impl StepAction {
    /// Returns the control label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Start => "Start",
            Self::NextStep => "Next Step",
            Self::Done => "Done",
        }
    }
}

/// What the auto-play toggle would do, for labelling that control.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AutoPlayAction {
    /// Auto-play is idle; the toggle arms it.
    AutoPlay,
    /// Auto-play is armed; the toggle pauses it.
    Pause,
}

impl AutoPlayAction {
    /// Returns the action offered for the given auto-play flag.
    #[must_use]
    pub const fn for_flag(auto_playing: bool) -> Self {
        if auto_playing { Self::Pause } else { Self::AutoPlay }
    }

    /// Returns the control label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::AutoPlay => "Auto Play",
            Self::Pause => "Pause",
        }
    }
}
