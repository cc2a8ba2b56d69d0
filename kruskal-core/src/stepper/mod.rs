//! Step-wise Kruskal minimum spanning tree construction.
//!
//! A [`Stepper`] performs exactly one unit of work per [`Stepper::advance`]
//! call: the first call sorts the edges, each later call decides one edge, and
//! once every edge is decided further calls only repeat the completion
//! message. Component membership lives in a disjoint set that persists across
//! calls and is rebuilt by [`Stepper::reset`].

mod outcome;
mod phase;
mod union_find;

use std::cmp::Ordering;

use tracing::{debug, instrument};

use crate::{
    error::{Result, StepperError},
    graph::{Edge, Graph, Node},
};

pub use self::outcome::StepOutcome;
pub use self::phase::{AutoPlayAction, Phase, StepAction};

use self::union_find::DisjointSet;

/// Drives Kruskal's algorithm one observable step at a time.
///
/// # Examples
/// ```
/// use kruskal_core::{Graph, StepOutcome, Stepper};
///
/// let mut stepper = Stepper::new(Graph::demo())?;
/// assert_eq!(stepper.advance()?, StepOutcome::Sorted);
/// while !stepper.is_complete() {
///     stepper.advance()?;
/// }
/// assert_eq!(stepper.mst_edges().len(), 4);
/// assert_eq!(stepper.total_weight(), 12.0);
/// # Ok::<(), kruskal_core::StepperError>(())
/// ```
#[derive(Clone, Debug)]
pub struct Stepper {
    nodes: Vec<Node>,
    initial_edges: Vec<Edge>,
    edges: Vec<Edge>,
    mst_edges: Vec<Edge>,
    components: DisjointSet,
    phase: Phase,
    last_outcome: Option<StepOutcome>,
    auto_playing: bool,
}

impl Stepper {
    /// Creates a stepper over `graph` in the [`Phase::NotStarted`] state.
    ///
    /// # Errors
    ///
    /// Returns the first structural problem reported by [`Graph::validate`].
    #[instrument(
        name = "stepper.new",
        err,
        skip(graph),
        fields(nodes = graph.node_count(), edges = graph.edges().len()),
    )]
    pub fn new(graph: Graph) -> Result<Self> {
        graph.validate()?;
        let (nodes, edges) = graph.into_parts();
        let components = DisjointSet::new(nodes.len());
        Ok(Self {
            nodes,
            initial_edges: edges.clone(),
            edges,
            mst_edges: Vec::new(),
            components,
            phase: Phase::NotStarted,
            last_outcome: None,
            auto_playing: false,
        })
    }

    /// Creates a stepper over `node_count` unplaced nodes.
    ///
    /// # Errors
    ///
    /// See [`Stepper::new`].
    pub fn with_node_count(node_count: usize, edges: Vec<Edge>) -> Result<Self> {
        Self::new(Graph::with_node_count(node_count, edges)?)
    }

    /// Performs the next unit of work and records its explanation.
    ///
    /// # Errors
    ///
    /// Returns [`StepperError::InvariantViolation`] when the edge under
    /// examination references a node the disjoint set does not track. The
    /// stepper is left unchanged in that case.
    #[instrument(
        name = "stepper.advance",
        level = "debug",
        err,
        skip(self),
        fields(step = self.step()),
    )]
    pub fn advance(&mut self) -> Result<StepOutcome> {
        let outcome = match self.phase {
            Phase::NotStarted => self.sort_edges(),
            Phase::Running { next } => self.decide_edge(next)?,
            Phase::Complete => {
                self.auto_playing = false;
                StepOutcome::Finished
            }
        };
        self.last_outcome = Some(outcome);
        Ok(outcome)
    }

    fn sort_edges(&mut self) -> StepOutcome {
        // Weights are finite after validation, so every pair is comparable.
        self.edges.sort_by(|left, right| {
            left.weight()
                .partial_cmp(&right.weight())
                .unwrap_or(Ordering::Equal)
        });
        self.phase = Phase::after_sort(self.edges.len());
        debug!(edges = self.edges.len(), "edges sorted by weight");
        StepOutcome::Sorted
    }

    fn decide_edge(&mut self, next: usize) -> Result<StepOutcome> {
        let edge = self
            .edges
            .get(next)
            .copied()
            .ok_or(StepperError::InvariantViolation {
                invariant: "running cursor must point at a sorted edge",
                index: next,
                bound: self.edges.len(),
            })?;

        let from_root = self.components.find(edge.from())?;
        let to_root = self.components.find(edge.to())?;

        let outcome = if from_root == to_root {
            debug!(
                from = edge.from(),
                to = edge.to(),
                "edge skipped; endpoints already connected"
            );
            #[cfg(feature = "metrics")]
            metrics::counter!("kruskal_edges_skipped").increment(1);
            StepOutcome::Skipped(edge)
        } else {
            self.components.union(from_root, to_root)?;
            self.mst_edges.push(edge);
            debug!(
                from = edge.from(),
                to = edge.to(),
                weight = edge.weight(),
                accepted = self.mst_edges.len(),
                "edge accepted"
            );
            #[cfg(feature = "metrics")]
            metrics::counter!("kruskal_edges_accepted").increment(1);
            StepOutcome::Accepted(edge)
        };

        self.phase = Phase::after_edge(next, self.edges.len());
        Ok(outcome)
    }

    /// Returns every run field to its initial value and stops auto-play.
    #[instrument(name = "stepper.reset", level = "debug", skip(self), fields(step = self.step()))]
    pub fn reset(&mut self) {
        self.edges.clone_from(&self.initial_edges);
        self.mst_edges.clear();
        self.components = DisjointSet::new(self.nodes.len());
        self.phase = Phase::NotStarted;
        self.last_outcome = None;
        self.auto_playing = false;
        #[cfg(feature = "metrics")]
        metrics::counter!("kruskal_resets").increment(1);
    }

    /// Arms or disarms auto-play. Never advances by itself.
    pub fn set_auto_playing(&mut self, auto_playing: bool) {
        if self.auto_playing != auto_playing {
            debug!(auto_playing, "auto-play toggled");
        }
        self.auto_playing = auto_playing;
    }

    /// Flips the auto-play flag and returns its new value.
    pub fn toggle_auto_play(&mut self) -> bool {
        self.set_auto_playing(!self.auto_playing);
        self.auto_playing
    }

    /// Returns the current explicit state.
    #[must_use]
    #[rustfmt::skip]
    pub const fn phase(&self) -> Phase { self.phase }

    /// Returns the step counter: 0 before sorting, one past the edge count
    /// once complete.
    #[must_use]
    pub fn step(&self) -> usize {
        self.phase.step(self.edges.len())
    }

    /// Returns `true` once `step() > edge_count()`.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.step() > self.edge_count()
    }

    /// Returns the label for the next manual step.
    #[must_use]
    pub const fn next_action(&self) -> StepAction {
        self.phase.action()
    }

    /// Returns `true` when a manual step is allowed: auto-play is idle and
    /// edges remain to be decided.
    #[must_use]
    pub fn can_step(&self) -> bool {
        !self.auto_playing && !self.is_complete()
    }

    /// Returns what the auto-play toggle would do.
    #[must_use]
    pub const fn auto_play_action(&self) -> AutoPlayAction {
        AutoPlayAction::for_flag(self.auto_playing)
    }

    /// Returns the nodes in identifier order.
    #[must_use]
    #[rustfmt::skip]
    pub fn nodes(&self) -> &[Node] { &self.nodes }

    /// Returns the number of nodes.
    #[must_use]
    #[rustfmt::skip]
    pub fn node_count(&self) -> usize { self.nodes.len() }

    /// Returns the edges in their current order: as supplied until the first
    /// step, sorted ascending by weight afterwards.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[Edge] { &self.edges }

    /// Returns the number of edges.
    #[must_use]
    #[rustfmt::skip]
    pub fn edge_count(&self) -> usize { self.edges.len() }

    /// Returns the accepted edges in acceptance order.
    #[must_use]
    #[rustfmt::skip]
    pub fn mst_edges(&self) -> &[Edge] { &self.mst_edges }

    /// Returns the edge the next call will examine, if any.
    #[must_use]
    pub fn current_edge(&self) -> Option<&Edge> {
        match self.phase {
            Phase::Running { next } => self.edges.get(next),
            Phase::NotStarted | Phase::Complete => None,
        }
    }

    /// Returns `true` when an accepted edge joins `a` and `b`.
    #[must_use]
    pub fn is_in_tree(&self, a: usize, b: usize) -> bool {
        self.mst_edges.iter().any(|edge| edge.connects(a, b))
    }

    /// Returns the summed weight of the accepted edges.
    #[must_use]
    pub fn total_weight(&self) -> f64 {
        self.mst_edges.iter().map(Edge::weight).sum()
    }

    /// Returns `true` when the accepted edges already connect `a` and `b`.
    ///
    /// # Errors
    ///
    /// Returns [`StepperError::InvariantViolation`] when either node is out of
    /// range.
    pub fn same_component(&self, a: usize, b: usize) -> Result<bool> {
        self.components.same_component(a, b)
    }

    /// Returns the number of connected components formed so far.
    #[must_use]
    pub const fn component_count(&self) -> usize {
        self.components.components()
    }

    /// Returns the outcome of the most recent call, if any.
    #[must_use]
    #[rustfmt::skip]
    pub const fn last_outcome(&self) -> Option<StepOutcome> { self.last_outcome }

    /// Returns the explanation of the most recent call, or an empty string
    /// before the first call.
    #[must_use]
    pub fn explanation(&self) -> String {
        self.last_outcome
            .map(|outcome| outcome.to_string())
            .unwrap_or_default()
    }

    /// Returns whether a driver should keep scheduling steps.
    #[must_use]
    #[rustfmt::skip]
    pub const fn is_auto_playing(&self) -> bool { self.auto_playing }
}

#[cfg(test)]
mod property;
