//! Step-wise Kruskal minimum spanning tree engine.
//!
//! [`Stepper`] walks Kruskal's algorithm one observable step at a time so a
//! learner can follow every decision: the first step sorts the edges, each
//! later step accepts or skips one edge, and every step leaves a
//! human-readable explanation behind. [`AutoPlayer`] advances a stepper on a
//! fixed cadence while its auto-play flag is armed.
//!
//! # Metrics
//!
//! When the `metrics` feature is enabled the stepper emits:
//!
//! - `kruskal_edges_accepted` (counter)
//! - `kruskal_edges_skipped` (counter)
//! - `kruskal_resets` (counter)
#![cfg_attr(docsrs, feature(doc_cfg))]

mod autoplay;
mod error;
mod graph;
mod stepper;

pub use crate::{
    autoplay::{AutoPlayer, DEFAULT_AUTO_PLAY_DELAY, Pacer, ThreadPacer},
    error::{Result, StepperError, StepperErrorCode},
    graph::{Edge, Graph, Node, Position},
    stepper::{AutoPlayAction, Phase, StepAction, StepOutcome, Stepper},
};
