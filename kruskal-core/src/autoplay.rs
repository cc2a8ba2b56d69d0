//! Timed auto-advance for a [`Stepper`].
//!
//! The stepper itself has no notion of time; it only exposes the auto-play
//! flag. [`AutoPlayer`] is the scheduling collaborator: while the flag is set
//! it waits a fixed delay, advances once, and hands the new state to an
//! observer before scheduling the next wait. The chain ends as soon as the
//! flag is cleared, either by the observer pausing playback or by the stepper
//! itself once it reports completion.

use std::time::Duration;

use tracing::{Span, field, info, instrument};

use crate::{
    error::Result,
    stepper::{StepOutcome, Stepper},
};

/// Delay between automatic steps used when none is configured.
pub const DEFAULT_AUTO_PLAY_DELAY: Duration = Duration::from_millis(1500);

/// Waits between automatic steps.
///
/// Implementations decide how time passes; tests substitute a pacer that
/// records delays without sleeping.
pub trait Pacer {
    /// Blocks until `delay` has elapsed.
    fn wait(&mut self, delay: Duration);
}

/// [`Pacer`] that sleeps the current thread.
#[derive(Clone, Copy, Debug, Default)]
pub struct ThreadPacer;

impl Pacer for ThreadPacer {
    fn wait(&mut self, delay: Duration) {
        std::thread::sleep(delay);
    }
}

/// Advances a stepper on a fixed cadence while its auto-play flag is set.
///
/// # Examples
/// ```
/// use std::time::Duration;
///
/// use kruskal_core::{AutoPlayer, Graph, Pacer, Stepper};
///
/// struct Instant;
/// impl Pacer for Instant {
///     fn wait(&mut self, _delay: Duration) {}
/// }
///
/// let mut stepper = Stepper::new(Graph::demo())?;
/// stepper.set_auto_playing(true);
/// let advances = AutoPlayer::new().run(&mut stepper, &mut Instant, |_, _| {})?;
/// assert_eq!(advances, 8);
/// assert!(stepper.is_complete());
/// assert!(!stepper.is_auto_playing());
/// # Ok::<(), kruskal_core::StepperError>(())
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct AutoPlayer {
    delay: Duration,
}

impl Default for AutoPlayer {
    fn default() -> Self {
        Self {
            delay: DEFAULT_AUTO_PLAY_DELAY,
        }
    }
}

impl AutoPlayer {
    /// Creates a player using [`DEFAULT_AUTO_PLAY_DELAY`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the delay between steps.
    #[must_use]
    pub const fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Returns the configured delay between steps.
    #[must_use]
    #[rustfmt::skip]
    pub const fn delay(&self) -> Duration { self.delay }

    /// Runs the self-rescheduling step chain and returns the number of
    /// advances performed.
    ///
    /// Does nothing when auto-play is not armed on entry. The observer runs
    /// after every advance and may clear the flag to pause playback; pausing
    /// never interrupts a wait already in progress, but the extra advance it
    /// would cost is harmless because completion is absorbing.
    ///
    /// # Errors
    ///
    /// Propagates the first error returned by [`Stepper::advance`]; the chain
    /// stops at that point.
    #[instrument(
        name = "autoplay.run",
        err,
        skip_all,
        fields(delay_ms = field::Empty, advances = field::Empty),
    )]
    pub fn run<P, F>(&self, stepper: &mut Stepper, pacer: &mut P, mut observer: F) -> Result<usize>
    where
        P: Pacer + ?Sized,
        F: FnMut(&mut Stepper, StepOutcome),
    {
        let span = Span::current();
        span.record("delay_ms", field::display(self.delay.as_millis()));

        let mut advances = 0_usize;
        while stepper.is_auto_playing() {
            pacer.wait(self.delay);
            let outcome = stepper.advance()?;
            advances = advances.saturating_add(1);
            observer(stepper, outcome);
        }

        span.record("advances", advances);
        info!(
            advances,
            step = stepper.step(),
            complete = stepper.is_complete(),
            "auto-play stopped"
        );
        Ok(advances)
    }
}
