//! Timed replay of a recorded search.
//!
//! The [`Player`] owns the step log produced by a search and applies it one frame per delay tick,
//! maintaining the overlay (visiting cell, settled cells, goal, path trail) that the editor
//! screen renders on top of the board. Once every step is applied the final frame is held on
//! screen until the user clears it or edits the board.

use std::time::{Duration, Instant};

use crate::{grid::Pos, search::Outcome, search::Step};

/// Default delay between animation frames, in milliseconds.
pub(crate) const DEFAULT_STEP_DELAY_MS: u64 = 100;

/// Amount by which the `[` and `]` keys change the frame delay, in milliseconds.
pub(crate) const DELAY_INCREMENT_MS: u64 = 25;

/// Upper bound for the frame delay, in milliseconds.
const MAX_STEP_DELAY_MS: u64 = 1000;

/// Replay state for one recorded search run.
pub(crate) struct Player {
    /// The step log being replayed.
    steps: Vec<Step>,
    /// Index of the next step to apply.
    current_index: usize,
    /// When the previous frame was applied.
    last_update: Instant,
    /// Delay between frames.
    delay: Duration,
    /// Cell currently being examined, if the last frame was a visit.
    pub(crate) visiting: Option<Pos>,
    /// Cells settled so far.
    pub(crate) visited: Vec<Pos>,
    /// The goal cell, once the replay reaches it.
    pub(crate) goal: Option<Pos>,
    /// Path cells traced so far, in end-to-start order.
    pub(crate) trail: Vec<Pos>,
}

impl Default for Player {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEFAULT_STEP_DELAY_MS))
    }
}

impl Player {
    /// Creates an idle player with the given frame delay.
    pub(crate) fn new(delay: Duration) -> Self {
        Self {
            steps: Vec::new(),
            current_index: 0,
            last_update: Instant::now(),
            delay,
            visiting: None,
            visited: Vec::new(),
            goal: None,
            trail: Vec::new(),
        }
    }

    /// Installs a fresh search outcome and rewinds the replay to its beginning.
    pub(crate) fn load(&mut self, outcome: Outcome) {
        self.steps = outcome.steps;
        self.rewind();
    }

    /// Rewinds the replay without discarding the step log.
    fn rewind(&mut self) {
        self.current_index = 0;
        self.visiting = None;
        self.visited.clear();
        self.goal = None;
        self.trail.clear();
        self.last_update = Instant::now();
    }

    /// Discards the step log and the overlay entirely.
    pub(crate) fn clear(&mut self) {
        self.steps.clear();
        self.rewind();
    }

    /// Returns whether there is nothing to replay or draw.
    pub(crate) fn is_idle(&self) -> bool {
        self.steps.is_empty()
    }

    /// Returns whether every recorded step has been applied.
    pub(crate) fn finished(&self) -> bool {
        self.current_index >= self.steps.len()
    }

    /// Returns the current frame delay in milliseconds, for the status line.
    pub(crate) const fn delay_ms(&self) -> u128 {
        self.delay.as_millis()
    }

    /// Sets the frame delay, clamped to the supported range.
    pub(crate) fn set_delay(&mut self, delay: Duration) {
        self.delay = delay.min(Duration::from_millis(MAX_STEP_DELAY_MS));
    }

    /// Shortens the frame delay by one increment.
    pub(crate) fn faster(&mut self) {
        self.delay = self
            .delay
            .saturating_sub(Duration::from_millis(DELAY_INCREMENT_MS));
    }

    /// Lengthens the frame delay by one increment.
    pub(crate) fn slower(&mut self) {
        self.set_delay(self.delay + Duration::from_millis(DELAY_INCREMENT_MS));
    }

    /// Applies the next frame once the delay has elapsed.
    ///
    /// Called every pass of the event loop; does nothing while idle, between ticks, or after the
    /// final frame, so the finished overlay stays on screen.
    pub(crate) fn update(&mut self) {
        if self.finished() || self.last_update.elapsed() < self.delay {
            return;
        }
        self.last_update = Instant::now();
        self.advance();
    }

    /// Applies every remaining frame at once.
    pub(crate) fn fast_forward(&mut self) {
        while !self.finished() {
            self.advance();
        }
    }

    /// Applies the frame at the cursor and moves the cursor forward.
    fn advance(&mut self) {
        if let Some(step) = self.steps.get(self.current_index) {
            match *step {
                Step::Visit(pos) => self.visiting = Some(pos),
                Step::Settle(pos) => {
                    self.visiting = None;
                    self.visited.push(pos);
                }
                Step::Goal(pos) => {
                    self.visiting = None;
                    self.goal = Some(pos);
                }
                Step::Trace(pos) => self.trail.push(pos),
            }
        }
        self.current_index += 1;
    }
}
