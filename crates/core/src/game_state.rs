//! Game state module - the test engine state machine
//!
//! Owns the complete trial state (level, attempts, mode, layout, sequence,
//! response, error log) and drives the status machine:
//!
//! ```text
//! Ready --start--> Playing --finish_presentation--> Input --evaluate--> Ready
//!                                                           \--> Finished
//! ```
//!
//! All transitions are triggered by sequential external calls; actions that
//! do not apply to the current status are ignored without effect, which is
//! the engine's entire error-handling contract. The engine never sleeps:
//! presentation timing lives in the [`Schedule`](crate::schedule::Schedule)
//! it emits, and the driver signals completion explicitly.

use arrayvec::ArrayVec;

use crate::error_log::ErrorLog;
use crate::layout::{generate_layout, LayoutParams, Position};
use crate::rng::SimpleRng;
use crate::schedule::Schedule;
use crate::snapshot::GameSnapshot;
use corsi_types::{
    BlockId, GameAction, GameStatus, Mode, ATTEMPTS_PER_LEVEL, MAX_BLOCKS, MAX_LEVEL, START_LEVEL,
};

/// Complete test state.
///
/// The mode deliberately sits outside the trial bundle that
/// [`GameState::reset`] rebuilds: it survives resets until explicitly
/// toggled.
#[derive(Debug, Clone)]
pub struct GameState {
    rng: SimpleRng,
    layout_params: LayoutParams,
    /// Survives reset; flipped only by `toggle_mode`.
    mode: Mode,
    status: GameStatus,
    /// Sequence length of the current trial, `START_LEVEL..=MAX_LEVEL`.
    level: u8,
    /// Completed trials at the current level, always `< ATTEMPTS_PER_LEVEL`.
    attempts: u8,
    layout: ArrayVec<Position, MAX_BLOCKS>,
    sequence: ArrayVec<BlockId, MAX_BLOCKS>,
    response: ArrayVec<BlockId, MAX_BLOCKS>,
    error_log: ErrorLog,
}

impl GameState {
    /// Create a fresh test with the given RNG seed.
    ///
    /// A layout is generated immediately so the board is displayable before
    /// the first trial starts.
    pub fn new(seed: u32) -> Self {
        let layout_params = LayoutParams::default();
        let mut rng = SimpleRng::new(seed);
        let layout = generate_layout(&mut rng, &layout_params);

        Self {
            rng,
            layout_params,
            mode: Mode::Forward,
            status: GameStatus::Ready,
            level: START_LEVEL,
            attempts: 0,
            layout,
            sequence: ArrayVec::new(),
            response: ArrayVec::new(),
            error_log: ErrorLog::new(),
        }
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    pub fn attempts(&self) -> u8 {
        self.attempts
    }

    /// Attempt index for display, 1-based.
    pub fn attempt_display(&self) -> u8 {
        self.attempts + 1
    }

    pub fn layout(&self) -> &[Position] {
        &self.layout
    }

    pub fn sequence(&self) -> &[BlockId] {
        &self.sequence
    }

    pub fn response(&self) -> &[BlockId] {
        &self.response
    }

    pub fn error_log(&self) -> &ErrorLog {
        &self.error_log
    }

    /// Current RNG state (for replaying a run).
    pub fn seed(&self) -> u32 {
        self.rng.seed()
    }

    /// Begin a trial. Only honored in `Ready`.
    ///
    /// Regenerates the layout, clears the previous response, samples a new
    /// sequence of `level` distinct blocks, and enters `Playing`.
    pub fn start(&mut self) -> bool {
        if self.status != GameStatus::Ready {
            return false;
        }

        self.layout = generate_layout(&mut self.rng, &self.layout_params);
        self.response.clear();
        self.generate_sequence();
        self.status = GameStatus::Playing;
        true
    }

    /// The presentation plan for the current sequence.
    ///
    /// The driver runs the steps in order and then calls
    /// [`finish_presentation`](Self::finish_presentation).
    pub fn presentation(&self) -> Schedule {
        Schedule::for_sequence(&self.sequence)
    }

    /// Signal that every sequence element has been shown.
    ///
    /// The only transition out of `Playing`.
    pub fn finish_presentation(&mut self) -> bool {
        if self.status != GameStatus::Playing {
            return false;
        }
        self.status = GameStatus::Input;
        true
    }

    /// Record one tapped block. Only honored in `Input`.
    ///
    /// Duplicate taps are legal input and are appended as-is; they only
    /// matter to the comparison once the response is complete. When the
    /// response reaches the sequence length it is evaluated immediately.
    pub fn tap(&mut self, id: BlockId) -> bool {
        if self.status != GameStatus::Input {
            return false;
        }
        if (id as usize) >= MAX_BLOCKS {
            return false;
        }

        self.response.push(id);
        if self.response.len() == self.sequence.len() {
            self.evaluate();
        }
        true
    }

    /// Flip the response order for subsequent trials.
    ///
    /// Takes effect on the next generated sequence only; the current trial,
    /// level, attempts, and error log are untouched.
    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
    }

    /// Return the whole trial state to its initial values.
    ///
    /// Level back to `START_LEVEL`, attempts and error log cleared, fresh
    /// layout, status `Ready`. The mode and the RNG stream are preserved.
    pub fn reset(&mut self) {
        self.level = START_LEVEL;
        self.attempts = 0;
        self.sequence.clear();
        self.response.clear();
        self.status = GameStatus::Ready;
        self.error_log.clear();
        self.layout = generate_layout(&mut self.rng, &self.layout_params);
    }

    /// Apply a subject action; returns whether anything changed.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Start => self.start(),
            GameAction::Tap(id) => self.tap(id),
            GameAction::ToggleMode => {
                self.toggle_mode();
                true
            }
            GameAction::Reset => {
                self.reset();
                true
            }
        }
    }

    /// Write the observable display surface into an existing snapshot.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.status = self.status;
        out.mode = self.mode;
        out.level = self.level;
        out.attempt = self.attempt_display();
        out.attempts_per_level = ATTEMPTS_PER_LEVEL;
        out.response_len = self.response.len() as u8;
        out.sequence_len = self.sequence.len() as u8;
        out.seed = self.rng.seed();

        for (slot, p) in out.layout.iter_mut().zip(self.layout.iter()) {
            *slot = *p;
        }
        for (i, flag) in out.tapped.iter_mut().enumerate() {
            *flag = self.response.contains(&(i as BlockId));
        }
        out.error_counts = *self.error_log.counts();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Sample `level` distinct block ids without replacement.
    ///
    /// Swap-remove over an indexable pool keeps each pick O(1). Reverse mode
    /// stores the reversed order, so evaluation always compares against the
    /// sequence exactly as stored.
    fn generate_sequence(&mut self) {
        let mut pool: ArrayVec<BlockId, MAX_BLOCKS> = (0..MAX_BLOCKS as u8).collect();
        self.sequence.clear();

        for _ in 0..self.level {
            let i = self.rng.next_range(pool.len() as u32) as usize;
            self.sequence.push(pool.swap_remove(i));
        }

        if self.mode == Mode::Reverse {
            self.sequence.reverse();
        }
    }

    /// Judge a completed response and advance progression.
    ///
    /// Order-sensitive comparison against the stored sequence. Attempts are
    /// counted regardless of correctness; once they reach
    /// `ATTEMPTS_PER_LEVEL` the counter resets and the level advances, or
    /// the run finishes when already at `MAX_LEVEL`.
    fn evaluate(&mut self) {
        let correct = self.response.as_slice() == self.sequence.as_slice();
        if !correct {
            self.error_log.record(self.level);
        }

        self.attempts += 1;
        if self.attempts >= ATTEMPTS_PER_LEVEL {
            self.attempts = 0;
            if self.level < MAX_LEVEL {
                self.level += 1;
                self.status = GameStatus::Ready;
            } else {
                self.status = GameStatus::Finished;
            }
        } else {
            self.status = GameStatus::Ready;
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
