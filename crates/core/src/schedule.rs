//! Schedule module - explicit presentation timing
//!
//! The engine does not sleep. It emits a flat list of timed steps (rest,
//! then highlight, per sequence element) and a driver executes them in
//! order, reporting back with `finish_presentation`. This keeps the core
//! synchronous and lets tests inspect the exact presentation contract.

use arrayvec::ArrayVec;

use corsi_types::{BlockId, HIGHLIGHT_MS, MAX_BLOCKS, REST_MS};

/// One timed presentation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresentStep {
    /// All blocks idle for the given duration (milliseconds).
    Rest(u32),
    /// Exactly one block highlighted for the given duration (milliseconds).
    Highlight(BlockId, u32),
}

impl PresentStep {
    /// Duration of this step in milliseconds.
    pub fn duration_ms(&self) -> u32 {
        match *self {
            PresentStep::Rest(ms) => ms,
            PresentStep::Highlight(_, ms) => ms,
        }
    }

    /// The highlighted block, if any.
    pub fn highlight(&self) -> Option<BlockId> {
        match *self {
            PresentStep::Rest(_) => None,
            PresentStep::Highlight(id, _) => Some(id),
        }
    }
}

/// The full presentation plan for one trial.
///
/// Steps run strictly in order with no overlap, no skipping, and no
/// cancellation once started.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Schedule {
    steps: ArrayVec<PresentStep, { 2 * MAX_BLOCKS }>,
}

impl Schedule {
    /// Build the plan for a sequence: each element gets a rest gap followed
    /// by its highlight.
    pub fn for_sequence(sequence: &[BlockId]) -> Self {
        let mut steps = ArrayVec::new();
        for &id in sequence {
            steps.push(PresentStep::Rest(REST_MS));
            steps.push(PresentStep::Highlight(id, HIGHLIGHT_MS));
        }
        Self { steps }
    }

    pub fn steps(&self) -> &[PresentStep] {
        &self.steps
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Total wall time of the plan in milliseconds.
    pub fn total_ms(&self) -> u32 {
        self.steps.iter().map(|s| s.duration_ms()).sum()
    }
}
