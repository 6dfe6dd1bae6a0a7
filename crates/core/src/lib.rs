//! Core test logic module - pure, deterministic, and testable
//!
//! This module contains all the Corsi test rules, state management, and
//! progression logic. It has **zero dependencies** on UI, timing, or I/O,
//! making it:
//!
//! - **Deterministic**: Same seed produces identical layouts and sequences
//! - **Testable**: Every transition is a plain function call, no rendering
//!   harness needed
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//! - **Allocation-free**: Trial state lives in fixed-capacity arrays
//!
//! # Module Structure
//!
//! - [`layout`]: randomized block placement with a minimum-separation
//!   constraint and bounded, self-relaxing rejection sampling
//! - [`game_state`]: the engine state machine (Ready, Playing, Input,
//!   Finished) with response evaluation and level progression
//! - [`schedule`]: the explicit presentation plan the engine hands to a
//!   timing driver
//! - [`error_log`]: per-level failure counts for the whole run
//! - [`rng`]: seeded LCG shared by layout and sequence generation
//! - [`snapshot`]: plain-data view of the observable state surface
//!
//! # Test Rules
//!
//! - Trials start at a sequence length of 3 and cap at 9 (board capacity)
//! - Three attempts per level; the level advances when they are exhausted,
//!   regardless of correctness, and the run finishes after level 9
//! - Reverse mode stores the reversed sequence at generation time, so the
//!   response is always compared against the sequence exactly as stored
//! - Failed attempts accumulate per level and survive until a full reset;
//!   the forward/reverse mode survives even that
//!
//! # Example
//!
//! ```
//! use corsi_core::GameState;
//! use corsi_types::GameStatus;
//!
//! let mut test = GameState::new(12345);
//! test.start();
//!
//! // A driver would execute test.presentation() here.
//! test.finish_presentation();
//! assert_eq!(test.status(), GameStatus::Input);
//!
//! // Reproduce the sequence.
//! for id in test.sequence().to_vec() {
//!     test.tap(id);
//! }
//! assert_eq!(test.status(), GameStatus::Ready);
//! assert_eq!(test.attempts(), 1);
//! ```

pub mod error_log;
pub mod game_state;
pub mod layout;
pub mod rng;
pub mod schedule;
pub mod snapshot;

pub use corsi_types as types;

// Re-export commonly used types for convenience
pub use error_log::ErrorLog;
pub use game_state::GameState;
pub use layout::{generate_layout, LayoutParams, Position};
pub use rng::SimpleRng;
pub use schedule::{PresentStep, Schedule};
pub use snapshot::GameSnapshot;
