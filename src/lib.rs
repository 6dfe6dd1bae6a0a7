//! Terminal Corsi block-tapping test (workspace facade crate).
//!
//! This package keeps the `corsi_tui::{core,input,term,types}` public API
//! stable while the implementation lives in dedicated crates under `crates/`.

pub use corsi_core as core;
pub use corsi_input as input;
pub use corsi_term as term;
pub use corsi_types as types;
