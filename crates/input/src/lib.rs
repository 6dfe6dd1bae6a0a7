//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`corsi_types::GameAction`]; mouse taps are
//! resolved by the view's hit test, which knows where blocks were drawn.

pub mod map;

pub use corsi_types as types;

pub use map::{handle_key_event, should_quit};
