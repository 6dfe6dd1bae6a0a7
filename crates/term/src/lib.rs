//! Terminal rendering module.
//!
//! [`BoardView`] is a pure mapping from engine snapshots to a framebuffer
//! (unit-testable without a terminal); [`TerminalRenderer`] owns the real
//! terminal: raw mode, alternate screen, mouse capture, and frame flushing.

pub mod board_view;
pub mod fb;
pub mod renderer;

pub use corsi_core as core;
pub use corsi_types as types;

pub use board_view::{BoardView, Viewport};
pub use fb::{FrameBuffer, Style, TermCell};
pub use renderer::TerminalRenderer;
