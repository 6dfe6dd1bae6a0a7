//! Plain-data snapshot of the observable state surface.
//!
//! Everything a rendering collaborator needs for one frame, with no
//! references back into the engine. `Copy` throughout, so callers can keep
//! one snapshot and overwrite it in place each frame.

use crate::error_log::LEVEL_SPAN;
use crate::layout::Position;
use corsi_types::{GameStatus, Mode, ATTEMPTS_PER_LEVEL, MAX_BLOCKS, START_LEVEL};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameSnapshot {
    pub status: GameStatus,
    pub mode: Mode,
    pub level: u8,
    /// 1-based attempt index for display.
    pub attempt: u8,
    pub attempts_per_level: u8,
    pub response_len: u8,
    pub sequence_len: u8,
    pub seed: u32,
    pub layout: [Position; MAX_BLOCKS],
    /// Blocks present in the current response (shown as already tapped).
    pub tapped: [bool; MAX_BLOCKS],
    /// Failure counts indexed from `START_LEVEL`; zero means no entry.
    pub error_counts: [u32; LEVEL_SPAN],
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Levels with at least one failure, in ascending order.
    pub fn error_entries(&self) -> impl Iterator<Item = (u8, u32)> + '_ {
        self.error_counts
            .iter()
            .enumerate()
            .filter(|&(_, &c)| c > 0)
            .map(|(i, &c)| (START_LEVEL + i as u8, c))
    }

    pub fn has_errors(&self) -> bool {
        self.error_counts.iter().any(|&c| c > 0)
    }

    /// True while taps are being accepted.
    pub fn accepting_input(&self) -> bool {
        self.status == GameStatus::Input
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            status: GameStatus::Ready,
            mode: Mode::Forward,
            level: START_LEVEL,
            attempt: 1,
            attempts_per_level: ATTEMPTS_PER_LEVEL,
            response_len: 0,
            sequence_len: 0,
            seed: 0,
            layout: [Position::default(); MAX_BLOCKS],
            tapped: [false; MAX_BLOCKS],
            error_counts: [0; LEVEL_SPAN],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_snapshot() {
        let snap = GameSnapshot::default();
        assert_eq!(snap.status, GameStatus::Ready);
        assert_eq!(snap.level, START_LEVEL);
        assert_eq!(snap.attempt, 1);
        assert!(!snap.has_errors());
        assert!(!snap.accepting_input());
    }

    #[test]
    fn test_error_entries_map_indices_to_levels() {
        let mut snap = GameSnapshot::default();
        snap.error_counts[0] = 2;
        snap.error_counts[4] = 1;

        let entries: Vec<_> = snap.error_entries().collect();
        assert_eq!(entries, vec![(START_LEVEL, 2), (START_LEVEL + 4, 1)]);
        assert!(snap.has_errors());
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut snap = GameSnapshot::default();
        snap.level = 7;
        snap.tapped[3] = true;
        snap.error_counts[2] = 5;

        snap.clear();
        assert_eq!(snap, GameSnapshot::default());
    }
}
