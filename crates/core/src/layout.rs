//! Layout module - randomized block placement with a separation constraint
//!
//! Every trial gets a fresh arrangement of `MAX_BLOCKS` blocks, drawn
//! uniformly inside the board margins and rejection-sampled so no two blocks
//! sit closer than the minimum distance. Placement is bounded: after a fixed
//! number of rejected candidates per slot the whole batch restarts with the
//! constraint relaxed, so generation terminates for any parameters.

use arrayvec::ArrayVec;

use crate::rng::SimpleRng;
use corsi_types::{
    BlockId, BLOCK_SIZE, BOARD_MARGIN, BOARD_SIZE, MAX_BLOCKS, MIN_BLOCK_DISTANCE,
};

/// Candidates drawn for one slot before the batch is restarted relaxed.
const PLACEMENT_ATTEMPTS_PER_BLOCK: u32 = 256;

/// Factor applied to the minimum distance on each relaxation round.
const RELAX_FACTOR: f32 = 0.5;

/// Relaxed distances below this are treated as no constraint at all.
const RELAX_FLOOR: f32 = 1.0;

/// One block position for the current trial.
///
/// Immutable once generated; the whole set is replaced at every trial start.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub id: BlockId,
    pub x: f32,
    pub y: f32,
}

impl Position {
    /// Euclidean distance to another position.
    pub fn distance_to(&self, other: &Position) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

impl Default for Position {
    fn default() -> Self {
        Self {
            id: 0,
            x: BOARD_MARGIN,
            y: BOARD_MARGIN,
        }
    }
}

/// Placement parameters, all in board units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutParams {
    pub count: usize,
    pub board_size: f32,
    pub block_size: f32,
    pub margin: f32,
    pub min_distance: f32,
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self {
            count: MAX_BLOCKS,
            board_size: BOARD_SIZE,
            block_size: BLOCK_SIZE,
            margin: BOARD_MARGIN,
            min_distance: MIN_BLOCK_DISTANCE,
        }
    }
}

impl LayoutParams {
    /// Upper coordinate bound: `board_size - block_size - margin`.
    fn coord_max(&self) -> f32 {
        self.board_size - self.block_size - self.margin
    }
}

/// Generate a full batch of non-overlapping positions.
///
/// Candidates are drawn uniformly from `[margin, board_size - block_size -
/// margin]` on both axes and accepted only when at least `min_distance` away
/// from every previously accepted position in the batch. When a slot
/// exhausts its candidate budget the batch restarts with the distance
/// halved; below [`RELAX_FLOOR`] every candidate is accepted, so the loop
/// always terminates.
///
/// No shared state is touched beyond advancing `rng`.
pub fn generate_layout(rng: &mut SimpleRng, params: &LayoutParams) -> ArrayVec<Position, MAX_BLOCKS> {
    let mut min_distance = params.min_distance;
    loop {
        if let Some(positions) = try_place_all(rng, params, min_distance) {
            return positions;
        }
        min_distance *= RELAX_FACTOR;
        if min_distance < RELAX_FLOOR {
            min_distance = 0.0;
        }
    }
}

/// Attempt one whole batch under a fixed separation distance.
///
/// Returns `None` when any slot runs out of candidates.
fn try_place_all(
    rng: &mut SimpleRng,
    params: &LayoutParams,
    min_distance: f32,
) -> Option<ArrayVec<Position, MAX_BLOCKS>> {
    let lo = params.margin;
    let hi = params.coord_max();
    let mut positions: ArrayVec<Position, MAX_BLOCKS> = ArrayVec::new();

    // Capped at capacity: the batch storage is fixed-size.
    for id in 0..params.count.min(MAX_BLOCKS) {
        let mut placed = false;

        for _ in 0..PLACEMENT_ATTEMPTS_PER_BLOCK {
            let candidate = Position {
                id: id as BlockId,
                x: rng.next_f32_range(lo, hi),
                y: rng.next_f32_range(lo, hi),
            };

            if positions
                .iter()
                .all(|p| p.distance_to(&candidate) >= min_distance)
            {
                positions.push(candidate);
                placed = true;
                break;
            }
        }

        if !placed {
            return None;
        }
    }

    Some(positions)
}
