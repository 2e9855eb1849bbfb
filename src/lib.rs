//! Minesweeper board engine: mine placement, worklist flood-fill reveal,
//! flag tracking, and win/loss detection, exposed as a pure in-process
//! state machine.

use core::ops::BitOr;

use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use board::*;
pub use cell::*;
pub use error::*;
pub use sampler::*;
pub use types::{CellCount, Coord, Coord2};

use types::{moore_neighbors, nd, square};

mod board;
mod cell;
mod error;
mod sampler;
mod types;

/// Validated construction parameters: a square side length and a mine count
/// strictly between zero and the cell total.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    side: Coord,
    mines: CellCount,
}

impl BoardConfig {
    pub fn new(side: Coord, mines: CellCount) -> Result<Self, ConfigError> {
        if side == 0 {
            return Err(ConfigError::InvalidSize);
        }
        if mines == 0 || mines >= square(side) {
            return Err(ConfigError::InvalidMineCount);
        }
        Ok(Self { side, mines })
    }

    pub const fn side(&self) -> Coord {
        self.side
    }

    pub const fn mines(&self) -> CellCount {
        self.mines
    }

    pub const fn total_cells(&self) -> CellCount {
        square(self.side)
    }

    pub const fn safe_cells(&self) -> CellCount {
        self.total_cells() - self.mines
    }

    /// Stock difficulty density: 12% of the cell count, clamped to `3..=50`
    /// and capped below the cell total.
    pub fn default_mines(side: Coord) -> CellCount {
        let density = f32::from(square(side)) * 0.12;
        (density as CellCount)
            .clamp(3, 50)
            .min(square(side).saturating_sub(1))
    }
}

/// Immutable mine placement with adjacency counts precomputed once after
/// placement. Shared by the engine and both rendering projections.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MineLayout {
    mines: Array2<bool>,
    adjacency: Array2<u8>,
    mine_count: CellCount,
    side: Coord,
}

impl MineLayout {
    pub(crate) fn from_mask(side: Coord, mines: Array2<bool>) -> Self {
        let mine_count = mines.iter().filter(|&&is_mine| is_mine).count() as CellCount;

        let mut adjacency = Array2::zeros(mines.raw_dim());
        for y in 0..side {
            for x in 0..side {
                if mines[nd((x, y))] {
                    continue;
                }
                adjacency[nd((x, y))] = moore_neighbors((x, y), side)
                    .iter()
                    .filter(|&&pos| mines[nd(pos)])
                    .count() as u8;
            }
        }

        Self {
            mines,
            adjacency,
            mine_count,
            side,
        }
    }

    /// Layout with mines at exactly the given positions. Duplicates collapse;
    /// intended for tests and replays that need deterministic placement.
    pub fn from_mine_coords(side: Coord, coords: &[Coord2]) -> Result<Self, OutOfBounds> {
        let mut mask = Array2::default((side as usize, side as usize));
        for &(x, y) in coords {
            if x >= side || y >= side {
                return Err(OutOfBounds(x, y));
            }
            mask[nd((x, y))] = true;
        }
        Ok(Self::from_mask(side, mask))
    }

    pub const fn side(&self) -> Coord {
        self.side
    }

    pub const fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub const fn total_cells(&self) -> CellCount {
        square(self.side)
    }

    pub const fn safe_cells(&self) -> CellCount {
        self.total_cells() - self.mine_count
    }

    pub fn is_mine(&self, coords: Coord2) -> bool {
        self.mines[nd(coords)]
    }

    pub fn adjacent_mines(&self, coords: Coord2) -> u8 {
        self.adjacency[nd(coords)]
    }

    pub fn check_bounds(&self, (x, y): Coord2) -> Result<Coord2, OutOfBounds> {
        if x < self.side && y < self.side {
            Ok((x, y))
        } else {
            Err(OutOfBounds(x, y))
        }
    }
}

/// Result of a reveal. `Exploded` is the loss signal; the engine stores no
/// terminal state and stays queryable, so the caller remembers game over and
/// switches to the final view.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    Unchanged,
    Safe,
    Exploded,
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::Unchanged)
    }
}

impl BitOr for RevealOutcome {
    type Output = RevealOutcome;

    /// Combines per-cell outcomes by severity, for multi-cell reveals.
    fn bitor(self, rhs: Self) -> Self::Output {
        use RevealOutcome::*;
        match (self, rhs) {
            (Exploded, _) | (_, Exploded) => Exploded,
            (Safe, _) | (_, Safe) => Safe,
            (Unchanged, Unchanged) => Unchanged,
        }
    }
}

/// Result of a flag toggle.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FlagOutcome {
    Set,
    Cleared,
    /// Target was already revealed; revealed cells cannot carry flags.
    Ineffective,
}
