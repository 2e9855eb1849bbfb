use std::collections::VecDeque;
use std::ops::BitOr;

use ndarray::Array2;
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::types::{moore_neighbors, nd};
use crate::*;

/// Authoritative Minesweeper board: mine layout plus per-cell status.
///
/// The board is a single mutable aggregate with no internal synchronization;
/// a concurrent host must serialize access to each instance. Loss is signaled
/// through [`RevealOutcome::Exploded`] and not stored, so the board stays
/// fully queryable afterwards for the final view.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    layout: MineLayout,
    status: Array2<CellStatus>,
    revealed: CellCount,
    flagged: CellCount,
}

impl Board {
    /// Board with `mines` mines placed uniformly at random from entropy.
    pub fn new(side: Coord, mines: CellCount) -> Result<Self, ConfigError> {
        let config = BoardConfig::new(side, mines)?;
        Ok(Self::with_sampler(config, RandomSampler::from_entropy()))
    }

    pub fn with_sampler(config: BoardConfig, sampler: impl MineSampler) -> Self {
        Self::from_layout(sampler.sample(config))
    }

    /// Board over a prebuilt layout. Every cell starts `Hidden`.
    pub fn from_layout(layout: MineLayout) -> Self {
        let side = layout.side() as usize;
        Self {
            layout,
            status: Array2::default((side, side)),
            revealed: 0,
            flagged: 0,
        }
    }

    pub fn side(&self) -> Coord {
        self.layout.side()
    }

    pub fn mine_count(&self) -> CellCount {
        self.layout.mine_count()
    }

    pub fn layout(&self) -> &MineLayout {
        &self.layout
    }

    pub fn status_at(&self, coords: Coord2) -> Result<CellStatus, OutOfBounds> {
        let coords = self.layout.check_bounds(coords)?;
        Ok(self.status[nd(coords)])
    }

    /// Mines minus flags; negative when the player has over-flagged.
    pub fn mines_left(&self) -> i32 {
        i32::from(self.layout.mine_count()) - i32::from(self.flagged)
    }

    /// True once every safe cell is revealed. Flags on mines are irrelevant.
    pub fn is_completed(&self) -> bool {
        self.revealed == self.layout.safe_cells()
    }

    /// Reveals the cell at `coords`.
    ///
    /// Already-revealed and flagged targets are left untouched (`Unchanged`);
    /// a flag must be cleared before its cell can be revealed. Uncovering a
    /// mine returns `Exploded` with no cascade. A safe reveal returns `Safe`
    /// and, for a zero-adjacency cell, flood-fills its connected zero region
    /// plus the numbered border around it.
    pub fn reveal(&mut self, coords: Coord2) -> Result<RevealOutcome, OutOfBounds> {
        let coords = self.layout.check_bounds(coords)?;
        Ok(self.reveal_cell(coords))
    }

    /// On a revealed numbered cell whose flagged neighbors match its number,
    /// reveals all remaining hidden neighbors. A misplaced flag can therefore
    /// uncover a mine. Any other target is `Unchanged`.
    pub fn chord_reveal(&mut self, coords: Coord2) -> Result<RevealOutcome, OutOfBounds> {
        let coords = self.layout.check_bounds(coords)?;

        if self.status[nd(coords)] != CellStatus::Revealed || self.layout.is_mine(coords) {
            return Ok(RevealOutcome::Unchanged);
        }
        let number = self.layout.adjacent_mines(coords);
        if number == 0 || number != self.count_flagged_neighbors(coords) {
            return Ok(RevealOutcome::Unchanged);
        }

        Ok(moore_neighbors(coords, self.side())
            .into_iter()
            .map(|neighbor| self.reveal_cell(neighbor))
            .reduce(BitOr::bitor)
            .unwrap_or(RevealOutcome::Unchanged))
    }

    pub fn toggle_flag(&mut self, coords: Coord2) -> Result<FlagOutcome, OutOfBounds> {
        let coords = self.layout.check_bounds(coords)?;

        Ok(match self.status[nd(coords)] {
            CellStatus::Hidden => {
                self.status[nd(coords)] = CellStatus::Flagged;
                self.flagged += 1;
                FlagOutcome::Set
            }
            CellStatus::Flagged => {
                self.status[nd(coords)] = CellStatus::Hidden;
                self.flagged -= 1;
                FlagOutcome::Cleared
            }
            CellStatus::Revealed => FlagOutcome::Ineffective,
        })
    }

    /// Uncovers up to `count` uniformly chosen safe hidden cells without
    /// flood-fill, as a starting aid. Returns how many cells were revealed.
    pub fn reveal_hint<R: Rng + ?Sized>(&mut self, rng: &mut R, count: CellCount) -> CellCount {
        let side = self.side() as usize;
        let mut order: Vec<usize> = (0..self.layout.total_cells() as usize).collect();
        order.shuffle(rng);

        let mut revealed = 0;
        for flat in order {
            if revealed == count {
                break;
            }
            let coords = ((flat % side) as Coord, (flat / side) as Coord);
            if self.status[nd(coords)] == CellStatus::Hidden && !self.layout.is_mine(coords) {
                self.status[nd(coords)] = CellStatus::Revealed;
                self.revealed += 1;
                revealed += 1;
            }
        }
        revealed
    }

    /// Live-view code for one cell, per the 0-8/9/10/11 mapping.
    pub fn display_code(&self, coords: Coord2) -> Result<CellCode, OutOfBounds> {
        let coords = self.layout.check_bounds(coords)?;
        Ok(CellCode::live(
            self.layout.is_mine(coords),
            self.layout.adjacent_mines(coords),
            self.status[nd(coords)],
        ))
    }

    /// Post-game code for one cell, exposing all mines.
    pub fn final_code(&self, coords: Coord2) -> Result<CellCode, OutOfBounds> {
        let coords = self.layout.check_bounds(coords)?;
        Ok(CellCode::post_game(
            self.layout.is_mine(coords),
            self.layout.adjacent_mines(coords),
            self.status[nd(coords)],
        ))
    }

    fn reveal_cell(&mut self, coords: Coord2) -> RevealOutcome {
        match self.status[nd(coords)] {
            CellStatus::Revealed | CellStatus::Flagged => RevealOutcome::Unchanged,
            CellStatus::Hidden if self.layout.is_mine(coords) => {
                self.status[nd(coords)] = CellStatus::Revealed;
                RevealOutcome::Exploded
            }
            CellStatus::Hidden => {
                self.reveal_safe(coords);
                RevealOutcome::Safe
            }
        }
    }

    /// Reveals a known-safe hidden cell, expanding its zero-adjacency region
    /// with an explicit worklist. Marking cells revealed as they are queued
    /// doubles as the visited check, so each cell enters the frontier at most
    /// once and the traversal terminates on any finite grid.
    fn reveal_safe(&mut self, start: Coord2) {
        let side = self.side();

        self.status[nd(start)] = CellStatus::Revealed;
        self.revealed += 1;
        if self.layout.adjacent_mines(start) != 0 {
            return;
        }

        let mut frontier = VecDeque::from([start]);
        while let Some(coords) = frontier.pop_front() {
            for neighbor in moore_neighbors(coords, side) {
                if self.status[nd(neighbor)] != CellStatus::Hidden
                    || self.layout.is_mine(neighbor)
                {
                    continue;
                }
                self.status[nd(neighbor)] = CellStatus::Revealed;
                self.revealed += 1;
                if self.layout.adjacent_mines(neighbor) == 0 {
                    frontier.push_back(neighbor);
                }
            }
        }
    }

    fn count_flagged_neighbors(&self, coords: Coord2) -> u8 {
        moore_neighbors(coords, self.side())
            .iter()
            .filter(|&&pos| self.status[nd(pos)] == CellStatus::Flagged)
            .count() as u8
    }
}
