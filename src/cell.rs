use serde::{Deserialize, Serialize};

/// Reveal/flag status of a single cell, mutated only through board
/// operations. `Revealed` is terminal; `Hidden` and `Flagged` toggle into
/// each other.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellStatus {
    #[default]
    Hidden,
    Revealed,
    Flagged,
}

impl CellStatus {
    pub const fn is_unrevealed(self) -> bool {
        matches!(self, Self::Hidden | Self::Flagged)
    }
}

/// Per-cell rendering code shared by the live and post-game views.
///
/// `Flag` and `Mine` intentionally map to the same numeral 11: `Flag` only
/// occurs in the live view and `Mine` only in the final view.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CellCode {
    /// Revealed safe cell with its adjacent-mine count, 0 through 8.
    Adjacent(u8),
    /// Mine uncovered by a losing reveal. Numeral 9.
    ExplodedMine,
    /// Cell not shown to the player. Numeral 10.
    Hidden,
    /// Flagged cell in the live view. Numeral 11.
    Flag,
    /// Any mine in the final view, whatever its status. Numeral 11.
    Mine,
}

impl CellCode {
    pub const fn as_u8(self) -> u8 {
        match self {
            Self::Adjacent(count) => count,
            Self::ExplodedMine => 9,
            Self::Hidden => 10,
            Self::Flag | Self::Mine => 11,
        }
    }

    /// Live-view projection used while play is ongoing.
    pub(crate) const fn live(is_mine: bool, adjacent: u8, status: CellStatus) -> Self {
        match status {
            CellStatus::Flagged => Self::Flag,
            CellStatus::Hidden => Self::Hidden,
            CellStatus::Revealed => {
                if is_mine {
                    Self::ExplodedMine
                } else {
                    Self::Adjacent(adjacent)
                }
            }
        }
    }

    /// Post-game projection, exposing every mine regardless of status.
    pub(crate) const fn post_game(is_mine: bool, adjacent: u8, status: CellStatus) -> Self {
        if is_mine {
            Self::Mine
        } else if matches!(status, CellStatus::Revealed) {
            Self::Adjacent(adjacent)
        } else {
            Self::Hidden
        }
    }
}

impl From<CellCode> for u8 {
    fn from(code: CellCode) -> Self {
        code.as_u8()
    }
}
