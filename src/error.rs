use thiserror::Error;

use crate::types::Coord;

/// Rejected construction parameters. No board is returned on failure.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("board side must be at least 1")]
    InvalidSize,
    #[error("mine count must be between 1 and side * side - 1")]
    InvalidMineCount,
}

/// Coordinate outside `[0, side)` on either axis. This is a caller contract
/// violation, propagated rather than clamped so coordinate-mapping bugs
/// surface in testing.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
#[error("coordinates ({0}, {1}) are outside the board")]
pub struct OutOfBounds(pub Coord, pub Coord);
