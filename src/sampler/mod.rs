use crate::*;

pub use random::RandomSampler;

mod random;

/// Placement strategy for a validated configuration. Injectable so hosts can
/// substitute seeded or scripted placement; fully fixed layouts come from
/// [`MineLayout::from_mine_coords`].
pub trait MineSampler {
    fn sample(self, config: BoardConfig) -> MineLayout;
}
