use ndarray::Array2;
use rand::SeedableRng;
use rand::rngs::SmallRng;

use super::*;

/// Uniform without-replacement sampler over the flattened index space,
/// equivalent to a partial Fisher-Yates shuffle. Seeded so layouts can be
/// reproduced.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RandomSampler {
    seed: u64,
}

impl RandomSampler {
    pub const fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }
}

impl MineSampler for RandomSampler {
    fn sample(self, config: BoardConfig) -> MineLayout {
        let side = config.side() as usize;
        let mut rng = SmallRng::seed_from_u64(self.seed);

        let mut mask = Array2::default((side, side));
        let picks = rand::seq::index::sample(
            &mut rng,
            config.total_cells() as usize,
            config.mines() as usize,
        );
        for flat in picks {
            mask[[flat / side, flat % side]] = true;
        }

        let layout = MineLayout::from_mask(config.side(), mask);
        if layout.mine_count() != config.mines() {
            log::warn!(
                "sampled {} mines, config asked for {}",
                layout.mine_count(),
                config.mines()
            );
        }
        layout
    }
}
