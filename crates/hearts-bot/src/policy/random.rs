use super::{BotDifficulty, Policy, PolicyContext, log_play_decision};
use hearts_core::model::card::Card;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

/// Tier 0: uniform choice over the legal set. Seedable so simulations and
/// tests replay identically.
pub struct RandomPolicy {
    rng: StdRng,
}

impl RandomPolicy {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { rng }
    }
}

impl Policy for RandomPolicy {
    fn difficulty(&self) -> BotDifficulty {
        BotDifficulty::Random
    }

    fn choose_play(&mut self, legal: &[Card], ctx: &PolicyContext<'_>) -> Card {
        let chosen = *legal
            .choose(&mut self.rng)
            .expect("policy requires a non-empty legal set");
        log_play_decision(ctx, self.difficulty(), legal, chosen, "uniform");
        chosen
    }
}
