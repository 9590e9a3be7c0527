use crate::model::deck::Deck;
use crate::model::player::PlayerPosition;
use crate::model::round::{DealError, RoundState};
use crate::model::score::{DealScoring, ScoreBoard};
use rand::SeedableRng;
use rand::rngs::StdRng;

pub const DEFAULT_TARGET_SCORE: u32 = 100;

/// Match-level state: cumulative scores, the deal in progress, and the RNG
/// every deal's shuffle is drawn from. The match ends once any cumulative
/// score reaches the target after a deal has been scored.
#[derive(Debug, Clone)]
pub struct MatchState {
    scores: ScoreBoard,
    current_round: RoundState,
    deal_number: u32,
    target_score: u32,
    rng: StdRng,
    seed: u64,
}

impl MatchState {
    pub fn new(target_score: u32) -> Result<Self, DealError> {
        Self::with_seed(rand::random(), target_score)
    }

    pub fn with_seed(seed: u64, target_score: u32) -> Result<Self, DealError> {
        let mut rng = StdRng::seed_from_u64(seed);
        let current_round = RoundState::deal(&Deck::shuffled(&mut rng))?;
        Ok(Self {
            scores: ScoreBoard::new(),
            current_round,
            deal_number: 1,
            target_score,
            rng,
            seed,
        })
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn deal_number(&self) -> u32 {
        self.deal_number
    }

    pub fn target_score(&self) -> u32 {
        self.target_score
    }

    pub fn scores(&self) -> &ScoreBoard {
        &self.scores
    }

    pub fn round(&self) -> &RoundState {
        &self.current_round
    }

    pub fn round_mut(&mut self) -> &mut RoundState {
        &mut self.current_round
    }

    /// Scores the finished deal and, unless the match is over, reshuffles
    /// and deals the next one. The fresh deal re-locates the two of clubs
    /// holder as its opening leader and starts with hearts unbroken and
    /// empty won bags.
    pub fn finish_deal(&mut self) -> Result<DealScoring, DealError> {
        let scoring = self.scores.apply_deal(self.current_round.penalty_totals());

        if !self.is_over() {
            self.deal_number += 1;
            self.current_round = RoundState::deal(&Deck::shuffled(&mut self.rng))?;
        }

        Ok(scoring)
    }

    pub fn is_over(&self) -> bool {
        self.scores.max_score() >= self.target_score
    }

    pub fn winners(&self) -> Vec<PlayerPosition> {
        self.scores.winners()
    }
}
