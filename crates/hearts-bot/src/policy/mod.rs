mod avoidant;
mod random;
mod strategic;
mod tactical;

pub use avoidant::AvoidantPolicy;
pub use random::RandomPolicy;
pub use strategic::StrategicPolicy;
pub use tactical::TacticalPolicy;

use hearts_core::model::card::Card;
use hearts_core::model::hand::Hand;
use hearts_core::model::player::PlayerPosition;
use hearts_core::model::round::RoundState;
use hearts_core::model::suit::Suit;
use hearts_core::model::trick::Play;
use tracing::{Level, event};

/// Snapshot of the game state a chooser may consult. Policies are pure
/// functions of this snapshot plus the legal set; they never mutate game
/// state or see other hands.
#[derive(Debug, Clone, Copy)]
pub struct PolicyContext<'a> {
    pub seat: PlayerPosition,
    pub hand: &'a Hand,
    /// 1-based trick number within the deal.
    pub trick_number: u8,
    /// Suit the trick's opening card established; None when leading.
    pub lead_suit: Option<Suit>,
    /// True when this play opens the trick.
    pub is_leading: bool,
    pub hearts_broken: bool,
    /// Cards already on the table this trick, in play order.
    pub trick_plays: &'a [Play],
}

impl<'a> PolicyContext<'a> {
    pub fn from_round(seat: PlayerPosition, round: &'a RoundState) -> Self {
        let trick = round.current_trick();
        Self {
            seat,
            hand: round.hand(seat),
            trick_number: round.trick_number(),
            lead_suit: trick.lead_suit(),
            is_leading: trick.is_empty(),
            hearts_broken: round.hearts_broken(),
            trick_plays: trick.plays(),
        }
    }
}

/// One chooser: returns exactly one card from `legal`.
///
/// An empty legal set is a precondition violation (a legally-dealt hand
/// always has at least one legal card), so implementations panic on it
/// rather than guessing.
pub trait Policy: Send {
    fn difficulty(&self) -> BotDifficulty;

    fn choose_play(&mut self, legal: &[Card], ctx: &PolicyContext<'_>) -> Card;
}

/// The four bot tiers. A closed enumeration: adding a tier means adding a
/// variant and a chooser, not another branch of an integer cascade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BotDifficulty {
    Random,
    Avoidant,
    Tactical,
    Strategic,
}

impl BotDifficulty {
    pub const ALL: [BotDifficulty; 4] = [
        BotDifficulty::Random,
        BotDifficulty::Avoidant,
        BotDifficulty::Tactical,
        BotDifficulty::Strategic,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            BotDifficulty::Random => "random",
            BotDifficulty::Avoidant => "avoidant",
            BotDifficulty::Tactical => "tactical",
            BotDifficulty::Strategic => "strategic",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "random" | "0" => Some(BotDifficulty::Random),
            "avoidant" | "1" => Some(BotDifficulty::Avoidant),
            "tactical" | "2" => Some(BotDifficulty::Tactical),
            "strategic" | "3" => Some(BotDifficulty::Strategic),
            _ => None,
        }
    }
}

impl Default for BotDifficulty {
    fn default() -> Self {
        Self::Tactical
    }
}

/// Builds the chooser for a tier. `seed` makes the random tier
/// reproducible; the other tiers are deterministic and ignore it.
pub fn build_policy(difficulty: BotDifficulty, seed: Option<u64>) -> Box<dyn Policy> {
    match difficulty {
        BotDifficulty::Random => Box::new(RandomPolicy::new(seed)),
        BotDifficulty::Avoidant => Box::new(AvoidantPolicy),
        BotDifficulty::Tactical => Box::new(TacticalPolicy),
        BotDifficulty::Strategic => Box::new(StrategicPolicy),
    }
}

/// Lowest-ranked card; ties keep the earliest in input order.
pub(crate) fn lowest_by_rank(cards: &[Card]) -> Card {
    *cards
        .iter()
        .min_by_key(|card| card.rank)
        .expect("non-empty card set")
}

/// Highest-ranked card; ties keep the latest in input order.
pub(crate) fn highest_by_rank(cards: &[Card]) -> Card {
    *cards
        .iter()
        .max_by_key(|card| card.rank)
        .expect("non-empty card set")
}

pub(crate) fn log_play_decision(
    ctx: &PolicyContext<'_>,
    difficulty: BotDifficulty,
    legal: &[Card],
    chosen: Card,
    reason: &str,
) {
    if !tracing::enabled!(Level::DEBUG) {
        return;
    }

    event!(
        target: "hearts_bot::play",
        Level::DEBUG,
        seat = %ctx.seat,
        difficulty = difficulty.label(),
        trick = ctx.trick_number,
        leading = ctx.is_leading,
        hearts_broken = ctx.hearts_broken,
        legal_count = legal.len(),
        chosen = %chosen,
        reason,
    );
}
