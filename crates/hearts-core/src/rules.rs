use crate::model::card::Card;
use crate::model::hand::Hand;
use crate::model::suit::Suit;
use core::fmt;

/// Everything the validator needs to judge one proposed play. Assembled by
/// [`RoundState`](crate::model::round::RoundState) for live games and built
/// directly in tests.
#[derive(Debug, Clone, Copy)]
pub struct PlayContext<'a> {
    pub hand: &'a Hand,
    /// True during the first trick of the deal (trick number 1).
    pub is_first_trick: bool,
    /// Suit established by the trick's opening card; None while leading.
    pub lead_suit: Option<Suit>,
    /// True when the proposed card would open the trick.
    pub is_leading: bool,
    pub hearts_broken: bool,
}

/// Why a proposed card is not playable. Ordered as the rules are applied:
/// the first failing rule names the rejection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IllegalPlay {
    /// The card is not in the player's in-play bag.
    NotInHand,
    /// Penalty cards (any heart, the queen of spades) may not be played on
    /// the deal's first trick.
    PenaltyOnFirstTrick,
    /// The hand holds the lead suit, so the play must follow it.
    MustFollowSuit(Suit),
    /// Hearts cannot be led until broken. Following with a heart is always
    /// allowed and is itself what breaks hearts.
    HeartsNotBroken,
}

impl IllegalPlay {
    /// Stable reason tag for logs and prompts.
    pub const fn tag(self) -> &'static str {
        match self {
            IllegalPlay::NotInHand => "not-in-hand",
            IllegalPlay::PenaltyOnFirstTrick => "leads-penalty-round1",
            IllegalPlay::MustFollowSuit(_) => "must-follow-suit",
            IllegalPlay::HeartsNotBroken => "hearts-not-broken",
        }
    }
}

impl fmt::Display for IllegalPlay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IllegalPlay::NotInHand => write!(f, "you do not have that card"),
            IllegalPlay::PenaltyOnFirstTrick => {
                write!(f, "no hearts or the queen of spades on the first trick")
            }
            IllegalPlay::MustFollowSuit(suit) => {
                write!(f, "you hold {} and must follow suit", suit.name())
            }
            IllegalPlay::HeartsNotBroken => {
                write!(f, "hearts cannot be led until they have been broken")
            }
        }
    }
}

impl std::error::Error for IllegalPlay {}

/// Judges one proposed card against the active rules, first failure wins:
/// card held, first-trick penalty ban, follow-suit obligation, hearts-lead
/// gating. The forced 2C opening is not a rule here; the orchestrator plays
/// it without offering a choice.
pub fn validate(card: Card, ctx: &PlayContext<'_>) -> Result<(), IllegalPlay> {
    if !ctx.hand.contains(card) {
        return Err(IllegalPlay::NotInHand);
    }

    if ctx.is_first_trick && card.is_penalty() {
        return Err(IllegalPlay::PenaltyOnFirstTrick);
    }

    if let Some(lead) = ctx.lead_suit {
        if card.suit != lead && ctx.hand.has_suit(lead) {
            return Err(IllegalPlay::MustFollowSuit(lead));
        }
    }

    // A hand reduced to nothing but hearts may lead one even unbroken;
    // otherwise the leader would have no legal card at all.
    if ctx.is_leading
        && card.is_heart()
        && !ctx.hearts_broken
        && ctx.hand.iter().any(|held| !held.is_heart())
    {
        return Err(IllegalPlay::HeartsNotBroken);
    }

    Ok(())
}

/// The subset of the hand passing every rule, in hand order. Never empty for
/// a legally-dealt hand: when no card matches the lead suit, every card is
/// eligible.
pub fn legal_moves(ctx: &PlayContext<'_>) -> Vec<Card> {
    ctx.hand
        .iter()
        .copied()
        .filter(|&card| validate(card, ctx).is_ok())
        .collect()
}
