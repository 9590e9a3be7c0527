use super::{BotDifficulty, Policy, PolicyContext, log_play_decision, lowest_by_rank};
use hearts_core::model::card::Card;

/// Tier 1: always the lowest-ranked legal card, hoping to duck every trick.
/// Rank ties keep the earliest card in the legal set's order.
pub struct AvoidantPolicy;

impl Policy for AvoidantPolicy {
    fn difficulty(&self) -> BotDifficulty {
        BotDifficulty::Avoidant
    }

    fn choose_play(&mut self, legal: &[Card], ctx: &PolicyContext<'_>) -> Card {
        assert!(!legal.is_empty(), "policy requires a non-empty legal set");
        let chosen = lowest_by_rank(legal);
        log_play_decision(ctx, self.difficulty(), legal, chosen, "lowest_rank");
        chosen
    }
}

#[cfg(test)]
mod tests {
    use super::AvoidantPolicy;
    use crate::policy::{Policy, PolicyContext};
    use hearts_core::model::card::Card;
    use hearts_core::model::hand::Hand;
    use hearts_core::model::player::PlayerPosition;
    use hearts_core::model::rank::Rank;
    use hearts_core::model::suit::Suit;

    #[test]
    fn picks_the_minimum_rank() {
        let legal = [
            Card::new(Rank::Queen, Suit::Clubs),
            Card::new(Rank::Three, Suit::Clubs),
            Card::new(Rank::King, Suit::Clubs),
        ];
        let hand = Hand::with_cards(legal.to_vec());
        let ctx = PolicyContext {
            seat: PlayerPosition::West,
            hand: &hand,
            trick_number: 2,
            lead_suit: Some(Suit::Clubs),
            is_leading: false,
            hearts_broken: false,
            trick_plays: &[],
        };
        let chosen = AvoidantPolicy.choose_play(&legal, &ctx);
        assert_eq!(chosen, Card::new(Rank::Three, Suit::Clubs));
    }

    #[test]
    fn rank_ties_resolve_to_the_first_listed() {
        let legal = [
            Card::new(Rank::Four, Suit::Diamonds),
            Card::new(Rank::Four, Suit::Spades),
        ];
        let hand = Hand::with_cards(legal.to_vec());
        let ctx = PolicyContext {
            seat: PlayerPosition::North,
            hand: &hand,
            trick_number: 5,
            lead_suit: None,
            is_leading: true,
            hearts_broken: true,
            trick_plays: &[],
        };
        assert_eq!(
            AvoidantPolicy.choose_play(&legal, &ctx),
            Card::new(Rank::Four, Suit::Diamonds)
        );
    }
}
