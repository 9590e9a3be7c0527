use super::{BotDifficulty, Policy, PolicyContext, highest_by_rank, log_play_decision, lowest_by_rank};
use hearts_core::model::card::Card;
use hearts_core::model::rank::Rank;
use hearts_core::model::suit::Suit;

/// Tier 2: duck just under the winning card when following, dump the
/// highest card when safely off-suit, lead low otherwise.
pub struct TacticalPolicy;

/// Shared with the strategic tier, which runs the same logic over a
/// narrowed candidate set.
pub(crate) fn tactical_choice(
    candidates: &[Card],
    ctx: &PolicyContext<'_>,
) -> (Card, &'static str) {
    assert!(
        !candidates.is_empty(),
        "policy requires a non-empty legal set"
    );

    if let Some(lead) = ctx.lead_suit {
        if !ctx.is_leading && !ctx.hand.has_suit(lead) {
            // Cannot win the trick, so shed the most dangerous card.
            return (highest_by_rank(candidates), "void_dump_high");
        }

        // Following suit: the highest card that still loses to the current
        // winner wastes the least value; holding only winners, take the
        // trick as cheaply as possible.
        let top_played = highest_in_suit_played(ctx, lead);
        let duckers: Vec<Card> = candidates
            .iter()
            .copied()
            .filter(|card| card.suit == lead && Some(card.rank) < top_played)
            .collect();
        if duckers.is_empty() {
            (lowest_by_rank(candidates), "forced_take_low")
        } else {
            (highest_by_rank(&duckers), "duck_under")
        }
    } else {
        (lowest_by_rank(candidates), "lead_low")
    }
}

fn highest_in_suit_played(ctx: &PolicyContext<'_>, lead: Suit) -> Option<Rank> {
    ctx.trick_plays
        .iter()
        .filter(|play| play.card.suit == lead)
        .map(|play| play.card.rank)
        .max()
}

impl Policy for TacticalPolicy {
    fn difficulty(&self) -> BotDifficulty {
        BotDifficulty::Tactical
    }

    fn choose_play(&mut self, legal: &[Card], ctx: &PolicyContext<'_>) -> Card {
        let (chosen, reason) = tactical_choice(legal, ctx);
        log_play_decision(ctx, self.difficulty(), legal, chosen, reason);
        chosen
    }
}

#[cfg(test)]
mod tests {
    use super::TacticalPolicy;
    use crate::policy::{Policy, PolicyContext};
    use hearts_core::model::card::Card;
    use hearts_core::model::hand::Hand;
    use hearts_core::model::player::PlayerPosition;
    use hearts_core::model::rank::Rank;
    use hearts_core::model::suit::Suit;
    use hearts_core::model::trick::Play;

    fn play(seat: PlayerPosition, card: Card) -> Play {
        Play { seat, card }
    }

    #[test]
    fn void_in_the_lead_suit_dumps_the_highest_card() {
        let legal = [
            Card::new(Rank::Four, Suit::Hearts),
            Card::new(Rank::King, Suit::Spades),
            Card::new(Rank::Nine, Suit::Clubs),
        ];
        let hand = Hand::with_cards(legal.to_vec());
        let plays = [play(PlayerPosition::North, Card::new(Rank::Ten, Suit::Diamonds))];
        let ctx = PolicyContext {
            seat: PlayerPosition::East,
            hand: &hand,
            trick_number: 6,
            lead_suit: Some(Suit::Diamonds),
            is_leading: false,
            hearts_broken: false,
            trick_plays: &plays,
        };
        assert_eq!(
            TacticalPolicy.choose_play(&legal, &ctx),
            Card::new(Rank::King, Suit::Spades)
        );
    }

    #[test]
    fn leading_plays_the_lowest_card() {
        let legal = [
            Card::new(Rank::Jack, Suit::Clubs),
            Card::new(Rank::Six, Suit::Diamonds),
            Card::new(Rank::Ace, Suit::Spades),
        ];
        let hand = Hand::with_cards(legal.to_vec());
        let ctx = PolicyContext {
            seat: PlayerPosition::South,
            hand: &hand,
            trick_number: 3,
            lead_suit: None,
            is_leading: true,
            hearts_broken: false,
            trick_plays: &[],
        };
        assert_eq!(
            TacticalPolicy.choose_play(&legal, &ctx),
            Card::new(Rank::Six, Suit::Diamonds)
        );
    }

    #[test]
    fn following_ducks_just_under_the_current_winner() {
        let legal = [
            Card::new(Rank::Two, Suit::Diamonds),
            Card::new(Rank::Nine, Suit::Diamonds),
            Card::new(Rank::King, Suit::Diamonds),
        ];
        let hand = Hand::with_cards(legal.to_vec());
        let plays = [
            play(PlayerPosition::North, Card::new(Rank::Ten, Suit::Diamonds)),
            play(PlayerPosition::East, Card::new(Rank::Three, Suit::Diamonds)),
        ];
        let ctx = PolicyContext {
            seat: PlayerPosition::South,
            hand: &hand,
            trick_number: 7,
            lead_suit: Some(Suit::Diamonds),
            is_leading: false,
            hearts_broken: true,
            trick_plays: &plays,
        };
        // Nine is the highest card still under the ten; the king would win.
        assert_eq!(
            TacticalPolicy.choose_play(&legal, &ctx),
            Card::new(Rank::Nine, Suit::Diamonds)
        );
    }

    #[test]
    fn holding_only_winners_takes_the_trick_cheaply() {
        let legal = [
            Card::new(Rank::Queen, Suit::Clubs),
            Card::new(Rank::Ace, Suit::Clubs),
        ];
        let hand = Hand::with_cards(legal.to_vec());
        let plays = [play(PlayerPosition::West, Card::new(Rank::Five, Suit::Clubs))];
        let ctx = PolicyContext {
            seat: PlayerPosition::North,
            hand: &hand,
            trick_number: 9,
            lead_suit: Some(Suit::Clubs),
            is_leading: false,
            hearts_broken: true,
            trick_plays: &plays,
        };
        assert_eq!(
            TacticalPolicy.choose_play(&legal, &ctx),
            Card::new(Rank::Queen, Suit::Clubs)
        );
    }

    #[test]
    fn off_suit_cards_never_count_as_duckers() {
        // Void-in-lead-suit handling needs the hand, not just the legal set:
        // the hand holds a club, so this is a genuine follow.
        let legal = [
            Card::new(Rank::King, Suit::Clubs),
        ];
        let hand = Hand::with_cards(vec![
            Card::new(Rank::King, Suit::Clubs),
            Card::new(Rank::Two, Suit::Hearts),
        ]);
        let plays = [play(PlayerPosition::East, Card::new(Rank::Four, Suit::Clubs))];
        let ctx = PolicyContext {
            seat: PlayerPosition::West,
            hand: &hand,
            trick_number: 8,
            lead_suit: Some(Suit::Clubs),
            is_leading: false,
            hearts_broken: false,
            trick_plays: &plays,
        };
        assert_eq!(
            TacticalPolicy.choose_play(&legal, &ctx),
            Card::new(Rank::King, Suit::Clubs)
        );
    }
}
