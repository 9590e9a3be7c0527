use super::tactical::tactical_choice;
use super::{BotDifficulty, Policy, PolicyContext, log_play_decision};
use hearts_core::model::card::Card;
use hearts_core::model::rank::Rank;
use hearts_core::model::suit::Suit;

/// Tier 3: tier 2 plus priority overrides, applied to the legal set before
/// any tactical reasoning. In order: dump the queen of spades whenever it
/// cannot cost us the trick, shed hearts whenever not forced to follow a
/// non-heart lead, fire the ace of clubs early. Whatever narrowing the
/// overrides leave behind falls through to the tactical chooser.
pub struct StrategicPolicy;

fn queen_is_safe(legal: &[Card], ctx: &PolicyContext<'_>) -> bool {
    if legal.len() == 1 {
        return true;
    }
    match ctx.lead_suit {
        Some(Suit::Spades) => ctx
            .trick_plays
            .iter()
            .any(|play| play.card.suit == Suit::Spades && play.card.rank > Rank::Queen),
        _ => true,
    }
}

impl Policy for StrategicPolicy {
    fn difficulty(&self) -> BotDifficulty {
        BotDifficulty::Strategic
    }

    fn choose_play(&mut self, legal: &[Card], ctx: &PolicyContext<'_>) -> Card {
        assert!(!legal.is_empty(), "policy requires a non-empty legal set");

        let mut working: Vec<Card> = legal.to_vec();

        if working.contains(&Card::QUEEN_OF_SPADES) {
            if queen_is_safe(&working, ctx) {
                log_play_decision(
                    ctx,
                    self.difficulty(),
                    legal,
                    Card::QUEEN_OF_SPADES,
                    "queen_dump",
                );
                return Card::QUEEN_OF_SPADES;
            }
            // Spades are led and the queen could still win the trick.
            working.retain(|&card| card != Card::QUEEN_OF_SPADES);
        }

        if ctx.lead_suit != Some(Suit::Hearts) && working.iter().any(|card| card.is_heart()) {
            working.retain(|card| card.is_heart());
        }

        if working.contains(&Card::ACE_OF_CLUBS) {
            log_play_decision(ctx, self.difficulty(), legal, Card::ACE_OF_CLUBS, "ace_of_clubs");
            return Card::ACE_OF_CLUBS;
        }

        let (chosen, reason) = tactical_choice(&working, ctx);
        log_play_decision(ctx, self.difficulty(), legal, chosen, reason);
        chosen
    }
}
