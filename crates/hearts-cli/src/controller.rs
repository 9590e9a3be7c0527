use crate::display::{render_hand, score_table};
use crate::events::{EventSink, GameEvent};
use crate::input::InputProvider;
use crate::parse::{Command, Token, parse_token};
use anyhow::{Context, Result, anyhow, bail};
use hearts_bot::{Policy, PolicyContext};
use hearts_core::game::match_state::MatchState;
use hearts_core::model::card::Card;
use hearts_core::model::player::PlayerPosition;
use hearts_core::model::round::{PlayOutcome, RoundState};
use hearts_core::rules;

pub enum SeatController {
    Human,
    Bot(Box<dyn Policy>),
}

pub struct Seat {
    pub name: String,
    pub controller: SeatController,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchSummary {
    pub winners: Vec<PlayerPosition>,
    pub standings: [u32; 4],
    pub deals_played: u32,
}

/// Drives a match through its phases: deal, thirteen tricks of one play per
/// seat, score, redeal, until the target score is crossed. One seat acts at
/// a time; waiting on the human blocks the whole table.
pub struct MatchController {
    state: MatchState,
    names: [String; 4],
    controllers: [SeatController; 4],
    input: Box<dyn InputProvider>,
    sinks: Vec<Box<dyn EventSink>>,
}

impl MatchController {
    pub fn new(
        state: MatchState,
        seats: [Seat; 4],
        input: Box<dyn InputProvider>,
        sinks: Vec<Box<dyn EventSink>>,
    ) -> Self {
        let names = seats.each_ref().map(|seat| seat.name.clone());
        let controllers = seats.map(|seat| seat.controller);
        Self {
            state,
            names,
            controllers,
            input,
            sinks,
        }
    }

    pub fn state(&self) -> &MatchState {
        &self.state
    }

    pub fn run(&mut self) -> Result<MatchSummary> {
        loop {
            self.play_deal()?;

            let deal = self.state.deal_number();
            let scoring = self.state.finish_deal().context("starting the next deal")?;
            let totals = *self.state.scores().standings();
            self.emit(&GameEvent::DealScored {
                deal,
                deltas: scoring.deltas,
                totals,
                moon_shooter: scoring.moon_shooter,
            })?;

            if self.state.is_over() {
                let summary = MatchSummary {
                    winners: self.state.winners(),
                    standings: totals,
                    deals_played: deal,
                };
                self.emit(&GameEvent::MatchWon {
                    winners: summary.winners.clone(),
                    totals,
                    deals_played: deal,
                })?;
                return Ok(summary);
            }
        }
    }

    fn play_deal(&mut self) -> Result<()> {
        let deal = self.state.deal_number();

        // The holder of the two of clubs opens without being offered a
        // choice.
        let opening = self
            .state
            .round_mut()
            .open_first_trick()
            .map_err(|err| anyhow!("opening lead failed: {err}"))?;
        self.emit(&GameEvent::CardPlayed {
            deal,
            trick: 1,
            seat: opening.seat,
            card: opening.card,
        })?;

        while !self.state.round().is_complete() {
            self.play_turn(deal)?;
        }
        Ok(())
    }

    fn play_turn(&mut self, deal: u32) -> Result<()> {
        let seat = self.state.round().current_trick().expected_seat();
        let trick = self.state.round().trick_number();

        // A legally-dealt hand always leaves at least one legal card; an
        // empty set means the deal broke upstream.
        if self.state.round().legal_moves(seat).is_empty() {
            bail!("{seat} has no legal card; the deal is corrupt");
        }

        let card = if matches!(self.controllers[seat.index()], SeatController::Human) {
            self.human_card(seat)?
        } else {
            self.bot_card(seat)?
        };

        // Resolution consumes the trick, so collect its cards up front for
        // the trick-won event.
        let mut trick_cards: Vec<Card> = self.state.round().current_trick().cards().collect();
        trick_cards.push(card);

        let outcome = self.state.round_mut().play_card(seat, card).map_err(|err| {
            anyhow!(
                "{} produced an unplayable card {card}: {err}",
                self.names[seat.index()]
            )
        })?;
        self.emit(&GameEvent::CardPlayed {
            deal,
            trick,
            seat,
            card,
        })?;

        if let PlayOutcome::TrickCompleted { winner, penalties } = outcome {
            self.emit(&GameEvent::TrickWon {
                deal,
                trick,
                seat: winner,
                cards: trick_cards,
                penalties,
            })?;
        }
        Ok(())
    }

    /// Bots choose from the pre-filtered legal set and are never re-asked;
    /// an illegal bot card is an invariant break, not a prompt.
    fn bot_card(&mut self, seat: PlayerPosition) -> Result<Card> {
        let legal = self.state.round().legal_moves(seat);
        let ctx = PolicyContext::from_round(seat, self.state.round());
        let SeatController::Bot(policy) = &mut self.controllers[seat.index()] else {
            bail!("{seat} is not a bot seat");
        };
        Ok(policy.choose_play(&legal, &ctx))
    }

    fn human_card(&mut self, seat: PlayerPosition) -> Result<Card> {
        prompt_for_card(
            self.input.as_mut(),
            seat,
            &self.names,
            self.state.round(),
            self.state.scores().standings(),
        )
    }

    fn emit(&mut self, event: &GameEvent) -> Result<()> {
        for sink in &mut self.sinks {
            sink.emit(event)?;
        }
        Ok(())
    }
}

/// Prompts until a legal card arrives. Commands answer on the spot without
/// consuming the turn; malformed tokens and illegal plays print their
/// reason and re-prompt. Nothing here mutates game state.
pub fn prompt_for_card(
    input: &mut dyn InputProvider,
    seat: PlayerPosition,
    names: &[String; 4],
    round: &RoundState,
    totals: &[u32; 4],
) -> Result<Card> {
    println!("\nYour hand: {}", render_hand(round.hand(seat)));
    loop {
        let raw = input
            .read_line("Enter a card to play: ")
            .context("reading card choice")?;

        match parse_token(&raw) {
            Err(err) => println!("{err}"),
            Ok(Token::Command(command)) => answer_command(command, seat, names, round, totals),
            Ok(Token::Card(card)) => match rules::validate(card, &round.play_context(seat)) {
                Ok(()) => return Ok(card),
                Err(reason) => println!("Illegal play ({}): {reason}", reason.tag()),
            },
        }
    }
}

fn answer_command(
    command: Command,
    seat: PlayerPosition,
    names: &[String; 4],
    round: &RoundState,
    totals: &[u32; 4],
) {
    match command {
        Command::ShowHand => println!("Your hand: {}", render_hand(round.hand(seat))),
        Command::ShowScores => println!("Scores:\n{}", score_table(names, totals)),
        Command::ShowTricks => {
            for other in PlayerPosition::LOOP {
                println!(
                    "  {:<12} {} trick(s)",
                    names[other.index()],
                    round.tricks_won(other)
                );
            }
        }
        Command::Help => println!(
            "Type a card code such as 10D or QS. Commands: -hand, -scores, -tricks, -help."
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::prompt_for_card;
    use crate::input::ScriptedInput;
    use hearts_core::model::card::Card;
    use hearts_core::model::hand::Hand;
    use hearts_core::model::player::PlayerPosition;
    use hearts_core::model::rank::Rank;
    use hearts_core::model::round::RoundState;
    use hearts_core::model::suit::Suit;

    fn names() -> [String; 4] {
        [
            "Bot 1".to_string(),
            "Bot 2".to_string(),
            "You".to_string(),
            "Bot 3".to_string(),
        ]
    }

    fn opening_round() -> RoundState {
        let hands = [
            Hand::with_cards(vec![Card::new(Rank::Three, Suit::Clubs)]),
            Hand::with_cards(vec![Card::new(Rank::Four, Suit::Clubs)]),
            Hand::with_cards(vec![
                Card::TWO_OF_CLUBS,
                Card::new(Rank::Five, Suit::Hearts),
                Card::QUEEN_OF_SPADES,
                Card::new(Rank::Nine, Suit::Diamonds),
            ]),
            Hand::with_cards(vec![Card::new(Rank::Six, Suit::Clubs)]),
        ];
        RoundState::from_hands(hands, PlayerPosition::South)
    }

    #[test]
    fn malformed_commands_and_illegal_plays_all_reprompt() {
        let round = opening_round();
        let mut input = ScriptedInput::new([
            "banana", // malformed
            "-help",  // command, no turn consumed
            "QS",     // illegal on the first trick
            "2C",     // finally legal
        ]);
        let card = prompt_for_card(
            &mut input,
            PlayerPosition::South,
            &names(),
            &round,
            &[0, 0, 0, 0],
        )
        .unwrap();
        assert_eq!(card, Card::TWO_OF_CLUBS);
        assert_eq!(input.remaining(), 0);
    }

    #[test]
    fn lowercase_card_tokens_are_accepted() {
        let round = opening_round();
        let mut input = ScriptedInput::new(["9d"]);
        let card = prompt_for_card(
            &mut input,
            PlayerPosition::South,
            &names(),
            &round,
            &[0, 0, 0, 0],
        )
        .unwrap();
        assert_eq!(card, Card::new(Rank::Nine, Suit::Diamonds));
    }

    #[test]
    fn exhausted_input_is_a_collaborator_failure() {
        let round = opening_round();
        let mut input = ScriptedInput::new(["not-a-card"]);
        let err = prompt_for_card(
            &mut input,
            PlayerPosition::South,
            &names(),
            &round,
            &[0, 0, 0, 0],
        )
        .unwrap_err();
        assert!(err.to_string().contains("reading card choice"));
    }
}
