use crate::model::card::Card;
use crate::model::deck::Deck;
use crate::model::hand::Hand;
use crate::model::player::PlayerPosition;
use crate::model::trick::{Play, Trick, TrickError};
use crate::rules::{self, IllegalPlay, PlayContext};
use core::fmt;
use std::array;
use std::collections::HashSet;

pub const TRICKS_PER_DEAL: u8 = 13;

/// One deal: four hands, the trick being built, and the flags that govern
/// legality. Resolved tricks are not kept; their cards move into the
/// winner's won bag and only the counters remain.
#[derive(Debug, Clone)]
pub struct RoundState {
    hands: [Hand; 4],
    current_trick: Trick,
    opening_leader: PlayerPosition,
    tricks_completed: u8,
    tricks_won: [u8; 4],
    hearts_broken: bool,
}

/// A deal that cannot start has a broken deck upstream; this is fatal, never
/// patched over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DealError {
    WrongDeckSize(usize),
    DuplicateCard(Card),
    MissingTwoOfClubs,
}

impl fmt::Display for DealError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DealError::WrongDeckSize(len) => write!(f, "deck has {len} cards, expected 52"),
            DealError::DuplicateCard(card) => write!(f, "deck contains {card} twice"),
            DealError::MissingTwoOfClubs => write!(f, "deck is missing the two of clubs"),
        }
    }
}

impl std::error::Error for DealError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayOutcome {
    Played,
    TrickCompleted {
        winner: PlayerPosition,
        penalties: u8,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayError {
    RoundComplete,
    OutOfTurn {
        expected: PlayerPosition,
        actual: PlayerPosition,
    },
    Illegal(IllegalPlay),
    Trick(TrickError),
}

impl fmt::Display for PlayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayError::RoundComplete => write!(f, "all thirteen tricks have been played"),
            PlayError::OutOfTurn { expected, actual } => {
                write!(f, "it is {expected}'s turn, not {actual}'s")
            }
            PlayError::Illegal(reason) => write!(f, "{reason}"),
            PlayError::Trick(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for PlayError {}

impl From<IllegalPlay> for PlayError {
    fn from(reason: IllegalPlay) -> Self {
        PlayError::Illegal(reason)
    }
}

impl RoundState {
    /// Partitions a full deck round-robin into four 13-card hands. The
    /// holder of the two of clubs opens the deal.
    pub fn deal(deck: &Deck) -> Result<Self, DealError> {
        if deck.len() != 52 {
            return Err(DealError::WrongDeckSize(deck.len()));
        }
        let mut seen = HashSet::with_capacity(52);
        for &card in deck.cards() {
            if !seen.insert(card) {
                return Err(DealError::DuplicateCard(card));
            }
        }

        let mut hands: [Hand; 4] = array::from_fn(|_| Hand::new());
        for (index, &card) in deck.cards().iter().enumerate() {
            hands[index % 4].add(card);
        }

        let opening_leader = hands
            .iter()
            .position(|hand| hand.contains(Card::TWO_OF_CLUBS))
            .and_then(PlayerPosition::from_index)
            .ok_or(DealError::MissingTwoOfClubs)?;

        Ok(Self::from_hands(hands, opening_leader))
    }

    /// Builds a round from explicit hands; used by tests and simulations.
    pub fn from_hands(hands: [Hand; 4], leader: PlayerPosition) -> Self {
        Self {
            hands,
            current_trick: Trick::new(leader),
            opening_leader: leader,
            tricks_completed: 0,
            tricks_won: [0; 4],
            hearts_broken: false,
        }
    }

    pub fn hand(&self, seat: PlayerPosition) -> &Hand {
        &self.hands[seat.index()]
    }

    pub fn current_trick(&self) -> &Trick {
        &self.current_trick
    }

    pub fn opening_leader(&self) -> PlayerPosition {
        self.opening_leader
    }

    pub fn hearts_broken(&self) -> bool {
        self.hearts_broken
    }

    pub fn is_first_trick(&self) -> bool {
        self.tricks_completed == 0
    }

    /// 1-based index of the trick in progress (13 after the last resolve).
    pub fn trick_number(&self) -> u8 {
        (self.tricks_completed + 1).min(TRICKS_PER_DEAL)
    }

    pub fn tricks_completed(&self) -> u8 {
        self.tricks_completed
    }

    pub fn tricks_won(&self, seat: PlayerPosition) -> u8 {
        self.tricks_won[seat.index()]
    }

    pub fn is_complete(&self) -> bool {
        self.tricks_completed == TRICKS_PER_DEAL
    }

    /// Cards still held across all four hands; 52 − 4 × tricks completed at
    /// every trick boundary.
    pub fn cards_remaining(&self) -> usize {
        self.hands.iter().map(Hand::len).sum()
    }

    /// Raw penalty counts captured so far, one per seat, from the won bags.
    pub fn penalty_totals(&self) -> [u8; 4] {
        array::from_fn(|index| self.hands[index].penalty_points())
    }

    pub fn play_context(&self, seat: PlayerPosition) -> PlayContext<'_> {
        PlayContext {
            hand: self.hand(seat),
            is_first_trick: self.is_first_trick(),
            lead_suit: self.current_trick.lead_suit(),
            is_leading: self.current_trick.is_empty(),
            hearts_broken: self.hearts_broken,
        }
    }

    pub fn legal_moves(&self, seat: PlayerPosition) -> Vec<Card> {
        rules::legal_moves(&self.play_context(seat))
    }

    /// Auto-plays the two of clubs for the opening leader. The forced first
    /// lead is not a choice, so it never goes through a chooser.
    pub fn open_first_trick(&mut self) -> Result<Play, PlayError> {
        let leader = self.current_trick.leader();
        self.play_card(leader, Card::TWO_OF_CLUBS)?;
        Ok(Play {
            seat: leader,
            card: Card::TWO_OF_CLUBS,
        })
    }

    /// Applies one play. On the fourth card the trick resolves atomically:
    /// winner determined, cards transferred into the winner's won bag,
    /// counters updated, winner installed as next leader.
    pub fn play_card(
        &mut self,
        seat: PlayerPosition,
        card: Card,
    ) -> Result<PlayOutcome, PlayError> {
        if self.is_complete() {
            return Err(PlayError::RoundComplete);
        }

        let expected = self.current_trick.expected_seat();
        if expected != seat {
            return Err(PlayError::OutOfTurn {
                expected,
                actual: seat,
            });
        }

        rules::validate(card, &self.play_context(seat))?;

        self.current_trick.push(seat, card).map_err(PlayError::Trick)?;
        let removed = self.hands[seat.index()].remove(card);
        debug_assert!(removed, "validated card must be in hand");
        if card.is_heart() {
            self.hearts_broken = true;
        }

        if !self.current_trick.is_complete() {
            return Ok(PlayOutcome::Played);
        }

        let winner = match self.current_trick.winning_play() {
            Some(play) => play.seat,
            None => return Err(PlayError::Trick(TrickError::AlreadyComplete)),
        };
        let penalties = self.current_trick.penalty_total();

        let finished = std::mem::replace(&mut self.current_trick, Trick::new(winner));
        self.hands[winner.index()].capture(finished.cards());
        self.tricks_won[winner.index()] += 1;
        self.tricks_completed += 1;

        Ok(PlayOutcome::TrickCompleted { winner, penalties })
    }
}
