use crate::model::card::Card;
use crate::model::player::PlayerPosition;
use crate::model::suit::Suit;
use core::fmt;
use serde::{Deserialize, Serialize};

/// One exchange of four cards, built up one play at a time in seat order and
/// resolved to a single winner once full.
#[derive(Debug, Clone)]
pub struct Trick {
    leader: PlayerPosition,
    plays: Vec<Play>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Play {
    pub seat: PlayerPosition,
    pub card: Card,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrickError {
    AlreadyComplete,
    OutOfTurn {
        expected: PlayerPosition,
        actual: PlayerPosition,
    },
}

impl fmt::Display for TrickError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrickError::AlreadyComplete => write!(f, "trick already has four cards"),
            TrickError::OutOfTurn { expected, actual } => {
                write!(f, "it is {expected}'s turn, not {actual}'s")
            }
        }
    }
}

impl std::error::Error for TrickError {}

impl Trick {
    pub fn new(leader: PlayerPosition) -> Self {
        Self {
            leader,
            plays: Vec::with_capacity(4),
        }
    }

    pub fn leader(&self) -> PlayerPosition {
        self.leader
    }

    pub fn plays(&self) -> &[Play] {
        &self.plays
    }

    pub fn is_empty(&self) -> bool {
        self.plays.is_empty()
    }

    pub fn is_complete(&self) -> bool {
        self.plays.len() == 4
    }

    /// Suit of the first card played; unset until the trick opens.
    pub fn lead_suit(&self) -> Option<Suit> {
        self.plays.first().map(|play| play.card.suit)
    }

    /// Seat whose turn it is: the leader, then clockwise from the last play.
    pub fn expected_seat(&self) -> PlayerPosition {
        self.plays
            .last()
            .map(|play| play.seat.next())
            .unwrap_or(self.leader)
    }

    pub fn push(&mut self, seat: PlayerPosition, card: Card) -> Result<(), TrickError> {
        if self.is_complete() {
            return Err(TrickError::AlreadyComplete);
        }
        let expected = self.expected_seat();
        if expected != seat {
            return Err(TrickError::OutOfTurn {
                expected,
                actual: seat,
            });
        }
        self.plays.push(Play { seat, card });
        Ok(())
    }

    /// The play taking the trick: highest rank among cards of the lead suit.
    /// Off-suit discards never win; no two cards share (rank, suit), so the
    /// maximum is unique. None until the trick is complete.
    pub fn winning_play(&self) -> Option<&Play> {
        if !self.is_complete() {
            return None;
        }
        let lead = self.lead_suit()?;
        self.plays
            .iter()
            .filter(|play| play.card.suit == lead)
            .max_by_key(|play| play.card.rank)
    }

    pub fn penalty_total(&self) -> u8 {
        self.plays.iter().map(|play| play.card.penalty_value()).sum()
    }

    /// The four cards, in play order, for transfer into the winner's won bag.
    pub fn cards(&self) -> impl Iterator<Item = Card> + '_ {
        self.plays.iter().map(|play| play.card)
    }
}
