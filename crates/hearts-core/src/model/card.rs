use crate::model::rank::Rank;
use crate::model::suit::Suit;
use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

/// A playing card, identified by `(rank, suit)` only. The two/three-character
/// display code (`QS`, `10H`) is derived via `Display` and parsed back via
/// `FromStr`; it is never the basis for comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    pub const TWO_OF_CLUBS: Card = Card::new(Rank::Two, Suit::Clubs);
    pub const ACE_OF_CLUBS: Card = Card::new(Rank::Ace, Suit::Clubs);
    pub const QUEEN_OF_SPADES: Card = Card::new(Rank::Queen, Suit::Spades);

    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    pub const fn is_queen_of_spades(self) -> bool {
        matches!(self.rank, Rank::Queen) && matches!(self.suit, Suit::Spades)
    }

    pub const fn is_heart(self) -> bool {
        self.suit.is_heart()
    }

    pub const fn is_penalty(self) -> bool {
        self.is_heart() || self.is_queen_of_spades()
    }

    pub const fn penalty_value(self) -> u8 {
        if self.is_queen_of_spades() {
            13
        } else if self.is_heart() {
            1
        } else {
            0
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

/// Why a raw card token failed to parse. Surfaced to the player verbatim,
/// so messages describe the token, not internal state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseCardError {
    Empty,
    BadLength(usize),
    UnknownRank(String),
    UnknownSuit(char),
}

impl fmt::Display for ParseCardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseCardError::Empty => write!(f, "no card entered"),
            ParseCardError::BadLength(len) => {
                write!(f, "a card code is 2 or 3 characters, got {len}")
            }
            ParseCardError::UnknownRank(token) => {
                write!(f, "{token} is not a value; use 2..10, J, Q, K or A")
            }
            ParseCardError::UnknownSuit(letter) => {
                write!(f, "{letter} is not a suit; use D, H, C or S")
            }
        }
    }
}

impl std::error::Error for ParseCardError {}

impl FromStr for Card {
    type Err = ParseCardError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        if raw.is_empty() {
            return Err(ParseCardError::Empty);
        }
        let length = raw.chars().count();
        if !(2..=3).contains(&length) {
            return Err(ParseCardError::BadLength(length));
        }

        let mut chars = raw.chars();
        let letter = chars.next_back().expect("length checked above");
        let value_part = chars.as_str();

        let rank = Rank::from_token(value_part)
            .ok_or_else(|| ParseCardError::UnknownRank(value_part.to_string()))?;
        let suit = Suit::from_char(letter).ok_or(ParseCardError::UnknownSuit(letter))?;
        Ok(Card::new(rank, suit))
    }
}
