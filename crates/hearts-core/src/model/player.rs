use core::fmt;
use serde::{Deserialize, Serialize};

/// A seat at the table. Per-player state (hand, score, trick count) lives in
/// seat-indexed arrays; play proceeds clockwise via [`PlayerPosition::next`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum PlayerPosition {
    North = 0,
    East = 1,
    South = 2,
    West = 3,
}

impl PlayerPosition {
    pub const LOOP: [PlayerPosition; 4] = [
        PlayerPosition::North,
        PlayerPosition::East,
        PlayerPosition::South,
        PlayerPosition::West,
    ];

    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(PlayerPosition::North),
            1 => Some(PlayerPosition::East),
            2 => Some(PlayerPosition::South),
            3 => Some(PlayerPosition::West),
            _ => None,
        }
    }

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn next(self) -> PlayerPosition {
        match self {
            PlayerPosition::North => PlayerPosition::East,
            PlayerPosition::East => PlayerPosition::South,
            PlayerPosition::South => PlayerPosition::West,
            PlayerPosition::West => PlayerPosition::North,
        }
    }
}

impl fmt::Display for PlayerPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PlayerPosition::North => "North",
            PlayerPosition::East => "East",
            PlayerPosition::South => "South",
            PlayerPosition::West => "West",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::PlayerPosition;

    #[test]
    fn four_nexts_return_to_the_start() {
        for seat in PlayerPosition::LOOP {
            assert_eq!(seat.next().next().next().next(), seat);
        }
    }

    #[test]
    fn index_and_from_index_agree() {
        for (i, seat) in PlayerPosition::LOOP.iter().enumerate() {
            assert_eq!(seat.index(), i);
            assert_eq!(PlayerPosition::from_index(i), Some(*seat));
        }
        assert_eq!(PlayerPosition::from_index(4), None);
    }
}
