use crate::model::player::PlayerPosition;

/// Every deal distributes exactly 26 raw points: thirteen hearts at one
/// each plus thirteen for the queen of spades. Capturing all of them is
/// shooting the moon.
pub const MOON_TOTAL: u8 = 26;

/// Cumulative match scores, one total per seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreBoard {
    totals: [u32; 4],
}

/// Outcome of scoring one completed deal: the per-seat increments actually
/// applied, and the shooter when the moon was shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DealScoring {
    pub deltas: [u32; 4],
    pub moon_shooter: Option<PlayerPosition>,
}

impl ScoreBoard {
    pub const fn new() -> Self {
        Self { totals: [0; 4] }
    }

    pub fn score(&self, seat: PlayerPosition) -> u32 {
        self.totals[seat.index()]
    }

    pub fn standings(&self) -> &[u32; 4] {
        &self.totals
    }

    pub fn max_score(&self) -> u32 {
        self.totals.iter().copied().max().unwrap_or(0)
    }

    /// Seat currently winning the match (lowest total).
    pub fn leading_player(&self) -> PlayerPosition {
        PlayerPosition::LOOP
            .into_iter()
            .min_by_key(|seat| self.score(*seat))
            .expect("four seats")
    }

    /// All seats holding the minimum total. Plural on ties.
    pub fn winners(&self) -> Vec<PlayerPosition> {
        let best = self.totals.iter().copied().min().unwrap_or(0);
        PlayerPosition::LOOP
            .into_iter()
            .filter(|seat| self.score(*seat) == best)
            .collect()
    }

    /// Applies one deal's raw penalty counts. Exactly one scoring mode runs:
    /// a seat that captured all 26 points shot the moon and scores nothing
    /// while every other seat gains 26; otherwise each seat gains its own
    /// raw count. Only one seat can reach 26, since the raws sum to 26.
    pub fn apply_deal(&mut self, raw: [u8; 4]) -> DealScoring {
        let moon_shooter = PlayerPosition::LOOP
            .into_iter()
            .find(|seat| raw[seat.index()] == MOON_TOTAL);

        let mut deltas = [0u32; 4];
        match moon_shooter {
            Some(shooter) => {
                for seat in PlayerPosition::LOOP {
                    if seat != shooter {
                        deltas[seat.index()] = MOON_TOTAL as u32;
                    }
                }
            }
            None => {
                for seat in PlayerPosition::LOOP {
                    deltas[seat.index()] = raw[seat.index()] as u32;
                }
            }
        }

        for seat in PlayerPosition::LOOP {
            self.totals[seat.index()] += deltas[seat.index()];
        }

        DealScoring {
            deltas,
            moon_shooter,
        }
    }
}
