use crate::display::{card_phrase, render_cards, score_table};
use anyhow::{Context, Result};
use hearts_core::model::card::Card;
use hearts_core::model::player::PlayerPosition;
use serde::Serialize;
use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Structured record of everything observable about a match. Sinks own all
/// formatting and persistence; the rules core never renders text.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum GameEvent {
    CardPlayed {
        deal: u32,
        trick: u8,
        seat: PlayerPosition,
        card: Card,
    },
    TrickWon {
        deal: u32,
        trick: u8,
        seat: PlayerPosition,
        cards: Vec<Card>,
        penalties: u8,
    },
    DealScored {
        deal: u32,
        deltas: [u32; 4],
        totals: [u32; 4],
        moon_shooter: Option<PlayerPosition>,
    },
    MatchWon {
        winners: Vec<PlayerPosition>,
        totals: [u32; 4],
        deals_played: u32,
    },
}

pub trait EventSink {
    fn emit(&mut self, event: &GameEvent) -> Result<()>;
}

/// Narrates the game on stdout for the humans at the table.
pub struct ConsoleSink {
    names: [String; 4],
}

impl ConsoleSink {
    pub fn new(names: [String; 4]) -> Self {
        Self { names }
    }

    fn name(&self, seat: PlayerPosition) -> &str {
        &self.names[seat.index()]
    }
}

impl EventSink for ConsoleSink {
    fn emit(&mut self, event: &GameEvent) -> Result<()> {
        match event {
            GameEvent::CardPlayed { seat, card, .. } => {
                println!("{} played {}.", self.name(*seat), card_phrase(*card));
            }
            GameEvent::TrickWon {
                seat,
                cards,
                penalties,
                ..
            } => {
                println!("\nTrick: {}", render_cards(cards));
                if *penalties > 0 {
                    println!(
                        "{} won this trick and {penalties} point(s).\n",
                        self.name(*seat)
                    );
                } else {
                    println!("{} won this trick.\n", self.name(*seat));
                }
            }
            GameEvent::DealScored {
                deal,
                totals,
                moon_shooter,
                ..
            } => {
                if let Some(shooter) = moon_shooter {
                    println!("\n{} shot the moon!", self.name(*shooter));
                }
                println!("\nScores after deal {deal}:");
                println!("{}", score_table(&self.names, totals));
                println!();
            }
            GameEvent::MatchWon {
                winners, totals, ..
            } => {
                let names: Vec<&str> = winners.iter().map(|seat| self.name(*seat)).collect();
                println!("\nFinal scores:");
                println!("{}", score_table(&self.names, totals));
                println!("\n{} won the match!", names.join(" and "));
            }
        }
        Ok(())
    }
}

/// Append-only JSONL log, one event per line. Written, never re-read.
pub struct JsonlSink {
    writer: BufWriter<std::fs::File>,
}

impl JsonlSink {
    pub fn create(path: &Path) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("opening event log at {}", path.display()))?;
        Ok(Self {
            writer: BufWriter::new(file),
        })
    }
}

impl EventSink for JsonlSink {
    fn emit(&mut self, event: &GameEvent) -> Result<()> {
        serde_json::to_writer(&mut self.writer, event).context("encoding game event")?;
        self.writer.write_all(b"\n").context("writing game event")?;
        self.writer.flush().context("flushing game event")?;
        Ok(())
    }
}
