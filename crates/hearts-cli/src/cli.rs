use clap::{Parser, ValueEnum};
use hearts_bot::BotDifficulty;
use hearts_core::game::match_state::DEFAULT_TARGET_SCORE;
use std::path::PathBuf;

/// Command-line surface of the game. Everything else reads the parsed
/// `Args`; nothing re-reads the environment.
#[derive(Debug, Parser)]
#[command(name = "clihearts", version, about = "Four-player Hearts in the terminal")]
pub struct Args {
    /// Seed for deck shuffles and the random bot tier; omit for entropy.
    #[arg(long)]
    pub seed: Option<u64>,

    /// The match ends once any player reaches this score.
    #[arg(long, default_value_t = DEFAULT_TARGET_SCORE)]
    pub target: u32,

    /// Difficulty tier for the bot seats.
    #[arg(long, value_enum, default_value = "tactical")]
    pub bots: BotTier,

    /// Name shown for the human seat.
    #[arg(long, default_value = "You")]
    pub name: String,

    /// Append structured game events to this JSONL file.
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Write diagnostic traces to this file instead of stderr.
    #[arg(long)]
    pub trace_file: Option<PathBuf>,

    /// Diagnostic trace level (trace, debug, info, warn, error).
    #[arg(long, default_value = "warn")]
    pub log_level: String,

    /// Fill every seat with a bot and run the match without prompts.
    #[arg(long)]
    pub autoplay: bool,
}

/// Clap-facing mirror of [`BotDifficulty`]; keeps the bot crate free of
/// CLI derive baggage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BotTier {
    Random,
    Avoidant,
    Tactical,
    Strategic,
}

impl From<BotTier> for BotDifficulty {
    fn from(tier: BotTier) -> Self {
        match tier {
            BotTier::Random => BotDifficulty::Random,
            BotTier::Avoidant => BotDifficulty::Avoidant,
            BotTier::Tactical => BotDifficulty::Tactical,
            BotTier::Strategic => BotDifficulty::Strategic,
        }
    }
}
