use anyhow::{Context, Result};
use clap::Parser;
use hearts_bot::{BotDifficulty, build_policy};
use hearts_cli::cli::Args;
use hearts_cli::controller::{MatchController, Seat, SeatController};
use hearts_cli::events::{ConsoleSink, EventSink, JsonlSink};
use hearts_cli::input::StdinInput;
use hearts_cli::logging;
use hearts_core::game::match_state::MatchState;
use hearts_core::model::player::PlayerPosition;

fn main() -> Result<()> {
    let args = Args::parse();
    let _logging = logging::init_logging(&args.log_level, args.trace_file.as_deref())?;

    let state = match args.seed {
        Some(seed) => MatchState::with_seed(seed, args.target),
        None => MatchState::new(args.target),
    }
    .context("dealing the opening hand")?;

    let seats = build_seats(&args);
    let names = seats.each_ref().map(|seat| seat.name.clone());

    let mut sinks: Vec<Box<dyn EventSink>> = vec![Box::new(ConsoleSink::new(names))];
    if let Some(path) = &args.log_file {
        sinks.push(Box::new(JsonlSink::create(path)?));
    }

    let mut controller = MatchController::new(state, seats, Box::new(StdinInput), sinks);
    controller.run().context("running the match")?;
    Ok(())
}

/// South is the human seat unless `--autoplay`; the other three are bots at
/// the chosen tier. Per-seat seeds keep seeded runs reproducible while
/// still letting the bots diverge from one another.
fn build_seats(args: &Args) -> [Seat; 4] {
    let difficulty = BotDifficulty::from(args.bots);
    let seed_for = |seat: PlayerPosition| args.seed.map(|seed| seed.wrapping_add(seat.index() as u64));

    let bot = |name: &str, seat: PlayerPosition| Seat {
        name: name.to_string(),
        controller: SeatController::Bot(build_policy(difficulty, seed_for(seat))),
    };

    let south = if args.autoplay {
        bot(&args.name, PlayerPosition::South)
    } else {
        Seat {
            name: args.name.clone(),
            controller: SeatController::Human,
        }
    };

    [
        bot("Bot 1", PlayerPosition::North),
        bot("Bot 2", PlayerPosition::East),
        south,
        bot("Bot 3", PlayerPosition::West),
    ]
}
