//! Terminal engagement
//!
//! Plays Drone / Jammer / Interceptor against a random opponent on
//! stdin/stdout, one command per line.

mod terminal;

use clap::Parser;
use engagement_logic::{MatchConfig, MatchEngine, SeededRng, Session, DEFAULT_TOTAL_ROUNDS};
use std::io::BufRead;
use terminal::Terminal;

#[derive(Parser, Debug)]
#[command(
    name = "engagement-console",
    about = "Drone / Jammer / Interceptor against a random opponent"
)]
struct Args {
    /// Total rounds in the match (positive, odd)
    #[arg(short, long, default_value_t = DEFAULT_TOTAL_ROUNDS)]
    rounds: u8,

    /// Opponent seed; taken from the clock when omitted
    #[arg(short, long)]
    seed: Option<u64>,

    /// Print every event as a JSON line
    #[arg(long)]
    json: bool,

    /// off, error, warn, info, debug or trace
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn log(level: &str) -> Result<(), Box<dyn std::error::Error>> {
    let level = level
        .parse::<log::LevelFilter>()
        .map_err(|_| format!("unknown log level {:?}", level))?;
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    simplelog::TermLogger::init(
        level,
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )?;
    Ok(())
}

fn clock_seed() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    log(&args.log_level)?;

    let config = MatchConfig::new(args.rounds)?;
    let seed = args.seed.unwrap_or_else(clock_seed);
    log::info!("opponent seed {}", seed);

    let mut terminal = Terminal::new(std::io::stdout(), args.json);
    terminal.banner(&config);
    let mut session = Session::new(MatchEngine::new(config, SeededRng::new(seed)), terminal);
    session.presenter_mut().prompt();

    for line in std::io::stdin().lock().lines() {
        let line = line?;
        let input = line.trim();
        match input {
            "" => {}
            "quit" | "exit" => break,
            _ => {
                // rejections are already shown by the presenter
                if let Err(e) = session.dispatch_input(input) {
                    log::debug!("command {:?} rejected: {}", input, e);
                }
            }
        }
        session.presenter_mut().prompt();
    }

    log::info!("final state {:?}", session.engine().state());
    Ok(())
}
