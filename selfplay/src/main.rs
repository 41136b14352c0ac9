mod config;
mod opponent;
mod runner;
mod session_rng;

use clap::Parser;
use tictactoe_engine::{log, logger};

use session_rng::SessionRng;

#[derive(Parser)]
#[command(name = "tictactoe_selfplay")]
struct Args {
    #[arg(long, default_value = "tictactoe_selfplay_config.yaml")]
    config: String,

    #[arg(long)]
    games: Option<u32>,

    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    use_log_prefix: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Selfplay".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    if !std::path::Path::new(&args.config).exists() {
        config::save_config(&args.config, &config::Config::default())?;
        log!("Wrote default config to {}", args.config);
    }

    let mut config = config::load_config(&args.config)?;
    if let Some(games) = args.games {
        config.games = games;
    }
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
    config.validate()?;

    let mut rng = match config.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };

    log!(
        "Playing {} games as {} against {:?} opponent (seed {})",
        config.games,
        config.engine_mark,
        config.opponent,
        rng.seed()
    );

    let tally = runner::run_matches(config.games, config.engine_mark, config.opponent, &mut rng);

    log!(
        "Results: {} wins, {} draws, {} losses",
        tally.engine_wins,
        tally.draws,
        tally.opponent_wins
    );

    if tally.opponent_wins > 0 {
        log!("Perfect play was beaten; rerun with seed {} to reproduce", rng.seed());
        std::process::exit(1);
    }

    Ok(())
}
