//! gems - headless simulation and replay CLI

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use rust_gems::{
    ai::choose_ai_turn,
    cards::CardRegistry,
    rules::{encode_setup, new_game, PlayerSetup},
    simulation::{validate_roster, SimulationConfig, SimulationSummary, Simulator, BASELINE_GAMES, BASELINE_ROSTERS},
    GameRng, SimulationError,
};

type CliResult<T> = std::result::Result<T, Box<dyn std::error::Error>>;

#[derive(Parser)]
#[command(name = "gems")]
#[command(about = "Gem-trading card game engine: AI simulations and game replays", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// JSON file with a SimulationConfig; flags override its values
    #[arg(long, value_name = "PATH", global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct RunArgs {
    /// Master seed (default: entropy)
    #[arg(long)]
    seed: Option<u64>,

    /// Play games on all cores
    #[arg(long)]
    parallel: bool,

    /// Print JSON instead of a table
    #[arg(long)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run AI-only games with one roster
    Simulate {
        /// Completed games to play
        #[arg(long, default_value_t = 100)]
        games: usize,

        /// Experience per seat, comma separated (e.g. 1,0.5,0)
        #[arg(long, value_delimiter = ',', required = true)]
        players: Vec<f64>,

        /// Include per-game outcomes in JSON output
        #[arg(long)]
        details: bool,

        #[command(flatten)]
        run: RunArgs,
    },

    /// Run the fixed baseline roster suite
    Baseline {
        /// Games per roster
        #[arg(long, default_value_t = BASELINE_GAMES)]
        games: usize,

        #[command(flatten)]
        run: RunArgs,
    },

    /// Run randomly drawn rosters
    Random {
        /// Number of rosters
        #[arg(long, default_value_t = 100)]
        rosters: usize,

        /// Games per roster
        #[arg(long, default_value_t = 100)]
        games: usize,

        #[command(flatten)]
        run: RunArgs,
    },

    /// Play a single AI game and print its log
    Play {
        /// Experience per seat, comma separated
        #[arg(long, value_delimiter = ',', default_value = "1,0")]
        players: Vec<f64>,

        /// Deal seed
        #[arg(long, default_value_t = 0)]
        seed: u64,
    },
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: Option<&PathBuf>, run: &RunArgs) -> CliResult<SimulationConfig> {
    let mut config = match path {
        Some(path) => serde_json::from_str(&std::fs::read_to_string(path)?)?,
        None => SimulationConfig::default(),
    };
    if let Some(seed) = run.seed {
        config = config.with_seed(seed);
    }
    if run.parallel {
        config = config.with_parallel(true);
    }
    Ok(config)
}

fn print_summary(summary: &SimulationSummary, json: bool) -> CliResult<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(summary)?);
    } else {
        println!("{summary}");
    }
    Ok(())
}

fn main() -> CliResult<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Simulate { games, players, details, run } => {
            let config = load_config(cli.config.as_ref(), &run)?;
            let summary = Simulator::new(config).run(games, &players)?;
            let summary = if details { summary } else { summary.without_outcomes() };
            print_summary(&summary, run.json)?;
        }

        Commands::Baseline { games, run } => {
            let config = load_config(cli.config.as_ref(), &run)?;
            let summaries: Vec<SimulationSummary> = Simulator::new(config)
                .run_baseline(games)?
                .into_iter()
                .map(SimulationSummary::without_outcomes)
                .collect();
            if run.json {
                println!("{}", serde_json::to_string_pretty(&summaries)?);
            } else {
                for (roster, summary) in BASELINE_ROSTERS.iter().zip(&summaries) {
                    println!("roster {roster:?}");
                    println!("{summary}");
                }
            }
        }

        Commands::Random { rosters, games, run } => {
            let config = load_config(cli.config.as_ref(), &run)?;
            let results: Vec<(Vec<f64>, SimulationSummary)> = Simulator::new(config)
                .run_random_rosters(rosters, games)?
                .into_iter()
                .map(|(roster, summary)| (roster, summary.without_outcomes()))
                .collect();
            if run.json {
                let summaries: Vec<&SimulationSummary> = results.iter().map(|(_, s)| s).collect();
                println!("{}", serde_json::to_string_pretty(&summaries)?);
            } else {
                for (roster, summary) in &results {
                    println!("roster {roster:.2?}");
                    println!("{summary}");
                }
            }
        }

        Commands::Play { players, seed } => {
            validate_roster(1, &players)?;
            let config = match cli.config.as_ref() {
                Some(path) => serde_json::from_str(&std::fs::read_to_string(path)?)?,
                None => SimulationConfig::default(),
            };
            play(&players, seed, &config)?;
        }
    }

    Ok(())
}

fn play(experiences: &[f64], seed: u64, config: &SimulationConfig) -> CliResult<()> {
    let seats: Vec<PlayerSetup> = experiences
        .iter()
        .enumerate()
        .map(|(i, &experience)| PlayerSetup::ai(format!("P{}", i + 1), experience))
        .collect();
    let mut rng = GameRng::new(seed);
    let mut state = new_game(&seats, &CardRegistry::standard(), config.rules, &mut rng)?;
    info!(setup = %encode_setup(&state), "dealt");

    while state.winner.is_none() {
        if state.round > config.max_rounds {
            return Err(SimulationError::RoundLimit(config.max_rounds).into());
        }
        let experience = experiences[state.current_player.index()];
        state = choose_ai_turn(&state, experience, &mut rng)?;
    }

    for message in state.messages() {
        println!("{message}");
    }
    println!();
    for (id, player) in state.players.iter() {
        let marker = if state.winner == Some(id) { " (winner)" } else { "" };
        println!(
            "{}: {} points, {} cards, {} patrons{}",
            player.name,
            player.points,
            player.cards.len(),
            player.patrons.len(),
            marker
        );
    }
    Ok(())
}
