//! AI-only simulation.
//!
//! Plays batches of games between AI seats and aggregates win rates,
//! points, patrons and game length per seat. Used to measure how the
//! experience parameter translates into strength.
//!
//! ## Example
//!
//! ```
//! use rust_gems::simulation::{SimulationConfig, Simulator};
//!
//! let simulator = Simulator::new(SimulationConfig::new().with_seed(7));
//! let summary = simulator.run(3, &[1.0, 0.0]).unwrap();
//!
//! assert_eq!(summary.games, 3);
//! assert_eq!(summary.players.len(), 2);
//! ```

pub mod config;
pub mod roster;
pub mod runner;
pub mod summary;

pub use config::SimulationConfig;
pub use roster::{random_roster, BASELINE_GAMES, BASELINE_ROSTERS};
pub use runner::{play_game, run_simulation, validate_roster, Simulator};
pub use summary::{GameFailure, GameOutcome, PlayerSummary, SimulationSummary};
