//! Rosters: the fixed baseline suite and random tables.

use tracing::info;

use crate::core::{GameRng, RulesConfig};
use crate::error::SimulationError;

use super::runner::Simulator;
use super::summary::SimulationSummary;

/// Games per roster in a baseline run.
pub const BASELINE_GAMES: usize = 100;

/// Rosters compared by the baseline suite.
///
/// Covers wise against random at every table size, mirrored seatings,
/// all-equal tables and mixed skill levels.
pub const BASELINE_ROSTERS: [&[f64]; 20] = [
    &[1.0, 0.0],
    &[0.0, 1.0, 0.0],
    &[1.0, 0.0, 0.0, 0.0],
    &[0.0, 0.0, 0.0, 1.0],
    &[1.0, 1.0],
    &[0.0, 0.0],
    &[1.0, 1.0, 1.0],
    &[0.0, 0.0, 0.0],
    &[1.0, 1.0, 1.0, 1.0],
    &[0.0, 0.0, 0.0, 0.0],
    &[0.5, 0.5],
    &[0.5, 0.5, 0.5],
    &[0.5, 0.5, 0.5, 0.5],
    &[0.25, 0.75],
    &[1.0, 1.0, 0.0],
    &[1.0, 1.0, 0.0, 0.0],
    &[1.0, 1.0, 1.0, 0.0],
    &[1.0, 0.5, 0.5, 0.0],
    &[1.0, 0.5, 0.0, 0.0],
    &[1.0, 0.75, 0.5, 0.25],
];

/// A table of 2 to 4 seats with uniform random experiences.
pub fn random_roster(rng: &mut GameRng) -> Vec<f64> {
    let span = RulesConfig::MAX_PLAYERS - RulesConfig::MIN_PLAYERS + 1;
    let seats = RulesConfig::MIN_PLAYERS + rng.gen_index(span);
    (0..seats).map(|_| rng.gen_unit()).collect()
}

impl Simulator {
    /// Run every baseline roster for `games` games each.
    ///
    /// Roster `i` draws its streams from `master.for_game(i, 0)`, so a
    /// seeded suite reproduces roster by roster.
    pub fn run_baseline(&self, games: usize) -> Result<Vec<SimulationSummary>, SimulationError> {
        let master = self.master_rng();
        BASELINE_ROSTERS
            .iter()
            .enumerate()
            .map(|(i, roster)| {
                info!(roster = i, players = roster.len(), "baseline roster");
                self.run_with_rng(games, roster, &master.for_game(i as u64, 0))
            })
            .collect()
    }

    /// Run `rosters` random tables for `games` games each.
    ///
    /// Returns each roster with its summary.
    pub fn run_random_rosters(
        &self,
        rosters: usize,
        games: usize,
    ) -> Result<Vec<(Vec<f64>, SimulationSummary)>, SimulationError> {
        let mut master = self.master_rng();
        (0..rosters)
            .map(|i| {
                let roster = random_roster(&mut master);
                let summary = self.run_with_rng(games, &roster, &master.for_game(i as u64, 0))?;
                Ok((roster, summary))
            })
            .collect()
    }
}
