//! Running AI-only games.
//!
//! Every game attempt gets its own RNG stream derived from the master
//! seed, the game index and the attempt number. Results are therefore
//! identical whether games run sequentially or on the rayon pool.
//!
//! ## Failures
//!
//! A game that errors (no legal move, an empty tier, too many rounds) is
//! recorded as a failure and its index is played again from a fresh
//! stream. Failed attempts do not count toward the batch size. Once more
//! than `max_failures` attempts have failed the batch is abandoned.

use rayon::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::{debug, info, warn};

use crate::ai::choose_ai_turn;
use crate::cards::CardRegistry;
use crate::core::{GameRng, PlayerId, RulesConfig};
use crate::error::SimulationError;
use crate::rules::{new_game, PlayerSetup};

use super::config::SimulationConfig;
use super::summary::{GameFailure, GameOutcome, SimulationSummary};

/// Play one AI-only game to completion.
///
/// Seats are named `P1`, `P2`, ... in roster order. A round is counted
/// each time seat 0 is about to act.
pub fn play_game(
    experiences: &[f64],
    registry: &CardRegistry,
    config: &SimulationConfig,
    rng: &mut GameRng,
) -> Result<GameOutcome, SimulationError> {
    let seats: Vec<PlayerSetup> = experiences
        .iter()
        .enumerate()
        .map(|(i, &experience)| PlayerSetup::ai(format!("P{}", i + 1), experience))
        .collect();
    let mut state = new_game(&seats, registry, config.rules, rng)?;
    let mut rounds = 0;

    loop {
        if let Some(outcome) = GameOutcome::from_state(&state, 0, rounds) {
            return Ok(outcome);
        }
        if state.current_player == PlayerId::FIRST {
            rounds += 1;
            if rounds > config.max_rounds {
                return Err(SimulationError::RoundLimit(config.max_rounds));
            }
        }
        let experience = experiences[state.current_player.index()];
        state = choose_ai_turn(&state, experience, rng)?;
    }
}

/// Runs batches of AI-only games.
#[derive(Clone, Debug)]
pub struct Simulator {
    config: SimulationConfig,
    registry: CardRegistry,
}

impl Default for Simulator {
    fn default() -> Self {
        Self::new(SimulationConfig::default())
    }
}

impl Simulator {
    /// Create a simulator dealing from the standard card set.
    #[must_use]
    pub fn new(config: SimulationConfig) -> Self {
        Self {
            config,
            registry: CardRegistry::standard(),
        }
    }

    /// Deal from a different card set.
    #[must_use]
    pub fn with_registry(mut self, registry: CardRegistry) -> Self {
        self.registry = registry;
        self
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// The master RNG for a batch: the configured seed, or entropy.
    #[must_use]
    pub fn master_rng(&self) -> GameRng {
        match self.config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        }
    }

    /// Play `games` completed games with the given roster.
    pub fn run(&self, games: usize, experiences: &[f64]) -> Result<SimulationSummary, SimulationError> {
        self.run_with_rng(games, experiences, &self.master_rng())
    }

    /// Play `games` completed games, deriving every stream from `master`.
    pub fn run_with_rng(
        &self,
        games: usize,
        experiences: &[f64],
        master: &GameRng,
    ) -> Result<SimulationSummary, SimulationError> {
        validate_roster(games, experiences)?;
        info!(
            games,
            players = experiences.len(),
            seed = master.seed(),
            parallel = self.config.parallel,
            "simulation started"
        );

        let failed = AtomicUsize::new(0);
        let play = |index: usize| self.play_until_complete(index, experiences, master, &failed);
        let results: Vec<(GameOutcome, Vec<GameFailure>)> = if self.config.parallel {
            (0..games).into_par_iter().map(play).collect::<Result<_, _>>()?
        } else {
            (0..games).map(play).collect::<Result<_, _>>()?
        };

        let (outcomes, failures): (Vec<_>, Vec<_>) = results.into_iter().unzip();
        let failures: Vec<GameFailure> = failures.into_iter().flatten().collect();
        let summary = SimulationSummary::from_outcomes(experiences, outcomes, &failures);

        info!(
            games = summary.games,
            failures = summary.failures.len(),
            average_turns = summary.average_turns,
            "simulation finished"
        );
        Ok(summary)
    }

    fn play_until_complete(
        &self,
        index: usize,
        experiences: &[f64],
        master: &GameRng,
        failed: &AtomicUsize,
    ) -> Result<(GameOutcome, Vec<GameFailure>), SimulationError> {
        let mut failures = Vec::new();
        let mut attempt = 0;
        loop {
            let mut rng = master.for_game(index as u64, attempt);
            match play_game(experiences, &self.registry, &self.config, &mut rng) {
                Ok(mut outcome) => {
                    outcome.game_index = index;
                    outcome.attempts = attempt + 1;
                    debug!(game = index, winner = %outcome.winner, rounds = outcome.rounds, "game finished");
                    return Ok((outcome, failures));
                }
                Err(err) => {
                    let message = err.to_string();
                    warn!(game = index, attempt, error = %message, "game failed, retrying");
                    let total = failed.fetch_add(1, Ordering::Relaxed) + 1;
                    failures.push(GameFailure {
                        game_index: index,
                        attempt,
                        message: message.clone(),
                    });
                    if total > self.config.max_failures {
                        return Err(SimulationError::TooManyFailures {
                            failures: total,
                            last: message,
                        });
                    }
                }
            }
            attempt += 1;
        }
    }
}

/// Check batch size and roster before any game is dealt.
pub fn validate_roster(games: usize, experiences: &[f64]) -> Result<(), SimulationError> {
    if games == 0 {
        return Err(SimulationError::NoGames);
    }
    if !(RulesConfig::MIN_PLAYERS..=RulesConfig::MAX_PLAYERS).contains(&experiences.len()) {
        return Err(SimulationError::InvalidRoster(experiences.len()));
    }
    if let Some(&bad) = experiences.iter().find(|e| !(0.0..=1.0).contains(*e)) {
        return Err(SimulationError::InvalidExperience(bad));
    }
    Ok(())
}

/// Play `games` completed games with default settings and an entropy seed.
///
/// ## Example
///
/// ```no_run
/// use rust_gems::simulation::run_simulation;
///
/// let summary = run_simulation(100, &[1.0, 0.0]).unwrap();
/// assert_eq!(summary.games, 100);
/// ```
pub fn run_simulation(games: usize, experiences: &[f64]) -> Result<SimulationSummary, SimulationError> {
    Simulator::default().run(games, experiences)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded(seed: u64) -> Simulator {
        Simulator::new(SimulationConfig::new().with_seed(seed))
    }

    #[test]
    fn test_roster_validation() {
        assert_eq!(validate_roster(0, &[1.0, 0.0]), Err(SimulationError::NoGames));
        assert_eq!(validate_roster(1, &[1.0]), Err(SimulationError::InvalidRoster(1)));
        assert_eq!(validate_roster(1, &[0.0; 5]), Err(SimulationError::InvalidRoster(5)));
        assert_eq!(validate_roster(1, &[0.5, 1.5]), Err(SimulationError::InvalidExperience(1.5)));
        assert_eq!(validate_roster(1, &[0.5, -0.1]), Err(SimulationError::InvalidExperience(-0.1)));
        assert_eq!(validate_roster(3, &[0.0, 0.25, 1.0]), Ok(()));
    }

    #[test]
    fn test_play_game_finishes_with_winner() {
        let config = SimulationConfig::new();
        let registry = CardRegistry::standard();
        let mut completed = 0;
        for seed in 0..10 {
            if let Ok(outcome) = play_game(&[1.0, 1.0], &registry, &config, &mut GameRng::new(seed)) {
                assert!(outcome.points[outcome.winner.index()] >= 15);
                assert!(outcome.rounds > 0);
                assert_eq!(outcome.points.len(), 2);
                completed += 1;
            }
        }
        assert!(completed > 0);
    }

    #[test]
    fn test_round_limit_is_a_failure() {
        let config = SimulationConfig::new().with_max_rounds(1);
        let result = play_game(&[1.0, 1.0], &CardRegistry::standard(), &config, &mut GameRng::new(3));
        assert_eq!(result, Err(SimulationError::RoundLimit(1)));
    }

    #[test]
    fn test_run_counts_completed_games() {
        let summary = seeded(21).run(5, &[1.0, 0.0]).unwrap();
        assert_eq!(summary.games, 5);
        assert_eq!(summary.total_wins(), 5);
        assert_eq!(summary.outcomes.len(), 5);
        for (i, outcome) in summary.outcomes.iter().enumerate() {
            assert_eq!(outcome.game_index, i);
        }
    }

    #[test]
    fn test_seeded_runs_reproduce() {
        let a = seeded(5).run(4, &[0.5, 0.5, 0.5]).unwrap();
        let b = seeded(5).run(4, &[0.5, 0.5, 0.5]).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let sequential = seeded(8).run(6, &[1.0, 0.0, 0.5, 0.25]).unwrap();
        let parallel = Simulator::new(SimulationConfig::new().with_seed(8).with_parallel(true))
            .run(6, &[1.0, 0.0, 0.5, 0.25])
            .unwrap();
        assert_eq!(sequential, parallel);
    }

    #[test]
    fn test_failure_ceiling() {
        let config = SimulationConfig::new().with_seed(1).with_max_rounds(1).with_max_failures(3);
        let result = Simulator::new(config).run(2, &[1.0, 1.0]);
        assert_eq!(
            result,
            Err(SimulationError::TooManyFailures {
                failures: 4,
                last: SimulationError::RoundLimit(1).to_string(),
            })
        );
    }
}
