//! Per-game outcomes and batch aggregates.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::{GameState, PlayerId};

/// Final numbers of one completed game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameOutcome {
    /// Index of the game within its batch.
    pub game_index: usize,

    /// Attempts it took, failures included.
    pub attempts: u64,

    pub winner: PlayerId,

    /// Points per seat.
    pub points: Vec<u32>,

    /// Patrons claimed per seat.
    pub patrons: Vec<usize>,

    /// Rounds started, counted when seat 0 is about to act.
    pub rounds: u32,
}

impl GameOutcome {
    /// Read the outcome off a finished game. `None` if nobody has won.
    #[must_use]
    pub fn from_state(state: &GameState, game_index: usize, rounds: u32) -> Option<Self> {
        let winner = state.winner?;
        Some(Self {
            game_index,
            attempts: 1,
            winner,
            points: state.players.values().map(|p| p.points).collect(),
            patrons: state.players.values().map(|p| p.patrons.len()).collect(),
            rounds,
        })
    }
}

/// A failed attempt. The game index was retried with a fresh stream.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameFailure {
    pub game_index: usize,
    pub attempt: u64,
    pub message: String,
}

/// Aggregates for one seat.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayerSummary {
    pub experience: f64,
    pub wins: usize,

    /// Wins over games, as a fraction in [0, 1].
    pub win_rate: f64,

    pub average_points: f64,
    pub average_patrons: f64,
}

/// Aggregates for a batch of games with one roster.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimulationSummary {
    /// Completed games.
    pub games: usize,

    /// One entry per seat, in seat order.
    pub players: Vec<PlayerSummary>,

    /// Mean rounds per completed game.
    pub average_turns: f64,

    /// Messages of failed attempts, in game order.
    pub failures: Vec<String>,

    /// Per-game detail, in game order.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub outcomes: Vec<GameOutcome>,
}

impl SimulationSummary {
    /// Aggregate completed games for a roster.
    ///
    /// Averages are zero for an empty batch.
    #[must_use]
    pub fn from_outcomes(experiences: &[f64], outcomes: Vec<GameOutcome>, failures: &[GameFailure]) -> Self {
        let games = outcomes.len();
        let per_game = |total: f64| if games == 0 { 0.0 } else { total / games as f64 };

        let players = experiences
            .iter()
            .enumerate()
            .map(|(seat, &experience)| {
                let wins = outcomes.iter().filter(|o| o.winner.index() == seat).count();
                let points: u32 = outcomes.iter().map(|o| o.points.get(seat).copied().unwrap_or(0)).sum();
                let patrons: usize = outcomes.iter().map(|o| o.patrons.get(seat).copied().unwrap_or(0)).sum();
                PlayerSummary {
                    experience,
                    wins,
                    win_rate: per_game(wins as f64),
                    average_points: per_game(f64::from(points)),
                    average_patrons: per_game(patrons as f64),
                }
            })
            .collect();

        let rounds: u32 = outcomes.iter().map(|o| o.rounds).sum();

        Self {
            games,
            players,
            average_turns: per_game(f64::from(rounds)),
            failures: failures.iter().map(|f| f.message.clone()).collect(),
            outcomes,
        }
    }

    /// Drop per-game detail, keeping only aggregates.
    #[must_use]
    pub fn without_outcomes(mut self) -> Self {
        self.outcomes.clear();
        self
    }

    /// Total wins across seats; equals `games`.
    #[must_use]
    pub fn total_wins(&self) -> usize {
        self.players.iter().map(|p| p.wins).sum()
    }
}

impl fmt::Display for SimulationSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} games, {:.1} rounds on average, {} failures",
            self.games,
            self.average_turns,
            self.failures.len()
        )?;
        writeln!(f, "seat  experience  wins  win%    points  patrons")?;
        for (seat, p) in self.players.iter().enumerate() {
            writeln!(
                f,
                "P{:<4} {:>10.2} {:>5} {:>5.1} {:>9.2} {:>8.2}",
                seat + 1,
                p.experience,
                p.wins,
                p.win_rate * 100.0,
                p.average_points,
                p.average_patrons
            )?;
        }
        Ok(())
    }
}
