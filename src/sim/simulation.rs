//! Headless auto-play.
//!
//! Plays whole games through the orchestrator with a coin-flip answer
//! policy. Useful for balancing boards (how long does a game last, how
//! often do rollbacks happen) and for exercising the state machine end to
//! end.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::core::{GameConfig, GameRng, Player, PlayerId, RandomSource, RosterBuilder};
use crate::error::GameResult;
use crate::turn::{MissionOutcome, Orchestrator, TurnEvent};

/// Configuration for a simulation batch.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Game settings. The seed is the batch seed; each game forks its own.
    pub game: GameConfig,

    /// Players per game.
    pub players: usize,

    /// Games per batch.
    pub games: usize,

    /// Probability that a prompt is answered successfully.
    pub success_probability: f64,

    /// Rolls after which an unfinished game is abandoned.
    pub max_rolls: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            game: GameConfig::default(),
            players: 2,
            games: 100,
            success_probability: 0.8,
            max_rolls: 1000,
        }
    }
}

impl SimulationConfig {
    /// Create a default config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the game settings.
    pub fn with_game(mut self, game: GameConfig) -> Self {
        self.game = game;
        self
    }

    /// Set players per game.
    pub fn with_players(mut self, players: usize) -> Self {
        self.players = players;
        self
    }

    /// Set games per batch.
    pub fn with_games(mut self, games: usize) -> Self {
        self.games = games;
        self
    }

    /// Set the answer success probability (clamped to 0-1, NaN reads as 0).
    pub fn with_success_probability(mut self, probability: f64) -> Self {
        self.success_probability = if probability.is_nan() {
            0.0
        } else {
            probability.clamp(0.0, 1.0)
        };
        self
    }

    /// Set the roll cap.
    pub fn with_max_rolls(mut self, max: usize) -> Self {
        self.max_rolls = max;
        self
    }
}

/// What happened in one simulated game.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    /// Seed the game ran with.
    pub seed: u64,
    /// Winner, if the game finished within the roll cap.
    pub winner: Option<PlayerId>,
    /// Rolls thrown.
    pub rolls: usize,
    /// Rolls that were doubles.
    pub doubles: usize,
    /// Ladders and snakes taken.
    pub redirects: usize,
    /// Prompts shown.
    pub prompts: usize,
    /// Prompts failed (each one a rollback).
    pub rollbacks: usize,
}

impl GameSummary {
    /// True if someone won.
    #[must_use]
    pub fn finished(&self) -> bool {
        self.winner.is_some()
    }
}

/// Results of a batch.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SimulationReport {
    /// One summary per game, in play order.
    pub games: Vec<GameSummary>,
}

impl SimulationReport {
    /// Games that produced a winner.
    #[must_use]
    pub fn finished(&self) -> usize {
        self.games.iter().filter(|g| g.finished()).count()
    }

    /// Games won by a given player.
    #[must_use]
    pub fn wins(&self, player: &PlayerId) -> usize {
        self.games.iter().filter(|g| g.winner.as_ref() == Some(player)).count()
    }

    /// Average rolls per game, 0 for an empty batch.
    #[must_use]
    pub fn mean_rolls(&self) -> f64 {
        if self.games.is_empty() {
            return 0.0;
        }
        self.games.iter().map(|g| g.rolls).sum::<usize>() as f64 / self.games.len() as f64
    }
}

/// Runs simulated games.
#[derive(Clone, Debug)]
pub struct Simulation {
    config: SimulationConfig,
}

impl Simulation {
    /// Create a simulation.
    #[must_use]
    pub fn new(config: SimulationConfig) -> Self {
        Self { config }
    }

    /// Configuration in use.
    #[must_use]
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Play a single game with the given seed.
    pub fn play_game(&self, seed: u64) -> GameResult<GameSummary> {
        let mut game = Orchestrator::new(self.config.game.clone().with_seed(seed))?;
        let mut answers = GameRng::new(seed).for_context("missions");
        game.new_game(self.roster()?)?;

        let mut summary = GameSummary {
            seed,
            ..GameSummary::default()
        };

        while summary.rolls < self.config.max_rolls && !game.state().is_ended() {
            let roll = game.roll()?;
            summary.rolls += 1;
            if roll.is_double() {
                summary.doubles += 1;
            }

            for event in game.run_until_idle()? {
                match event {
                    TurnEvent::Redirected { .. } => summary.redirects += 1,
                    TurnEvent::PromptShown { .. } => summary.prompts += 1,
                    TurnEvent::Won { player_id } => summary.winner = Some(player_id),
                    _ => {}
                }
            }

            if game.state().has_pending_prompt() {
                let outcome = if answers.chance(self.config.success_probability) {
                    MissionOutcome::Success
                } else {
                    summary.rollbacks += 1;
                    MissionOutcome::Fail
                };
                game.resolve(outcome)?;
            }
        }

        debug!(seed, rolls = summary.rolls, finished = summary.finished(), "simulated game");
        Ok(summary)
    }

    /// Play the configured number of games.
    ///
    /// Game seeds are forked from the batch seed, so a batch is reproducible.
    pub fn run(&self) -> GameResult<SimulationReport> {
        let mut seeds = GameRng::new(self.config.game.seed);
        let mut report = SimulationReport::default();

        for _ in 0..self.config.games {
            let seed = seeds.fork().seed();
            report.games.push(self.play_game(seed)?);
        }

        info!(
            games = report.games.len(),
            finished = report.finished(),
            mean_rolls = report.mean_rolls(),
            "simulation complete"
        );
        Ok(report)
    }

    fn roster(&self) -> GameResult<Vec<Player>> {
        let mut builder = RosterBuilder::new();
        builder.set_player_count(self.config.players)?;
        for seat in 0..self.config.players {
            builder.set_name(seat, format!("Player {}", seat + 1));
        }
        builder.build()
    }
}
