//! Turn orchestrator: sequences reducer actions around rolls and answers.
//!
//! ## Roll sequence
//!
//! 1. `RollDice`, then `SetPreviousPosition` with the pre-roll square
//! 2. after the roll delay: `SetMoving(true)`, `MovePlayer` to the clamped square
//! 3. after the move delay: `SetMoving(false)`, then either `EndGame` on the
//!    finish, or a second `MovePlayer` for a shortcut followed by
//!    `SetQuestion` with a prompt matching the resting square
//!
//! ## Answer sequence
//!
//! `MissionSuccess` or `MissionFail`, then `NextTurn`.
//!
//! The orchestrator checks preconditions the presentation layer is expected
//! to enforce anyway (no roll while moving, no roll over an open prompt)
//! and reports them as `GameError`s.

use tracing::{debug, info, instrument, warn};

use super::timeline::Timeline;
use crate::board::{land, Landing, SquareKind, Topology};
use crate::core::{
    validate_roster, DiceRoll, GameAction, GameConfig, GameRng, GameState, Player, PlayerId, RandomSource,
};
use crate::error::{GameError, GameResult};
use crate::prompts::{Prompt, PromptPool};
use crate::rules::{GameStore, SubscriberId};

/// How a player did on their prompt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MissionOutcome {
    /// Answered; the player stays where they landed.
    Success,
    /// Declined; the player returns to the square they rolled from.
    Fail,
}

/// Something the presentation layer may want to animate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TurnEvent {
    /// Token moved by the dice.
    Moved { player_id: PlayerId, from: u32, to: u32 },
    /// Token followed a ladder (`Praise`) or snake (`Heart`).
    Redirected {
        player_id: PlayerId,
        from: u32,
        to: u32,
        via: SquareKind,
    },
    /// Prompt opened for the resting square.
    PromptShown { player_id: PlayerId, square: u32, prompt: Prompt },
    /// Token reached the finish.
    Won { player_id: PlayerId },
    /// Prompt answered.
    MissionResolved {
        player_id: PlayerId,
        outcome: MissionOutcome,
        position: u32,
    },
    /// The turn moved to another player.
    TurnPassed { player_id: PlayerId },
    /// The last roll was a double; same player again.
    ExtraTurn { player_id: PlayerId },
}

#[derive(Clone, Debug)]
enum Step {
    BeginMove { player_id: PlayerId, from: u32, steps: u32 },
    Settle { player_id: PlayerId, landing: Landing },
}

/// Drives one game at a time on top of a `GameStore`.
pub struct Orchestrator<R: RandomSource = GameRng> {
    config: GameConfig,
    store: GameStore,
    board: Box<dyn Topology>,
    prompts: PromptPool,
    rng: R,
    timeline: Timeline<Step>,
}

impl Orchestrator<GameRng> {
    /// Build from configuration: configured board, stock prompts, seeded RNG.
    pub fn new(config: GameConfig) -> GameResult<Self> {
        let board = config.layout.build();
        let rng = GameRng::new(config.seed);
        Self::with_parts(config, board, PromptPool::standard(), rng)
    }
}

impl<R: RandomSource> Orchestrator<R> {
    /// Build from explicit parts.
    ///
    /// Fails if some square a token can rest on has no prompts.
    pub fn with_parts(config: GameConfig, board: Box<dyn Topology>, prompts: PromptPool, rng: R) -> GameResult<Self> {
        prompts.covers(board.as_ref())?;
        Ok(Self {
            config,
            store: GameStore::new(),
            board,
            prompts,
            rng,
            timeline: Timeline::new(),
        })
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        self.store.state()
    }

    /// The underlying store, for history and snapshots.
    #[must_use]
    pub fn store(&self) -> &GameStore {
        &self.store
    }

    /// Board in play.
    #[must_use]
    pub fn board(&self) -> &dyn Topology {
        self.board.as_ref()
    }

    /// Configuration in use.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Player holding the turn.
    #[must_use]
    pub fn current_player(&self) -> Option<&Player> {
        self.store.current_player()
    }

    /// Current reading of the virtual clock.
    #[must_use]
    pub fn now(&self) -> std::time::Duration {
        self.timeline.now()
    }

    /// True if no step of the current game is waiting to fire.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        !self.timeline.has_current()
    }

    /// Subscribe to state changes.
    pub fn subscribe(&mut self, listener: impl FnMut(&GameState) + 'static) -> SubscriberId {
        self.store.subscribe(listener)
    }

    /// Remove a subscription.
    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        self.store.unsubscribe(id)
    }

    /// Discard the current game and start a new one with `players`.
    ///
    /// Steps still scheduled for the old game are dropped when they come due.
    #[instrument(skip(self, players), fields(players = players.len()))]
    pub fn new_game(&mut self, players: Vec<Player>) -> GameResult<()> {
        validate_roster(&players, self.config.min_players, self.config.max_players)?;

        self.timeline.bump_epoch();
        self.store.dispatch(GameAction::ResetGame);
        let players = players.into_iter().map(|p| p.at(0)).collect();
        self.store.dispatch(GameAction::SetPlayers { players });
        self.store.dispatch(GameAction::StartGame);
        info!(board = self.board.name(), "new game");
        Ok(())
    }

    /// Abandon the current game and return to setup.
    pub fn reset(&mut self) {
        self.timeline.bump_epoch();
        self.store.dispatch(GameAction::ResetGame);
    }

    /// Roll for the current player.
    ///
    /// Records the roll and the rollback square immediately; the move itself
    /// happens once the roll delay has elapsed.
    #[instrument(skip(self))]
    pub fn roll(&mut self) -> GameResult<DiceRoll> {
        let (player_id, from) = self.roll_target().inspect_err(|e| warn!(error = %e, "roll rejected"))?;

        let roll = DiceRoll::throw(self.config.dice, &mut self.rng);
        debug!(player = %player_id, %roll, "rolled");

        self.store.dispatch(GameAction::RollDice { roll: roll.clone() });
        self.store.dispatch(GameAction::SetPreviousPosition {
            player_id: player_id.clone(),
            position: from,
        });
        self.timeline.schedule(
            self.config.pacing.roll_delay(),
            Step::BeginMove {
                player_id,
                from,
                steps: roll.total(),
            },
        );
        Ok(roll)
    }

    /// Answer the open prompt and hand the turn on.
    #[instrument(skip(self))]
    pub fn resolve(&mut self, outcome: MissionOutcome) -> GameResult<Vec<TurnEvent>> {
        let state = self.store.state();
        if !state.is_playing() {
            return Err(GameError::NotPlaying);
        }
        if state.active_prompt.is_none() {
            return Err(GameError::NoPendingPrompt);
        }
        let player_id = state.current_player().ok_or(GameError::NoCurrentPlayer)?.id.clone();
        let extra_turn = state.is_double;

        match outcome {
            MissionOutcome::Success => self.store.dispatch(GameAction::MissionSuccess),
            MissionOutcome::Fail => self.store.dispatch(GameAction::MissionFail {
                player_id: player_id.clone(),
            }),
        };
        let position = self.position_of(&player_id);
        self.store.dispatch(GameAction::NextTurn);

        let mut events = vec![TurnEvent::MissionResolved {
            player_id: player_id.clone(),
            outcome,
            position,
        }];
        if extra_turn {
            events.push(TurnEvent::ExtraTurn { player_id });
        } else if let Some(next) = self.store.current_player() {
            events.push(TurnEvent::TurnPassed {
                player_id: next.id.clone(),
            });
        }
        Ok(events)
    }

    /// Advance the virtual clock by `elapsed`, firing every step that comes due.
    pub fn advance(&mut self, elapsed: std::time::Duration) -> GameResult<Vec<TurnEvent>> {
        let target = self.timeline.now() + elapsed;
        let mut events = Vec::new();
        while let Some(scheduled) = self.timeline.pop_due(target) {
            if scheduled.epoch != self.timeline.epoch() {
                warn!(epoch = scheduled.epoch, "dropping step from an abandoned game");
                continue;
            }
            events.extend(self.fire(scheduled.step)?);
        }
        self.timeline.advance_clock(target);
        Ok(events)
    }

    /// Fire every pending step, however far in the future.
    pub fn run_until_idle(&mut self) -> GameResult<Vec<TurnEvent>> {
        let mut events = Vec::new();
        while let Some(due) = self.timeline.next_due() {
            let elapsed = due.saturating_sub(self.timeline.now());
            events.extend(self.advance(elapsed)?);
        }
        Ok(events)
    }

    fn roll_target(&self) -> GameResult<(PlayerId, u32)> {
        let state = self.store.state();
        if !state.is_playing() {
            return Err(GameError::NotPlaying);
        }
        if state.is_moving {
            return Err(GameError::Moving);
        }
        if let Some(prompt) = &state.active_prompt {
            return Err(GameError::PromptPending(prompt.id.clone()));
        }
        if self.timeline.has_current() {
            return Err(GameError::RollInFlight);
        }
        let player = state.current_player().ok_or(GameError::NoCurrentPlayer)?;
        Ok((player.id.clone(), player.position))
    }

    fn fire(&mut self, step: Step) -> GameResult<Vec<TurnEvent>> {
        match step {
            Step::BeginMove { player_id, from, steps } => Ok(self.begin_move(player_id, from, steps)),
            Step::Settle { player_id, landing } => self.settle(player_id, landing),
        }
    }

    fn begin_move(&mut self, player_id: PlayerId, from: u32, steps: u32) -> Vec<TurnEvent> {
        let landing = land(self.board.as_ref(), from, steps);

        self.store.dispatch(GameAction::SetMoving { moving: true });
        self.store.dispatch(GameAction::MovePlayer {
            player_id: player_id.clone(),
            position: landing.landed,
        });
        self.timeline.schedule(
            self.config.pacing.move_delay(),
            Step::Settle {
                player_id: player_id.clone(),
                landing,
            },
        );
        vec![TurnEvent::Moved {
            player_id,
            from,
            to: landing.landed,
        }]
    }

    fn settle(&mut self, player_id: PlayerId, landing: Landing) -> GameResult<Vec<TurnEvent>> {
        self.store.dispatch(GameAction::SetMoving { moving: false });
        let mut events = Vec::new();

        if landing.redirected() {
            self.store.dispatch(GameAction::MovePlayer {
                player_id: player_id.clone(),
                position: landing.resting,
            });
            events.push(TurnEvent::Redirected {
                player_id: player_id.clone(),
                from: landing.landed,
                to: landing.resting,
                via: self.board.classify(landing.landed),
            });
        }

        let Some(category) = landing.kind.prompt_category() else {
            if let Some(winner) = self.store.state().player(&player_id).cloned() {
                self.store.dispatch(GameAction::EndGame { winner });
                events.push(TurnEvent::Won { player_id });
            }
            return Ok(events);
        };

        let prompt = self.prompts.draw(category, &mut self.rng)?.clone();
        debug!(player = %player_id, square = landing.resting, prompt = %prompt.id, "prompt drawn");
        self.store.dispatch(GameAction::SetQuestion { prompt: prompt.clone() });
        events.push(TurnEvent::PromptShown {
            player_id,
            square: landing.resting,
            prompt,
        });
        Ok(events)
    }

    fn position_of(&self, player_id: &PlayerId) -> u32 {
        self.store.state().player(player_id).map_or(0, |p| p.position)
    }
}
