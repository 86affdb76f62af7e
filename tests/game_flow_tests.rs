//! End-to-end games through the orchestrator.
//!
//! Dice are scripted so every square a token visits is known in advance.

use heart_ladder::board::{land, SnakesAndLadders, Topology};
use heart_ladder::core::{DiceMode, GameConfig, GamePhase, Pacing, Player, PlayerColor, ScriptedRng};
use heart_ladder::prompts::{PromptCategory, PromptPool};
use heart_ladder::turn::{MissionOutcome, Orchestrator, TurnEvent};
use heart_ladder::{BoardLayout, GameStore, RosterBuilder, SquareKind};

fn roster() -> Vec<Player> {
    let mut builder = RosterBuilder::new();
    builder.set_name(0, "Mina");
    builder.set_name(1, "Joon");
    builder.build().unwrap()
}

fn snakes_game(dice: &[u8]) -> Orchestrator<ScriptedRng> {
    let config = GameConfig::new()
        .with_layout(BoardLayout::SnakesAndLadders)
        .with_dice(DiceMode::Single)
        .with_pacing(Pacing::INSTANT);
    let mut game = Orchestrator::with_parts(
        config,
        Box::new(SnakesAndLadders::classic()),
        PromptPool::standard(),
        ScriptedRng::new().with_dice(dice),
    )
    .unwrap();
    game.new_game(roster()).unwrap();
    game
}

/// Roll, let the move play out, answer successfully if asked.
fn take_turn<R: heart_ladder::RandomSource>(game: &mut Orchestrator<R>) -> Vec<TurnEvent> {
    game.roll().unwrap();
    let events = game.run_until_idle().unwrap();
    if game.state().has_pending_prompt() {
        game.resolve(MissionOutcome::Success).unwrap();
    }
    events
}

/// Mina reaches 97 without touching a snake, then rolls 5.
#[test]
fn test_snakes_exact_overshoot_wins() {
    // Mina: 1 (ladder to 38), 6, 6, 1 (ladder to 67), 4 (ladder to 91), 6, 5
    // Joon: 2, 1, 2, 1, 1, 1
    let mut game = snakes_game(&[1, 2, 6, 1, 6, 2, 1, 1, 4, 1, 6, 1, 5]);
    for _ in 0..12 {
        take_turn(&mut game);
    }
    assert_eq!(game.state().players[0].position, 97);
    assert_eq!(game.state().players[1].position, 8);

    game.roll().unwrap();
    let events = game.run_until_idle().unwrap();

    assert!(matches!(events.first(), Some(TurnEvent::Moved { from: 97, to: 100, .. })));
    assert!(matches!(events.last(), Some(TurnEvent::Won { player_id }) if player_id.as_str() == "1"));
    assert_eq!(game.state().phase, GamePhase::Ended);
    assert_eq!(game.state().players[0].position, 100);
    assert_eq!(game.state().winner.as_ref().map(|p| p.name.as_str()), Some("Mina"));
    assert!(game.state().active_prompt.is_none());
}

/// Mina climbs the 80 ladder straight onto the finish.
#[test]
fn test_ladder_onto_finish_wins_without_prompt() {
    // Mina: 1 (ladder to 38), 6, 6, 1 (ladder to 67), 6, 6, 1 (ladder to 100)
    // Joon: 2, 1, 2, 1, 1, 1
    let mut game = snakes_game(&[1, 2, 6, 1, 6, 2, 1, 1, 6, 1, 6, 1, 1]);
    for _ in 0..12 {
        take_turn(&mut game);
    }
    assert_eq!(game.state().players[0].position, 79);

    game.roll().unwrap();
    let events = game.run_until_idle().unwrap();

    assert_eq!(events.len(), 3);
    assert!(matches!(events[0], TurnEvent::Moved { from: 79, to: 80, .. }));
    assert!(matches!(
        events[1],
        TurnEvent::Redirected { from: 80, to: 100, via: SquareKind::Praise, .. }
    ));
    assert!(matches!(&events[2], TurnEvent::Won { player_id } if player_id.as_str() == "1"));
    assert_eq!(game.state().phase, GamePhase::Ended);
    assert_eq!(game.state().winner.as_ref().map(|p| p.position), Some(100));
    assert!(game.state().active_prompt.is_none());
}

#[test]
fn test_land_clamps_97_plus_5() {
    let board = SnakesAndLadders::classic();
    let landing = land(&board, 97, 5);

    assert_eq!(landing.landed, 100);
    assert_eq!(landing.resting, 100);
    assert_eq!(landing.kind, SquareKind::Finish);
}

/// Mina walks to 28 and climbs to 84.
const TO_LADDER_28: [u8; 9] = [6, 2, 6, 1, 6, 2, 5, 1, 5];

#[test]
fn test_ladder_prompt_follows_resting_square() {
    let mut game = snakes_game(&TO_LADDER_28);
    for _ in 0..8 {
        take_turn(&mut game);
    }
    assert_eq!(game.state().players[0].position, 23);

    game.roll().unwrap();
    let events = game.run_until_idle().unwrap();

    assert!(matches!(
        events.get(1),
        Some(TurnEvent::Redirected { from: 28, to: 84, via: SquareKind::Praise, .. })
    ));
    assert_eq!(game.state().players[0].position, 84);
    let prompt = game.state().active_prompt.clone().unwrap();
    assert_eq!(prompt.category, PromptCategory::Normal);
}

#[test]
fn test_fail_after_ladder_returns_to_pre_roll_square() {
    let mut game = snakes_game(&TO_LADDER_28);
    for _ in 0..8 {
        take_turn(&mut game);
    }

    game.roll().unwrap();
    game.run_until_idle().unwrap();
    let events = game.resolve(MissionOutcome::Fail).unwrap();

    assert_eq!(game.state().players[0].position, 23);
    assert!(matches!(events.last(), Some(TurnEvent::TurnPassed { player_id }) if player_id.as_str() == "2"));
}

#[test]
fn test_snake_head_draws_heart_then_normal() {
    // Joon lands on 16 and slides to 6
    let config = GameConfig::new()
        .with_dice(DiceMode::Single)
        .with_pacing(Pacing::INSTANT);
    let board = SnakesAndLadders::new(30, &[], &[(16, 6)]);
    assert_eq!(board.classify(16), SquareKind::Heart);

    let mut game = Orchestrator::with_parts(
        config,
        Box::new(board),
        PromptPool::standard(),
        ScriptedRng::new().with_dice(&[2, 6, 2, 5, 2, 5]),
    )
    .unwrap();
    game.new_game(roster()).unwrap();

    for _ in 0..5 {
        take_turn(&mut game);
    }
    assert_eq!(game.state().players[1].position, 11);

    game.roll().unwrap();
    let events = game.run_until_idle().unwrap();

    assert!(matches!(events.get(1), Some(TurnEvent::Redirected { via: SquareKind::Heart, to: 6, .. })));
    assert_eq!(game.state().active_prompt.as_ref().map(|p| p.category), Some(PromptCategory::Normal));
}

#[test]
fn test_subscriber_observes_whole_game() {
    use std::cell::RefCell;
    use std::rc::Rc;

    let mut game = snakes_game(&[1, 2, 6, 1, 6, 2, 1, 1, 4, 1, 6, 1, 5]);
    let phases = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&phases);
    game.subscribe(move |state| sink.borrow_mut().push(state.phase));

    for _ in 0..13 {
        take_turn(&mut game);
    }

    let phases = phases.borrow();
    assert_eq!(phases.last(), Some(&GamePhase::Ended));
    assert!(phases[..phases.len() - 1].iter().all(|p| *p == GamePhase::Playing));
}

#[test]
fn test_history_replays_to_same_state() {
    let mut game = snakes_game(&TO_LADDER_28);
    for _ in 0..9 {
        take_turn(&mut game);
    }

    let mut replay = GameStore::new();
    for record in game.store().history().iter() {
        assert_eq!(replay.dispatch(record.action.clone()), record.applied);
    }

    assert_eq!(replay.state(), game.state());
}

#[test]
fn test_reset_mid_move_then_new_game() {
    let config = GameConfig::new().with_dice(DiceMode::Single);
    let mut game = Orchestrator::new(config).unwrap();
    game.new_game(roster()).unwrap();

    game.roll().unwrap();
    game.advance(std::time::Duration::from_millis(1000)).unwrap();
    assert!(game.state().is_moving);

    game.reset();
    assert_eq!(game.state().phase, GamePhase::Setup);
    assert!(!game.state().is_moving);

    let events = game.run_until_idle().unwrap();
    assert!(events.is_empty());
    assert_eq!(game.state().phase, GamePhase::Setup);

    let mut players = roster();
    players[1].color = PlayerColor::Green;
    game.new_game(players).unwrap();
    assert!(game.state().players.iter().all(|p| p.position == 0));
    assert!(game.roll().is_ok());
}
