//! Integration test: full game flow through the public API only.
//!
//! Drives a seeded [`Game`] the way a host would: primary inputs plus
//! fixed-step ticks, observing state and the emitted event stream.

use gapwing::{Config, Game, GameEvent, GameState, FIXED_STEP};

const WIDTH: f32 = 400.0;
const HEIGHT: f32 = 700.0;

fn tick_for(game: &mut Game, seconds: f32) -> Vec<GameEvent> {
    let mut events = Vec::new();
    let mut elapsed = 0.0;
    while elapsed < seconds {
        events.extend(game.tick(FIXED_STEP));
        elapsed += FIXED_STEP;
    }
    events
}

/// Ticks until the run ends (no flaps, so the bird falls into the ground).
fn tick_until_game_over(game: &mut Game) -> Vec<GameEvent> {
    let mut events = Vec::new();
    for _ in 0..10_000 {
        events.extend(game.tick(FIXED_STEP));
        if game.state() == GameState::GameOver {
            return events;
        }
    }
    panic!("run never ended");
}

#[test]
fn a_full_run_ends_on_the_ground_and_restarts_clean() {
    let mut game = Game::seeded(Config::default(), WIDTH, HEIGHT, 42);
    assert_eq!(game.state(), GameState::Ready);

    let events = game.primary_input();
    assert_eq!(game.state(), GameState::Playing);
    assert!(events.contains(&GameEvent::Started));

    let events = tick_until_game_over(&mut game);
    assert!(events.contains(&GameEvent::Ended { score: 0 }));
    assert!(!game.bird().dynamic);

    let events = game.primary_input();
    assert_eq!(game.state(), GameState::Ready);
    assert!(events.contains(&GameEvent::Reset));
    assert_eq!(game.score(), 0);
    assert!(game.pipes().is_empty());
    assert_eq!(game.bird().vel_y, 0.0);
    assert_eq!(game.bird().rotation, 0.0);
}

#[test]
fn vertical_velocity_respects_both_terminal_speeds() {
    let mut game = Game::seeded(Config::default(), WIDTH, HEIGHT, 5);
    let fall = game.config().terminal_fall_speed;
    let rise = game.config().terminal_rise_speed;
    game.primary_input();

    let mut ticks = 0u32;
    while game.state() == GameState::Playing && ticks < 5_000 {
        if ticks % 25 == 0 {
            game.primary_input();
        }
        game.tick(FIXED_STEP);
        let v = game.bird().vel_y;
        assert!(v >= -fall, "fell faster than terminal: {v}");
        if let Some(rise) = rise {
            assert!(v <= rise, "rose faster than terminal: {v}");
        }
        ticks += 1;
    }
}

#[test]
fn spawns_arrive_on_the_interval_while_playing() {
    let mut game = Game::seeded(Config::default(), WIDTH, HEIGHT, 3);
    game.primary_input();
    let interval = game.config().spawn_interval;

    // Flap steadily so the run outlives the first spawn; stop well before
    // the pipe column reaches the bird.
    let mut events = Vec::new();
    let mut elapsed = 0.0;
    let mut ticks = 0u32;
    while elapsed < interval + 0.05 {
        if ticks % 25 == 0 {
            game.primary_input();
        }
        events.extend(game.tick(FIXED_STEP));
        elapsed += FIXED_STEP;
        ticks += 1;
    }
    assert_eq!(game.state(), GameState::Playing);
    let spawns = events
        .iter()
        .filter(|e| matches!(e, GameEvent::Spawned(_)))
        .count();
    assert_eq!(spawns, 1);
    assert_eq!(game.pipes().len(), 1);

    // Spawned geometry honors the invariants.
    let pipe = &game.pipes()[0];
    assert!(pipe.bottom_height >= 10.0);
    assert!(pipe.top_height >= 10.0);
    assert!(pipe.x >= WIDTH - game.config().scroll_speed * (interval + 0.1));
}

#[test]
fn no_spawns_and_no_panic_on_a_too_small_screen() {
    let mut game = Game::seeded(Config::default(), 400.0, 150.0, 8);
    game.primary_input();
    let duration = game.config().spawn_interval * 2.5;
    let events = tick_for(&mut game, duration);
    assert!(!events.iter().any(|e| matches!(e, GameEvent::Spawned(_))));
    assert!(game.pipes().is_empty());
}

#[test]
fn score_events_never_decrease_within_a_run() {
    let mut game = Game::seeded(Config::default(), WIDTH, HEIGHT, 17);
    game.primary_input();

    let mut last = 0;
    let mut ticks = 0u32;
    while game.state() == GameState::Playing && ticks < 50_000 {
        if ticks % 25 == 0 {
            game.primary_input();
        }
        for event in game.tick(FIXED_STEP) {
            if let GameEvent::ScoreChanged(n) = event {
                assert!(n >= last);
                last = n;
            }
        }
        ticks += 1;
    }
    assert_eq!(game.score(), last);
}

#[test]
fn ticking_in_ready_changes_nothing_observable_but_the_bob() {
    let mut game = Game::seeded(Config::default(), WIDTH, HEIGHT, 4);
    let events = tick_for(&mut game, 1.0);
    assert!(events.is_empty());
    assert_eq!(game.state(), GameState::Ready);
    assert_eq!(game.score(), 0);
    assert!(game.pipes().is_empty());
    assert_eq!(game.bird().vel_y, 0.0);
}

#[test]
fn resize_mid_run_keeps_the_run_alive() {
    let mut game = Game::seeded(Config::default(), WIDTH, HEIGHT, 6);
    game.primary_input();
    tick_for(&mut game, 0.2);
    let score_label = game.score_label_y();

    game.resize(640.0, 900.0);
    assert_eq!(game.state(), GameState::Playing);
    assert_eq!(game.screen(), [640.0, 900.0]);
    assert_ne!(game.score_label_y(), score_label);

    // Bird stays inside the new bounds on subsequent ticks.
    game.tick(FIXED_STEP);
    let half = game.config().bird_size[0] * 0.5;
    let x = game.bird().pos[0];
    assert!(x >= half && x <= 640.0 - half);
}
