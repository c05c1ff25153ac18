//! Finite-state game flow: ready -> playing -> game-over -> ready.
//!
//! [`Game`] owns the bird, the score, the spawn timer, and the obstacle
//! registry, and orchestrates the stateless services (spawner, physics,
//! collision resolver, scroll controller) once per simulation tick.

use log::debug;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::categories;
use crate::collision::{self, ContactOutcome};
use crate::config::Config;
use crate::events::GameEvent;
use crate::physics::{self, Bird};
use crate::scroll::{PipePair, ScrollController, SpawnId};
use crate::spawner;

/// Cosmetic idle bob while waiting for the first input.
const READY_BOB_SPEED: f32 = 3.5;
const READY_BOB_HEIGHT: f32 = 12.0;
/// Score label offset from the top of the viewport.
const SCORE_LABEL_TOP_OFFSET: f32 = 60.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameState {
    Ready,
    Playing,
    GameOver,
}

#[derive(Debug)]
pub struct Game {
    config: Config,
    state: GameState,
    screen: [f32; 2],
    rng: SmallRng,
    bird: Bird,
    scroll: ScrollController,
    score: u32,
    best_score: u32,
    spawn_accum: f32,
    bob_time: f32,
}

impl Game {
    pub fn new(config: Config, width: f32, height: f32) -> Self {
        Self::with_rng(config, width, height, SmallRng::from_entropy())
    }

    /// Deterministic construction for tests and replays.
    pub fn seeded(config: Config, width: f32, height: f32, seed: u64) -> Self {
        Self::with_rng(config, width, height, SmallRng::seed_from_u64(seed))
    }

    fn with_rng(config: Config, width: f32, height: f32, rng: SmallRng) -> Self {
        let screen = [width.max(1.0), height.max(1.0)];
        let bird = Bird::at_start(&config, screen);
        Self {
            config,
            state: GameState::Ready,
            screen,
            rng,
            bird,
            scroll: ScrollController::new(),
            score: 0,
            best_score: 0,
            spawn_accum: 0.0,
            bob_time: 0.0,
        }
    }

    /// The single abstracted tap/click. Drives every input-triggered state
    /// transition; anything undefined for the current state is a no-op.
    pub fn primary_input(&mut self) -> Vec<GameEvent> {
        let mut events = Vec::new();
        match self.state {
            GameState::Ready => {
                self.state = GameState::Playing;
                self.score = 0;
                self.bird.dynamic = true;
                self.spawn_accum = 0.0;
                debug!("run started");
                events.push(GameEvent::Started);
                events.push(GameEvent::ScoreChanged(0));
                self.flap(&mut events);
            }
            GameState::Playing => self.flap(&mut events),
            GameState::GameOver => {
                self.reset_to_ready();
                events.push(GameEvent::Reset);
                events.push(GameEvent::ScoreChanged(0));
            }
        }
        events
    }

    /// One simulation tick. The host calls this at [`crate::FIXED_STEP`].
    pub fn tick(&mut self, dt: f32) -> Vec<GameEvent> {
        let mut events = Vec::new();
        if dt <= 0.0 {
            return events;
        }
        match self.state {
            GameState::Ready => {
                self.bob_time += dt;
                self.apply_ready_bob();
            }
            GameState::Playing => self.tick_playing(dt, &mut events),
            // Everything is frozen; only input can leave this state.
            GameState::GameOver => {}
        }
        events
    }

    /// Updates viewport dimensions without resetting the run. The bird is
    /// re-clamped into bounds; live obstacles keep their tracks.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.screen = [width.max(1.0), height.max(1.0)];
        let half_width = self.config.bird_size[0] * 0.5;
        self.bird.pos[0] = self
            .bird
            .pos[0]
            .min(self.screen[0] - half_width)
            .max(half_width);
        self.bird.pos[1] = self.bird.pos[1].min(self.screen[1]);
    }

    fn tick_playing(&mut self, dt: f32, events: &mut Vec<GameEvent>) {
        // Spawn timer: periodic, checked once per tick on this same logical
        // thread, so stopping it amounts to leaving the Playing state.
        self.spawn_accum += dt;
        while self.spawn_accum >= self.config.spawn_interval {
            self.spawn_accum -= self.config.spawn_interval;
            if let Some(blueprint) = spawner::spawn(&self.config, self.screen, &mut self.rng) {
                let id = self.scroll.insert(blueprint, &self.config, self.screen);
                events.push(GameEvent::Spawned(id));
            }
        }

        let grounded = physics::step(&mut self.bird, &self.config, self.screen, dt);
        if grounded
            && collision::resolve(categories::BIRD, categories::GROUND)
                == ContactOutcome::Terminate
        {
            self.enter_game_over(events);
            return;
        }

        self.scroll.advance(dt, &self.config);

        let mut scored = Vec::new();
        for pipe in self.scroll.pipes() {
            for (rect, category) in pipe.collidables(&self.config) {
                if !physics::circle_intersects_rect(self.bird.pos, self.bird.radius, rect) {
                    continue;
                }
                match collision::resolve(categories::BIRD, category) {
                    ContactOutcome::Terminate => {
                        self.enter_game_over(events);
                        return;
                    }
                    ContactOutcome::Score => scored.push(pipe.id),
                    ContactOutcome::Ignore => {}
                }
            }
        }
        for id in scored {
            if self.scroll.mark_scored(id) {
                self.score += 1;
                debug!("score {}", self.score);
                events.push(GameEvent::ScoreChanged(self.score));
            }
        }
    }

    fn flap(&mut self, events: &mut Vec<GameEvent>) {
        if self.state != GameState::Playing {
            return;
        }
        physics::flap(&mut self.bird, &self.config);
        events.push(GameEvent::Flapped);
    }

    fn enter_game_over(&mut self, events: &mut Vec<GameEvent>) {
        if self.state != GameState::Playing {
            return;
        }
        self.state = GameState::GameOver;
        self.spawn_accum = 0.0;
        self.scroll.freeze();
        self.bird.dynamic = false;
        if self.score > self.best_score {
            self.best_score = self.score;
        }
        debug!("run ended, score {}", self.score);
        events.push(GameEvent::Ended { score: self.score });
    }

    fn reset_to_ready(&mut self) {
        self.state = GameState::Ready;
        self.scroll.clear();
        self.bird = Bird::at_start(&self.config, self.screen);
        self.score = 0;
        self.spawn_accum = 0.0;
        self.bob_time = 0.0;
    }

    fn apply_ready_bob(&mut self) {
        let base = Bird::at_start(&self.config, self.screen).pos[1];
        self.bird.pos[1] = base + (self.bob_time * READY_BOB_SPEED).sin() * READY_BOB_HEIGHT;
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn best_score(&self) -> u32 {
        self.best_score
    }

    pub fn bird(&self) -> &Bird {
        &self.bird
    }

    pub fn pipes(&self) -> &[PipePair] {
        self.scroll.pipes()
    }

    pub fn is_scored(&self, id: SpawnId) -> bool {
        self.scroll.is_scored(id)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn screen(&self) -> [f32; 2] {
        self.screen
    }

    /// Viewport-anchored HUD position for the score label, measured y-up.
    /// Follows resizes; does not touch game state.
    pub fn score_label_y(&self) -> f32 {
        (self.screen[1] - SCORE_LABEL_TOP_OFFSET).max(0.0)
    }

    pub fn status_text(&self) -> &'static str {
        match self.state {
            GameState::Ready => "Tap or press Space to start",
            GameState::Playing => "",
            GameState::GameOver => "Game over - tap to restart",
        }
    }
}
