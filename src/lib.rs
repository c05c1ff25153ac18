//! Gapwing: a flappy-bird clone built around a platform-neutral game core.
//!
//! The library holds all game semantics: the ready/playing/game-over state
//! machine, procedural obstacle spawning, bird physics, contact resolution,
//! scrolling, and scoring. Hosts feed it viewport dimensions, a primary
//! input signal, and fixed-step ticks, and draw from the quad list it
//! exposes. The bundled binary is a terminal host on crossterm.

pub mod categories;
pub mod collision;
pub mod config;
pub mod events;
pub mod game;
pub mod physics;
pub mod render;
pub mod scroll;
pub mod spawner;

pub use config::{Config, FIXED_STEP};
pub use events::GameEvent;
pub use game::{Game, GameState};
pub use physics::Bird;
pub use render::{Palette, Quad, Rgb};
pub use scroll::{PipePair, SpawnId};
