//! Notifications emitted by the flow controller for the presentation layer.

use crate::scroll::SpawnId;

/// One notification per observable state change. Hosts react to these
/// (HUD updates, sounds) instead of polling for mutations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameEvent {
    /// Ready -> Playing transition happened.
    Started,
    /// The bird received upward velocity.
    Flapped,
    /// Score counter changed; carries the new value.
    ScoreChanged(u32),
    /// A new obstacle pair entered the world.
    Spawned(SpawnId),
    /// Playing -> GameOver transition happened.
    Ended { score: u32 },
    /// GameOver -> Ready transition happened; world is back at start.
    Reset,
}
