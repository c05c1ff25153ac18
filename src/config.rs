/// Simulation timestep used by hosts driving [`crate::Game::tick`].
pub const FIXED_STEP: f32 = 1.0 / 120.0;

/// Session-immutable tunables. Constructed once by the host; the game never
/// mutates these after creation.
///
/// The coordinate system is y-up: the ground occupies `[0, ground_height]`
/// and the ceiling sits at the screen height.
#[derive(Clone, Debug)]
pub struct Config {
    /// Constant downward acceleration, world units per second squared.
    pub gravity: f32,
    /// Vertical velocity written directly on flap (an overwrite, not an
    /// additive impulse, for a consistent jump height).
    pub flap_velocity: f32,
    /// Maximum falling speed, stored as a positive magnitude.
    pub terminal_fall_speed: f32,
    /// Optional cap on upward speed. `None` leaves rising speed unclamped.
    pub terminal_rise_speed: Option<f32>,
    /// Horizontal speed of obstacles, world units per second.
    pub scroll_speed: f32,
    /// Seconds between obstacle spawns while playing.
    pub spawn_interval: f32,
    pub pipe_width: f32,
    pub ground_height: f32,
    /// Bird sprite size (width, height).
    pub bird_size: [f32; 2],
    /// Collision circle radius. Kept below the visual half-size so the
    /// hitbox forgives near misses.
    pub bird_radius: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            gravity: 1400.0,
            flap_velocity: 420.0,
            terminal_fall_speed: 700.0,
            terminal_rise_speed: Some(600.0),
            scroll_speed: 160.0,
            spawn_interval: 1.4,
            pipe_width: 80.0,
            ground_height: 96.0,
            bird_size: [48.0, 36.0],
            bird_radius: 16.0,
        }
    }
}

impl Config {
    /// True when the collision circle fits inside the visual sprite.
    pub fn radius_fits_sprite(&self) -> bool {
        let half = self.bird_size[0].min(self.bird_size[1]) * 0.5;
        self.bird_radius <= half
    }
}
