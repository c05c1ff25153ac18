//! Bird kinematics and the geometry primitives shared by collision checks.

use crate::config::Config;

/// Visual tilt is derived from vertical velocity, scaled by this divisor
/// and clamped to +/-0.5 radians. Purely cosmetic.
const ROTATION_VELOCITY_SCALE: f32 = 400.0;
const MAX_TILT: f32 = 0.5;

#[derive(Clone, Copy, Debug)]
pub struct Bird {
    pub pos: [f32; 2],
    /// Vertical velocity; horizontal velocity is implicitly zero.
    pub vel_y: f32,
    /// Radians, positive tilting up.
    pub rotation: f32,
    pub radius: f32,
    /// Gravity and velocity apply only while this is set (Playing state).
    pub dynamic: bool,
}

impl Bird {
    pub fn at_start(config: &Config, screen: [f32; 2]) -> Self {
        Self {
            pos: [screen[0] * 0.28, screen[1] * 0.55],
            vel_y: 0.0,
            rotation: 0.0,
            radius: config.bird_radius,
            dynamic: false,
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Rect {
    pub min: [f32; 2],
    pub size: [f32; 2],
}

impl Rect {
    pub fn max_x(&self) -> f32 {
        self.min[0] + self.size[0]
    }

    pub fn max_y(&self) -> f32 {
        self.min[1] + self.size[1]
    }
}

/// Circle/rect overlap via the closest point on the rect.
pub fn circle_intersects_rect(center: [f32; 2], radius: f32, rect: Rect) -> bool {
    let nearest_x = center[0].min(rect.max_x()).max(rect.min[0]);
    let nearest_y = center[1].min(rect.max_y()).max(rect.min[1]);
    let dx = center[0] - nearest_x;
    let dy = center[1] - nearest_y;
    dx * dx + dy * dy <= radius * radius
}

/// Advances the bird by one timestep: gravity, terminal-velocity clamps,
/// horizontal containment, ceiling pin, and the cosmetic tilt.
///
/// Returns true when the bird is within collision radius of the ground top.
/// That proximity check is a guaranteed hit independent of the contact pass,
/// so a fast-falling bird cannot tunnel through the ground between ticks.
pub fn step(bird: &mut Bird, config: &Config, screen: [f32; 2], dt: f32) -> bool {
    if !bird.dynamic || dt <= 0.0 {
        return false;
    }

    bird.vel_y -= config.gravity * dt;
    bird.vel_y = bird.vel_y.max(-config.terminal_fall_speed);
    if let Some(rise) = config.terminal_rise_speed {
        bird.vel_y = bird.vel_y.min(rise);
    }
    bird.pos[1] += bird.vel_y * dt;

    // min() before max() so the left bound wins on absurdly small screens
    // instead of panicking like `clamp` would.
    let half_width = config.bird_size[0] * 0.5;
    bird.pos[0] = bird.pos[0].min(screen[0] - half_width).max(half_width);

    if bird.pos[1] > screen[1] {
        bird.pos[1] = screen[1];
        bird.vel_y = 0.0;
    }

    bird.rotation = (bird.vel_y / ROTATION_VELOCITY_SCALE).clamp(-MAX_TILT, MAX_TILT);

    bird.pos[1] < config.ground_height + bird.radius
}

/// Direct overwrite of vertical velocity. Only meaningful while the bird is
/// dynamic; the flow controller gates calls on the Playing state.
pub fn flap(bird: &mut Bird, config: &Config) {
    let mut velocity = config.flap_velocity;
    if let Some(rise) = config.terminal_rise_speed {
        velocity = velocity.min(rise);
    }
    bird.vel_y = velocity;
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCREEN: [f32; 2] = [400.0, 700.0];

    fn dynamic_bird(config: &Config) -> Bird {
        let mut bird = Bird::at_start(config, SCREEN);
        bird.dynamic = true;
        bird
    }

    #[test]
    fn gravity_pulls_velocity_down() {
        let config = Config::default();
        let mut bird = dynamic_bird(&config);
        step(&mut bird, &config, SCREEN, 1.0 / 120.0);
        assert!(bird.vel_y < 0.0);
    }

    #[test]
    fn fall_speed_is_pinned_to_terminal() {
        let config = Config::default();
        let mut bird = dynamic_bird(&config);
        bird.pos[1] = SCREEN[1] * 0.9;
        for _ in 0..600 {
            step(&mut bird, &config, SCREEN, 1.0 / 120.0);
            assert!(bird.vel_y >= -config.terminal_fall_speed);
        }
        assert_eq!(bird.vel_y, -config.terminal_fall_speed);
    }

    #[test]
    fn rise_speed_is_pinned_when_configured() {
        let mut config = Config::default();
        config.terminal_rise_speed = Some(300.0);
        let mut bird = dynamic_bird(&config);
        bird.vel_y = 1000.0;
        step(&mut bird, &config, SCREEN, 1.0 / 120.0);
        assert!(bird.vel_y <= 300.0);
    }

    #[test]
    fn ceiling_pins_position_and_zeroes_velocity() {
        let config = Config::default();
        let mut bird = dynamic_bird(&config);
        bird.pos[1] = SCREEN[1] - 0.5;
        bird.vel_y = 800.0;
        step(&mut bird, &config, SCREEN, 1.0 / 120.0);
        assert_eq!(bird.pos[1], SCREEN[1]);
        assert_eq!(bird.vel_y, 0.0);
    }

    #[test]
    fn horizontal_position_is_contained() {
        let config = Config::default();
        let mut bird = dynamic_bird(&config);
        let half = config.bird_size[0] * 0.5;
        bird.pos[0] = -50.0;
        step(&mut bird, &config, SCREEN, 1.0 / 120.0);
        assert_eq!(bird.pos[0], half);
        bird.pos[0] = SCREEN[0] + 50.0;
        step(&mut bird, &config, SCREEN, 1.0 / 120.0);
        assert_eq!(bird.pos[0], SCREEN[0] - half);
    }

    #[test]
    fn tilt_stays_within_half_radian() {
        let config = Config::default();
        let mut bird = dynamic_bird(&config);
        bird.pos[1] = SCREEN[1] * 0.9;
        for _ in 0..600 {
            step(&mut bird, &config, SCREEN, 1.0 / 120.0);
            assert!(bird.rotation.abs() <= 0.5);
        }
        assert_eq!(bird.rotation, -0.5);
    }

    #[test]
    fn non_dynamic_bird_ignores_the_step() {
        let config = Config::default();
        let mut bird = Bird::at_start(&config, SCREEN);
        let before = bird;
        assert!(!step(&mut bird, &config, SCREEN, 1.0 / 120.0));
        assert_eq!(bird.pos, before.pos);
        assert_eq!(bird.vel_y, 0.0);
    }

    #[test]
    fn ground_proximity_reports_a_hit() {
        let config = Config::default();
        let mut bird = dynamic_bird(&config);
        bird.pos[1] = config.ground_height + bird.radius - 1.0;
        bird.vel_y = 0.0;
        assert!(step(&mut bird, &config, SCREEN, 1.0 / 120.0));
    }

    #[test]
    fn circle_rect_overlap_handles_edges_and_corners() {
        let rect = Rect {
            min: [10.0, 10.0],
            size: [20.0, 20.0],
        };
        assert!(circle_intersects_rect([20.0, 20.0], 1.0, rect));
        assert!(circle_intersects_rect([5.0, 20.0], 6.0, rect));
        assert!(!circle_intersects_rect([5.0, 20.0], 4.0, rect));
        // Corner: diagonal distance matters, not the axis distances.
        assert!(!circle_intersects_rect([6.0, 6.0], 5.0, rect));
        assert!(circle_intersects_rect([6.0, 6.0], 6.0, rect));
    }
}
