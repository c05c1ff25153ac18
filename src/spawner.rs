//! Procedural obstacle generation.
//!
//! One call per spawn tick produces the geometry for a paired top/bottom
//! pipe and the scoring sensor between them, or nothing when the configured
//! gap cannot fit on the current screen.

use log::warn;
use rand::Rng;

use crate::config::Config;

/// Smallest permitted gap between the pipe segments.
const MIN_GAP_HEIGHT: f32 = 160.0;
/// The gap grows with the screen: 25% of its height, floored at the minimum.
const GAP_SCREEN_FRACTION: f32 = 0.25;
/// Keep-out band above the ground when placing the gap center.
const MARGIN_BOTTOM: f32 = 20.0;
/// Keep-out band below the ceiling when placing the gap center.
const MARGIN_TOP: f32 = 50.0;
/// Floor on segment heights so neither pipe degenerates to zero.
const MIN_SEGMENT_HEIGHT: f32 = 10.0;

/// Geometry for one obstacle pair, before it is registered with the scroll
/// controller (which assigns the spawn id and horizontal track).
#[derive(Clone, Copy, Debug)]
pub struct PipeBlueprint {
    pub gap_center: f32,
    pub gap_height: f32,
    pub bottom_height: f32,
    pub top_height: f32,
}

pub fn gap_height_for(screen_height: f32) -> f32 {
    (screen_height * GAP_SCREEN_FRACTION).max(MIN_GAP_HEIGHT)
}

/// Valid range for the gap center, or `None` when the gap is too large for
/// the screen. Never panics; the caller skips the tick on `None`.
pub fn gap_center_range(config: &Config, screen: [f32; 2]) -> Option<(f32, f32)> {
    let half = gap_height_for(screen[1]) * 0.5;
    let min_center = config.ground_height + half + MARGIN_BOTTOM;
    let max_center = screen[1] - half - MARGIN_TOP;
    if min_center > max_center {
        return None;
    }
    Some((min_center, max_center))
}

pub fn blueprint_for_center(config: &Config, screen: [f32; 2], gap_center: f32) -> PipeBlueprint {
    let gap_height = gap_height_for(screen[1]);
    let half = gap_height * 0.5;
    let bottom_height = (gap_center - half - config.ground_height).max(MIN_SEGMENT_HEIGHT);
    let top_height = (screen[1] - (gap_center + half)).max(MIN_SEGMENT_HEIGHT);
    PipeBlueprint {
        gap_center,
        gap_height,
        bottom_height,
        top_height,
    }
}

/// Invoked once per spawn-interval tick while playing. Samples the gap
/// center uniformly inside the valid band and derives both segment heights.
pub fn spawn<R: Rng>(config: &Config, screen: [f32; 2], rng: &mut R) -> Option<PipeBlueprint> {
    let Some((min_center, max_center)) = gap_center_range(config, screen) else {
        warn!(
            "skipping spawn: gap {:.0} does not fit screen height {:.0}",
            gap_height_for(screen[1]),
            screen[1]
        );
        return None;
    };
    let gap_center = rng.gen_range(min_center..=max_center);
    Some(blueprint_for_center(config, screen, gap_center))
}
