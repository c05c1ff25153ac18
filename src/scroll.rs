//! Horizontal obstacle motion and lifecycle.
//!
//! Obstacles are owned here from registration to off-screen removal: a small
//! registry keyed by spawn id, advanced at constant speed and gated by a
//! global freeze multiplier so game-over halts everything at once without
//! per-obstacle bookkeeping.

use crate::categories::{self, CategoryMask};
use crate::config::Config;
use crate::physics::Rect;
use crate::spawner::PipeBlueprint;

/// Extra distance past the left edge before an obstacle is removed.
const EXIT_MARGIN: f32 = 100.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SpawnId(pub u64);

/// One live obstacle set: two solid pipe segments and the scoring sensor
/// between them, sharing a horizontal track.
#[derive(Clone, Debug)]
pub struct PipePair {
    pub id: SpawnId,
    /// Left edge of the pipe column.
    pub x: f32,
    pub gap_center: f32,
    pub gap_height: f32,
    pub bottom_height: f32,
    pub top_height: f32,
    pub(crate) scored: bool,
    pub(crate) elapsed: f32,
    pub(crate) duration: f32,
}

impl PipePair {
    /// Collidable regions with their category labels: both solid segments
    /// and the invisible sensor spanning the gap.
    pub fn collidables(&self, config: &Config) -> [(Rect, CategoryMask); 3] {
        let gap_bottom = self.gap_center - self.gap_height * 0.5;
        let gap_top = self.gap_center + self.gap_height * 0.5;
        let width = config.pipe_width;
        [
            (
                Rect {
                    min: [self.x, gap_bottom - self.bottom_height],
                    size: [width, self.bottom_height],
                },
                categories::PIPE,
            ),
            (
                Rect {
                    min: [self.x, gap_top],
                    size: [width, self.top_height],
                },
                categories::PIPE,
            ),
            (
                Rect {
                    min: [self.x, gap_bottom],
                    size: [width, self.gap_height],
                },
                categories::GAP,
            ),
        ]
    }
}

#[derive(Debug, Default)]
pub struct ScrollController {
    pub(crate) pipes: Vec<PipePair>,
    next_id: u64,
    frozen: bool,
}

impl ScrollController {
    pub fn new() -> Self {
        Self::default()
    }

    /// 0 while frozen, 1 otherwise. Gates whether translation advances.
    pub fn multiplier(&self) -> f32 {
        if self.frozen {
            0.0
        } else {
            1.0
        }
    }

    pub fn freeze(&mut self) {
        self.frozen = true;
    }

    /// Registers a freshly spawned pair just past the right screen edge and
    /// fixes its travel duration from the current scroll speed.
    pub fn insert(
        &mut self,
        blueprint: PipeBlueprint,
        config: &Config,
        screen: [f32; 2],
    ) -> SpawnId {
        let id = SpawnId(self.next_id);
        self.next_id += 1;
        let travel = screen[0] + config.pipe_width + EXIT_MARGIN;
        self.pipes.push(PipePair {
            id,
            x: screen[0],
            gap_center: blueprint.gap_center,
            gap_height: blueprint.gap_height,
            bottom_height: blueprint.bottom_height,
            top_height: blueprint.top_height,
            scored: false,
            elapsed: 0.0,
            duration: travel / config.scroll_speed,
        });
        id
    }

    /// Translates all obstacles and removes the ones past end-of-travel.
    /// Returns the removed ids.
    pub fn advance(&mut self, dt: f32, config: &Config) -> Vec<SpawnId> {
        let step = dt * self.multiplier();
        if step <= 0.0 {
            return Vec::new();
        }
        let mut removed = Vec::new();
        for pipe in &mut self.pipes {
            pipe.x -= config.scroll_speed * step;
            pipe.elapsed += step;
        }
        self.pipes.retain(|pipe| {
            if pipe.elapsed >= pipe.duration {
                removed.push(pipe.id);
                false
            } else {
                true
            }
        });
        removed
    }

    /// Marks a pair as scored. Returns false when it was already scored or
    /// no longer exists, so duplicate sensor contacts cannot double-count.
    pub fn mark_scored(&mut self, id: SpawnId) -> bool {
        match self.pipes.iter_mut().find(|pipe| pipe.id == id) {
            Some(pipe) if !pipe.scored => {
                pipe.scored = true;
                true
            }
            _ => false,
        }
    }

    pub fn is_scored(&self, id: SpawnId) -> bool {
        self.pipes
            .iter()
            .find(|pipe| pipe.id == id)
            .is_some_and(|pipe| pipe.scored)
    }

    /// Drops every obstacle and lifts the freeze for the next run.
    pub fn clear(&mut self) {
        self.pipes.clear();
        self.frozen = false;
    }

    pub fn pipes(&self) -> &[PipePair] {
        &self.pipes
    }
}
