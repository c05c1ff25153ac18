//! Presentation data for hosts: a palette and a flat quad list.
//!
//! The game core knows nothing about how it is drawn; hosts pull a list of
//! colored rectangles in world coordinates (y-up) each frame and map them to
//! their own surface.

use crate::game::Game;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

#[derive(Clone, Debug)]
pub struct Palette {
    pub background: Rgb,
    pub pipe: Rgb,
    pub pipe_dark: Rgb,
    pub ground: Rgb,
    pub ground_edge: Rgb,
    pub bird_body: Rgb,
    pub bird_beak: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Rgb(0x87, 0xce, 0xeb),
            pipe: Rgb(0x2e, 0xc4, 0x41),
            pipe_dark: Rgb(0x1c, 0x8a, 0x2b),
            ground: Rgb(0x4b, 0x26, 0x0b),
            ground_edge: Rgb(0x75, 0x40, 0x19),
            bird_body: Rgb(0xe6, 0x22, 0x2f),
            bird_beak: Rgb(0xff, 0xd0, 0x2a),
        }
    }
}

/// One axis-aligned rectangle; `pos` is the bottom-left corner in world
/// coordinates.
#[derive(Clone, Copy, Debug)]
pub struct Quad {
    pub pos: [f32; 2],
    pub size: [f32; 2],
    pub color: Rgb,
}

/// Flattens the current game state into draw order: background, pipes,
/// ground, bird. The gap sensors are invisible and produce no quad.
pub fn quads(game: &Game, palette: &Palette) -> Vec<Quad> {
    let config = game.config();
    let screen = game.screen();
    let mut out = Vec::with_capacity(4 + game.pipes().len() * 2);

    out.push(Quad {
        pos: [0.0, 0.0],
        size: screen,
        color: palette.background,
    });

    for pipe in game.pipes() {
        let gap_bottom = pipe.gap_center - pipe.gap_height * 0.5;
        let gap_top = pipe.gap_center + pipe.gap_height * 0.5;
        out.push(Quad {
            pos: [pipe.x, gap_bottom - pipe.bottom_height],
            size: [config.pipe_width, pipe.bottom_height],
            color: palette.pipe,
        });
        out.push(Quad {
            pos: [pipe.x, gap_top],
            size: [config.pipe_width, pipe.top_height],
            color: palette.pipe_dark,
        });
    }

    out.push(Quad {
        pos: [0.0, 0.0],
        size: [screen[0], config.ground_height],
        color: palette.ground,
    });
    out.push(Quad {
        pos: [0.0, config.ground_height],
        size: [screen[0], 6.0],
        color: palette.ground_edge,
    });

    let bird = game.bird();
    out.push(Quad {
        pos: [
            bird.pos[0] - config.bird_size[0] * 0.5,
            bird.pos[1] - config.bird_size[1] * 0.5,
        ],
        size: config.bird_size,
        color: palette.bird_body,
    });
    out.push(Quad {
        pos: [
            bird.pos[0] + config.bird_size[0] * 0.25,
            bird.pos[1] + config.bird_size[1] * 0.1,
        ],
        size: [config.bird_size[0] * 0.25, config.bird_size[1] * 0.25],
        color: palette.bird_beak,
    });

    out
}
