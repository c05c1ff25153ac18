//! Terminal host: crossterm raw-mode input, half-block pixel rendering, and
//! a fixed-timestep accumulator driving the game core.

use std::io::{self, stdout, Write};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEventKind},
    execute, queue,
    style::{self, Color},
    terminal,
};

use gapwing::{render, Config, Game, Palette, Rgb, FIXED_STEP};

/// Logical world size handed to the game core. The terminal surface is
/// letterboxed around it, so game geometry never depends on terminal size.
const WORLD_WIDTH: f32 = 400.0;
const WORLD_HEIGHT: f32 = 700.0;

const FRAME_DURATION: Duration = Duration::from_millis(16);

fn main() -> Result<()> {
    env_logger::init();

    let mut out = stdout();
    terminal::enable_raw_mode().context("enable raw mode")?;
    execute!(
        out,
        terminal::EnterAlternateScreen,
        cursor::Hide,
        terminal::DisableLineWrap,
    )
    .context("enter alternate screen")?;

    let result = run(&mut out);

    let _ = execute!(
        out,
        terminal::LeaveAlternateScreen,
        cursor::Show,
        terminal::EnableLineWrap,
    );
    let _ = terminal::disable_raw_mode();
    result
}

fn run(out: &mut io::Stdout) -> Result<()> {
    let (cols, rows) = terminal::size().context("query terminal size")?;
    let mut buf = PixelBuf::new(cols as usize, rows as usize * 2);

    let mut game = Game::new(Config::default(), WORLD_WIDTH, WORLD_HEIGHT);
    let palette = Palette::default();
    let mut timer = FrameTimer::default();
    let mut last = Instant::now();

    loop {
        while event::poll(Duration::ZERO)? {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                    KeyCode::Char(' ') | KeyCode::Up | KeyCode::Enter => {
                        game.primary_input();
                    }
                    _ => {}
                },
                Event::Resize(c, r) => {
                    buf.resize(c as usize, r as usize * 2);
                }
                _ => {}
            }
        }

        let now = Instant::now();
        timer.accumulate(now.duration_since(last).as_secs_f32());
        last = now;
        while timer.accumulator >= FIXED_STEP {
            game.tick(FIXED_STEP);
            timer.accumulator -= FIXED_STEP;
        }

        draw_world(&game, &palette, &mut buf);
        buf.render(out)?;
        draw_hud(&game, out)?;
        out.flush()?;

        let elapsed = now.elapsed();
        if elapsed < FRAME_DURATION {
            std::thread::sleep(FRAME_DURATION - elapsed);
        }
    }
}

/// Caps the accumulator so a stalled terminal does not trigger a burst of
/// catch-up ticks.
#[derive(Default)]
struct FrameTimer {
    accumulator: f32,
}

impl FrameTimer {
    fn accumulate(&mut self, dt: f32) {
        if !dt.is_finite() {
            return;
        }
        self.accumulator = (self.accumulator + dt.max(0.0)).min(FIXED_STEP * 5.0);
    }
}

fn draw_world(game: &Game, palette: &Palette, buf: &mut PixelBuf) {
    buf.fill(Rgb(0, 0, 0));
    let scale_x = buf.width() as f32 / WORLD_WIDTH;
    let scale_y = buf.height() as f32 / WORLD_HEIGHT;
    let scale = scale_x.min(scale_y);
    let offset_x = (buf.width() as f32 - WORLD_WIDTH * scale) * 0.5;
    let offset_y = (buf.height() as f32 - WORLD_HEIGHT * scale) * 0.5;

    for quad in render::quads(game, palette) {
        // World is y-up; the pixel buffer is y-down.
        let px = offset_x + quad.pos[0] * scale;
        let py = offset_y + (WORLD_HEIGHT - quad.pos[1] - quad.size[1]) * scale;
        buf.fill_rect(
            px.floor() as i32,
            py.floor() as i32,
            (quad.size[0] * scale).ceil() as i32,
            (quad.size[1] * scale).ceil() as i32,
            quad.color,
        );
    }
}

fn draw_hud(game: &Game, out: &mut io::Stdout) -> io::Result<()> {
    let status = game.status_text();
    let line = if game.best_score() > 0 {
        format!(
            " Score: {}  Best: {}  {} ",
            game.score(),
            game.best_score(),
            status
        )
    } else {
        format!(" Score: {}  {} ", game.score(), status)
    };
    queue!(
        out,
        cursor::MoveTo(0, 0),
        style::SetForegroundColor(Color::White),
        style::SetBackgroundColor(Color::Black),
        style::Print(line),
        style::ResetColor,
    )
}

/// Terminal framebuffer: two vertical pixels per character cell, drawn with
/// the upper-half-block glyph.
struct PixelBuf {
    width: usize,
    height: usize,
    px: Vec<Rgb>,
}

impl PixelBuf {
    fn new(width: usize, height: usize) -> Self {
        let width = width.max(1);
        let height = height.max(2);
        Self {
            width,
            height,
            px: vec![Rgb(0, 0, 0); width * height],
        }
    }

    fn resize(&mut self, width: usize, height: usize) {
        *self = Self::new(width, height);
    }

    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn fill(&mut self, color: Rgb) {
        self.px.fill(color);
    }

    fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Rgb) {
        for dy in 0..h {
            let py = y + dy;
            if py < 0 || py as usize >= self.height {
                continue;
            }
            for dx in 0..w {
                let px = x + dx;
                if px < 0 || px as usize >= self.width {
                    continue;
                }
                self.px[py as usize * self.width + px as usize] = color;
            }
        }
    }

    fn render(&self, out: &mut impl Write) -> io::Result<()> {
        let mut fg = None;
        let mut bg = None;
        for row in 0..self.height / 2 {
            queue!(out, cursor::MoveTo(0, row as u16))?;
            for col in 0..self.width {
                let top = self.px[row * 2 * self.width + col];
                let bottom = self.px[(row * 2 + 1) * self.width + col];
                if fg != Some(top) {
                    queue!(out, style::SetForegroundColor(to_color(top)))?;
                    fg = Some(top);
                }
                if bg != Some(bottom) {
                    queue!(out, style::SetBackgroundColor(to_color(bottom)))?;
                    bg = Some(bottom);
                }
                queue!(out, style::Print('\u{2580}'))?;
            }
        }
        queue!(out, style::ResetColor)?;
        Ok(())
    }
}

fn to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.0,
        g: rgb.1,
        b: rgb.2,
    }
}
