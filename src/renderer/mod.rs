//! Frame composition
//!
//! Builds the per-frame list of 2D drawing primitives from simulation state.
//! Pure and platform-independent; the `canvas` submodule submits the list to
//! the browser's 2D context. Ordering in the list is back-to-front:
//! background, grid, projectiles, particles, player, health bar, debug text.

#[cfg(target_arch = "wasm32")]
pub mod canvas;

use std::fmt;

use glam::Vec2;

use crate::consts::*;
use crate::sim::GameState;

/// A fill/stroke color in CSS notation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Color {
    /// Static CSS color ("#4ecca3", "rgba(...)", "white")
    Css(&'static str),
    /// Fully saturated HSL at 60% lightness, for particle hues
    Hsl { hue: f32 },
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Css(css) => f.write_str(css),
            Color::Hsl { hue } => write!(f, "hsl({hue:.0}, 100%, 60%)"),
        }
    }
}

/// One 2D drawing primitive.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    FillRect {
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        color: Color,
    },
    StrokeRect {
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        color: Color,
        line_width: f32,
    },
    FillCircle {
        x: f32,
        y: f32,
        radius: f32,
        color: Color,
    },
    Line {
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        color: Color,
        line_width: f32,
    },
    Text {
        text: String,
        x: f32,
        y: f32,
        color: Color,
        font: &'static str,
    },
}

/// Compose one frame from the current state. `time_ms` is wall-clock time in
/// milliseconds, used only for the movement bob.
pub fn draw_frame(state: &GameState, time_ms: f64) -> Vec<DrawCmd> {
    let mut cmds = Vec::with_capacity(
        32 + grid_line_count(state) + state.projectiles.len() * 2 + state.particles.len(),
    );

    background(state, &mut cmds);
    grid(state, &mut cmds);
    projectiles(state, &mut cmds);
    particles(state, &mut cmds);
    player(state, time_ms, &mut cmds);
    health_bar(state, &mut cmds);
    debug_info(state, &mut cmds);

    cmds
}

fn grid_line_count(state: &GameState) -> usize {
    ((state.width / GRID_SPACING).ceil().max(0.0) + (state.height / GRID_SPACING).ceil().max(0.0))
        as usize
}

fn background(state: &GameState, cmds: &mut Vec<DrawCmd>) {
    cmds.push(DrawCmd::FillRect {
        x: 0.0,
        y: 0.0,
        w: state.width,
        h: state.height,
        color: Color::Css(BACKGROUND_COLOR),
    });
}

fn grid(state: &GameState, cmds: &mut Vec<DrawCmd>) {
    let mut x = 0.0;
    while x < state.width {
        cmds.push(DrawCmd::Line {
            x1: x,
            y1: 0.0,
            x2: x,
            y2: state.height,
            color: Color::Css(GRID_LINE_COLOR),
            line_width: 1.0,
        });
        x += GRID_SPACING;
    }

    let mut y = 0.0;
    while y < state.height {
        cmds.push(DrawCmd::Line {
            x1: 0.0,
            y1: y,
            x2: state.width,
            y2: y,
            color: Color::Css(GRID_LINE_COLOR),
            line_width: 1.0,
        });
        y += GRID_SPACING;
    }
}

fn projectiles(state: &GameState, cmds: &mut Vec<DrawCmd>) {
    for p in &state.projectiles {
        cmds.push(DrawCmd::FillCircle {
            x: p.pos.x,
            y: p.pos.y,
            radius: p.radius,
            color: Color::Css(p.color),
        });
        // Trailing afterimage one step behind the body
        let trail = p.pos - p.vel;
        cmds.push(DrawCmd::FillCircle {
            x: trail.x,
            y: trail.y,
            radius: p.radius * PROJECTILE_TRAIL_SCALE,
            color: Color::Css(PROJECTILE_TRAIL_COLOR),
        });
    }
}

fn particles(state: &GameState, cmds: &mut Vec<DrawCmd>) {
    for p in &state.particles {
        cmds.push(DrawCmd::FillCircle {
            x: p.pos.x,
            y: p.pos.y,
            radius: p.radius,
            color: Color::Hsl { hue: p.hue },
        });
    }
}

fn player(state: &GameState, time_ms: f64, cmds: &mut Vec<DrawCmd>) {
    let p = &state.player;
    let bob = if p.moving {
        ((time_ms / BOB_PERIOD_MS).sin() as f32) * BOB_AMPLITUDE
    } else {
        0.0
    };
    let center = p.pos + Vec2::new(0.0, bob);
    let (hw, hh) = (p.half_width(), p.half_height());

    cmds.push(DrawCmd::FillRect {
        x: center.x - hw,
        y: center.y - hh,
        w: p.width,
        h: p.height,
        color: Color::Css(PLAYER_COLOR),
    });
    cmds.push(DrawCmd::FillRect {
        x: center.x - hw + PLAYER_DETAIL_INSET,
        y: center.y - hh + PLAYER_DETAIL_INSET,
        w: p.width - 2.0 * PLAYER_DETAIL_INSET,
        h: p.height - 2.0 * PLAYER_DETAIL_INSET,
        color: Color::Css(PLAYER_DETAIL_COLOR),
    });
    cmds.push(DrawCmd::FillCircle {
        x: center.x + p.last_dir.x * (hw + FACING_DOT_OFFSET),
        y: center.y + p.last_dir.y * (hh + FACING_DOT_OFFSET),
        radius: FACING_DOT_RADIUS,
        color: Color::Css(FACING_DOT_COLOR),
    });
}

/// Fill color for the current health fraction.
fn health_color(fraction: f32) -> Color {
    if fraction > 0.5 {
        Color::Css(HEALTH_COLOR_HIGH)
    } else if fraction > 0.25 {
        Color::Css(HEALTH_COLOR_MID)
    } else {
        Color::Css(HEALTH_COLOR_LOW)
    }
}

fn health_bar(state: &GameState, cmds: &mut Vec<DrawCmd>) {
    let p = &state.player;
    let fraction = p.health as f32 / p.max_health as f32;

    cmds.push(DrawCmd::FillRect {
        x: HEALTH_BAR_X,
        y: HEALTH_BAR_Y,
        w: HEALTH_BAR_WIDTH,
        h: HEALTH_BAR_HEIGHT,
        color: Color::Css("rgba(0, 0, 0, 0.5)"),
    });
    cmds.push(DrawCmd::FillRect {
        x: HEALTH_BAR_X,
        y: HEALTH_BAR_Y,
        w: HEALTH_BAR_WIDTH * fraction,
        h: HEALTH_BAR_HEIGHT,
        color: health_color(fraction),
    });
    cmds.push(DrawCmd::StrokeRect {
        x: HEALTH_BAR_X,
        y: HEALTH_BAR_Y,
        w: HEALTH_BAR_WIDTH,
        h: HEALTH_BAR_HEIGHT,
        color: Color::Css("white"),
        line_width: 2.0,
    });
    cmds.push(DrawCmd::Text {
        text: format!("HP: {}/{}", p.health, p.max_health),
        x: HEALTH_BAR_X,
        y: HEALTH_BAR_Y + HEALTH_BAR_HEIGHT + 20.0,
        color: Color::Css("white"),
        font: "14px Arial",
    });
}

fn debug_info(state: &GameState, cmds: &mut Vec<DrawCmd>) {
    let lines = [
        (
            format!(
                "pos: ({}, {})",
                state.player.pos.x.round(),
                state.player.pos.y.round()
            ),
            state.height - 60.0,
        ),
        (
            format!("projectiles: {}", state.projectiles.len()),
            state.height - 40.0,
        ),
        (
            format!("particles: {}", state.particles.len()),
            state.height - 20.0,
        ),
    ];
    for (text, y) in lines {
        cmds.push(DrawCmd::Text {
            text,
            x: 20.0,
            y,
            color: Color::Css("white"),
            font: "12px Arial",
        });
    }
}
