//! Scene painting through the drawing seam.
//!
//! `Painter` is the only capability the render task needs from the host: the
//! browser build backs it with a canvas 2-D context, tests back it with a
//! command recorder. `paint` performs exactly one full redraw per call.

use crate::consts::*;
use crate::sim::{Session, World};

/// An RGBA color, canvas style: 8-bit channels, unit-interval alpha.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// CSS `rgba(...)` string for the canvas fill style.
    pub fn css(&self) -> String {
        format!("rgba({},{},{},{})", self.r, self.g, self.b, self.a)
    }
}

/// Player fill while alive.
pub const PLAYER_ALIVE: Rgba = Rgba::opaque(0, 128, 255);
/// Player fill once dead (game-over scene).
pub const PLAYER_DEAD: Rgba = Rgba::opaque(255, 64, 64);
/// Enemy fill.
pub const ENEMY_FILL: Rgba = Rgba::opaque(255, 255, 255);
/// Full-surface dim layered over the final frame on game over.
pub const OVERLAY: Rgba = Rgba {
    r: 0,
    g: 0,
    b: 0,
    a: 0.5,
};
/// Text fill.
pub const TEXT_FILL: Rgba = Rgba::opaque(255, 255, 255);

/// Font for the title / game-over lines.
pub const TEXT_FONT: &str = "16px monospace";
/// Vertical step between text lines.
pub const LINE_STEP: f32 = 24.0;

/// Drawing capabilities consumed by the render task.
pub trait Painter {
    /// Clear the whole surface.
    fn clear(&mut self);
    /// Fill an axis-aligned rectangle.
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Rgba);
    /// Set font and center alignment for subsequent text.
    fn set_font(&mut self, font: &str);
    /// Draw lines of centered text, stepping `step` pixels per line.
    fn text_lines(&mut self, lines: &[&str], x: f32, y: f32, step: f32, color: Rgba);
}

/// Paint one world snapshot. One call, one complete redraw.
pub fn paint(p: &mut impl Painter, world: &World) {
    match world {
        World::Title => {
            p.clear();
            centered_lines(p, &["SQUARE DODGE", "press enter to start"]);
        }
        World::Playing(session) => {
            p.clear();
            paint_session(p, session);
        }
        World::GameOver(session) => {
            p.clear();
            paint_session(p, session);
            p.fill_rect(0.0, 0.0, SURFACE_W as f32, SURFACE_H as f32, OVERLAY);
            centered_lines(p, &["GAME OVER", "press enter to restart"]);
        }
    }
}

/// Player then enemies, in sequence order.
fn paint_session(p: &mut impl Painter, session: &Session) {
    let player = &session.player;
    let color = if player.dead { PLAYER_DEAD } else { PLAYER_ALIVE };
    p.fill_rect(player.x, player.y, PLAYER_SIZE, PLAYER_SIZE, color);
    for enemy in &session.enemies {
        p.fill_rect(enemy.x, enemy.y, ENEMY_SIZE, ENEMY_SIZE, ENEMY_FILL);
    }
}

fn centered_lines(p: &mut impl Painter, lines: &[&str]) {
    p.set_font(TEXT_FONT);
    let x = SURFACE_W as f32 / 2.0;
    // Center the block vertically around the surface midline.
    let y = SURFACE_H as f32 / 2.0 - LINE_STEP * (lines.len() as f32 - 1.0) / 2.0;
    p.text_lines(lines, x, y, LINE_STEP, TEXT_FILL);
}
