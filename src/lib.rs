//! Square Dodge - dodge the falling squares
//!
//! Core modules:
//! - `sim`: deterministic simulation (scene machine, physics, collision)
//! - `input`: logical keys and the multiplexed event type
//! - `channel`: event multiplexer, render queue, and the two async loops
//! - `render`: painter seam and per-scene draw routines

pub mod channel;
pub mod input;
pub mod render;
pub mod sim;

pub use input::{GameEvent, Key};
pub use sim::{World, advance};

/// Game configuration constants
pub mod consts {
    /// Play surface dimensions in pixels
    pub const SURFACE_W: u32 = 512;
    pub const SURFACE_H: u32 = 384;

    /// Player square side length
    pub const PLAYER_SIZE: f32 = 8.0;
    /// Player speed while a direction key is held (px/frame)
    pub const PLAYER_SPEED: i32 = 2;

    /// Enemy square side length
    pub const ENEMY_SIZE: f32 = 16.0;
    /// Constant downward acceleration applied to every enemy (px/frame²)
    pub const ENEMY_ACCEL: f32 = 0.05;

    /// One enemy spawns every this many frames
    pub const SPAWN_INTERVAL: u64 = 3;
    /// Exclusive upper bound for a fresh enemy's x position
    pub const SPAWN_MAX_X: u32 = SURFACE_W - ENEMY_SIZE as u32;

    /// Fallback timer period when requestAnimationFrame is unavailable
    pub const FALLBACK_TICK_MS: i32 = 16;
}
