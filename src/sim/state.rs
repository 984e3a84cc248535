//! Game state and core simulation types
//!
//! The whole game is one `World` value, replaced wholesale on every event and
//! handed to the render task by value. Nothing here is mutated across a task
//! boundary.

use crate::consts::*;

use super::collision::Aabb;

/// The player-controlled square.
///
/// Position is the top-left corner. Velocity components are held at
/// ±`PLAYER_SPEED` while the matching direction key is down and snap back to
/// zero on release.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Player {
    pub x: f32,
    pub y: f32,
    pub vx: i32,
    pub vy: i32,
    pub dead: bool,
}

impl Player {
    /// A live, motionless player centered on the surface.
    pub fn centered() -> Self {
        Self {
            x: (SURFACE_W as f32 - PLAYER_SIZE) / 2.0,
            y: (SURFACE_H as f32 - PLAYER_SIZE) / 2.0,
            vx: 0,
            vy: 0,
            dead: false,
        }
    }

    /// Apply a direction-key press: each axis is set independently.
    pub fn key_down(mut self, key: crate::Key) -> Self {
        use crate::Key;
        match key {
            Key::Left => self.vx = -PLAYER_SPEED,
            Key::Right => self.vx = PLAYER_SPEED,
            Key::Up => self.vy = -PLAYER_SPEED,
            Key::Down => self.vy = PLAYER_SPEED,
            Key::Enter | Key::Other => {}
        }
        self
    }

    /// Apply a direction-key release.
    ///
    /// Releasing either key of an axis zeroes that axis, regardless of which
    /// direction was actually active. Holding left and tapping right
    /// therefore stops horizontal motion on the right key's release.
    pub fn key_up(mut self, key: crate::Key) -> Self {
        use crate::Key;
        match key {
            Key::Left | Key::Right => self.vx = 0,
            Key::Up | Key::Down => self.vy = 0,
            Key::Enter | Key::Other => {}
        }
        self
    }

    /// One frame of motion. Unclamped: the player may leave the surface.
    pub fn moved(mut self) -> Self {
        self.x += self.vx as f32;
        self.y += self.vy as f32;
        self
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.x, self.y, PLAYER_SIZE, PLAYER_SIZE)
    }
}

/// A falling square. Position is the top-left corner; `vy` grows by
/// `ENEMY_ACCEL` every frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Enemy {
    pub x: f32,
    pub y: f32,
    pub vy: f32,
}

impl Enemy {
    /// A fresh enemy resting just above the surface's top edge.
    pub fn spawn(x: u32) -> Self {
        Self {
            x: x as f32,
            y: -ENEMY_SIZE,
            vy: 0.0,
        }
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.x, self.y, ENEMY_SIZE, ENEMY_SIZE)
    }
}

/// One playing session: the payload shared by the `Playing` and `GameOver`
/// scenes.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    /// Frames elapsed since the session started. Monotone within a session,
    /// reset to zero by a restart.
    pub frame: u64,
    pub player: Player,
    /// Append-ordered, newest last.
    pub enemies: Vec<Enemy>,
}

impl Session {
    /// A fresh session: frame zero, centered player, no enemies.
    pub fn start() -> Self {
        Self {
            frame: 0,
            player: Player::centered(),
            enemies: Vec::new(),
        }
    }

    /// Same session with the player replaced (velocity edits from input).
    pub fn with_player(mut self, player: Player) -> Self {
        self.player = player;
        self
    }
}

/// The complete authoritative game state for one instant.
#[derive(Debug, Clone, PartialEq)]
pub enum World {
    Title,
    Playing(Session),
    GameOver(Session),
}

impl World {
    /// Short scene tag, used for transition logging.
    pub fn scene_name(&self) -> &'static str {
        match self {
            World::Title => "title",
            World::Playing(_) => "playing",
            World::GameOver(_) => "game-over",
        }
    }
}
