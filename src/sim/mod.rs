//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One step per frame tick only
//! - Seeded RNG only, threaded in by the caller
//! - Stable enemy order (append-only, newest last)
//! - No rendering or platform dependencies

pub mod collision;
pub mod scene;
pub mod state;
pub mod tick;

pub use collision::{Aabb, overlaps};
pub use scene::advance;
pub use state::{Enemy, Player, Session, World};
pub use tick::step;
