//! Scene state machine
//!
//! One dispatcher over the `World` tag. Every event produces a (possibly
//! identical) new `World`; whether the result gets pushed to the render queue
//! is the update loop's concern, not this module's.

use rand::Rng;

use crate::input::{GameEvent, Key};

use super::state::{Session, World};
use super::tick::step;

/// Advance the world by one multiplexed event.
///
/// Transition table:
/// - `Title` / `GameOver`: enter on keypress starts a fresh session;
///   everything else is ignored.
/// - `Playing`: a frame tick runs the physics step (moving to `GameOver`
///   when the player dies); direction key down/up edits the player's
///   velocity; keypresses are ignored.
pub fn advance(world: World, event: &GameEvent, rng: &mut impl Rng) -> World {
    match world {
        World::Title => match event {
            GameEvent::KeyPress(Key::Enter) => World::Playing(Session::start()),
            _ => World::Title,
        },
        World::Playing(session) => match event {
            GameEvent::Tick => {
                let next = step(&session, rng);
                if next.player.dead {
                    World::GameOver(next)
                } else {
                    World::Playing(next)
                }
            }
            GameEvent::KeyDown(key) if key.is_direction() => {
                let player = session.player.key_down(*key);
                World::Playing(session.with_player(player))
            }
            GameEvent::KeyUp(key) if key.is_direction() => {
                let player = session.player.key_up(*key);
                World::Playing(session.with_player(player))
            }
            _ => World::Playing(session),
        },
        World::GameOver(session) => match event {
            GameEvent::KeyPress(Key::Enter) => World::Playing(Session::start()),
            _ => World::GameOver(session),
        },
    }
}
