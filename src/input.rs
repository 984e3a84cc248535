//! Logical keys and the multiplexed event type.
//!
//! The browser hands us raw key codes; everything downstream of the
//! multiplexer works on the `Key`/`GameEvent` level so the sim never sees a
//! platform code.

/// Logical key symbol. Codes outside the fixed table map to `Other`, which
/// every consumer treats as a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Left,
    Up,
    Right,
    Down,
    Enter,
    Other,
}

impl Key {
    /// Fixed key-code table: the four arrows and enter, nothing else.
    pub fn from_code(code: u32) -> Self {
        match code {
            37 => Key::Left,
            38 => Key::Up,
            39 => Key::Right,
            40 => Key::Down,
            13 => Key::Enter,
            _ => Key::Other,
        }
    }

    /// Whether this key steers the player.
    pub fn is_direction(self) -> bool {
        matches!(self, Key::Left | Key::Up | Key::Right | Key::Down)
    }
}

/// One multiplexed event as seen by the update loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    KeyDown(Key),
    KeyUp(Key),
    KeyPress(Key),
    /// One display refresh; drives exactly one physics step and one render
    /// push.
    Tick,
}
