//! Platform abstraction layer
//!
//! The simulation never touches a window or terminal directly. A backend
//! supplies:
//! - Monotonic time in milliseconds
//! - Input events, drained without blocking past the given timeout
//! - Presentation of a finished draw list (line loops + debug text)

use std::time::Duration;

use crate::error::AsteroidsError;
use crate::renderer::DrawList;

pub mod terminal;

/// Logical keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Left,
    Right,
    Thrust,
    Fire,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Window closed or interrupt requested
    Quit,
    KeyDown(Key),
    KeyUp(Key),
}

pub trait Platform {
    /// Append pending events to `events`, waiting at most `timeout` for the first
    fn poll_events(
        &mut self,
        timeout: Duration,
        events: &mut Vec<InputEvent>,
    ) -> Result<(), AsteroidsError>;

    /// Milliseconds since the backend started
    fn monotonic_ms(&self) -> u64;

    /// Draw every loop and text line in `frame`, then show it
    fn present(&mut self, frame: &DrawList) -> Result<(), AsteroidsError>;
}
