//! Latched player input
//!
//! Written only from the event boundary and read by the simulation step.

use serde::{Deserialize, Serialize};

use crate::platform::{InputEvent, Key};

/// Whether the driver should keep ticking
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

/// Held state per logical action
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputState {
    pub turn_left: bool,
    pub turn_right: bool,
    pub thrust: bool,
    pub fire: bool,
}

impl InputState {
    /// Fold one event into the latch
    pub fn apply(&mut self, event: InputEvent) -> Control {
        let (key, pressed) = match event {
            InputEvent::Quit => return Control::Quit,
            InputEvent::KeyDown(key) => (key, true),
            InputEvent::KeyUp(key) => (key, false),
        };

        match key {
            Key::Quit => {
                if pressed {
                    return Control::Quit;
                }
            }
            Key::Left => self.turn_left = pressed,
            Key::Right => self.turn_right = pressed,
            Key::Thrust => self.thrust = pressed,
            Key::Fire => self.fire = pressed,
        }
        Control::Continue
    }
}
