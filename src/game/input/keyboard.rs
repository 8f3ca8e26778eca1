//! Keyboard Mapping
//!
//! Maps keyboard input to game events.
//!
//! | Key      | Press           | Release       |
//! |----------|-----------------|---------------|
//! | `C`      | RotateLeftDown  | RotateLeftUp  |
//! | `P`      | RotateRightDown | RotateRightUp |
//! | `Space`  |                 | Fire          |
//! | `F`      |                 | SpeedUp       |
//! | `S`      |                 | SpeedDown     |
//! | `Escape` | Quit            |               |
//!
//! Typing `q` or `Q` also quits.

use super::actions::GameEvent;
use winit::keyboard::KeyCode;

/// Map a physical key press/release to a game event.
pub fn map_key_to_event(key: KeyCode, pressed: bool) -> Option<GameEvent> {
    match (key, pressed) {
        (KeyCode::KeyC, true) => Some(GameEvent::RotateLeftDown),
        (KeyCode::KeyC, false) => Some(GameEvent::RotateLeftUp),
        (KeyCode::KeyP, true) => Some(GameEvent::RotateRightDown),
        (KeyCode::KeyP, false) => Some(GameEvent::RotateRightUp),
        (KeyCode::Space, false) => Some(GameEvent::Fire),
        (KeyCode::KeyF, false) => Some(GameEvent::SpeedUp),
        (KeyCode::KeyS, false) => Some(GameEvent::SpeedDown),
        (KeyCode::Escape, true) => Some(GameEvent::Quit),
        _ => None,
    }
}

/// Map typed text (character input) to a game event.
pub fn map_text_to_event(text: &str) -> Option<GameEvent> {
    match text {
        "q" | "Q" => Some(GameEvent::Quit),
        _ => None,
    }
}
