//! Input Module
//!
//! Game events and keyboard mapping.

pub mod actions;
pub mod keyboard;

pub use actions::GameEvent;
pub use keyboard::{map_key_to_event, map_text_to_event};
