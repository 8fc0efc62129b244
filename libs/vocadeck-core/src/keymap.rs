//! Global keyboard shortcuts for deck navigation.
//!
//! Left arrow and `A` step back, right arrow and `D` step forward, space
//! draws a random card. Shortcuts are suppressed while focus sits inside a
//! text input so normal typing is never hijacked.

use serde::{Deserialize, Serialize};

/// Navigation command produced by a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavCommand {
    Prev,
    Next,
    Random,
}

/// Map a key code (DOM `KeyboardEvent.code` naming) to a navigation
/// command. `typing` is true while a text input control has focus.
pub fn command_for(code: &str, typing: bool) -> Option<NavCommand> {
    if typing {
        return None;
    }
    match code {
        "ArrowLeft" | "KeyA" => Some(NavCommand::Prev),
        "ArrowRight" | "KeyD" => Some(NavCommand::Next),
        "Space" => Some(NavCommand::Random),
        _ => None,
    }
}
