//! App state components
//!
//! Centralized state management for the TUI, grouped into logical modules.

mod chat;
mod input;
mod layout;
mod scroll;

pub use chat::ChatState;
pub use input::InputState;
pub use layout::{LayoutState, MessageLayout};
pub use scroll::ScrollState;
