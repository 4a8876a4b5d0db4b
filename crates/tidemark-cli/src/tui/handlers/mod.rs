//! Event handlers
//!
//! Keyboard, mouse, and marker-action handling as `impl App` blocks, one
//! concern per file.

mod keyboard;
mod markers;
mod mouse;
