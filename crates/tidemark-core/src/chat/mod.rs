//! Chat message model and mock reply generation

mod message;
mod responder;

pub use message::{ChatMessage, Role};
pub use responder::{MockResponder, GREETING};
