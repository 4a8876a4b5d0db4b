//! Mock reply generation
//!
//! No AI integration exists. Replies rotate through canned strings and are
//! delivered after a fixed delay scheduled by the UI event loop (see
//! `constants::chat::REPLY_DELAY`).

/// Greeting message seeding a new session
pub const GREETING: &str = "Hello! I'm the Tidemark assistant. How can I help you today?";

const CANNED_REPLIES: &[&str] = &[
    "I'm a mock response. The AI integration is not implemented yet.",
    "Still a mock response - but imagine something insightful here.",
    "Mock response again. Try scrolling up and marking a spot with Ctrl+B.",
];

/// Produces canned replies in rotation
#[derive(Debug, Default)]
pub struct MockResponder {
    next: usize,
}

impl MockResponder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Produce the reply for a user message
    pub fn reply_to(&mut self, _user_text: &str) -> String {
        let reply = CANNED_REPLIES[self.next % CANNED_REPLIES.len()];
        self.next += 1;
        reply.to_string()
    }
}
