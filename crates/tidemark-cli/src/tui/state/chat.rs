//! Chat state: conversation, input line, and pending mock replies
//!
//! Replies are scheduled as deadlines and drained by the event loop tick,
//! so the "assistant" answers a fixed delay after each send.

use std::time::Instant;

use tidemark_core::chat::GREETING;
use tidemark_core::constants::chat::REPLY_DELAY;
use tidemark_core::{ChatMessage, MockResponder, Role};

use super::InputState;

/// A mock reply waiting for its delivery deadline
#[derive(Debug)]
struct PendingReply {
    due: Instant,
    text: String,
}

/// Conversation and input state
pub struct ChatState {
    pub messages: Vec<ChatMessage>,
    pub input: InputState,
    responder: MockResponder,
    pending_replies: Vec<PendingReply>,
    next_message_id: u64,
}

impl ChatState {
    /// Create chat state seeded with the greeting message
    pub fn new() -> Self {
        let mut state = Self {
            messages: Vec::new(),
            input: InputState::new(),
            responder: MockResponder::new(),
            pending_replies: Vec::new(),
            next_message_id: 0,
        };
        state.push_message(Role::Assistant, GREETING);
        state
    }

    /// Send the current input as a user message and schedule the mock reply.
    ///
    /// Returns false when the input is blank (nothing happens).
    pub fn send(&mut self, now: Instant) -> bool {
        if self.input.is_empty() {
            return false;
        }
        let text = self.input.take();
        let reply = self.responder.reply_to(&text);
        self.push_message(Role::User, text);
        self.pending_replies.push(PendingReply {
            due: now + REPLY_DELAY,
            text: reply,
        });
        true
    }

    /// Deliver replies whose deadline has passed. Returns true if any landed.
    pub fn poll_replies(&mut self, now: Instant) -> bool {
        let mut delivered = false;
        // Drain in order; deadlines are monotonic because sends are
        let due: Vec<String> = {
            let mut due = Vec::new();
            self.pending_replies.retain(|reply| {
                if reply.due <= now {
                    due.push(reply.text.clone());
                    false
                } else {
                    true
                }
            });
            due
        };
        for text in due {
            self.push_message(Role::Assistant, text);
            delivered = true;
        }
        delivered
    }

    fn push_message(&mut self, role: Role, text: impl Into<String>) -> u64 {
        let id = self.next_message_id;
        self.next_message_id += 1;
        self.messages.push(ChatMessage::new(id, role, text));
        id
    }
}

impl Default for ChatState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_new_session_has_greeting() {
        let chat = ChatState::new();
        assert_eq!(chat.messages.len(), 1);
        assert_eq!(chat.messages[0].role, Role::Assistant);
    }

    #[test]
    fn test_blank_input_is_not_sent() {
        let mut chat = ChatState::new();
        chat.input.insert_char(' ');
        assert!(!chat.send(Instant::now()));
        assert_eq!(chat.messages.len(), 1);
    }

    #[test]
    fn test_send_schedules_delayed_reply() {
        let mut chat = ChatState::new();
        let now = Instant::now();
        for c in "hi".chars() {
            chat.input.insert_char(c);
        }
        assert!(chat.send(now));
        assert_eq!(chat.messages.len(), 2);

        // Not yet due
        assert!(!chat.poll_replies(now + REPLY_DELAY / 2));
        assert_eq!(chat.messages.len(), 2);

        assert!(chat.poll_replies(now + REPLY_DELAY));
        assert_eq!(chat.messages.len(), 3);
        assert_eq!(chat.messages[2].role, Role::Assistant);

        // Nothing left pending
        assert!(!chat.poll_replies(now + REPLY_DELAY + Duration::from_secs(5)));
    }

    #[test]
    fn test_message_ids_are_monotonic() {
        let mut chat = ChatState::new();
        let now = Instant::now();
        for c in "one".chars() {
            chat.input.insert_char(c);
        }
        chat.send(now);
        chat.poll_replies(now + REPLY_DELAY);

        let ids: Vec<u64> = chat.messages.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![0, 1, 2]);
    }
}
