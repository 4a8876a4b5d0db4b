//! Chat message model

/// Who authored a message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

/// A single chat message
///
/// The `id` is assigned monotonically by the owning conversation and doubles
/// as the viewport item id for bookmark visibility tracking.
#[derive(Debug, Clone)]
pub struct ChatMessage {
    pub id: u64,
    pub role: Role,
    pub text: String,
}

impl ChatMessage {
    pub fn new(id: u64, role: Role, text: impl Into<String>) -> Self {
        Self {
            id,
            role,
            text: text.into(),
        }
    }

    /// Check if this message was sent by the user
    pub fn is_user(&self) -> bool {
        self.role == Role::User
    }
}
