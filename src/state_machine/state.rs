//! Conversation state types

use super::transition::{transition, TransitionError};
use super::{Effect, Event};
use serde::{Deserialize, Serialize};

// ============================================================================
// Messages
// ============================================================================

/// Who authored a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One entry of the conversation log. Never mutated once appended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    role: Role,
    content: String,
}

impl Message {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

// ============================================================================
// Conversation State
// ============================================================================

/// Request status of a conversation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ConvState {
    /// Ready for input, nothing in flight
    #[default]
    Idle,

    /// Exactly one query in flight for `prompt`
    Awaiting { prompt: String },
}

impl ConvState {
    pub fn is_busy(&self) -> bool {
        matches!(self, ConvState::Awaiting { .. })
    }
}

/// The aggregate owned by one widget: history, draft and status.
///
/// Only [`Conversation::apply`] mutates `history` and `state`, so the
/// append-only log and the single-flight rule cannot be bypassed.
#[derive(Debug, Clone, Default)]
pub struct Conversation {
    state: ConvState,
    history: Vec<Message>,
    pending: String,
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ConvState {
        &self.state
    }

    pub fn is_busy(&self) -> bool {
        self.state.is_busy()
    }

    pub fn history(&self) -> &[Message] {
        &self.history
    }

    pub fn pending(&self) -> &str {
        &self.pending
    }

    /// Replace the draft. The input field is the only writer.
    pub fn set_pending(&mut self, text: impl Into<String>) {
        self.pending = text.into();
    }

    /// Run one transition and apply its local effects.
    ///
    /// Returns the effects the caller still has to execute (notifications and
    /// the query itself), in the order the transition produced them.
    ///
    /// # Errors
    ///
    /// Returns the [`TransitionError`] that refused the event; nothing is
    /// changed in that case.
    pub fn apply(&mut self, event: Event) -> Result<Vec<Effect>, TransitionError> {
        let result = transition(&self.state, event)?;
        self.state = result.new_state;

        let mut outward = Vec::with_capacity(result.effects.len());
        for effect in result.effects {
            match effect {
                Effect::AppendMessage(message) => self.history.push(message),
                Effect::ClearPending => self.pending.clear(),
                other => outward.push(other),
            }
        }
        Ok(outward)
    }
}
