//! Effects produced by state transitions

use super::state::Message;

/// Effects to be executed after a state transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Append a message to the history
    AppendMessage(Message),

    /// Clear the draft input
    ClearPending,

    /// Tell the presentation layer the history changed
    ScrollToLatest,

    /// Issue the backend query for this prompt
    InvokeQuery { prompt: String },
}

impl Effect {
    pub fn append_user(content: impl Into<String>) -> Self {
        Effect::AppendMessage(Message::user(content))
    }

    pub fn append_assistant(content: impl Into<String>) -> Self {
        Effect::AppendMessage(Message::assistant(content))
    }

    pub fn invoke_query(prompt: impl Into<String>) -> Self {
        Effect::InvokeQuery {
            prompt: prompt.into(),
        }
    }
}
