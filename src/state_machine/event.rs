//! Events that can occur in a conversation

/// Events that trigger state transitions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The user submitted raw input text (untrimmed).
    Submit { text: String },

    /// The in-flight request settled. `reply` is the assistant text to
    /// append, or `None` for an empty acknowledgement.
    Resolve { reply: Option<String> },
}

impl Event {
    pub fn submit(text: impl Into<String>) -> Self {
        Event::Submit { text: text.into() }
    }

    pub fn resolve(reply: Option<String>) -> Self {
        Event::Resolve { reply }
    }
}
