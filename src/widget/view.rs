//! Serialisable view model handed to the renderer

use super::QuickAction;
use crate::session::SessionSnapshot;
use crate::state_machine::Message;
use serde::Serialize;

pub const INPUT_PLACEHOLDER: &str = "Ask me anything...";
pub const THINKING_TEXT: &str = "Thinking...";

/// Everything a renderer needs to draw one conversation panel
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversationView {
    pub title: String,
    pub messages: Vec<Message>,
    /// Shown instead of messages while the history is empty
    pub greeting: Option<&'static str>,
    /// Shown after the messages while a request is in flight
    pub thinking: Option<&'static str>,
    pub quick_actions: Vec<QuickAction>,
    pub draft: String,
    pub placeholder: &'static str,
    pub send_enabled: bool,
}

impl ConversationView {
    pub fn build(
        title: impl Into<String>,
        snapshot: SessionSnapshot,
        greeting: &'static str,
        quick_actions: &[QuickAction],
    ) -> Self {
        let send_enabled = !snapshot.busy && !snapshot.pending.trim().is_empty();
        Self {
            title: title.into(),
            greeting: snapshot.history.is_empty().then_some(greeting),
            thinking: snapshot.busy.then_some(THINKING_TEXT),
            messages: snapshot.history,
            quick_actions: quick_actions.to_vec(),
            draft: snapshot.pending,
            placeholder: INPUT_PLACEHOLDER,
            send_enabled,
        }
    }
}
