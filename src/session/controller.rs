//! Conversation session controller

use super::outcome::{interpret, Reply};
use crate::bridge::CapabilityBridge;
use crate::config::QueryTarget;
use crate::host::HandleBinding;
use crate::state_machine::{Conversation, Effect, Event, Message, TransitionError};
use crate::widget::QuickAction;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::broadcast;

const EVENT_CHANNEL_CAPACITY: usize = 64;

/// Notifications for the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetEvent {
    /// History changed, scroll to the latest message
    ScrollToLatest,
    /// A request started or settled
    BusyChanged { busy: bool },
}

/// Result of a `send` call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendOutcome {
    /// The cycle ran to completion and the conversation is idle again
    Completed(Reply),
    /// Nothing happened
    Ignored(TransitionError),
}

/// Consistent view of the conversation at one instant
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub history: Vec<Message>,
    pub pending: String,
    pub busy: bool,
}

/// Owns one conversation and drives its request cycles.
///
/// The conversation lock is never held across an await point, so every
/// check-then-write on it is a single step and at most one request can be in
/// flight.
pub struct SessionController {
    session_id: String,
    conversation: Mutex<Conversation>,
    bridge: CapabilityBridge,
    events_tx: broadcast::Sender<WidgetEvent>,
}

impl SessionController {
    pub fn new(target: QueryTarget, binding: Arc<HandleBinding>) -> Self {
        let (events_tx, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self {
            session_id: uuid::Uuid::new_v4().to_string(),
            conversation: Mutex::new(Conversation::new()),
            bridge: CapabilityBridge::new(target, binding),
            events_tx,
        }
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    pub fn binding(&self) -> &Arc<HandleBinding> {
        self.bridge.binding()
    }

    pub fn subscribe(&self) -> broadcast::Receiver<WidgetEvent> {
        self.events_tx.subscribe()
    }

    pub fn history(&self) -> Vec<Message> {
        self.lock().history().to_vec()
    }

    pub fn pending(&self) -> String {
        self.lock().pending().to_string()
    }

    pub fn is_busy(&self) -> bool {
        self.lock().is_busy()
    }

    /// Whether the send button is enabled
    pub fn can_send(&self) -> bool {
        let conversation = self.lock();
        !conversation.is_busy() && !conversation.pending().trim().is_empty()
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let conversation = self.lock();
        SessionSnapshot {
            history: conversation.history().to_vec(),
            pending: conversation.pending().to_string(),
            busy: conversation.is_busy(),
        }
    }

    /// Input field write path
    pub fn set_pending(&self, text: impl Into<String>) {
        self.lock().set_pending(text);
    }

    /// Submit the current draft
    pub async fn send_pending(&self) -> SendOutcome {
        let draft = self.pending();
        self.send(&draft).await
    }

    /// Pre-fill the draft with the action's phrase and submit it
    pub async fn quick_action(&self, action: &QuickAction) -> SendOutcome {
        self.set_pending(action.phrase);
        self.send_pending().await
    }

    /// Run one request/response cycle for `raw_text`.
    ///
    /// Blank input, or input while a request is already in flight, is a
    /// silent no-op. Otherwise the conversation is back to idle when this
    /// returns, whatever the bridge did.
    pub async fn send(&self, raw_text: &str) -> SendOutcome {
        let submitted = self.lock().apply(Event::submit(raw_text));
        let effects = match submitted {
            Ok(effects) => effects,
            Err(reason) => {
                tracing::debug!(session_id = %self.session_id, %reason, "Submission ignored");
                return SendOutcome::Ignored(reason);
            }
        };

        let in_flight = InFlight::begin(self);
        let mut reply = Reply::Empty;
        for effect in effects {
            match effect {
                Effect::InvokeQuery { prompt } => reply = self.run_query(&prompt).await,
                other => self.execute_effect(&other),
            }
        }
        in_flight.settle(reply.clone().into_message());
        SendOutcome::Completed(reply)
    }

    async fn run_query(&self, prompt: &str) -> Reply {
        tracing::info!(
            session_id = %self.session_id,
            prompt_len = prompt.len(),
            "Sending query"
        );
        let start = std::time::Instant::now();
        let reply = interpret(self.bridge.query(prompt).await);

        match &reply {
            Reply::Empty => tracing::warn!(
                session_id = %self.session_id,
                "Query returned neither response nor error; nothing appended"
            ),
            Reply::Fault(message) => tracing::warn!(
                session_id = %self.session_id,
                error = %message,
                "Query call failed"
            ),
            _ => {}
        }
        tracing::debug!(
            session_id = %self.session_id,
            outcome = reply.kind(),
            duration_ms = %start.elapsed().as_millis(),
            "Query settled"
        );
        reply
    }

    fn resolve(&self, reply: Option<String>) {
        let resolved = self.lock().apply(Event::resolve(reply));
        match resolved {
            Ok(effects) => {
                for effect in &effects {
                    self.execute_effect(effect);
                }
            }
            Err(e) => {
                tracing::error!(session_id = %self.session_id, error = %e, "Failed to resolve request");
            }
        }
        self.emit(WidgetEvent::BusyChanged { busy: false });
    }

    fn execute_effect(&self, effect: &Effect) {
        match effect {
            Effect::ScrollToLatest => self.emit(WidgetEvent::ScrollToLatest),
            // Applied by the conversation itself, or handled by `send`
            Effect::AppendMessage(_) | Effect::ClearPending | Effect::InvokeQuery { .. } => {}
        }
    }

    pub(crate) fn emit(&self, event: WidgetEvent) {
        // No subscribers is fine
        let _ = self.events_tx.send(event);
    }

    fn lock(&self) -> MutexGuard<'_, Conversation> {
        // Every mutation is a single `apply`, so a poisoned lock still holds
        // a consistent conversation
        self.conversation
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl std::fmt::Debug for SessionController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionController")
            .field("session_id", &self.session_id)
            .field("target", self.bridge.target())
            .finish_non_exhaustive()
    }
}

/// Scoped ownership of the busy flag.
///
/// Settling releases it with the reply; dropping it unsettled (a panic, or
/// the send future being dropped mid-flight) releases it with no reply.
struct InFlight<'a> {
    controller: &'a SessionController,
    settled: bool,
}

impl<'a> InFlight<'a> {
    fn begin(controller: &'a SessionController) -> Self {
        controller.emit(WidgetEvent::BusyChanged { busy: true });
        Self {
            controller,
            settled: false,
        }
    }

    fn settle(mut self, reply: Option<String>) {
        self.settled = true;
        self.controller.resolve(reply);
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if !self.settled {
            tracing::warn!(
                session_id = %self.controller.session_id,
                "Request abandoned before settling; releasing busy flag"
            );
            self.controller.resolve(None);
        }
    }
}
