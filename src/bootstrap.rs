//! Attachment bootstrapper
//!
//! Puts exactly one floating widget on the page once its definition is
//! registered, binds it to the host's live handle and keeps that binding
//! current. Best effort: every failure is silent.

mod document;
mod observer;
mod poll;
mod registry;

pub use document::Document;
pub use observer::spawn_handle_observer;
pub use poll::{poll_until, PollOutcome};
pub use registry::ComponentRegistry;

use crate::config::{BootstrapConfig, QueryTarget};
use crate::host::HandleBinding;
use crate::widget::FloatingWidget;
use std::sync::Arc;

/// Definition name of the floating widget
pub const FLOATING_WIDGET_TAG: &str = "assist-floating-widget";

/// How a bootstrap attempt ended
#[derive(Debug, Clone)]
pub enum Attachment {
    /// This call created the widget
    Attached(Arc<FloatingWidget>),
    /// A widget was already on the page
    AlreadyAttached(Arc<FloatingWidget>),
    /// The definition never showed up
    TimedOut,
    /// The page was discarded first
    Cancelled,
}

impl Attachment {
    pub fn widget(&self) -> Option<&Arc<FloatingWidget>> {
        match self {
            Attachment::Attached(widget) | Attachment::AlreadyAttached(widget) => Some(widget),
            Attachment::TimedOut | Attachment::Cancelled => None,
        }
    }
}

/// Guarded factory for the page's floating widget
pub struct Bootstrapper {
    document: Arc<Document>,
    config: BootstrapConfig,
    target: QueryTarget,
}

impl Bootstrapper {
    pub fn new(document: Arc<Document>, config: BootstrapConfig, target: QueryTarget) -> Self {
        Self {
            document,
            config,
            target,
        }
    }

    pub fn document(&self) -> &Arc<Document> {
        &self.document
    }

    /// Entry point. Safe to call from several triggers (page ready, script
    /// load): only one widget is ever attached.
    pub async fn run(&self) -> Attachment {
        if self.document.is_discarded() {
            return Attachment::Cancelled;
        }

        let registry = self.document.registry();
        if !registry.is_defined(FLOATING_WIDGET_TAG) {
            let outcome = poll_until(
                self.config.poll_interval,
                self.config.timeout,
                &self.document.discarded(),
                || registry.is_defined(FLOATING_WIDGET_TAG),
            )
            .await;
            match outcome {
                PollOutcome::Ready => {}
                PollOutcome::TimedOut => {
                    tracing::debug!(
                        timeout_ms = %self.config.timeout.as_millis(),
                        "Widget definition never registered; not attaching"
                    );
                    return Attachment::TimedOut;
                }
                PollOutcome::Cancelled => return Attachment::Cancelled,
            }
        }

        self.attach()
    }

    /// Existence check and append under one lock on the body
    fn attach(&self) -> Attachment {
        let mut body = self.document.body();
        if self.document.is_discarded() {
            return Attachment::Cancelled;
        }
        if let Some(existing) = body.as_ref() {
            return Attachment::AlreadyAttached(existing.clone());
        }

        let widget = self.build_widget();
        *body = Some(widget.clone());
        tracing::info!(session_id = %widget.session().session_id(), "Floating widget attached");
        Attachment::Attached(widget)
    }

    fn build_widget(&self) -> Arc<FloatingWidget> {
        let binding = Arc::new(HandleBinding::default());
        let widget = Arc::new(FloatingWidget::new(self.target.clone(), binding.clone()));

        let Some(root) = self.document.root() else {
            tracing::debug!("No host root on the page; widget left unbound");
            return widget;
        };
        // Subscribe before reading, so a replacement published after the
        // read still reaches the observer
        let mut handles = root.observe();
        let Some(handle) = handles.borrow_and_update().clone() else {
            tracing::debug!("Host root exposes no handle; widget left unbound");
            return widget;
        };

        binding.bind(&handle);
        // Detached: stops with the page's discard token or the root
        drop(spawn_handle_observer(handles, binding, self.document.discarded()));
        widget
    }
}
