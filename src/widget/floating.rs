//! Floating variant injected on every page

use super::{ConversationView, FLOATING_QUICK_ACTIONS};
use crate::config::QueryTarget;
use crate::host::HandleBinding;
use crate::session::{SessionController, WidgetEvent};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

pub const FLOATING_TITLE: &str = "AI Assistant";

const FLOATING_GREETING: &str = "Hi! I can help you control your smart home, create automations, \
     and manage dashboards. What would you like to do?";

/// Button plus overlay panel. Takes no configuration.
#[derive(Debug)]
pub struct FloatingWidget {
    open: AtomicBool,
    session: SessionController,
}

impl FloatingWidget {
    pub fn new(target: QueryTarget, binding: Arc<HandleBinding>) -> Self {
        Self {
            open: AtomicBool::new(false),
            session: SessionController::new(target, binding),
        }
    }

    pub fn is_open(&self) -> bool {
        self.open.load(Ordering::Acquire)
    }

    /// Flip the panel's visibility and return the new state
    pub fn toggle(&self) -> bool {
        let open = !self.open.fetch_xor(true, Ordering::AcqRel);
        if open && self.session.history().is_empty() {
            self.session.emit(WidgetEvent::ScrollToLatest);
        }
        open
    }

    pub fn session(&self) -> &SessionController {
        &self.session
    }

    pub fn view(&self) -> ConversationView {
        ConversationView::build(
            FLOATING_TITLE,
            self.session.snapshot(),
            FLOATING_GREETING,
            &FLOATING_QUICK_ACTIONS,
        )
    }
}
