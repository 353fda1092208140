//! Widget surfaces
//!
//! The dashboard card and the floating variant. Both are thin shells over a
//! [`SessionController`](crate::session::SessionController); they only add
//! configuration, visibility and a serialisable view model.

mod card;
mod floating;
mod quick_action;
mod view;

pub use card::{AssistCard, CardConfig, CARD_SIZE, DEFAULT_CARD_TITLE};
pub use floating::{FloatingWidget, FLOATING_TITLE};
pub use quick_action::{QuickAction, CARD_QUICK_ACTIONS, FLOATING_QUICK_ACTIONS};
pub use view::{ConversationView, INPUT_PLACEHOLDER, THINKING_TEXT};
