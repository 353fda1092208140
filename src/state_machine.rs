//! Conversation state machine
//!
//! Pure transitions in the Elm Architecture style: the transition function
//! never performs I/O, it only returns the next state plus the effects the
//! session controller has to carry out.

mod effect;
pub mod event;
pub mod state;
pub(crate) mod transition;

#[cfg(test)]
mod proptests;

pub use effect::Effect;
pub use event::Event;
pub use state::{ConvState, Conversation, Message, Role};
pub use transition::{transition, TransitionError, TransitionResult};
