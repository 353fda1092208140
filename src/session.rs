//! Session controller
//!
//! Runs request/response cycles against the capability bridge and feeds the
//! outcome back into the conversation state machine.

mod controller;
mod outcome;

pub use controller::{SendOutcome, SessionController, SessionSnapshot, WidgetEvent};
pub use outcome::{interpret, Reply};
