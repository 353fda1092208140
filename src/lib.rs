//! Assist widget - conversation engine for a home-automation assistant
//!
//! A chat widget that forwards prompts to the host's `query` capability and
//! shows the replies inline. The engine covers the conversation state
//! machine, the single-flight request cycle and the bootstrapper that
//! attaches one floating widget per page and keeps it bound to the host's
//! live handle.

pub mod bootstrap;
pub mod bridge;
pub mod config;
pub mod host;
pub mod logging;
pub mod session;
pub mod state_machine;
pub mod widget;

pub use bootstrap::{Attachment, Bootstrapper, Document, FLOATING_WIDGET_TAG};
pub use bridge::{BridgeFault, CapabilityBridge, FaultKind, QueryPayload};
pub use config::{BootstrapConfig, ConfigError, HassConfig, QueryTarget};
pub use host::{HandleBinding, HostHandle, HostRoot, LoggingHandle, RestHostHandle, SharedHandle};
pub use session::{Reply, SendOutcome, SessionController, WidgetEvent};
pub use state_machine::{ConvState, Conversation, Message, Role};
pub use widget::{AssistCard, CardConfig, FloatingWidget, QuickAction};
