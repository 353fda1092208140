//! Capability call fault types

use thiserror::Error;

/// Text shown when a fault carries no usable message
pub const FAULT_FALLBACK_MESSAGE: &str = "Failed to get response";

/// A capability call that raised instead of returning a payload
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{} ({kind})", fault_text(.message.as_deref()))]
pub struct BridgeFault {
    pub kind: FaultKind,
    pub message: Option<String>,
}

impl BridgeFault {
    pub fn new(kind: FaultKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: Some(message.into()),
        }
    }

    /// A fault with nothing to say about itself
    pub fn silent(kind: FaultKind) -> Self {
        Self {
            kind,
            message: None,
        }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::new(FaultKind::Transport, message)
    }

    pub fn status(status: u16, body: &str) -> Self {
        Self::new(FaultKind::Status, format!("HTTP {status}: {body}"))
    }

    pub fn host(message: impl Into<String>) -> Self {
        Self::new(FaultKind::Host, message)
    }

    pub fn unbound() -> Self {
        Self::new(FaultKind::Unbound, "No host connection available")
    }

    /// The message to put in front of the user, never empty
    pub fn user_message(&self) -> &str {
        fault_text(self.message.as_deref())
    }
}

fn fault_text(message: Option<&str>) -> &str {
    match message {
        Some(message) if !message.is_empty() => message,
        _ => FAULT_FALLBACK_MESSAGE,
    }
}

/// Where a fault came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaultKind {
    /// Connection, timeout or unreadable body
    Transport,
    /// The host answered with a non-success status
    Status,
    /// The host raised while running the capability
    Host,
    /// The widget holds no live host handle
    Unbound,
}

impl std::fmt::Display for FaultKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            FaultKind::Transport => "transport",
            FaultKind::Status => "status",
            FaultKind::Host => "host",
            FaultKind::Unbound => "unbound",
        };
        f.write_str(name)
    }
}
