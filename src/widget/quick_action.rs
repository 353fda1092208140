//! Predefined prompts offered as buttons

use serde::Serialize;

/// A button that submits a fixed phrase through the normal send path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuickAction {
    pub label: &'static str,
    pub phrase: &'static str,
}

pub const CARD_QUICK_ACTIONS: [QuickAction; 3] = [
    QuickAction {
        label: "Create Automation",
        phrase: "Create an automation",
    },
    QuickAction {
        label: "Create Scene",
        phrase: "Create a scene",
    },
    QuickAction {
        label: "Show Devices",
        phrase: "Show my devices",
    },
];

pub const FLOATING_QUICK_ACTIONS: [QuickAction; 3] = [
    QuickAction {
        label: "Create Automation",
        phrase: "Create an automation",
    },
    QuickAction {
        label: "Create Scene",
        phrase: "Create a scene",
    },
    QuickAction {
        label: "Show Lights",
        phrase: "Show me my lights",
    },
];
