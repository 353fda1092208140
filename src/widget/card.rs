//! Dashboard card variant

use super::{ConversationView, QuickAction, CARD_QUICK_ACTIONS};
use crate::config::{ConfigError, QueryTarget};
use crate::host::{HandleBinding, SharedHandle};
use crate::session::SessionController;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::sync::{Arc, PoisonError, RwLock};

pub const DEFAULT_CARD_TITLE: &str = "AI Assistant";
/// Nominal height in dashboard grid units
pub const CARD_SIZE: u32 = 6;

const CARD_GREETING: &str = "Hi! I can help you control your smart home.";

/// Card options as written in the dashboard's configuration.
///
/// A null or empty title falls back to the default, and quick actions are
/// shown unless explicitly set to `false`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CardConfig {
    #[serde(default = "default_title", deserialize_with = "title_or_default")]
    pub title: String,
    #[serde(
        default = "default_show_quick_actions",
        deserialize_with = "shown_unless_false"
    )]
    pub show_quick_actions: bool,
}

fn default_title() -> String {
    DEFAULT_CARD_TITLE.to_string()
}

fn default_show_quick_actions() -> bool {
    true
}

fn title_or_default<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    let title = Option::<String>::deserialize(deserializer)?;
    Ok(title
        .filter(|t| !t.is_empty())
        .unwrap_or_else(default_title))
}

fn shown_unless_false<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or_else(default_show_quick_actions))
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            show_quick_actions: default_show_quick_actions(),
        }
    }
}

impl CardConfig {
    /// Read the dashboard's card configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when `value` is not an object and
    /// [`ConfigError::Parse`] when a field has the wrong type.
    pub fn from_value(value: Value) -> Result<Self, ConfigError> {
        if !value.is_object() {
            return Err(ConfigError::Invalid(format!(
                "card configuration must be an object, got {value}"
            )));
        }
        Ok(serde_json::from_value(value)?)
    }
}

/// Conversation card placed on a dashboard by the user.
///
/// The dashboard hands the card its host handle directly, so there is no
/// observer here: every assignment goes through [`AssistCard::set_handle`].
pub struct AssistCard {
    config: RwLock<CardConfig>,
    session: SessionController,
}

impl AssistCard {
    pub fn new(target: QueryTarget) -> Self {
        Self {
            config: RwLock::new(CardConfig::default()),
            session: SessionController::new(target, Arc::new(HandleBinding::default())),
        }
    }

    /// # Errors
    ///
    /// Same as [`CardConfig::from_value`]; the current config is kept.
    pub fn set_config(&self, value: Value) -> Result<(), ConfigError> {
        let config = CardConfig::from_value(value)?;
        *self.config.write().unwrap_or_else(PoisonError::into_inner) = config;
        Ok(())
    }

    pub fn config(&self) -> CardConfig {
        self.config
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn set_handle(&self, handle: &SharedHandle) {
        if self.session.binding().rebind_if_changed(handle) {
            tracing::debug!(session_id = %self.session.session_id(), "Card handle updated");
        }
    }

    pub fn card_size(&self) -> u32 {
        CARD_SIZE
    }

    pub fn session(&self) -> &SessionController {
        &self.session
    }

    pub fn view(&self) -> ConversationView {
        let config = self.config();
        let quick_actions: &[QuickAction] = if config.show_quick_actions {
            &CARD_QUICK_ACTIONS[..]
        } else {
            &[]
        };
        ConversationView::build(
            config.title,
            self.session.snapshot(),
            CARD_GREETING,
            quick_actions,
        )
    }
}
