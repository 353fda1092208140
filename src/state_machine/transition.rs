//! Pure state transition function

use super::{ConvState, Effect, Event};
use thiserror::Error;

/// Result of a state transition
#[derive(Debug)]
pub struct TransitionResult {
    pub new_state: ConvState,
    pub effects: Vec<Effect>,
}

impl TransitionResult {
    pub fn new(state: ConvState) -> Self {
        Self {
            new_state: state,
            effects: vec![],
        }
    }

    #[must_use]
    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }

    #[must_use]
    pub fn with_effects(mut self, effects: impl IntoIterator<Item = Effect>) -> Self {
        self.effects.extend(effects);
        self
    }
}

/// Reasons a transition is refused. The conversation is left unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransitionError {
    #[error("Prompt is empty")]
    EmptyPrompt,
    #[error("A request is already in flight")]
    Busy,
    #[error("No request is in flight")]
    NotAwaiting,
}

/// Pure transition function
///
/// Given the same inputs it always produces the same outputs, with no I/O.
///
/// # Errors
///
/// Returns [`TransitionError`] for a blank submit, a submit while a request
/// is in flight, or a resolve with nothing in flight.
pub fn transition(state: &ConvState, event: Event) -> Result<TransitionResult, TransitionError> {
    match (state, event) {
        // Blank input is refused before the busy check
        (_, Event::Submit { text }) if text.trim().is_empty() => Err(TransitionError::EmptyPrompt),

        (ConvState::Idle, Event::Submit { text }) => {
            let prompt = text.trim().to_string();
            Ok(TransitionResult::new(ConvState::Awaiting {
                prompt: prompt.clone(),
            })
            .with_effects([
                Effect::append_user(prompt.clone()),
                Effect::ClearPending,
                Effect::ScrollToLatest,
                Effect::invoke_query(prompt),
            ]))
        }

        // Single-flight: dropped, never buffered
        (ConvState::Awaiting { .. }, Event::Submit { .. }) => Err(TransitionError::Busy),

        (ConvState::Awaiting { .. }, Event::Resolve { reply }) => {
            let result = TransitionResult::new(ConvState::Idle);
            let result = match reply {
                Some(content) => result.with_effect(Effect::append_assistant(content)),
                None => result,
            };
            Ok(result.with_effect(Effect::ScrollToLatest))
        }

        (ConvState::Idle, Event::Resolve { .. }) => Err(TransitionError::NotAwaiting),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn awaiting() -> ConvState {
        ConvState::Awaiting {
            prompt: "Turn on lights".into(),
        }
    }

    #[test]
    fn test_idle_submit_trims_and_requests() {
        let result = transition(&ConvState::Idle, Event::submit("\tTurn on lights\n")).unwrap();

        assert_eq!(result.new_state, awaiting());
        assert_eq!(
            result.effects,
            vec![
                Effect::append_user("Turn on lights"),
                Effect::ClearPending,
                Effect::ScrollToLatest,
                Effect::invoke_query("Turn on lights"),
            ]
        );
    }

    #[test]
    fn test_blank_submit_rejected_in_both_states() {
        assert_eq!(
            transition(&ConvState::Idle, Event::submit("   ")).unwrap_err(),
            TransitionError::EmptyPrompt
        );
        assert_eq!(
            transition(&awaiting(), Event::submit("")).unwrap_err(),
            TransitionError::EmptyPrompt
        );
    }

    #[test]
    fn test_submit_while_awaiting_is_busy() {
        assert_eq!(
            transition(&awaiting(), Event::submit("again")).unwrap_err(),
            TransitionError::Busy
        );
    }

    #[test]
    fn test_resolve_with_reply() {
        let result = transition(&awaiting(), Event::resolve(Some("done".into()))).unwrap();
        assert_eq!(result.new_state, ConvState::Idle);
        assert_eq!(
            result.effects,
            vec![Effect::append_assistant("done"), Effect::ScrollToLatest]
        );
    }

    #[test]
    fn test_resolve_without_reply_still_idles() {
        let result = transition(&awaiting(), Event::resolve(None)).unwrap();
        assert_eq!(result.new_state, ConvState::Idle);
        assert_eq!(result.effects, vec![Effect::ScrollToLatest]);
    }

    #[test]
    fn test_resolve_when_idle_rejected() {
        assert_eq!(
            transition(&ConvState::Idle, Event::resolve(None)).unwrap_err(),
            TransitionError::NotAwaiting
        );
    }
}
