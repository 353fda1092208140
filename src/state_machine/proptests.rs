//! Property-based tests for the state machine
//!
//! These tests verify key invariants hold across arbitrary event sequences.

use super::*;
use proptest::prelude::*;

// ============================================================================
// Arbitrary Generators
// ============================================================================

fn arb_blank_text() -> impl Strategy<Value = String> {
    "[ \t\n]{0,6}"
}

fn arb_prompt_text() -> impl Strategy<Value = String> {
    "[ ]{0,3}[a-zA-Z0-9][a-zA-Z0-9 ?.!]{0,30}"
}

fn arb_reply() -> impl Strategy<Value = Option<String>> {
    prop::option::of("[a-zA-Z :.]{0,30}")
}

fn arb_event() -> impl Strategy<Value = Event> {
    prop_oneof![
        arb_blank_text().prop_map(Event::submit),
        arb_prompt_text().prop_map(Event::submit),
        arb_reply().prop_map(Event::resolve),
    ]
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    /// Rejected events never change the conversation
    #[test]
    fn prop_rejection_is_noop(events in prop::collection::vec(arb_event(), 0..40)) {
        let mut conv = Conversation::new();
        for event in events {
            let before_history = conv.history().to_vec();
            let before_state = conv.state().clone();
            if conv.apply(event).is_err() {
                prop_assert_eq!(conv.history(), before_history.as_slice());
                prop_assert_eq!(conv.state(), &before_state);
            }
        }
    }

    /// History only ever grows, and existing entries never change
    #[test]
    fn prop_history_append_only(events in prop::collection::vec(arb_event(), 0..40)) {
        let mut conv = Conversation::new();
        for event in events {
            let before = conv.history().to_vec();
            let _ = conv.apply(event);
            prop_assert!(conv.history().len() >= before.len());
            prop_assert_eq!(&conv.history()[..before.len()], before.as_slice());
        }
    }

    /// Among consecutive submits while awaiting, only the first is accepted
    #[test]
    fn prop_single_flight(prompts in prop::collection::vec(arb_prompt_text(), 1..10)) {
        let mut conv = Conversation::new();
        let mut accepted = 0;
        for prompt in prompts {
            if conv.apply(Event::submit(prompt)).is_ok() {
                accepted += 1;
            }
        }
        prop_assert_eq!(accepted, 1);
        prop_assert_eq!(conv.history().len(), 1);
        prop_assert!(conv.is_busy());
    }

    /// An accepted submit appends exactly one user message and asks for
    /// exactly one query, after the append
    #[test]
    fn prop_submit_appends_before_query(prompt in arb_prompt_text()) {
        let result = transition(&ConvState::Idle, Event::submit(prompt.clone())).unwrap();
        let trimmed = prompt.trim().to_string();

        let append_at = result.effects.iter().position(|e| *e == Effect::append_user(trimmed.clone()));
        let query_at = result.effects.iter().position(|e| *e == Effect::invoke_query(trimmed.clone()));
        prop_assert!(append_at.is_some());
        prop_assert!(query_at.is_some());
        prop_assert!(append_at < query_at);
        prop_assert_eq!(
            result.effects.iter().filter(|e| matches!(e, Effect::InvokeQuery { .. })).count(),
            1
        );
    }

    /// Every resolve while awaiting lands in Idle, whatever the reply
    #[test]
    fn prop_resolve_always_idles(prompt in arb_prompt_text(), reply in arb_reply()) {
        let mut conv = Conversation::new();
        conv.apply(Event::submit(prompt)).unwrap();
        let expected_len = 1 + usize::from(reply.is_some());

        conv.apply(Event::resolve(reply)).unwrap();

        prop_assert_eq!(conv.state(), &ConvState::Idle);
        prop_assert_eq!(conv.history().len(), expected_len);
        if expected_len == 2 {
            prop_assert_eq!(conv.history()[1].role(), Role::Assistant);
        }
    }

    /// Busy flag agrees with user/assistant pairing: while awaiting, the last
    /// message is always the user's prompt
    #[test]
    fn prop_busy_tracks_outstanding_prompt(events in prop::collection::vec(arb_event(), 0..40)) {
        let mut conv = Conversation::new();
        for event in events {
            let _ = conv.apply(event);
            if let ConvState::Awaiting { prompt } = conv.state() {
                let last = conv.history().last().unwrap();
                prop_assert_eq!(last.role(), Role::User);
                prop_assert_eq!(last.content(), prompt.as_str());
            }
        }
    }
}
