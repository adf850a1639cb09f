//! Property-based tests for the OTP flow.
//!
//! Tests verify that invariants hold under arbitrary input sequences:
//! - Submission succeeds iff every cell is filled
//! - Focus always stays inside the code and follows the advance/retreat rules
//! - Masking is deterministic

use proptest::prelude::*;
use roost_app::{
    FlowConfig, FlowEvent, KeyInput, OtpFlow, VerificationKind, VerificationTarget,
    compute_masked_display,
};

/// Generate random key presses.
fn key_strategy() -> impl Strategy<Value = KeyInput> {
    prop_oneof![
        4 => proptest::char::range('0', '9').prop_map(KeyInput::Char),
        1 => any::<char>().prop_map(KeyInput::Char),
        3 => Just(KeyInput::Backspace),
        1 => Just(KeyInput::Delete),
        1 => Just(KeyInput::Left),
        1 => Just(KeyInput::Right),
        1 => Just(KeyInput::Home),
        1 => Just(KeyInput::End),
    ]
}

/// Generate random flow events that keep the flow collecting.
fn event_strategy() -> impl Strategy<Value = FlowEvent> {
    prop_oneof![
        6 => key_strategy().prop_map(FlowEvent::Key),
        1 => (0usize..16).prop_map(|index| FlowEvent::CellTapped { index }),
        1 => Just(FlowEvent::ResendPressed),
        1 => Just(FlowEvent::Tick),
        1 => Just(FlowEvent::CodeSent),
        1 => Just(FlowEvent::Rejected { reason: "Invalid code".into() }),
    ]
}

fn flow_with_length(length: usize) -> OtpFlow {
    OtpFlow::new(VerificationTarget::phone("+15550001111"), FlowConfig::with_code_length(length))
        .expect("valid flow")
}

proptest! {
    #[test]
    fn prop_submit_succeeds_iff_all_filled(
        length in 1usize..=12,
        events in prop::collection::vec(event_strategy(), 0..60),
    ) {
        let mut flow = flow_with_length(length);
        for event in events {
            let _ = flow.handle(event);
        }

        let before = flow.code().clone();
        let all_filled = (0..length).all(|i| flow.code().is_filled(i));
        let result = flow.submit();

        prop_assert_eq!(result.is_ok(), all_filled);
        if let Ok(code) = result {
            prop_assert_eq!(code.as_str().chars().count(), length);
        }
        // Submission never clears cells
        prop_assert_eq!(flow.code(), &before);
    }

    #[test]
    fn prop_focus_stays_in_range(
        length in 1usize..=12,
        events in prop::collection::vec(event_strategy(), 0..80),
    ) {
        let mut flow = flow_with_length(length);
        for event in events {
            let _ = flow.handle(event);
            prop_assert!(flow.focus() < length);
        }
    }

    #[test]
    fn prop_non_empty_write_advances_focus(
        length in 1usize..=12,
        index in 0usize..12,
        raw in "[0-9]{1,3}",
    ) {
        prop_assume!(index < length);
        let mut flow = flow_with_length(length);
        flow.focus_cell(index);

        flow.set_digit(index, &raw);

        let expected = if index + 1 < length { index + 1 } else { index };
        prop_assert_eq!(flow.focus(), expected);
        prop_assert_eq!(flow.code().get(index), raw.chars().last());
    }

    #[test]
    fn prop_deletion_retreats_only_from_empty_cell(
        length in 2usize..=12,
        index in 1usize..12,
        filled in any::<bool>(),
    ) {
        prop_assume!(index < length);
        let mut flow = flow_with_length(length);
        if filled {
            flow.set_digit(index, "7");
        }
        flow.focus_cell(index);

        flow.handle_deletion(index);

        let expected = if filled { index } else { index - 1 };
        prop_assert_eq!(flow.focus(), expected);
        prop_assert_eq!(flow.code().is_filled(index), filled);
    }

    #[test]
    fn prop_masking_is_deterministic(contact in ".{0,40}", email in any::<bool>()) {
        let kind = if email { VerificationKind::Email } else { VerificationKind::Phone };
        let target = VerificationTarget::new(kind, contact);

        prop_assert_eq!(compute_masked_display(&target), compute_masked_display(&target));
    }

    #[test]
    fn prop_phone_mask_keeps_last_four(digits in "[0-9]{5,15}", plus in any::<bool>()) {
        let contact = if plus { format!("+{digits}") } else { digits.clone() };
        let masked = compute_masked_display(&VerificationTarget::phone(contact));
        let masked = masked.as_str();

        prop_assert_eq!(masked.starts_with('+'), plus);
        prop_assert!(masked.ends_with(&digits[digits.len() - 4..]));
        prop_assert_eq!(masked.chars().filter(|c| *c == 'X').count(), digits.len() - 4);
    }
}
