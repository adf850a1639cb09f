//! Fuzz target for the OTP flow state machine
//!
//! Drives an `OtpFlow` with arbitrary event sequences.
//!
//! # Invariants
//!
//! - Focus ALWAYS stays inside the code
//! - Code length NEVER changes
//! - Submit succeeds iff every cell is filled, and never clears cells
//! - Nothing is edited once the flow reached `Verified`

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use roost_app::{
    FlowConfig, FlowEvent, FlowPhase, KeyInput, OtpFlow, VerificationTarget, MAX_CODE_LENGTH,
};

#[derive(Debug, Clone, Arbitrary)]
struct FlowScenario {
    length: u8,
    email: bool,
    contact: String,
    ops: Vec<FlowOp>,
}

#[derive(Debug, Clone, Arbitrary)]
enum FlowOp {
    Char(char),
    Backspace,
    Delete,
    Left,
    Right,
    Home,
    End,
    Enter,
    Tap(u8),
    SetDigit(u8, String),
    Deletion(u8),
    Resend,
    CodeSent,
    Accepted,
    Rejected,
}

fuzz_target!(|scenario: FlowScenario| {
    let length = usize::from(scenario.length) % (MAX_CODE_LENGTH + 1);
    let target = if scenario.email {
        VerificationTarget::email(scenario.contact)
    } else {
        VerificationTarget::phone(scenario.contact)
    };

    // Invalid configurations are rejected up front
    let Ok(mut flow) = OtpFlow::new(target, FlowConfig::with_code_length(length)) else {
        return;
    };

    for op in scenario.ops {
        let frozen = (flow.phase() == FlowPhase::Verified).then(|| flow.code().clone());

        match op {
            FlowOp::Char(c) => drop(flow.handle(FlowEvent::Key(KeyInput::Char(c)))),
            FlowOp::Backspace => drop(flow.handle(FlowEvent::Key(KeyInput::Backspace))),
            FlowOp::Delete => drop(flow.handle(FlowEvent::Key(KeyInput::Delete))),
            FlowOp::Left => drop(flow.handle(FlowEvent::Key(KeyInput::Left))),
            FlowOp::Right => drop(flow.handle(FlowEvent::Key(KeyInput::Right))),
            FlowOp::Home => drop(flow.handle(FlowEvent::Key(KeyInput::Home))),
            FlowOp::End => drop(flow.handle(FlowEvent::Key(KeyInput::End))),
            FlowOp::Enter => {
                let before = flow.code().clone();
                let complete = before.is_complete();
                let result = flow.submit();
                assert_eq!(result.is_ok(), complete, "submit must succeed iff complete");
                assert_eq!(flow.code(), &before, "submit must not edit cells");
            },
            FlowOp::Tap(index) => drop(flow.handle(FlowEvent::CellTapped { index: index.into() })),
            FlowOp::SetDigit(index, raw) => {
                flow.set_digit(index.into(), &raw);
            },
            FlowOp::Deletion(index) => flow.handle_deletion(index.into()),
            FlowOp::Resend => drop(flow.handle(FlowEvent::ResendPressed)),
            FlowOp::CodeSent => drop(flow.handle(FlowEvent::CodeSent)),
            FlowOp::Accepted => drop(flow.handle(FlowEvent::Accepted)),
            FlowOp::Rejected => drop(flow.handle(FlowEvent::Rejected { reason: "rejected".into() })),
        }

        assert!(flow.focus() < length, "focus escaped the code");
        assert_eq!(flow.code().length(), length, "code length changed");
        if let Some(frozen) = frozen {
            assert_eq!(flow.code(), &frozen, "verified code was edited");
        }
    }
});
