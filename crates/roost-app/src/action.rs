//! Flow side-effects and intents.
//!
//! This module defines the [`FlowAction`] enum, which represents instructions
//! produced by the [`crate::OtpFlow`] state machine for the runtime to
//! execute.

use crate::{CompleteCode, VerificationKind};

/// Actions produced by the flow state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowAction {
    /// Render the UI.
    Render,

    /// Move input focus to a cell.
    FocusCell {
        /// Cell position.
        index: usize,
    },

    /// All cells filled and submitted; ask the verifier to check the code.
    Verified {
        /// Kind of contact the code was sent to.
        kind: VerificationKind,
        /// Assembled code.
        code: CompleteCode,
    },

    /// Ask the verifier to dispatch a new code.
    ResendRequested {
        /// Raw contact value.
        contact: String,
    },

    /// Verification succeeded; the router picks the next screen.
    Completed {
        /// Kind of contact that was verified.
        kind: VerificationKind,
    },

    /// Leave the flow towards the previous screen.
    Back,

    /// Quit the application.
    Quit,
}
