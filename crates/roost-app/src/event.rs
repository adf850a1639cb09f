//! Flow input events.
//!
//! This module defines [`FlowEvent`], the set of inputs that drive the
//! [`crate::OtpFlow`] state machine.
//!
//! Events originate from two sources:
//! - User interactions (keys, taps, buttons) and system ticks.
//! - Results reported by the [`crate::Verifier`] collaborator.

use crate::KeyInput;

/// Events processed by the flow state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowEvent {
    /// Keyboard input on the focused cell.
    Key(KeyInput),

    /// User tapped a cell.
    CellTapped {
        /// Cell position.
        index: usize,
    },

    /// User asked for a new code.
    ResendPressed,

    /// User navigated back.
    BackPressed,

    /// User asked to close the application.
    QuitRequested,

    /// Periodic tick.
    Tick,

    /// Viewport resized.
    Resize,

    /// A new code was dispatched to the target.
    CodeSent,

    /// The submitted code was accepted.
    Accepted,

    /// The submitted code was rejected.
    Rejected {
        /// User-facing reason.
        reason: String,
    },
}
