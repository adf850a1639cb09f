//! Code delivery and verification collaborator.
//!
//! The flow never talks to a backend directly. It emits
//! [`crate::FlowAction::Verified`] and [`crate::FlowAction::ResendRequested`]
//! and the runtime forwards them to a [`Verifier`], whose answers come back
//! as [`FlowEvent`]s.

use crate::{CompleteCode, FlowEvent, VerificationKind};

/// External collaborator that dispatches and checks codes.
///
/// Calls are fire-and-forget from the flow's point of view: no timeout,
/// retry or cancellation is modelled here.
pub trait Verifier {
    /// Check a submitted code.
    fn verify(&mut self, kind: VerificationKind, code: &CompleteCode) -> Vec<FlowEvent>;

    /// Dispatch a new code to `contact`.
    fn resend(&mut self, contact: &str) -> Vec<FlowEvent>;
}

/// In-process verifier that accepts a single known code.
#[derive(Debug, Clone)]
pub struct FixedCodeVerifier {
    expected: String,
    sent: usize,
}

impl FixedCodeVerifier {
    /// Accept only `expected`.
    pub fn new(expected: impl Into<String>) -> Self {
        Self { expected: expected.into(), sent: 0 }
    }

    /// Number of resend requests handled.
    pub fn sent(&self) -> usize {
        self.sent
    }
}

impl Verifier for FixedCodeVerifier {
    fn verify(&mut self, kind: VerificationKind, code: &CompleteCode) -> Vec<FlowEvent> {
        if code.as_str() == self.expected {
            tracing::info!(%kind, "code accepted");
            vec![FlowEvent::Accepted]
        } else {
            tracing::info!(%kind, "code rejected");
            vec![FlowEvent::Rejected { reason: "The code you entered is incorrect".into() }]
        }
    }

    fn resend(&mut self, contact: &str) -> Vec<FlowEvent> {
        self.sent += 1;
        tracing::info!(contact, sent = self.sent, "code dispatched");
        vec![FlowEvent::CodeSent]
    }
}
