//! Generic runtime for flow orchestration.
//!
//! The Runtime drives the verification event loop, coordinating between:
//! - [`OtpFlow`]: OTP entry state machine
//! - [`Verifier`]: Code delivery/verification collaborator
//! - [`Navigator`]: Screen stack and destination table
//! - [`Driver`]: Platform-specific I/O

use std::fmt;

use crate::{Driver, FlowAction, Navigator, OtpFlow, Screen, Verifier};

/// How the user left the flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowOutcome {
    /// Code accepted; the navigator moved on to this screen.
    Completed(Screen),
    /// User went back. `None` if there was nothing to go back to.
    Back(Option<Screen>),
    /// User quit the application.
    Quit,
}

impl fmt::Display for FlowOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Completed(screen) => write!(f, "verified, continuing to {screen}"),
            Self::Back(Some(screen)) => write!(f, "went back to {screen}"),
            Self::Back(None) => f.write_str("left verification"),
            Self::Quit => f.write_str("quit"),
        }
    }
}

/// Generic runtime that orchestrates flow, verifier, navigator and driver.
///
/// # Type Parameters
///
/// - `D`: Platform-specific I/O driver
/// - `V`: Code delivery/verification collaborator
pub struct Runtime<D, V>
where
    D: Driver,
    V: Verifier,
{
    driver: D,
    verifier: V,
    flow: OtpFlow,
    navigator: Navigator,
}

impl<D, V> Runtime<D, V>
where
    D: Driver,
    V: Verifier,
{
    /// Create a new runtime.
    ///
    /// The navigator is moved onto the OTP screen if it is not there yet.
    pub fn new(driver: D, verifier: V, flow: OtpFlow, mut navigator: Navigator) -> Self {
        if navigator.current() != Screen::OtpVerification {
            navigator.navigate(Screen::OtpVerification);
        }
        Self { driver, verifier, flow, navigator }
    }

    /// Run the event loop until the user leaves the flow.
    ///
    /// # Errors
    ///
    /// Returns an error if the driver encounters an I/O error.
    pub async fn run(&mut self) -> Result<FlowOutcome, D::Error> {
        self.driver.render(&self.flow)?;
        self.driver.focus_cell(self.flow.focus());

        let outcome = loop {
            if let Some(outcome) = self.process_cycle().await? {
                break outcome;
            }
        };

        tracing::info!(%outcome, "flow finished");
        self.driver.stop();
        Ok(outcome)
    }

    /// Process one cycle of the event loop.
    ///
    /// Returns the outcome once the flow is left.
    async fn process_cycle(&mut self) -> Result<Option<FlowOutcome>, D::Error> {
        let Some(event) = self.driver.poll_event().await? else {
            return Ok(None);
        };
        let actions = self.flow.handle(event);
        self.process_actions(actions)
    }

    /// Process actions returned by the flow.
    ///
    /// Verifier answers are fed back into the flow iteratively until no
    /// actions remain.
    fn process_actions(
        &mut self,
        initial_actions: Vec<FlowAction>,
    ) -> Result<Option<FlowOutcome>, D::Error> {
        let mut pending_actions = initial_actions;

        while !pending_actions.is_empty() {
            let actions = std::mem::take(&mut pending_actions);

            for action in actions {
                match action {
                    FlowAction::Render => self.driver.render(&self.flow)?,
                    FlowAction::FocusCell { index } => self.driver.focus_cell(index),
                    FlowAction::Verified { kind, code } => {
                        for event in self.verifier.verify(kind, &code) {
                            pending_actions.extend(self.flow.handle(event));
                        }
                    },
                    FlowAction::ResendRequested { contact } => {
                        for event in self.verifier.resend(&contact) {
                            pending_actions.extend(self.flow.handle(event));
                        }
                    },
                    FlowAction::Completed { kind } => {
                        let screen = self.navigator.complete_verification(kind);
                        self.driver.navigate(screen);
                        return Ok(Some(FlowOutcome::Completed(screen)));
                    },
                    FlowAction::Back => {
                        let screen = self.navigator.back();
                        if let Some(screen) = screen {
                            self.driver.navigate(screen);
                        }
                        return Ok(Some(FlowOutcome::Back(screen)));
                    },
                    FlowAction::Quit => return Ok(Some(FlowOutcome::Quit)),
                }
            }
        }
        Ok(None)
    }

    /// Get a reference to the flow.
    pub fn flow(&self) -> &OtpFlow {
        &self.flow
    }

    /// Get a reference to the navigator.
    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    /// Get a reference to the verifier.
    pub fn verifier(&self) -> &V {
        &self.verifier
    }

    /// Get a reference to the driver.
    pub fn driver(&self) -> &D {
        &self.driver
    }
}
