//! Driver trait for abstracting I/O operations.
//!
//! The [`Driver`] trait decouples the flow runtime from specific front-ends.
//! Each front-end implements the trait to provide platform-specific input
//! and rendering, while the generic [`crate::Runtime`] handles all
//! orchestration.

use std::future::Future;

use crate::{FlowEvent, OtpFlow, Screen};

/// Abstracts I/O operations for the flow runtime.
///
/// Implementations provide platform-specific I/O while the generic
/// [`Runtime`](crate::Runtime) handles orchestration logic.
///
/// # Implementations
///
/// - **TUI**: crossterm for key events, ratatui for rendering
/// - **Tests**: scripted event queues with recorded output
pub trait Driver: Send {
    /// Platform-specific error type.
    type Error: std::error::Error + Send + 'static;

    /// Poll for the next input event.
    ///
    /// Returns `None` if no event is ready.
    fn poll_event(&mut self) -> impl Future<Output = Result<Option<FlowEvent>, Self::Error>> + Send;

    /// Render the flow state.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails.
    fn render(&mut self, flow: &OtpFlow) -> Result<(), Self::Error>;

    /// Give input focus to the cell at `index`.
    fn focus_cell(&mut self, index: usize);

    /// Show `screen`. Called once when the flow is left.
    fn navigate(&mut self, screen: Screen);

    /// Release platform resources.
    fn stop(&mut self);
}
