//! Observable flow state types.
//!
//! View-model types the front-end renders from, without exposing how the
//! flow stores its code.

/// Lifecycle phase of one verification attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowPhase {
    /// Accepting edits. Rejected and incomplete submissions stay here.
    Collecting,
    /// The verifier accepted the submitted code. Edits are ignored.
    Verified,
}

/// Render state of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellState {
    /// Cell position.
    pub index: usize,
    /// Character in the cell. `None` if empty.
    pub value: Option<char>,
    /// Cell currently receives keystrokes.
    pub focused: bool,
}
