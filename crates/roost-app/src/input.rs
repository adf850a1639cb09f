//! Platform-agnostic keyboard input.

/// Keyboard input abstraction.
///
/// Decouples the flow from terminal or touch keyboard libraries, enabling
/// deterministic tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInput {
    /// Printable character typed into the focused cell.
    Char(char),
    /// Enter/Return key (submit).
    Enter,
    /// Backspace key.
    Backspace,
    /// Delete key (clear focused cell).
    Delete,
    /// Escape key (leave the flow).
    Esc,
    /// Left arrow key.
    Left,
    /// Right arrow key.
    Right,
    /// Home key (first cell).
    Home,
    /// End key (last cell).
    End,
}
