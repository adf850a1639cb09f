//! OTP entry state machine.
//!
//! This module defines [`OtpFlow`], which owns the code being typed, the
//! focus cursor and the user-facing status line for one verification
//! attempt. It is completely decoupled from rendering and from the code
//! delivery backend.
//!
//! This is a pure state machine: it consumes [`crate::FlowEvent`] inputs and
//! produces [`crate::FlowAction`] instructions for the runtime to execute.
//!
//! # Focus rules
//!
//! - A non-empty write at cell `i < N-1` moves focus to `i + 1`. Writing
//!   into the last cell or clearing a cell never moves focus.
//! - Backspace is two-step. On a filled cell it clears the cell and keeps
//!   focus. On an already empty cell `i > 0` it moves focus to `i - 1`
//!   without touching that cell; the next backspace clears it.

use crate::{
    CellState, Code, CompleteCode, ConfigError, FlowAction, FlowConfig, FlowEvent, FlowPhase,
    IncompleteError, KeyInput, MaskedDisplay, VerificationKind, VerificationTarget,
    compute_masked_display,
};

/// OTP entry state machine.
///
/// Pure state machine that processes events and produces actions.
/// No I/O dependencies - fully testable without a front-end.
#[derive(Debug, Clone)]
pub struct OtpFlow {
    /// Where the code was sent.
    target: VerificationTarget,
    /// Masked contact, computed once on entry.
    masked: MaskedDisplay,
    /// Cells typed so far.
    code: Code,
    /// Cell receiving keystrokes. Always `< code.length()`.
    focus: usize,
    /// Lifecycle phase.
    phase: FlowPhase,
    /// Transient status message. `None` if no message.
    status_message: Option<String>,
}

impl OtpFlow {
    /// Enter the flow for `target` with an empty code.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the code length is out of range or the
    /// contact is blank.
    pub fn new(target: VerificationTarget, config: FlowConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        if target.contact.trim().is_empty() {
            return Err(ConfigError::EmptyContact);
        }

        let masked = compute_masked_display(&target);
        tracing::debug!(kind = %target.kind, length = config.code_length, "entering OTP flow");

        Ok(Self {
            target,
            masked,
            code: Code::new(config.code_length),
            focus: 0,
            phase: FlowPhase::Collecting,
            status_message: None,
        })
    }

    /// Process an event and return actions.
    pub fn handle(&mut self, event: FlowEvent) -> Vec<FlowAction> {
        match event {
            FlowEvent::Key(key) => self.handle_key(key),
            FlowEvent::CellTapped { index } => self.move_focus(index),
            FlowEvent::ResendPressed => self.resend(),
            FlowEvent::BackPressed => vec![FlowAction::Back],
            FlowEvent::QuitRequested => vec![FlowAction::Quit],
            FlowEvent::Tick => vec![],
            FlowEvent::Resize => vec![FlowAction::Render],
            FlowEvent::CodeSent => {
                self.status_message = Some(format!("A new code was sent to {}", self.masked));
                vec![FlowAction::Render]
            },
            FlowEvent::Accepted => {
                if self.phase == FlowPhase::Verified {
                    return vec![];
                }
                tracing::info!(kind = %self.target.kind, "verification accepted");
                self.phase = FlowPhase::Verified;
                self.status_message = None;
                vec![FlowAction::Render, FlowAction::Completed { kind: self.target.kind }]
            },
            FlowEvent::Rejected { reason } => {
                tracing::info!(kind = %self.target.kind, %reason, "verification rejected");
                self.status_message = Some(reason);
                vec![FlowAction::Render]
            },
        }
    }

    /// Write raw cell input into slot `index`.
    ///
    /// Only the last character of `raw` is kept; empty input clears the
    /// slot. A non-empty write before the last cell advances focus. Input is
    /// not validated here: non-digits are stored as typed.
    pub fn set_digit(&mut self, index: usize, raw: &str) -> &Code {
        if self.phase == FlowPhase::Verified {
            return &self.code;
        }

        let value = raw.chars().next_back();
        if !self.code.set(index, value) {
            tracing::debug!(index, "ignoring write to out-of-range cell");
            return &self.code;
        }

        if value.is_some() && index + 1 < self.code.length() {
            self.focus = index + 1;
        }
        &self.code
    }

    /// Deletion key pressed on cell `index`.
    ///
    /// Moves focus back only if the cell is already empty and not the
    /// first one.
    pub fn handle_deletion(&mut self, index: usize) {
        if self.phase == FlowPhase::Verified {
            return;
        }
        if index > 0 && index < self.code.length() && !self.code.is_filled(index) {
            self.focus = index - 1;
        }
    }

    /// Assemble the code for verification.
    ///
    /// On failure the code is left as-is and the status line carries the
    /// required length.
    ///
    /// # Errors
    ///
    /// Returns [`IncompleteError`] if any cell is empty.
    pub fn submit(&mut self) -> Result<CompleteCode, IncompleteError> {
        match self.code.assemble() {
            Ok(code) => {
                tracing::debug!(kind = %self.target.kind, "code submitted");
                self.status_message = None;
                Ok(code)
            },
            Err(err) => {
                tracing::debug!(filled = self.code.filled_count(), "incomplete code submitted");
                self.status_message = Some(err.to_string());
                Err(err)
            },
        }
    }

    /// Request a new code for the current target.
    pub fn resend(&self) -> Vec<FlowAction> {
        vec![FlowAction::ResendRequested { contact: self.target.contact.clone() }]
    }

    /// Move focus to cell `index`.
    ///
    /// Returns `false` if `index` is out of range.
    pub fn focus_cell(&mut self, index: usize) -> bool {
        if index >= self.code.length() {
            return false;
        }
        self.focus = index;
        true
    }

    /// Set a status message to display to the user.
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    fn handle_key(&mut self, key: KeyInput) -> Vec<FlowAction> {
        if self.phase == FlowPhase::Verified && key != KeyInput::Esc {
            return vec![];
        }

        let before = self.focus;
        match key {
            KeyInput::Char(c) => {
                // Typing over a filled cell hands the platform "old + new"
                let mut raw: String = self.code.get(before).into_iter().collect();
                raw.push(c);
                self.set_digit(before, &raw);
            },
            KeyInput::Backspace => {
                // Key press is observed before the text change
                self.handle_deletion(before);
                if self.code.is_filled(before) {
                    self.set_digit(before, "");
                }
            },
            KeyInput::Delete => {
                self.set_digit(before, "");
            },
            KeyInput::Left => return self.move_focus(before.saturating_sub(1)),
            KeyInput::Right => return self.move_focus(before + 1),
            KeyInput::Home => return self.move_focus(0),
            KeyInput::End => return self.move_focus(self.code.length().saturating_sub(1)),
            KeyInput::Enter => return self.submit_actions(),
            KeyInput::Esc => return vec![FlowAction::Back],
        }

        self.focus_actions(before)
    }

    fn move_focus(&mut self, index: usize) -> Vec<FlowAction> {
        let before = self.focus;
        if !self.focus_cell(index) {
            return vec![];
        }
        self.focus_actions(before)
    }

    fn focus_actions(&self, before: usize) -> Vec<FlowAction> {
        if self.focus == before {
            vec![FlowAction::Render]
        } else {
            vec![FlowAction::FocusCell { index: self.focus }, FlowAction::Render]
        }
    }

    fn submit_actions(&mut self) -> Vec<FlowAction> {
        match self.submit() {
            Ok(code) => {
                vec![FlowAction::Render, FlowAction::Verified { kind: self.target.kind, code }]
            },
            Err(_) => vec![FlowAction::Render],
        }
    }

    /// Code typed so far.
    pub fn code(&self) -> &Code {
        &self.code
    }

    /// Cell currently receiving keystrokes.
    pub fn focus(&self) -> usize {
        self.focus
    }

    /// Number of cells.
    pub fn code_length(&self) -> usize {
        self.code.length()
    }

    /// Lifecycle phase.
    pub fn phase(&self) -> FlowPhase {
        self.phase
    }

    /// Verification target.
    pub fn target(&self) -> &VerificationTarget {
        &self.target
    }

    /// Kind of contact being verified.
    pub fn kind(&self) -> VerificationKind {
        self.target.kind
    }

    /// Masked contact for display.
    pub fn masked_display(&self) -> &MaskedDisplay {
        &self.masked
    }

    /// Transient status message. `None` if no message.
    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    /// Render state of every cell, in order.
    pub fn cells(&self) -> impl Iterator<Item = CellState> + '_ {
        self.code.slots().iter().enumerate().map(|(index, value)| CellState {
            index,
            value: *value,
            focused: index == self.focus,
        })
    }
}
