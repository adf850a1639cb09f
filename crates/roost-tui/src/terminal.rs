//! Terminal driver for the TUI.
//!
//! Implements the [`Driver`] trait for terminal I/O using crossterm for
//! keyboard events and ratatui for rendering.

use std::io::{self, Stdout, stdout};

use crossterm::{
    ExecutableCommand,
    event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use roost_app::{Driver, FlowEvent, KeyInput, OtpFlow, Screen};
use thiserror::Error;

use crate::ui;

/// Terminal driver errors.
#[derive(Debug, Error)]
pub enum TerminalError {
    /// I/O error from terminal operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Terminal driver implementing the [`Driver`] trait.
///
/// Handles terminal I/O (crossterm) and rendering (ratatui). Owns the
/// terminal cursor, which stands in for the focused input cell.
pub struct TerminalDriver {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    event_stream: EventStream,
    focused_cell: usize,
    screen: Option<Screen>,
}

impl TerminalDriver {
    /// Create a new terminal driver and enter the alternate screen.
    pub fn new() -> Result<Self, TerminalError> {
        enable_raw_mode()?;
        stdout().execute(EnterAlternateScreen)?;

        let backend = CrosstermBackend::new(stdout());
        let terminal = Terminal::new(backend)?;
        let event_stream = EventStream::new();

        Ok(Self { terminal, event_stream, focused_cell: 0, screen: None })
    }

    /// Screen the runtime navigated to when the flow ended.
    pub fn screen(&self) -> Option<Screen> {
        self.screen
    }

    /// Convert a crossterm key event into a flow event.
    pub fn convert_key(key: KeyEvent) -> Option<FlowEvent> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('r') => Some(FlowEvent::ResendPressed),
                KeyCode::Char('c') => Some(FlowEvent::QuitRequested),
                _ => None,
            };
        }

        let input = match key.code {
            KeyCode::Char(c) => KeyInput::Char(c),
            KeyCode::Enter => KeyInput::Enter,
            KeyCode::Backspace => KeyInput::Backspace,
            KeyCode::Delete => KeyInput::Delete,
            KeyCode::Esc => KeyInput::Esc,
            KeyCode::Left | KeyCode::BackTab => KeyInput::Left,
            KeyCode::Right | KeyCode::Tab => KeyInput::Right,
            KeyCode::Home => KeyInput::Home,
            KeyCode::End => KeyInput::End,
            _ => return None,
        };
        Some(FlowEvent::Key(input))
    }
}

impl Driver for TerminalDriver {
    type Error = TerminalError;

    async fn poll_event(&mut self) -> Result<Option<FlowEvent>, Self::Error> {
        let timeout = tokio::time::Duration::from_millis(100);

        tokio::select! {
            biased;

            // Terminal events
            maybe_event = self.event_stream.next() => {
                match maybe_event {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        Ok(Self::convert_key(key))
                    },
                    Some(Ok(Event::Resize(_, _))) => Ok(Some(FlowEvent::Resize)),
                    Some(Err(e)) => Err(TerminalError::Io(e)),
                    None => Ok(Some(FlowEvent::QuitRequested)),
                    _ => Ok(None),
                }
            }

            // Tick timeout
            () = tokio::time::sleep(timeout) => {
                Ok(Some(FlowEvent::Tick))
            }
        }
    }

    fn render(&mut self, flow: &OtpFlow) -> Result<(), Self::Error> {
        let focused_cell = self.focused_cell;
        self.terminal.draw(|frame| {
            ui::render(frame, flow, focused_cell);
        })?;
        Ok(())
    }

    fn focus_cell(&mut self, index: usize) {
        tracing::trace!(index, "focus cell");
        self.focused_cell = index;
    }

    fn navigate(&mut self, screen: Screen) {
        tracing::info!(%screen, "leaving verification");
        self.screen = Some(screen);
    }

    fn stop(&mut self) {
        let _ = disable_raw_mode();
        let _ = stdout().execute(LeaveAlternateScreen);
    }
}

impl Drop for TerminalDriver {
    fn drop(&mut self) {
        self.stop();
    }
}
