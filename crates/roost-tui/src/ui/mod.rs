//! UI rendering
//!
//! Rendering functions that convert flow state into terminal output using
//! ratatui widgets. All functions are pure (no I/O), taking state and
//! returning widget trees.

mod cells;
mod header;
mod status;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};
use roost_app::OtpFlow;

/// Render the verification screen.
///
/// `focused_cell` is the cell the terminal cursor is placed in.
pub fn render(frame: &mut Frame, flow: &OtpFlow, focused_cell: usize) {
    const HEADER_HEIGHT: u16 = 4;
    const CELLS_HEIGHT: u16 = 3;
    const HINT_HEIGHT: u16 = 2;
    const STATUS_HEIGHT: u16 = 1;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Length(CELLS_HEIGHT),
            Constraint::Length(HINT_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(STATUS_HEIGHT),
        ])
        .split(frame.area());

    let [header_area, cells_area, hint_area, _, status_area] = chunks.as_ref() else {
        return;
    };

    header::render(frame, flow, *header_area);
    cells::render(frame, flow, focused_cell, *cells_area);
    header::render_hint(frame, *hint_area);
    status::render(frame, flow, *status_area);
}
