//! Code cells
//!
//! One bordered box per character, with the focused cell highlighted and
//! the terminal cursor placed inside it.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};
use roost_app::{FlowPhase, OtpFlow};

const CELL_WIDTH: u16 = 5;
const CELL_GAP: u16 = 1;
const LEFT_MARGIN: u16 = 1;

/// Render the row of cells.
pub fn render(frame: &mut Frame, flow: &OtpFlow, focused_cell: usize, area: Rect) {
    let mut constraints = vec![Constraint::Length(LEFT_MARGIN)];
    for _ in 0..flow.code_length() {
        constraints.push(Constraint::Length(CELL_WIDTH));
        constraints.push(Constraint::Length(CELL_GAP));
    }
    constraints.push(Constraint::Min(0));

    let chunks = Layout::horizontal(constraints).split(area);
    let verified = flow.phase() == FlowPhase::Verified;

    for cell in flow.cells() {
        // Cell boxes sit at odd positions, after the margin and each gap
        let Some(cell_area) = chunks.get(1 + cell.index * 2) else {
            continue;
        };

        let border_style = if verified {
            Style::default().fg(Color::Green)
        } else if cell.index == focused_cell {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else if cell.value.is_some() {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let text = cell.value.map(String::from).unwrap_or_default();
        let paragraph = Paragraph::new(text)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).border_style(border_style));

        frame.render_widget(paragraph, *cell_area);

        if cell.index == focused_cell && !verified {
            let cursor_x = cell_area.x.saturating_add(CELL_WIDTH / 2);
            let cursor_y = cell_area.y.saturating_add(1);
            frame.set_cursor_position((cursor_x, cursor_y));
        }
    }
}
