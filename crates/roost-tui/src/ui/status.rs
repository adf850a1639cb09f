//! Status bar
//!
//! Displays the status message and how many cells are filled.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use roost_app::{FlowPhase, OtpFlow};

/// Render the status bar.
pub fn render(frame: &mut Frame, flow: &OtpFlow, area: Rect) {
    let progress = match flow.phase() {
        FlowPhase::Collecting => Span::styled(
            format!("{}/{}", flow.code().filled_count(), flow.code_length()),
            Style::default().fg(Color::Yellow),
        ),
        FlowPhase::Verified => Span::styled("Verified", Style::default().fg(Color::Green)),
    };

    let message = flow.status_message().map_or_else(String::new, |m| format!(" | {m}"));

    let status_line = Line::from(vec![Span::raw(" "), progress, Span::raw(message)]);

    let paragraph =
        Paragraph::new(status_line).style(Style::default().bg(Color::DarkGray).fg(Color::White));

    frame.render_widget(paragraph, area);
}
