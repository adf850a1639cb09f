//! Screen header
//!
//! Title, masked destination and key hints.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use roost_app::{OtpFlow, VerificationKind};

/// Render the title and the masked contact the code was sent to.
pub fn render(frame: &mut Frame, flow: &OtpFlow, area: Rect) {
    let title = match flow.kind() {
        VerificationKind::Email => "Verify your email",
        VerificationKind::Phone => "Verify your phone",
    };

    let lines = vec![
        Line::from(Span::styled(
            format!(" {title}"),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::raw(format!(" Enter the {}-digit code sent to ", flow.code_length())),
            Span::styled(flow.masked_display().to_string(), Style::default().fg(Color::Cyan)),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines), area);
}

/// Render the key hints below the cells.
pub fn render_hint(frame: &mut Frame, area: Rect) {
    let hint = Line::from(Span::styled(
        " Enter: verify | Ctrl+R: resend code | Esc: back",
        Style::default().fg(Color::DarkGray),
    ));
    frame.render_widget(Paragraph::new(hint), area);
}
