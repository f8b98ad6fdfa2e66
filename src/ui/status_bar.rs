use crate::app::state::*;
use crate::router::NavPhase;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut parts: Vec<Span> = Vec::new();

    // Router phase
    let (phase, phase_style) = match state.router.phase() {
        NavPhase::Idle => (" IDLE ", Style::default().fg(Color::Green).bg(Color::DarkGray)),
        NavPhase::Resolving { .. } => (
            " RESOLVING ",
            Style::default().fg(Color::Yellow).bg(Color::DarkGray),
        ),
    };
    parts.push(Span::styled(phase, phase_style));

    // Status text
    parts.push(Span::styled(
        format!(" {} ", state.status_line()),
        Theme::status_bar(),
    ));

    let hints = format!(" {} ", state.key_hints());
    let focus_name = match (state.location.active, state.focus) {
        (true, _) => "LOCATION",
        (false, FocusPanel::Nav) => "APPS",
        (false, FocusPanel::Outlet) => "VIEW",
    };

    // Pad to fill remaining space
    let used: usize = parts.iter().map(|s| s.content.width()).sum();
    let remaining =
        (area.width as usize).saturating_sub(used + hints.width() + focus_name.len() + 3);
    parts.push(Span::styled(" ".repeat(remaining), Theme::status_bar()));
    parts.push(Span::styled(hints, Theme::status_bar()));
    parts.push(Span::styled(
        format!(" [{}] ", focus_name),
        Style::default().fg(Color::Cyan).bg(Color::DarkGray),
    ));

    frame.render_widget(Paragraph::new(Line::from(parts)), area);
}
