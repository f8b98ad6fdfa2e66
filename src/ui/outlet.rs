use crate::app::state::*;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

const SPINNER: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let focused = state.focus == FocusPanel::Outlet && !state.location.active;

    match &state.outlet {
        Outlet::Mounted(view) => view.component.render(frame, area, focused),
        Outlet::Loading { path, started_tick } => {
            let frame_idx = state.tick_count.wrapping_sub(*started_tick) as usize % SPINNER.len();
            let text = Line::from(vec![
                Span::styled(SPINNER[frame_idx], Theme::accent()),
                Span::raw(format!(" Loading remote '{}'…", path)),
            ]);
            let paragraph = Paragraph::new(text).block(panel(" Loading ", focused));
            frame.render_widget(paragraph, area);
        }
        Outlet::Failed { path, message } => {
            let lines = vec![
                Line::from(Span::styled(format!("Could not open '{}'", path), Theme::error())),
                Line::from(""),
                Line::from(message.as_str()),
                Line::from(""),
                Line::from(Span::styled(
                    "Press Enter to retry or pick another app.",
                    Theme::muted(),
                )),
            ];
            let paragraph = Paragraph::new(lines)
                .block(panel(" Failed ", focused))
                .wrap(Wrap { trim: false });
            frame.render_widget(paragraph, area);
        }
        Outlet::Empty => {
            frame.render_widget(Paragraph::new("").block(panel("", focused)), area);
        }
    }
}

fn panel(title: &str, focused: bool) -> Block<'_> {
    Block::default()
        .title(title)
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type_for(focused))
        .border_style(Theme::border_for(focused))
}
