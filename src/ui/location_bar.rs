use crate::app::state::*;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::block::Padding;
use ratatui::widgets::{Block, Borders, Paragraph};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let editing = state.location.active;

    let block = Block::default()
        .title(" Location ")
        .title_style(if editing { Theme::title() } else { Theme::border() })
        .borders(Borders::ALL)
        .border_type(Theme::border_type_for(editing))
        .border_style(Theme::border_for(editing))
        .padding(Padding::horizontal(1));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    if editing {
        let input = &state.location.input;
        let line = Line::from(vec![
            Span::styled("/", Theme::location_bar()),
            Span::styled(input.text.as_str(), Theme::input_text()),
        ]);
        frame.render_widget(Paragraph::new(line), inner);

        if inner.width > 0 {
            // Leading "/" takes one column
            let cursor_x = inner.x.saturating_add(1).saturating_add(input.cursor_column());
            frame.set_cursor_position((cursor_x.min(inner.right() - 1), inner.y));
        }
    } else {
        let path = state.current_path.as_deref().unwrap_or("");
        let line = Line::from(vec![
            Span::styled(format!("/{}", path), Theme::location_bar()),
            Span::styled("   Ctrl-L to edit", Theme::muted()),
        ]);
        frame.render_widget(Paragraph::new(line), inner);
    }
}
