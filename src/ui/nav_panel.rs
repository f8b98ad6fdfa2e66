use crate::app::state::*;
use crate::router::RouteTarget;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let focused = state.focus == FocusPanel::Nav && !state.location.active;

    let block = Block::default()
        .title(" Apps ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type_for(focused))
        .border_style(Theme::border_for(focused));

    let routes = state.router.routes();
    if routes.is_empty() {
        let empty = Paragraph::new(Span::styled(" No routes", Theme::muted())).block(block);
        frame.render_widget(empty, area);
        return;
    }

    let registry = state.router.registry();
    let current = state.current_path.as_deref();
    let items: Vec<ListItem> = routes
        .iter()
        .enumerate()
        .map(|(idx, route)| {
            // ◆ local, ◇ remote, ✕ remote missing from the registry
            let (indicator, style) = match &route.target {
                RouteTarget::Local(_) => ("◆", Theme::route_local()),
                RouteTarget::Remote { remote } if registry.contains(remote) => {
                    ("◇", Theme::route_remote())
                }
                RouteTarget::Remote { .. } => ("✕", Theme::muted()),
            };
            let name_style = if current == Some(route.path.as_str()) {
                Theme::route_active()
            } else {
                style
            };
            let marker = if focused && idx == state.nav_selected {
                "▶"
            } else {
                " "
            };
            ListItem::new(Line::from(vec![
                Span::styled(marker, Theme::accent()),
                Span::styled(format!("{} ", indicator), style),
                Span::styled(route.path.as_str(), name_style),
            ]))
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}
