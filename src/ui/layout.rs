use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct AppLayout {
    pub nav_panel: Rect,
    pub location_bar: Rect,
    pub outlet: Rect,
    pub status_bar: Rect,
}

pub fn compute_layout(area: Rect) -> AppLayout {
    // Main vertical split: content | status bar
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),    // Main content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let content = main_chunks[0];
    let status_bar = main_chunks[1];

    // Horizontal: navigation | gap | right content
    let h_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .spacing(1)
        .constraints([
            Constraint::Length(22), // Navigation panel
            Constraint::Min(30),    // Right content
        ])
        .split(content);

    let nav_panel = h_chunks[0];

    // Right panel: location bar | outlet
    let right_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Location bar
            Constraint::Min(5),    // Outlet
        ])
        .split(h_chunks[1]);

    AppLayout {
        nav_panel,
        location_bar: right_chunks[0],
        outlet: right_chunks[1],
        status_bar,
    }
}
