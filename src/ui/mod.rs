mod layout;
mod location_bar;
mod nav_panel;
mod outlet;
mod status_bar;
pub mod theme;

use crate::app::state::AppState;
use ratatui::prelude::*;

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let app_layout = layout::compute_layout(area);

    nav_panel::render(frame, app_layout.nav_panel, state);
    location_bar::render(frame, app_layout.location_bar, state);
    outlet::render(frame, app_layout.outlet, state);
    status_bar::render(frame, app_layout.status_bar, state);
}
