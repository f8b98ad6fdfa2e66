use super::{Component, ComponentFactory, MountContext};
use crate::model::StateError;
use crate::ui::theme::Theme;
use crossterm::event::KeyEvent;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

pub const FACTORY: ComponentFactory = ComponentFactory::new("shell/home", "HomeComponent", mount);

fn mount(_ctx: &MountContext) -> Result<Box<dyn Component>, StateError> {
    Ok(Box::new(HomeComponent))
}

/// Landing page of the shell. Stateless.
pub struct HomeComponent;

impl Component for HomeComponent {
    fn title(&self) -> &str {
        "Home"
    }

    fn render(&self, frame: &mut Frame, area: Rect, focused: bool) {
        let block = Block::default()
            .title(" Home ")
            .title_style(Theme::title())
            .borders(Borders::ALL)
            .border_type(Theme::border_type_for(focused))
            .border_style(Theme::border_for(focused));

        let lines = vec![
            Line::from(Span::styled("Welcome to mosaic", Theme::heading())),
            Line::from(""),
            Line::from("This shell hosts independently deployed micro-apps."),
            Line::from("Pick one from the navigation panel, or press Ctrl-L and type a path."),
            Line::from(""),
            Line::from(vec![
                Span::styled("  tea-tracker   ", Theme::accent()),
                Span::raw("count today's cups of tea"),
            ]),
            Line::from(vec![
                Span::styled("  sticky-notes  ", Theme::accent()),
                Span::raw("a small todo list"),
            ]),
            Line::from(""),
            Line::from(Span::styled(
                "Tab switches focus, F5 reloads the current view, Ctrl-C quits.",
                Theme::muted(),
            )),
        ];

        let paragraph = Paragraph::new(lines).block(block).wrap(Wrap { trim: false });
        frame.render_widget(paragraph, area);
    }

    fn handle_key(&mut self, _key: KeyEvent) -> bool {
        false
    }
}
