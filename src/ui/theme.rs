use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;

pub struct Theme;

impl Theme {
    pub const ACCENT_TEAL: Color = Color::Rgb(78, 201, 176);
    pub const ACCENT_AMBER: Color = Color::Rgb(229, 181, 103);
    pub const TEXT_SECONDARY: Color = Color::Gray;
    pub const BG_ELEVATED: Color = Color::Rgb(40, 44, 52);

    pub fn border() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn border_focused() -> Style {
        Style::default().fg(Self::ACCENT_TEAL)
    }

    pub fn border_for(focused: bool) -> Style {
        if focused {
            Self::border_focused()
        } else {
            Self::border()
        }
    }

    pub fn border_type_for(focused: bool) -> BorderType {
        if focused {
            BorderType::Thick
        } else {
            BorderType::Rounded
        }
    }

    pub fn title() -> Style {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    }

    pub fn heading() -> Style {
        Style::default()
            .fg(Self::ACCENT_AMBER)
            .add_modifier(Modifier::BOLD)
    }

    pub fn accent() -> Style {
        Style::default().fg(Self::ACCENT_TEAL)
    }

    pub fn muted() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn warning() -> Style {
        Style::default().fg(Color::Yellow)
    }

    pub fn error() -> Style {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    }

    pub fn input_text() -> Style {
        Style::default().fg(Color::White)
    }

    pub fn done_item() -> Style {
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::CROSSED_OUT)
    }

    pub fn selection() -> Style {
        Style::default()
            .bg(Self::BG_ELEVATED)
            .add_modifier(Modifier::BOLD)
    }

    pub fn gauge() -> Style {
        Style::default().fg(Self::ACCENT_AMBER).bg(Color::Black)
    }

    pub fn route_local() -> Style {
        Style::default().fg(Self::TEXT_SECONDARY)
    }

    pub fn route_remote() -> Style {
        Style::default().fg(Self::ACCENT_TEAL)
    }

    pub fn route_active() -> Style {
        Style::default()
            .fg(Self::ACCENT_AMBER)
            .add_modifier(Modifier::BOLD)
            .bg(Self::BG_ELEVATED)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Color::White).bg(Color::DarkGray)
    }

    pub fn location_bar() -> Style {
        Style::default().fg(Self::ACCENT_TEAL)
    }
}
