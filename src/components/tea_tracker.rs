use super::{Component, ComponentFactory, MountContext};
use crate::model::{BoundedCounter, StateError};
use crate::ui::theme::Theme;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Gauge, Paragraph};

/// Exposed by the `tea-tracker` remote as `./App`.
pub const FACTORY: ComponentFactory =
    ComponentFactory::new("tea-tracker/App", "TeaTrackerApp", mount);

fn mount(ctx: &MountContext) -> Result<Box<dyn Component>, StateError> {
    Ok(Box::new(TeaTracker::new(ctx)?))
}

/// Counts cups of tea against a daily limit.
pub struct TeaTracker {
    cups: BoundedCounter,
}

impl TeaTracker {
    pub fn new(ctx: &MountContext) -> Result<Self, StateError> {
        let cfg = &ctx.tea_tracker;
        let cups = BoundedCounter::new(cfg.initial_cups, cfg.min_cups, cfg.max_cups)?;
        Ok(Self { cups })
    }

    pub fn add_cup(&mut self) -> bool {
        self.cups.increment()
    }

    pub fn remove_cup(&mut self) -> bool {
        self.cups.decrement()
    }

    fn fill_ratio(&self) -> f64 {
        let span = self.cups.max().abs_diff(self.cups.min());
        if span == 0 {
            return 1.0;
        }
        let filled = self.cups.value().abs_diff(self.cups.min());
        (filled as f64 / span as f64).clamp(0.0, 1.0)
    }
}

impl Component for TeaTracker {
    fn title(&self) -> &str {
        "Tea Tracker"
    }

    fn render(&self, frame: &mut Frame, area: Rect, focused: bool) {
        let block = Block::default()
            .title(" Tea Tracker ")
            .title_style(Theme::title())
            .borders(Borders::ALL)
            .border_type(Theme::border_type_for(focused))
            .border_style(Theme::border_for(focused));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // Cup icons
                Constraint::Length(1), // Gauge
                Constraint::Length(2), // Caption
                Constraint::Min(0),
            ])
            .split(inner);

        // One two-column icon per cup; ranges wider than the row get the gauge only
        let filled = self.cups.value().abs_diff(self.cups.min());
        let slots = self.cups.max().abs_diff(self.cups.min());
        if slots <= u64::from(rows[0].width / 2) {
            let icons: Vec<Span> = (0..slots)
                .map(|i| {
                    if i < filled {
                        Span::styled("● ", Theme::accent())
                    } else {
                        Span::styled("○ ", Theme::muted())
                    }
                })
                .collect();
            frame.render_widget(Paragraph::new(Line::from(icons)), rows[0]);
        }

        let gauge = Gauge::default()
            .gauge_style(Theme::gauge())
            .ratio(self.fill_ratio())
            .label(format!("{} / {} cups", self.cups.value(), self.cups.max()));
        frame.render_widget(gauge, rows[1]);

        let caption = if self.cups.at_max() {
            Span::styled("That's the limit for today.", Theme::warning())
        } else if self.cups.at_min() {
            Span::styled("No tea yet.", Theme::muted())
        } else {
            Span::raw("")
        };
        frame.render_widget(Paragraph::new(Line::from(caption)), rows[2]);
    }

    fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('+') | KeyCode::Char('a') | KeyCode::Up => self.add_cup(),
            KeyCode::Char('-') | KeyCode::Char('r') | KeyCode::Down => self.remove_cup(),
            _ => false,
        }
    }

    fn key_hints(&self) -> &'static str {
        "+ add cup  - remove cup"
    }
}
