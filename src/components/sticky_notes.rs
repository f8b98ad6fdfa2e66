use super::input::InputState;
use super::{Component, ComponentFactory, MountContext};
use crate::model::{StateError, ToggleList};
use crate::ui::theme::Theme;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::prelude::*;
use ratatui::widgets::block::Padding;
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};

/// Exposed by the `sticky-notes` remote as `./App`.
pub const FACTORY: ComponentFactory =
    ComponentFactory::new("sticky-notes/App", "StickyNotesApp", mount);

fn mount(_ctx: &MountContext) -> Result<Box<dyn Component>, StateError> {
    Ok(Box::new(StickyNotes::new()))
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum NotesFocus {
    Draft,
    List,
}

/// Todo list with a draft field. State lives only as long as the view is mounted.
pub struct StickyNotes {
    notes: ToggleList,
    draft: InputState,
    focus: NotesFocus,
    selected: usize,
}

impl Default for StickyNotes {
    fn default() -> Self {
        Self::new()
    }
}

impl StickyNotes {
    pub fn new() -> Self {
        Self {
            notes: ToggleList::new(),
            draft: InputState::new(),
            focus: NotesFocus::Draft,
            selected: 0,
        }
    }

    /// Add the draft as a note. A blank draft is left untouched.
    pub fn submit(&mut self) -> bool {
        if self.notes.add(&self.draft.text).is_none() {
            return false;
        }
        self.draft.clear();
        true
    }

    pub fn toggle_selected(&mut self) -> bool {
        let Some(id) = self.notes.get(self.selected).map(|item| item.id()) else {
            return false;
        };
        self.notes.toggle(id).is_ok()
    }

    pub fn remove_selected(&mut self) -> bool {
        if self.notes.remove(self.selected).is_err() {
            return false;
        }
        if self.notes.is_empty() {
            self.selected = 0;
            self.focus = NotesFocus::Draft;
        } else if self.selected >= self.notes.len() {
            self.selected = self.notes.len() - 1;
        }
        true
    }

    fn handle_draft_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Enter => self.submit(),
            KeyCode::Down => {
                if self.notes.is_empty() {
                    return false;
                }
                self.focus = NotesFocus::List;
                true
            }
            KeyCode::Backspace => {
                self.draft.delete_back();
                true
            }
            KeyCode::Delete => {
                self.draft.delete_forward();
                true
            }
            KeyCode::Left => {
                self.draft.move_left();
                true
            }
            KeyCode::Right => {
                self.draft.move_right();
                true
            }
            KeyCode::Home => {
                self.draft.move_home();
                true
            }
            KeyCode::End => {
                self.draft.move_end();
                true
            }
            KeyCode::Char('w') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.draft.delete_word_back();
                true
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.draft.insert_char(c);
                true
            }
            _ => false,
        }
    }

    fn handle_list_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Up => {
                if self.selected == 0 {
                    self.focus = NotesFocus::Draft;
                } else {
                    self.selected -= 1;
                }
                true
            }
            KeyCode::Down => {
                if self.selected + 1 < self.notes.len() {
                    self.selected += 1;
                }
                true
            }
            KeyCode::Char(' ') | KeyCode::Enter => self.toggle_selected(),
            KeyCode::Delete | KeyCode::Char('d') => self.remove_selected(),
            KeyCode::Esc | KeyCode::Char('i') => {
                self.focus = NotesFocus::Draft;
                true
            }
            _ => false,
        }
    }
}

impl Component for StickyNotes {
    fn title(&self) -> &str {
        "Sticky Notes"
    }

    fn render(&self, frame: &mut Frame, area: Rect, focused: bool) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Draft
                Constraint::Min(3),    // Notes
            ])
            .split(area);

        let draft_focused = focused && self.focus == NotesFocus::Draft;
        let draft_block = Block::default()
            .title(" New note ")
            .title_style(Theme::title())
            .borders(Borders::ALL)
            .border_type(Theme::border_type_for(draft_focused))
            .border_style(Theme::border_for(draft_focused))
            .padding(Padding::horizontal(1));
        let draft_inner = draft_block.inner(rows[0]);
        frame.render_widget(draft_block, rows[0]);

        let line = Line::from(vec![
            Span::styled("❯ ", Theme::accent()),
            Span::styled(self.draft.text.as_str(), Theme::input_text()),
        ]);
        frame.render_widget(Paragraph::new(line), draft_inner);
        if draft_focused && draft_inner.width > 0 {
            // Prompt chevron "❯ " is two columns wide
            let cursor_x = draft_inner
                .x
                .saturating_add(2)
                .saturating_add(self.draft.cursor_column());
            frame.set_cursor_position((cursor_x.min(draft_inner.right() - 1), draft_inner.y));
        }

        let list_focused = focused && self.focus == NotesFocus::List;
        let title = format!(" Notes ({} open) ", self.notes.remaining());
        let list_block = Block::default()
            .title(title)
            .title_style(Theme::title())
            .borders(Borders::ALL)
            .border_type(Theme::border_type_for(list_focused))
            .border_style(Theme::border_for(list_focused));

        if self.notes.is_empty() {
            let empty = Paragraph::new(Span::styled(" Nothing to do.", Theme::muted()))
                .block(list_block);
            frame.render_widget(empty, rows[1]);
            return;
        }

        let items: Vec<ListItem> = self
            .notes
            .iter()
            .map(|item| {
                let (marker, style) = if item.done() {
                    ("[x] ", Theme::done_item())
                } else {
                    ("[ ] ", Theme::input_text())
                };
                ListItem::new(Line::from(vec![
                    Span::styled(marker, Theme::accent()),
                    Span::styled(item.text(), style),
                ]))
            })
            .collect();

        let list = List::new(items)
            .block(list_block)
            .highlight_style(Theme::selection());
        let mut list_state = ListState::default();
        if list_focused {
            list_state.select(Some(self.selected));
        }
        frame.render_stateful_widget(list, rows[1], &mut list_state);
    }

    fn handle_key(&mut self, key: KeyEvent) -> bool {
        match self.focus {
            NotesFocus::Draft => self.handle_draft_key(key),
            NotesFocus::List => self.handle_list_key(key),
        }
    }

    fn key_hints(&self) -> &'static str {
        match self.focus {
            NotesFocus::Draft => "Enter add  ↓ notes",
            NotesFocus::List => "Space toggle  d delete  i new note",
        }
    }
}
