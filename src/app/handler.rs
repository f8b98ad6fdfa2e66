use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::state::*;
use crate::components::input::InputState;
use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::debug;

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => handle_terminal(state, cevent),
        AppEvent::RemoteResolved {
            ticket,
            path,
            result,
        } => {
            debug!(ticket, path = %path, ok = result.is_ok(), "remote load finished");
            state.complete_navigation(ticket, result);
            vec![]
        }
        AppEvent::Tick => {
            state.tick_count = state.tick_count.wrapping_add(1);
            // Spinner animation
            if state.is_loading() {
                state.dirty = true;
            }
            vec![]
        }
    }
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) if key.kind != KeyEventKind::Release => {
            state.dirty = true;
            handle_key(state, key)
        }
        CEvent::Resize(_, _) => {
            state.dirty = true;
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    // Global keybindings
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![Action::Quit];
    }

    // Location bar captures all input when open
    if state.location.active {
        return handle_location_key(state, key);
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('l') {
        state.open_location();
        return vec![];
    }

    if key.code == KeyCode::F(5) {
        return state.reload();
    }

    if key.code == KeyCode::Tab {
        state.cycle_focus();
        return vec![];
    }

    match state.focus {
        FocusPanel::Nav => handle_nav_key(state, key),
        FocusPanel::Outlet => handle_outlet_key(state, key),
    }
}

fn handle_location_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Esc => state.location.close(),
        KeyCode::Enter => {
            let path = state.location.submit();
            return state.navigate(&path);
        }
        KeyCode::Up => state.location.history_back(),
        KeyCode::Down => state.location.history_forward(),
        _ => handle_location_edit(&mut state.location.input, key),
    }
    vec![]
}

fn handle_location_edit(input: &mut InputState, key: KeyEvent) {
    match key.code {
        KeyCode::Backspace => input.delete_back(),
        KeyCode::Delete => input.delete_forward(),
        KeyCode::Left => input.move_left(),
        KeyCode::Right => input.move_right(),
        KeyCode::Home => input.move_home(),
        KeyCode::End => input.move_end(),
        KeyCode::Char('w') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            input.delete_word_back()
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            input.insert_char(c)
        }
        _ => {}
    }
}

fn handle_nav_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => {
            state.nav_up();
            vec![]
        }
        KeyCode::Down | KeyCode::Char('j') => {
            state.nav_down();
            vec![]
        }
        KeyCode::Enter | KeyCode::Right => match state.selected_route_path() {
            Some(path) => {
                state.focus = FocusPanel::Outlet;
                state.navigate(&path)
            }
            None => vec![],
        },
        _ => vec![],
    }
}

fn handle_outlet_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    if let Outlet::Mounted(view) = &mut state.outlet {
        if !view.component.handle_key(key) {
            state.dirty = false;
        }
        return vec![];
    }
    if matches!(state.outlet, Outlet::Failed { .. }) && key.code == KeyCode::Enter {
        return state.reload();
    }
    vec![]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::MountContext;
    use crate::config::AppConfig;
    use crate::federation::build_registry;
    use crate::router::{default_routes, HostRouter};
    use std::sync::Arc;

    fn new_state() -> AppState {
        let router = HostRouter::new(
            default_routes(),
            Arc::new(build_registry(None)),
            MountContext::default(),
        );
        AppState::new(AppConfig::default(), router)
    }

    fn press(state: &mut AppState, code: KeyCode) -> Vec<Action> {
        handle_event(
            state,
            AppEvent::Terminal(CEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))),
        )
    }

    fn ctrl(state: &mut AppState, c: char) -> Vec<Action> {
        handle_event(
            state,
            AppEvent::Terminal(CEvent::Key(KeyEvent::new(
                KeyCode::Char(c),
                KeyModifiers::CONTROL,
            ))),
        )
    }

    fn resolve_spawned(state: &mut AppState, actions: Vec<Action>) {
        for action in actions {
            if let Action::SpawnRemoteLoad(pending) = action {
                let result = futures::executor::block_on(pending.load);
                handle_event(
                    state,
                    AppEvent::RemoteResolved {
                        ticket: pending.ticket,
                        path: pending.path,
                        result,
                    },
                );
            }
        }
    }

    #[test]
    fn test_ctrl_c_quits() {
        let mut state = new_state();
        assert!(matches!(ctrl(&mut state, 'c').as_slice(), [Action::Quit]));
    }

    #[test]
    fn test_nav_panel_opens_remote_and_keys_reach_component() {
        let mut state = new_state();
        state.navigate("home-page");
        press(&mut state, KeyCode::Tab);
        assert_eq!(state.focus, FocusPanel::Nav);

        press(&mut state, KeyCode::Down); // tea-tracker
        let actions = press(&mut state, KeyCode::Enter);
        assert_eq!(state.focus, FocusPanel::Outlet);
        assert!(state.is_loading());
        resolve_spawned(&mut state, actions);

        assert!(matches!(&state.outlet, Outlet::Mounted(v) if v.factory.name() == "TeaTrackerApp"));
        press(&mut state, KeyCode::Char('+'));
        assert!(state.dirty);
        assert!(state.status_line().contains("TeaTrackerApp"));
    }

    #[test]
    fn test_location_bar_navigation() {
        let mut state = new_state();
        state.navigate("home-page");
        ctrl(&mut state, 'l');
        assert!(state.location.active);
        assert_eq!(state.location.input.text, "home-page");

        state.location.input.clear();
        for c in "sticky-notes".chars() {
            press(&mut state, KeyCode::Char(c));
        }
        let actions = press(&mut state, KeyCode::Enter);
        assert!(!state.location.active);
        resolve_spawned(&mut state, actions);
        assert!(matches!(&state.outlet, Outlet::Mounted(v) if v.factory.name() == "StickyNotesApp"));
    }

    #[test]
    fn test_location_bar_escape_keeps_view() {
        let mut state = new_state();
        state.navigate("home-page");
        ctrl(&mut state, 'l');
        press(&mut state, KeyCode::Char('x'));
        assert!(press(&mut state, KeyCode::Esc).is_empty());
        assert!(!state.location.active);
        assert!(matches!(&state.outlet, Outlet::Mounted(v) if v.path == "home-page"));
    }

    #[test]
    fn test_location_bar_recalls_submitted_path() {
        let mut state = new_state();
        state.navigate("home-page");
        ctrl(&mut state, 'l');
        state.location.input.clear();
        for c in "weather".chars() {
            press(&mut state, KeyCode::Char(c));
        }
        press(&mut state, KeyCode::Enter);
        assert!(matches!(state.outlet, Outlet::Failed { .. }));

        ctrl(&mut state, 'l');
        press(&mut state, KeyCode::Up);
        assert_eq!(state.location.input.text, "weather");
        press(&mut state, KeyCode::Down);
        assert!(state.location.input.text.is_empty());
    }

    #[test]
    fn test_enter_on_failure_retries() {
        let mut state = new_state();
        state.navigate("tea-trackr");
        assert!(matches!(state.outlet, Outlet::Failed { .. }));
        press(&mut state, KeyCode::Enter);
        assert!(matches!(state.outlet, Outlet::Failed { .. }));
    }

    #[test]
    fn test_f5_reloads_remote() {
        let mut state = new_state();
        let actions = state.navigate("sticky-notes");
        resolve_spawned(&mut state, actions);
        let actions = press(&mut state, KeyCode::F(5));
        assert!(matches!(actions.as_slice(), [Action::SpawnRemoteLoad(_)]));
    }

    #[test]
    fn test_tick_redraws_only_while_loading() {
        let mut state = new_state();
        state.navigate("home-page");
        state.dirty = false;
        handle_event(&mut state, AppEvent::Tick);
        assert!(!state.dirty);

        state.navigate("tea-tracker");
        state.dirty = false;
        handle_event(&mut state, AppEvent::Tick);
        assert!(state.dirty);
    }
}
