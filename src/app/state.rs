use crate::app::action::Action;
use crate::components::input::InputState;
use crate::components::ComponentFactory;
use crate::config::AppConfig;
use crate::federation::FederationError;
use crate::router::{
    normalize_path, HostRouter, MountedView, NavOutcome, NavPhase, NavTicket, Navigation,
    NavigationError,
};

/// What the central area of the shell is showing.
pub enum Outlet {
    Empty,
    Loading { path: String, started_tick: u64 },
    Mounted(MountedView),
    Failed { path: String, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FocusPanel {
    Nav,
    Outlet,
}

/// Editable path field with a history of submitted paths.
#[derive(Debug, Default)]
pub struct LocationBar {
    pub active: bool,
    pub input: InputState,
    history: Vec<String>,
    history_index: Option<usize>,
}

impl LocationBar {
    pub fn open(&mut self, current: &str) {
        self.input.set_text(current);
        self.history_index = None;
        self.active = true;
    }

    pub fn close(&mut self) {
        self.input.clear();
        self.history_index = None;
        self.active = false;
    }

    /// Take the typed path. Non-empty paths are remembered unless they repeat
    /// the last entry.
    pub fn submit(&mut self) -> String {
        let path = self.input.take_text();
        self.history_index = None;
        self.active = false;
        if !path.is_empty() && self.history.last() != Some(&path) {
            self.history.push(path.clone());
        }
        path
    }

    pub fn history_back(&mut self) {
        let idx = match self.history_index {
            Some(0) => return,
            Some(i) => i - 1,
            None if self.history.is_empty() => return,
            None => self.history.len() - 1,
        };
        self.history_index = Some(idx);
        self.input.set_text(&self.history[idx]);
    }

    pub fn history_forward(&mut self) {
        let Some(i) = self.history_index else {
            return;
        };
        if i + 1 < self.history.len() {
            self.history_index = Some(i + 1);
            self.input.set_text(&self.history[i + 1]);
        } else {
            self.history_index = None;
            self.input.clear();
        }
    }
}

pub struct AppState {
    pub config: AppConfig,
    pub router: HostRouter,
    pub outlet: Outlet,
    /// Path of the last navigation request, used by reload.
    pub current_path: Option<String>,
    pub nav_selected: usize,
    pub focus: FocusPanel,
    pub location: LocationBar,
    pub tick_count: u64,
    pub should_quit: bool,
    pub dirty: bool,
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(config: AppConfig, router: HostRouter) -> Self {
        Self {
            config,
            router,
            outlet: Outlet::Empty,
            current_path: None,
            nav_selected: 0,
            focus: FocusPanel::Outlet,
            location: LocationBar::default(),
            tick_count: 0,
            should_quit: false,
            dirty: true,
            status_message: None,
        }
    }

    /// Ask the router for `path`. Remote targets come back as a
    /// [`Action::SpawnRemoteLoad`] for the event loop to run.
    pub fn navigate(&mut self, path: &str) -> Vec<Action> {
        let requested = normalize_path(path).to_string();
        self.location.active = false;
        self.current_path = Some(requested.clone());
        self.dirty = true;

        match self.router.begin(&requested) {
            Ok(Navigation::Mounted(view)) => {
                self.mount(view);
                vec![]
            }
            Ok(Navigation::Pending(pending)) => {
                self.sync_nav_selection(&pending.path);
                self.status_message = None;
                self.outlet = Outlet::Loading {
                    path: pending.path.clone(),
                    started_tick: self.tick_count,
                };
                vec![Action::SpawnRemoteLoad(pending)]
            }
            Err(error) => {
                self.fail(requested, error);
                vec![]
            }
        }
    }

    pub fn reload(&mut self) -> Vec<Action> {
        match self.current_path.clone() {
            Some(path) => self.navigate(&path),
            None => vec![],
        }
    }

    pub fn complete_navigation(
        &mut self,
        ticket: NavTicket,
        result: Result<ComponentFactory, FederationError>,
    ) {
        match self.router.complete(ticket, result) {
            NavOutcome::Mounted(view) => self.mount(view),
            NavOutcome::Failed { path, error } => self.fail(path, error),
            NavOutcome::Superseded { .. } => {}
        }
    }

    fn mount(&mut self, view: MountedView) {
        self.sync_nav_selection(&view.path);
        self.current_path = Some(view.path.clone());
        self.status_message = None;
        self.outlet = Outlet::Mounted(view);
        self.dirty = true;
    }

    fn fail(&mut self, path: String, error: NavigationError) {
        self.status_message = Some(format!("Navigation to '{}' failed", path));
        self.outlet = Outlet::Failed {
            path,
            message: error.to_string(),
        };
        self.dirty = true;
    }

    fn sync_nav_selection(&mut self, path: &str) {
        if let Some(idx) = self.router.routes().iter().position(|r| r.path == path) {
            self.nav_selected = idx;
        }
    }

    pub fn selected_route_path(&self) -> Option<String> {
        self.router
            .routes()
            .iter()
            .nth(self.nav_selected)
            .map(|r| r.path.clone())
    }

    pub fn nav_up(&mut self) {
        self.nav_selected = self.nav_selected.saturating_sub(1);
        self.dirty = true;
    }

    pub fn nav_down(&mut self) {
        if self.nav_selected + 1 < self.router.routes().len() {
            self.nav_selected += 1;
        }
        self.dirty = true;
    }

    pub fn cycle_focus(&mut self) {
        self.focus = match self.focus {
            FocusPanel::Nav => FocusPanel::Outlet,
            FocusPanel::Outlet => FocusPanel::Nav,
        };
        self.dirty = true;
    }

    pub fn open_location(&mut self) {
        let current = self.current_path.clone().unwrap_or_default();
        self.location.open(&current);
        self.dirty = true;
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.outlet, Outlet::Loading { .. })
    }

    pub fn key_hints(&self) -> &'static str {
        if self.location.active {
            return "Enter go  Esc cancel  ↑↓ history";
        }
        match (self.focus, &self.outlet) {
            (FocusPanel::Nav, _) => "↑↓ select  Enter open  Tab outlet",
            (FocusPanel::Outlet, Outlet::Mounted(view)) => view.component.key_hints(),
            (FocusPanel::Outlet, Outlet::Failed { .. }) => "Enter retry  Tab navigation",
            (FocusPanel::Outlet, _) => "Tab navigation  Ctrl-L location",
        }
    }

    pub fn status_line(&self) -> String {
        if let Some(ref msg) = self.status_message {
            return msg.clone();
        }
        match self.router.phase() {
            NavPhase::Resolving { path, .. } => format!("Resolving {}…", path),
            NavPhase::Idle => match &self.outlet {
                Outlet::Mounted(view) => {
                    format!("{} ({})", view.component.title(), view.factory.name())
                }
                _ => "Ready".to_string(),
            },
        }
    }
}
