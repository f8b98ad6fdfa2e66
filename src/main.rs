mod app;
mod components;
mod config;
mod federation;
mod logging;
mod model;
mod router;
mod ui;

use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::handler;
use crate::app::state::AppState;
use crate::components::MountContext;
use crate::federation::{FederationManifest, RemoteLoadError};
use crate::router::{default_routes, HostRouter, NavigationManager};
use anyhow::Result;
use crossterm::{
    event::EventStream,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::prelude::*;
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load config
    let cfg = config::load_config()?;

    let mut start_path = None;
    let mut check_only = false;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--write-config" => {
                let path = config::save_config(&cfg)?;
                println!("Wrote {}", path.display());
                return Ok(());
            }
            "--check" => check_only = true,
            _ => start_path = Some(arg),
        }
    }

    if let Some(log_path) = logging::init(&cfg.logging)? {
        info!(path = %log_path.display(), "mosaic starting");
    }

    // Build registry and routes before touching the terminal so manifest
    // errors are printed normally
    let manifest = match &cfg.federation.manifest {
        Some(path) => Some(FederationManifest::load(path)?),
        None => None,
    };
    let registry = Arc::new(federation::build_registry(manifest.as_ref()));
    info!(remotes = ?registry.names().collect::<Vec<_>>(), "remote registry ready");
    let mount_ctx = MountContext {
        tea_tracker: cfg.tea_tracker.clone(),
    };
    let mut router = HostRouter::new(default_routes(), registry, mount_ctx);

    if check_only {
        let timeout = Duration::from_secs(cfg.shell.remote_timeout_secs);
        if !check_routes(&mut router, timeout).await {
            std::process::exit(1);
        }
        return Ok(());
    }

    // Install panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        original_hook(info);
    }));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let start_path = start_path.unwrap_or_else(|| cfg.shell.start_path.clone());
    let result = run_app(&mut terminal, cfg, router, start_path).await;

    // Restore terminal
    restore_terminal()?;

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}

/// Navigate to every route once and print the outcome. Returns false if any
/// route failed to mount.
async fn check_routes(router: &mut HostRouter, timeout: Duration) -> bool {
    let paths: Vec<String> = router.routes().iter().map(|r| r.path.clone()).collect();
    let mut all_ok = true;
    for path in paths {
        match tokio::time::timeout(timeout, router.navigate(&path)).await {
            Ok(Ok(view)) => println!("ok    {:<16} {}", path, view.factory.name()),
            Ok(Err(e)) => {
                all_ok = false;
                println!("FAIL  {:<16} {}", path, e);
            }
            Err(_) => {
                all_ok = false;
                let e = RemoteLoadError::TimedOut {
                    secs: timeout.as_secs(),
                };
                println!("FAIL  {:<16} {}", path, e);
            }
        }
    }
    all_ok
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    cfg: config::AppConfig,
    router: HostRouter,
    start_path: String,
) -> Result<()> {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<AppEvent>();

    let tick_rate = Duration::from_millis(cfg.shell.tick_rate_ms.max(16));
    let remote_timeout = Duration::from_secs(cfg.shell.remote_timeout_secs);
    let navigation = NavigationManager::new(event_tx.clone(), remote_timeout);
    let mut state = AppState::new(cfg, router);

    // Spawn terminal input task
    let term_tx = event_tx.clone();
    tokio::spawn(async move {
        let mut reader = EventStream::new();
        loop {
            match reader.next().await {
                Some(Ok(event)) => {
                    if term_tx.send(AppEvent::Terminal(event)).is_err() {
                        break;
                    }
                }
                Some(Err(_)) => break,
                None => break,
            }
        }
    });

    // Spawn tick task
    let tick_tx = event_tx.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(tick_rate);
        loop {
            interval.tick().await;
            if tick_tx.send(AppEvent::Tick).is_err() {
                break;
            }
        }
    });

    // Initial navigation
    let actions = state.navigate(&start_path);
    dispatch(&mut state, &navigation, actions);

    // Initial render
    terminal.draw(|f| ui::render(f, &state))?;

    // Main event loop
    loop {
        let event = event_rx.recv().await;
        let Some(event) = event else { break };

        let actions = handler::handle_event(&mut state, event);
        dispatch(&mut state, &navigation, actions);

        if state.should_quit {
            info!("mosaic exiting");
            break;
        }

        // Conditional render (only if dirty)
        if state.dirty {
            terminal.draw(|f| ui::render(f, &state))?;
            state.dirty = false;
        }
    }

    Ok(())
}

fn dispatch(state: &mut AppState, navigation: &NavigationManager, actions: Vec<Action>) {
    for action in actions {
        match action {
            Action::SpawnRemoteLoad(pending) => navigation.spawn(pending),
            Action::Quit => state.should_quit = true,
        }
    }
}
