use crate::components::ComponentFactory;
use crate::federation::FederationError;
use crate::router::NavTicket;
use crossterm::event::Event as CrosstermEvent;

#[derive(Debug)]
pub enum AppEvent {
    /// Terminal input event
    Terminal(CrosstermEvent),

    /// A spawned remote load finished (or timed out)
    RemoteResolved {
        ticket: NavTicket,
        path: String,
        result: Result<ComponentFactory, FederationError>,
    },

    /// Tick for UI refresh
    Tick,
}
