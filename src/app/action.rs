use crate::router::PendingNavigation;

#[derive(Debug)]
pub enum Action {
    SpawnRemoteLoad(PendingNavigation),
    Quit,
}
