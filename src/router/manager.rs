//! Drives pending remote navigations off the event loop.
//!
//! Each load runs in its own task under the configured timeout; the outcome
//! comes back to the loop as [`AppEvent::RemoteResolved`].

use super::PendingNavigation;
use crate::app::event::AppEvent;
use crate::federation::{FederationError, RemoteLoadError};
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, warn};

pub struct NavigationManager {
    event_tx: mpsc::UnboundedSender<AppEvent>,
    timeout: Duration,
}

impl NavigationManager {
    pub fn new(event_tx: mpsc::UnboundedSender<AppEvent>, timeout: Duration) -> Self {
        Self { event_tx, timeout }
    }

    pub fn spawn(&self, pending: PendingNavigation) {
        let PendingNavigation {
            ticket,
            path,
            remote,
            load,
        } = pending;
        let event_tx = self.event_tx.clone();
        let timeout = self.timeout;

        debug!(ticket, path = %path, remote = %remote, "spawning remote load");
        tokio::spawn(async move {
            let result = match tokio::time::timeout(timeout, load).await {
                Ok(result) => result,
                Err(_) => {
                    warn!(remote = %remote, secs = timeout.as_secs(), "remote load timed out");
                    Err(FederationError::RemoteLoad {
                        remote,
                        source: RemoteLoadError::TimedOut {
                            secs: timeout.as_secs(),
                        },
                    })
                }
            };
            let _ = event_tx.send(AppEvent::RemoteResolved {
                ticket,
                path,
                result,
            });
        });
    }
}
