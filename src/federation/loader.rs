use super::error::RemoteLoadError;
use super::manifest::RemoteEntryDocument;
use crate::components::{self, ComponentFactory};
use futures::future::{BoxFuture, FutureExt};
use std::path::PathBuf;
use tracing::debug;

/// Resolves an exposed module of one remote to a component constructor.
///
/// Loading may suspend for as long as the underlying source takes; the
/// loader itself applies no timeout and does not retry.
pub trait RemoteLoader: Send + Sync {
    fn load<'a>(&'a self, expose: &'a str)
        -> BoxFuture<'a, Result<ComponentFactory, RemoteLoadError>>;
}

/// Serves a remote straight from the components linked into the binary.
///
/// `./App` of bundle `tea-tracker` resolves to catalog id `tea-tracker/App`.
pub struct BundledLoader {
    bundle: String,
}

impl BundledLoader {
    pub fn new(bundle: impl Into<String>) -> Self {
        Self {
            bundle: bundle.into(),
        }
    }
}

impl RemoteLoader for BundledLoader {
    fn load<'a>(
        &'a self,
        expose: &'a str,
    ) -> BoxFuture<'a, Result<ComponentFactory, RemoteLoadError>> {
        let module = expose.trim_start_matches("./");
        let id = format!("{}/{}", self.bundle, module);
        let result = components::lookup(&id).ok_or_else(|| RemoteLoadError::MissingExport {
            expose: expose.to_string(),
        });
        futures::future::ready(result).boxed()
    }
}

/// Reads a remote entry document from disk on every load and resolves the
/// requested exposed module through it.
pub struct EntryFileLoader {
    remote: String,
    location: PathBuf,
}

impl EntryFileLoader {
    pub fn new(remote: impl Into<String>, location: impl Into<PathBuf>) -> Self {
        Self {
            remote: remote.into(),
            location: location.into(),
        }
    }

    async fn read_entry(&self) -> Result<RemoteEntryDocument, RemoteLoadError> {
        let location = self.location.display().to_string();
        let raw = tokio::fs::read_to_string(&self.location)
            .await
            .map_err(|e| RemoteLoadError::Unreachable {
                location: location.clone(),
                reason: e.to_string(),
            })?;
        serde_json::from_str(&raw).map_err(|e| RemoteLoadError::Malformed {
            location,
            reason: e.to_string(),
        })
    }
}

impl RemoteLoader for EntryFileLoader {
    fn load<'a>(
        &'a self,
        expose: &'a str,
    ) -> BoxFuture<'a, Result<ComponentFactory, RemoteLoadError>> {
        async move {
            debug!(remote = %self.remote, location = %self.location.display(), expose, "reading remote entry");
            let entry = self.read_entry().await?;
            if entry.name != self.remote {
                return Err(RemoteLoadError::Incompatible(format!(
                    "entry at {} belongs to '{}', expected '{}'",
                    self.location.display(),
                    entry.name,
                    self.remote
                )));
            }
            let exposed = entry
                .exposed(expose)
                .ok_or_else(|| RemoteLoadError::MissingExport {
                    expose: expose.to_string(),
                })?;
            components::lookup(&exposed.component).ok_or_else(|| {
                RemoteLoadError::Incompatible(format!(
                    "component '{}' is not available in this host",
                    exposed.component
                ))
            })
        }
        .boxed()
    }
}
