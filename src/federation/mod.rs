//! Runtime resolution of remote components.
//!
//! A remote is an independently deployed bundle identified by name. The host
//! registers one loader per remote at startup; navigation later asks the
//! [`RemoteRegistry`] to resolve a name into a [`ComponentFactory`].
//!
//! [`ComponentFactory`]: crate::components::ComponentFactory

pub mod error;
pub mod loader;
pub mod manifest;
pub mod registry;

pub use error::{FederationError, RemoteLoadError};
pub use loader::{BundledLoader, EntryFileLoader, RemoteLoader};
pub use manifest::FederationManifest;
pub use registry::RemoteRegistry;

use std::sync::Arc;
use tracing::{info, warn};

/// Remotes the shell hosts, each with the module it mounts as the app.
pub const KNOWN_REMOTES: &[(&str, &str)] = &[("tea-tracker", "./App"), ("sticky-notes", "./App")];

/// Build the registry for [`KNOWN_REMOTES`].
///
/// Without a manifest every remote is served from the bundled components.
/// With one, only remotes listed in it are registered and each load reads
/// its remote entry from disk; a known remote missing from the manifest
/// stays unregistered and fails as unknown when navigated to.
pub fn build_registry(manifest: Option<&FederationManifest>) -> RemoteRegistry {
    let mut registry = RemoteRegistry::new();

    let Some(manifest) = manifest else {
        for (name, export) in KNOWN_REMOTES {
            registry.register(*name, *export, Arc::new(BundledLoader::new(*name)));
        }
        info!("federation: serving {} remotes from bundled components", KNOWN_REMOTES.len());
        return registry;
    };

    for (name, export) in KNOWN_REMOTES {
        match manifest.location(name) {
            Some(location) => {
                info!(remote = %name, location = %location.display(), "federation: remote entry");
                registry.register(*name, *export, Arc::new(EntryFileLoader::new(*name, location)));
            }
            None => warn!(remote = %name, "federation: remote missing from manifest"),
        }
    }
    for (name, _) in manifest.remotes() {
        if !KNOWN_REMOTES.iter().any(|(known, _)| *known == name) {
            warn!(remote = %name, "federation: manifest lists a remote with no route, ignored");
        }
    }
    registry
}
