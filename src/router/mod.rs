//! Path-based navigation between the shell's views.
//!
//! A navigation either mounts a local component right away or becomes
//! pending while the remote registry resolves the target. Pending
//! navigations carry a ticket; only the most recent ticket may complete, so a
//! newer request always replaces one still in flight.

pub mod manager;
pub mod table;

pub use manager::NavigationManager;
pub use table::{default_routes, normalize_path, RouteTable, RouteTarget};

use crate::components::{Component, ComponentFactory, MountContext};
use crate::federation::{FederationError, RemoteRegistry};
use crate::model::StateError;
use futures::future::BoxFuture;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

pub type NavTicket = u64;

pub type RemoteLoad = BoxFuture<'static, Result<ComponentFactory, FederationError>>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    #[error("no route for '{path}'")]
    RouteNotFound { path: String },

    #[error(transparent)]
    Remote(#[from] FederationError),

    #[error("cannot mount '{path}': {source}")]
    Mount {
        path: String,
        #[source]
        source: StateError,
    },

    #[error("navigation to '{path}' was superseded")]
    Superseded { path: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavPhase {
    Idle,
    Resolving { path: String, ticket: NavTicket },
}

/// A constructed component together with the path it was mounted for.
pub struct MountedView {
    pub path: String,
    pub factory: ComponentFactory,
    pub component: Box<dyn Component>,
}

impl fmt::Debug for MountedView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MountedView")
            .field("path", &self.path)
            .field("component", &self.factory.id())
            .finish()
    }
}

/// A remote navigation waiting on its load. Drive `load` to completion and
/// hand the result back to [`HostRouter::complete`] with `ticket`.
pub struct PendingNavigation {
    pub ticket: NavTicket,
    pub path: String,
    pub remote: String,
    pub load: RemoteLoad,
}

impl fmt::Debug for PendingNavigation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PendingNavigation")
            .field("ticket", &self.ticket)
            .field("path", &self.path)
            .field("remote", &self.remote)
            .finish_non_exhaustive()
    }
}

pub enum Navigation {
    Mounted(MountedView),
    Pending(PendingNavigation),
}

#[derive(Debug)]
pub enum NavOutcome {
    Mounted(MountedView),
    Failed { path: String, error: NavigationError },
    /// The result belonged to a navigation that a newer one replaced.
    Superseded { ticket: NavTicket },
}

pub struct HostRouter {
    routes: RouteTable,
    registry: Arc<RemoteRegistry>,
    mount_ctx: MountContext,
    phase: NavPhase,
    next_ticket: NavTicket,
}

impl HostRouter {
    pub fn new(routes: RouteTable, registry: Arc<RemoteRegistry>, mount_ctx: MountContext) -> Self {
        Self {
            routes,
            registry,
            mount_ctx,
            phase: NavPhase::Idle,
            next_ticket: 0,
        }
    }

    pub fn phase(&self) -> &NavPhase {
        &self.phase
    }

    pub fn routes(&self) -> &RouteTable {
        &self.routes
    }

    pub fn registry(&self) -> &RemoteRegistry {
        &self.registry
    }

    /// Start navigating to `path`.
    ///
    /// Local targets are mounted before this returns. Remote targets put the
    /// router in [`NavPhase::Resolving`] and return the load to drive.
    pub fn begin(&mut self, path: &str) -> Result<Navigation, NavigationError> {
        let path = normalize_path(path).to_string();

        if let NavPhase::Resolving { path: previous, ticket } = &self.phase {
            info!(previous = %previous, ticket, next = %path, "navigation superseded");
        }
        self.phase = NavPhase::Idle;

        let Some(route) = self.routes.lookup(&path) else {
            warn!(path = %path, "no route");
            return Err(NavigationError::RouteNotFound { path });
        };

        match route.target.clone() {
            RouteTarget::Local(factory) => {
                debug!(path = %path, component = factory.name(), "mounting local route");
                self.mount(&path, factory).map(Navigation::Mounted)
            }
            RouteTarget::Remote { remote } => {
                self.next_ticket += 1;
                let ticket = self.next_ticket;
                let load = self.registry.resolve(&remote);
                debug!(path = %path, remote = %remote, ticket, "resolving remote route");
                self.phase = NavPhase::Resolving {
                    path: path.clone(),
                    ticket,
                };
                Ok(Navigation::Pending(PendingNavigation {
                    ticket,
                    path,
                    remote,
                    load,
                }))
            }
        }
    }

    /// Finish the pending navigation identified by `ticket`.
    ///
    /// Returns the router to [`NavPhase::Idle`] unless the ticket is stale,
    /// in which case the result is dropped and the phase is left alone.
    pub fn complete(
        &mut self,
        ticket: NavTicket,
        result: Result<ComponentFactory, FederationError>,
    ) -> NavOutcome {
        let path = match &self.phase {
            NavPhase::Resolving {
                path,
                ticket: current,
            } if *current == ticket => path.clone(),
            _ => {
                debug!(ticket, "dropping stale navigation result");
                return NavOutcome::Superseded { ticket };
            }
        };
        self.phase = NavPhase::Idle;

        let mounted = result
            .map_err(NavigationError::from)
            .and_then(|factory| self.mount(&path, factory));
        match mounted {
            Ok(view) => {
                info!(path = %view.path, component = view.factory.name(), "remote route mounted");
                NavOutcome::Mounted(view)
            }
            Err(error) => {
                warn!(path = %path, error = %error, "navigation failed");
                NavOutcome::Failed { path, error }
            }
        }
    }

    /// Navigate and wait for the outcome.
    pub async fn navigate(&mut self, path: &str) -> Result<MountedView, NavigationError> {
        match self.begin(path)? {
            Navigation::Mounted(view) => Ok(view),
            Navigation::Pending(pending) => {
                let result = pending.load.await;
                match self.complete(pending.ticket, result) {
                    NavOutcome::Mounted(view) => Ok(view),
                    NavOutcome::Failed { error, .. } => Err(error),
                    NavOutcome::Superseded { .. } => {
                        Err(NavigationError::Superseded { path: pending.path })
                    }
                }
            }
        }
    }

    fn mount(&self, path: &str, factory: ComponentFactory) -> Result<MountedView, NavigationError> {
        let component = factory
            .construct(&self.mount_ctx)
            .map_err(|source| NavigationError::Mount {
                path: path.to_string(),
                source,
            })?;
        Ok(MountedView {
            path: path.to_string(),
            factory,
            component,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{home, sticky_notes, tea_tracker};
    use crate::config::TeaTrackerConfig;
    use crate::federation::registry::fakes::{FixedLoader, GatedLoader};
    use crate::federation::RemoteLoadError;

    fn router_with(registry: RemoteRegistry) -> HostRouter {
        HostRouter::new(default_routes(), Arc::new(registry), MountContext::default())
    }

    fn unreachable() -> RemoteLoadError {
        RemoteLoadError::Unreachable {
            location: "http://localhost:4201/remoteEntry.json".to_string(),
            reason: "connection refused".to_string(),
        }
    }

    #[test]
    fn test_local_route_mounts_synchronously() {
        let mut router = router_with(RemoteRegistry::new());
        match router.begin("home-page").unwrap() {
            Navigation::Mounted(view) => {
                assert_eq!(view.factory, home::FACTORY);
                assert_eq!(view.path, "home-page");
            }
            Navigation::Pending(_) => panic!("local route went pending"),
        }
        assert_eq!(router.phase(), &NavPhase::Idle);
    }

    #[test]
    fn test_unknown_path() {
        let mut router = router_with(RemoteRegistry::new());
        assert!(matches!(
            router.begin("nowhere"),
            Err(NavigationError::RouteNotFound { ref path }) if path == "nowhere"
        ));
        assert_eq!(router.phase(), &NavPhase::Idle);
    }

    #[tokio::test]
    async fn test_remote_route_idle_resolving_mounted() {
        let (loader, gate) = GatedLoader::new();
        let mut registry = RemoteRegistry::new();
        registry.register("tea-tracker", "./App", loader);
        let mut router = router_with(registry);

        let Navigation::Pending(pending) = router.begin("tea-tracker").unwrap() else {
            panic!("remote route mounted without resolving");
        };
        assert_eq!(
            router.phase(),
            &NavPhase::Resolving {
                path: "tea-tracker".to_string(),
                ticket: pending.ticket
            }
        );

        let task = tokio::spawn(pending.load);
        gate.send(Ok(tea_tracker::FACTORY)).unwrap();
        let result = task.await.unwrap();

        match router.complete(pending.ticket, result) {
            NavOutcome::Mounted(view) => assert_eq!(view.factory.name(), "TeaTrackerApp"),
            other => panic!("unexpected outcome: {:?}", other),
        }
        assert_eq!(router.phase(), &NavPhase::Idle);
    }

    #[tokio::test]
    async fn test_failed_remote_does_not_stick() {
        let mut registry = RemoteRegistry::new();
        registry.register("tea-tracker", "./App", FixedLoader::failing(unreachable()));
        let mut router = router_with(registry);

        let err = router.navigate("tea-tracker").await.unwrap_err();
        assert!(matches!(
            err,
            NavigationError::Remote(FederationError::RemoteLoad { .. })
        ));
        assert_eq!(router.phase(), &NavPhase::Idle);

        let view = router.navigate("home-page").await.unwrap();
        assert_eq!(view.factory, home::FACTORY);
    }

    #[tokio::test]
    async fn test_unregistered_remote_route_fails_as_unknown() {
        let mut router = router_with(RemoteRegistry::new());
        let err = router.navigate("sticky-notes").await.unwrap_err();
        assert_eq!(
            err,
            NavigationError::Remote(FederationError::UnknownRemote {
                name: "sticky-notes".to_string()
            })
        );
    }

    #[tokio::test]
    async fn test_newer_navigation_supersedes_pending() {
        let mut registry = RemoteRegistry::new();
        registry.register("tea-tracker", "./App", FixedLoader::ok(tea_tracker::FACTORY));
        registry.register("sticky-notes", "./App", FixedLoader::ok(sticky_notes::FACTORY));
        let mut router = router_with(registry);

        let Navigation::Pending(first) = router.begin("tea-tracker").unwrap() else {
            panic!("expected pending");
        };
        let Navigation::Pending(second) = router.begin("sticky-notes").unwrap() else {
            panic!("expected pending");
        };
        assert_ne!(first.ticket, second.ticket);

        let first_result = first.load.await;
        assert!(matches!(
            router.complete(first.ticket, first_result),
            NavOutcome::Superseded { .. }
        ));
        assert!(matches!(router.phase(), NavPhase::Resolving { .. }));

        let second_result = second.load.await;
        match router.complete(second.ticket, second_result) {
            NavOutcome::Mounted(view) => assert_eq!(view.factory, sticky_notes::FACTORY),
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_local_navigation_supersedes_pending() {
        let mut registry = RemoteRegistry::new();
        registry.register("tea-tracker", "./App", FixedLoader::ok(tea_tracker::FACTORY));
        let mut router = router_with(registry);

        let Navigation::Pending(pending) = router.begin("tea-tracker").unwrap() else {
            panic!("expected pending");
        };
        assert!(matches!(router.begin("home-page"), Ok(Navigation::Mounted(_))));
        let result = pending.load.await;
        assert!(matches!(
            router.complete(pending.ticket, result),
            NavOutcome::Superseded { .. }
        ));
        assert_eq!(router.phase(), &NavPhase::Idle);
    }

    #[tokio::test]
    async fn test_construction_failure_is_reported() {
        let mut registry = RemoteRegistry::new();
        registry.register("tea-tracker", "./App", FixedLoader::ok(tea_tracker::FACTORY));
        let ctx = MountContext {
            tea_tracker: TeaTrackerConfig {
                initial_cups: 5,
                min_cups: 0,
                max_cups: 2,
            },
        };
        let mut router = HostRouter::new(default_routes(), Arc::new(registry), ctx);

        let err = router.navigate("tea-tracker").await.unwrap_err();
        assert!(matches!(
            err,
            NavigationError::Mount {
                source: StateError::InvalidState { .. },
                ..
            }
        ));
        assert_eq!(router.phase(), &NavPhase::Idle);
    }
}
