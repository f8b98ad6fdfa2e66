use super::error::FederationError;
use super::loader::RemoteLoader;
use crate::components::ComponentFactory;
use futures::future::{BoxFuture, FutureExt};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, warn};

#[derive(Clone)]
pub struct RemoteEntry {
    pub name: String,
    pub module_export: String,
    pub loader: Arc<dyn RemoteLoader>,
}

/// Remote name → loader for the module the host mounts from that remote.
///
/// Populated at startup and shared read-only afterwards. Every `resolve`
/// goes back to the loader; nothing is cached and concurrent resolutions of
/// the same remote are independent.
#[derive(Default)]
pub struct RemoteRegistry {
    entries: BTreeMap<String, RemoteEntry>,
}

impl RemoteRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install `loader` for `name`, replacing any previous entry.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        module_export: impl Into<String>,
        loader: Arc<dyn RemoteLoader>,
    ) {
        let name = name.into();
        let entry = RemoteEntry {
            name: name.clone(),
            module_export: module_export.into(),
            loader,
        };
        debug!(remote = %name, export = %entry.module_export, "registering remote");
        if self.entries.insert(name.clone(), entry).is_some() {
            warn!(remote = %name, "remote re-registered, previous entry replaced");
        }
    }

    /// Look up `name` now and return a future that runs its loader.
    ///
    /// An unknown name fails without touching any loader.
    pub fn resolve(
        &self,
        name: &str,
    ) -> BoxFuture<'static, Result<ComponentFactory, FederationError>> {
        let Some(entry) = self.entries.get(name).cloned() else {
            warn!(remote = %name, "resolve for unknown remote");
            return futures::future::ready(Err(FederationError::UnknownRemote {
                name: name.to_string(),
            }))
            .boxed();
        };

        async move {
            debug!(remote = %entry.name, export = %entry.module_export, "resolving remote");
            entry
                .loader
                .load(&entry.module_export)
                .await
                .map_err(|source| FederationError::RemoteLoad {
                    remote: entry.name.clone(),
                    source,
                })
        }
        .boxed()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

#[cfg(test)]
pub(crate) mod fakes {
    //! In-memory loaders for exercising the registry and router.

    use super::super::error::RemoteLoadError;
    use super::super::loader::RemoteLoader;
    use crate::components::ComponentFactory;
    use futures::future::{BoxFuture, FutureExt};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};
    use tokio::sync::oneshot;

    /// Returns a fixed outcome and counts how often it was asked.
    pub struct FixedLoader {
        outcome: Result<ComponentFactory, RemoteLoadError>,
        calls: AtomicUsize,
    }

    impl FixedLoader {
        pub fn ok(factory: ComponentFactory) -> Arc<Self> {
            Arc::new(Self {
                outcome: Ok(factory),
                calls: AtomicUsize::new(0),
            })
        }

        pub fn failing(err: RemoteLoadError) -> Arc<Self> {
            Arc::new(Self {
                outcome: Err(err),
                calls: AtomicUsize::new(0),
            })
        }

        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl RemoteLoader for FixedLoader {
        fn load<'a>(
            &'a self,
            _expose: &'a str,
        ) -> BoxFuture<'a, Result<ComponentFactory, RemoteLoadError>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            futures::future::ready(self.outcome.clone()).boxed()
        }
    }

    /// Suspends until the test releases it through the returned sender.
    pub struct GatedLoader {
        gate: Mutex<Option<oneshot::Receiver<Result<ComponentFactory, RemoteLoadError>>>>,
    }

    impl GatedLoader {
        pub fn new() -> (
            Arc<Self>,
            oneshot::Sender<Result<ComponentFactory, RemoteLoadError>>,
        ) {
            let (tx, rx) = oneshot::channel();
            (
                Arc::new(Self {
                    gate: Mutex::new(Some(rx)),
                }),
                tx,
            )
        }
    }

    impl RemoteLoader for GatedLoader {
        fn load<'a>(
            &'a self,
            expose: &'a str,
        ) -> BoxFuture<'a, Result<ComponentFactory, RemoteLoadError>> {
            let rx = self.gate.lock().unwrap().take();
            async move {
                match rx {
                    Some(rx) => rx.await.unwrap_or_else(|_| {
                        Err(RemoteLoadError::Unreachable {
                            location: "gate".to_string(),
                            reason: "dropped".to_string(),
                        })
                    }),
                    None => Err(RemoteLoadError::MissingExport {
                        expose: expose.to_string(),
                    }),
                }
            }
            .boxed()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fakes::FixedLoader;
    use super::*;
    use crate::components::{sticky_notes, tea_tracker};
    use crate::federation::RemoteLoadError;

    #[tokio::test]
    async fn test_unknown_remote_does_not_touch_loaders() {
        let loader = FixedLoader::ok(tea_tracker::FACTORY);
        let mut registry = RemoteRegistry::new();
        registry.register("tea-tracker", "./App", loader.clone());

        let err = registry.resolve("unregistered").await.unwrap_err();
        assert_eq!(
            err,
            FederationError::UnknownRemote {
                name: "unregistered".to_string()
            }
        );
        assert_eq!(loader.calls(), 0);
    }

    #[tokio::test]
    async fn test_resolve_invokes_loader_every_time() {
        let loader = FixedLoader::ok(tea_tracker::FACTORY);
        let mut registry = RemoteRegistry::new();
        registry.register("tea-tracker", "./App", loader.clone());

        let first = registry.resolve("tea-tracker").await.unwrap();
        let second = registry.resolve("tea-tracker").await.unwrap();
        assert_eq!(first, tea_tracker::FACTORY);
        assert_eq!(second, tea_tracker::FACTORY);
        assert_eq!(loader.calls(), 2);
    }

    #[tokio::test]
    async fn test_register_last_write_wins() {
        let old = FixedLoader::ok(tea_tracker::FACTORY);
        let new = FixedLoader::ok(sticky_notes::FACTORY);
        let mut registry = RemoteRegistry::new();
        registry.register("notes", "./App", old.clone());
        registry.register("notes", "./Board", new.clone());

        assert_eq!(registry.names().collect::<Vec<_>>(), vec!["notes"]);
        assert_eq!(registry.resolve("notes").await.unwrap(), sticky_notes::FACTORY);
        assert_eq!(old.calls(), 0);
        assert_eq!(new.calls(), 1);
    }

    #[tokio::test]
    async fn test_loader_failure_names_remote() {
        let loader = FixedLoader::failing(RemoteLoadError::MissingExport {
            expose: "./App".to_string(),
        });
        let mut registry = RemoteRegistry::new();
        registry.register("tea-tracker", "./App", loader);

        match registry.resolve("tea-tracker").await {
            Err(FederationError::RemoteLoad { remote, source }) => {
                assert_eq!(remote, "tea-tracker");
                assert!(matches!(source, RemoteLoadError::MissingExport { .. }));
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_resolve_future_outlives_registry_borrow() {
        let mut registry = RemoteRegistry::new();
        registry.register("tea-tracker", "./App", FixedLoader::ok(tea_tracker::FACTORY));
        let pending = registry.resolve("tea-tracker");
        drop(registry);
        let handle = tokio::spawn(pending);
        assert_eq!(handle.await.unwrap().unwrap(), tea_tracker::FACTORY);
    }

    #[tokio::test]
    async fn test_concurrent_resolves_are_independent() {
        let loader = FixedLoader::ok(tea_tracker::FACTORY);
        let mut registry = RemoteRegistry::new();
        registry.register("tea-tracker", "./App", loader.clone());

        let first = registry.resolve("tea-tracker");
        let second = registry.resolve("tea-tracker");
        let (first, second) = futures::join!(first, second);
        assert_eq!(first.unwrap(), tea_tracker::FACTORY);
        assert_eq!(second.unwrap(), tea_tracker::FACTORY);
        assert_eq!(loader.calls(), 2);
    }
}
