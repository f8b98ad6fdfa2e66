use crate::components::{home, ComponentFactory};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteTarget {
    /// Mounted directly from a constructor linked into the shell.
    Local(ComponentFactory),
    /// Resolved at navigation time through the remote registry.
    Remote { remote: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub path: String,
    pub target: RouteTarget,
}

impl Route {
    pub fn local(path: &str, factory: ComponentFactory) -> Self {
        Self {
            path: path.to_string(),
            target: RouteTarget::Local(factory),
        }
    }

    pub fn remote(path: &str, remote: &str) -> Self {
        Self {
            path: path.to_string(),
            target: RouteTarget::Remote {
                remote: remote.to_string(),
            },
        }
    }
}

/// Ordered, read-only list of routes. The first full-path match wins.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    pub fn new(routes: Vec<Route>) -> Self {
        Self { routes }
    }

    pub fn lookup(&self, path: &str) -> Option<&Route> {
        let path = normalize_path(path);
        self.routes.iter().find(|r| r.path == path)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Route> {
        self.routes.iter()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

/// Strip surrounding whitespace and slashes: `/tea-tracker/` → `tea-tracker`.
pub fn normalize_path(path: &str) -> &str {
    path.trim().trim_matches('/')
}

/// The shell's routes: a local home page and one route per hosted remote.
pub fn default_routes() -> RouteTable {
    RouteTable::new(vec![
        Route::local("home-page", home::FACTORY),
        Route::remote("tea-tracker", "tea-tracker"),
        Route::remote("sticky-notes", "sticky-notes"),
    ])
}
