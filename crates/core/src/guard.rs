//! Authentication-gated navigation.
//!
//! Routes carry a [`RouteMeta`] saying whether they need a logged-in
//! session. [`before_each`] is consulted before entering a route and either
//! lets navigation proceed or redirects to [`LOGIN_PATH`].

use tracing::debug;

use crate::session::SessionStore;
use crate::storage::KeyValueStore;

/// Where unauthenticated visitors are sent.
pub const LOGIN_PATH: &str = "/login";

/// Per-route flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RouteMeta {
    /// Entering this route requires a logged-in session.
    pub requires_auth: bool,
}

/// A named route pattern. Segments starting with `:` capture a parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    /// Path pattern, e.g. `/products/:id`.
    pub path: String,
    /// Route name.
    pub name: String,
    /// Route flags.
    pub meta: RouteMeta,
}

impl Route {
    /// Create a public route.
    #[must_use]
    pub fn new(path: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            meta: RouteMeta::default(),
        }
    }

    /// Mark the route as requiring authentication.
    #[must_use]
    pub fn requires_auth(mut self) -> Self {
        self.meta.requires_auth = true;
        self
    }

    fn match_path(&self, path: &str) -> Option<Vec<(String, String)>> {
        let mut pattern = segments(&self.path);
        let mut actual = segments(path);
        let mut params = Vec::new();

        loop {
            match (pattern.next(), actual.next()) {
                (None, None) => return Some(params),
                (Some(expected), Some(got)) => {
                    if let Some(name) = expected.strip_prefix(':') {
                        params.push((name.to_owned(), got.to_owned()));
                    } else if expected != got {
                        return None;
                    }
                }
                _ => return None,
            }
        }
    }
}

/// Outcome of a navigation guard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    /// Enter the requested route.
    Proceed,
    /// Go somewhere else instead.
    Redirect(String),
}

/// Decide whether `route` may be entered with the given session.
pub fn before_each<S: KeyValueStore>(route: &Route, session: &SessionStore<S>) -> Navigation {
    if route.meta.requires_auth && !session.is_logged_in() {
        debug!(route = %route.name, "Redirecting unauthenticated navigation to login");
        Navigation::Redirect(LOGIN_PATH.to_owned())
    } else {
        Navigation::Proceed
    }
}

/// A route matched against a concrete path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch<'a> {
    /// The matched route.
    pub route: &'a Route,
    /// Captured `:param` values in pattern order.
    pub params: Vec<(String, String)>,
}

impl RouteMatch<'_> {
    /// Value captured for the parameter `name`.
    #[must_use]
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }
}

/// Ordered set of routes; the first matching pattern wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    /// Create a table from routes in priority order.
    #[must_use]
    pub const fn new(routes: Vec<Route>) -> Self {
        Self { routes }
    }

    /// All routes in priority order.
    #[must_use]
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Match `path`, ignoring any query string or fragment and empty segments.
    #[must_use]
    pub fn resolve(&self, path: &str) -> Option<RouteMatch<'_>> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        self.routes.iter().find_map(|route| {
            route
                .match_path(path)
                .map(|params| RouteMatch { route, params })
        })
    }
}

fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}
