//! # Navigation
//!
//! The push/pop stack behind every screen change.
//!
//! ```text
//! NavigationCoordinator
//! ├── path: NavigationPath        // [BasicEnums, EnumDetail(DayOfWeek)]
//! │                               //                 ^ top = visible screen
//! └── current_route: Route        // last route pushed, Home after a reset
//! ```
//!
//! `current_route` follows pushes and resets only. `go_back()` leaves it
//! untouched, so after a pop it can name a route that is no longer on the
//! path. Renderers should ask for [`NavigationCoordinator::visible_route`],
//! which is always derived from the path.

use log::debug;

use crate::core::route::Route;

/// Ordered stack of pushed routes. The last element is the top.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationPath {
    routes: Vec<Route>,
}

impl NavigationPath {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, route: Route) {
        self.routes.push(route);
    }

    /// Pops the top route. Popping an empty path is a no-op.
    pub fn remove_last(&mut self) -> Option<Route> {
        self.routes.pop()
    }

    pub fn reset(&mut self) {
        self.routes.clear();
    }

    /// Swaps in a whole new stack at once.
    pub fn replace(&mut self, routes: Vec<Route>) {
        self.routes = routes;
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub fn last(&self) -> Option<&Route> {
        self.routes.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Route> {
        self.routes.iter()
    }

    pub fn as_slice(&self) -> &[Route] {
        &self.routes
    }
}

impl From<Vec<Route>> for NavigationPath {
    fn from(routes: Vec<Route>) -> Self {
        Self { routes }
    }
}

impl<'a> IntoIterator for &'a NavigationPath {
    type Item = &'a Route;
    type IntoIter = std::slice::Iter<'a, Route>;

    fn into_iter(self) -> Self::IntoIter {
        self.routes.iter()
    }
}

/// Owner of the navigation path and the only way to change it.
#[derive(Debug, Clone, Default)]
pub struct NavigationCoordinator {
    path: NavigationPath,
    current_route: Route,
}

impl NavigationCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pushes `route`. Pushing the same route twice stacks it twice.
    pub fn navigate(&mut self, route: Route) {
        self.path.append(route);
        self.current_route = route;
        debug!("navigate -> {:?} (depth {})", route, self.path.len());
    }

    /// Pops one level. Does not touch `current_route`.
    pub fn go_back(&mut self) {
        if !self.path.is_empty() {
            let popped = self.path.remove_last();
            debug!("go_back popped {:?} (depth {})", popped, self.path.len());
        }
    }

    pub fn go_to_root(&mut self) {
        self.path.reset();
        self.current_route = Route::Home;
        debug!("go_to_root");
    }

    /// Replaces the whole path in one step. An empty `routes` clears the
    /// path but keeps `current_route`.
    pub fn navigate_to_path(&mut self, routes: Vec<Route>) {
        if let Some(last) = routes.last() {
            self.current_route = *last;
        }
        self.path.replace(routes);
        debug!("navigate_to_path (depth {})", self.path.len());
    }

    pub fn path(&self) -> &NavigationPath {
        &self.path
    }

    /// Last route pushed (or `Home`). May be stale after `go_back()`.
    pub fn current_route(&self) -> Route {
        self.current_route
    }

    /// Route on top of the stack, `Home` when the stack is empty.
    pub fn visible_route(&self) -> Route {
        self.path.last().copied().unwrap_or(Route::Home)
    }

    pub fn depth(&self) -> usize {
        self.path.len()
    }

    pub fn can_go_back(&self) -> bool {
        !self.path.is_empty()
    }

    /// `Home` followed by every pushed route.
    pub fn breadcrumbs(&self) -> Vec<Route> {
        std::iter::once(Route::Home)
            .chain(self.path.iter().copied())
            .collect()
    }
}
