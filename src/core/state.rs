//! # Application State
//!
//! Core state for one UI session. Domain data only; presentation state
//! (selection, scroll offsets) lives in the `tui` module.
//!
//! ```text
//! App
//! ├── navigation: NavigationCoordinator   // path + current route
//! ├── completed_exercises: BTreeSet<u32>  // session-only progress
//! ├── sample_cursors: HashMap             // which sample each enum detail shows
//! └── status_message: String              // status bar text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! The `App` is created once in `tui::run` and passed by `&mut` to every
//! handler; there is no global.

use std::collections::{BTreeSet, HashMap};

use crate::core::navigation::NavigationCoordinator;
use crate::core::route::{EnumCategory, Route};

pub struct App {
    pub navigation: NavigationCoordinator,
    pub completed_exercises: BTreeSet<u32>,
    pub sample_cursors: HashMap<EnumCategory, usize>,
    pub status_message: String,
}

impl App {
    pub fn new() -> Self {
        Self {
            navigation: NavigationCoordinator::new(),
            completed_exercises: BTreeSet::new(),
            sample_cursors: HashMap::new(),
            status_message: String::from("Welcome!"),
        }
    }

    /// The route the resolver should render.
    pub fn visible_route(&self) -> Route {
        self.navigation.visible_route()
    }

    pub fn is_completed(&self, exercise_id: u32) -> bool {
        self.completed_exercises.contains(&exercise_id)
    }

    /// Index of the sample shown on a category's detail screen. Callers
    /// reduce it modulo their sample count.
    pub fn sample_cursor(&self, category: EnumCategory) -> usize {
        self.sample_cursors.get(&category).copied().unwrap_or(0)
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
