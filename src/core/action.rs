//! # Actions
//!
//! Everything that can happen in the app becomes an `Action`.
//! User presses Enter on a menu entry? That's `Action::Navigate(route)`.
//! User presses Esc? That's `Action::Back`.
//!
//! The `update()` function takes the current state and an action,
//! mutates the state, and returns an `Effect` for the event loop to carry
//! out. No I/O happens here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! This makes everything testable: apply actions, assert on the state.
//! And debuggable: every action is logged, so a session can be replayed.

use log::{debug, info};

use crate::core::route::{EnumCategory, Route};
use crate::core::state::App;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Push a route.
    Navigate(Route),
    /// Pop one level.
    Back,
    /// Clear the path.
    Root,
    /// Replace the whole path in one step.
    NavigateToPath(Vec<Route>),
    /// Mark an exercise done, or undo it.
    ToggleExercise(u32),
    /// Show the next sample value on an enum detail screen.
    CycleSample(EnumCategory),
    Quit,
}

/// What the event loop should do after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: {:?}", action);
    match action {
        Action::Navigate(route) => {
            info!("Navigate to {:?}", route);
            app.navigation.navigate(route);
            app.status_message = route.title();
            Effect::None
        }
        Action::Back => {
            if app.navigation.can_go_back() {
                app.navigation.go_back();
                info!("Back to {:?}", app.visible_route());
                app.status_message = format!("Back to {}", app.visible_route().title());
            } else {
                debug!("Back ignored: already at root");
                app.status_message = String::from("Already at Home");
            }
            Effect::None
        }
        Action::Root => {
            info!("Return to root from depth {}", app.navigation.depth());
            app.navigation.go_to_root();
            app.status_message = String::from("Home");
            Effect::None
        }
        Action::NavigateToPath(routes) => {
            info!("Jump to path {:?}", routes);
            app.navigation.navigate_to_path(routes);
            app.status_message = format!("Jumped to {}", app.visible_route().title());
            Effect::None
        }
        Action::ToggleExercise(id) => {
            if app.completed_exercises.remove(&id) {
                info!("Exercise {} marked incomplete", id);
                app.status_message = format!("Exercise {id} reopened");
            } else {
                app.completed_exercises.insert(id);
                info!("Exercise {} marked complete", id);
                app.status_message = format!("Exercise {id} completed");
            }
            Effect::None
        }
        Action::CycleSample(category) => {
            let cursor = app.sample_cursors.entry(category).or_insert(0);
            *cursor = cursor.wrapping_add(1);
            Effect::None
        }
        Action::Quit => {
            info!("Quit requested");
            Effect::Quit
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_app;

    #[test]
    fn test_navigate_updates_status() {
        let mut app = test_app();
        let effect = update(&mut app, Action::Navigate(Route::Exercises));
        assert_eq!(effect, Effect::None);
        assert_eq!(app.visible_route(), Route::Exercises);
        assert_eq!(app.status_message, "Exercises");
    }

    #[test]
    fn test_back_at_root_is_harmless() {
        let mut app = test_app();
        let effect = update(&mut app, Action::Back);
        assert_eq!(effect, Effect::None);
        assert_eq!(app.navigation.depth(), 0);
        assert_eq!(app.status_message, "Already at Home");
    }

    #[test]
    fn test_back_reports_new_top() {
        let mut app = test_app();
        update(&mut app, Action::Navigate(Route::BasicEnums));
        update(
            &mut app,
            Action::Navigate(Route::EnumDetail(EnumCategory::DayOfWeek)),
        );
        update(&mut app, Action::Back);
        assert_eq!(app.status_message, "Back to Basic Enums");
        assert_eq!(
            app.navigation.current_route(),
            Route::EnumDetail(EnumCategory::DayOfWeek)
        );
    }

    #[test]
    fn test_root_clears_path() {
        let mut app = test_app();
        update(&mut app, Action::Navigate(Route::NavigationDemo));
        update(&mut app, Action::Navigate(Route::Exercises));
        update(&mut app, Action::Root);
        assert!(app.navigation.path().is_empty());
        assert_eq!(app.navigation.current_route(), Route::Home);
    }

    #[test]
    fn test_navigate_to_path() {
        let mut app = test_app();
        let routes = vec![Route::BasicEnums, Route::EnumDetail(EnumCategory::DayOfWeek)];
        update(&mut app, Action::NavigateToPath(routes.clone()));
        assert_eq!(app.navigation.path().as_slice(), routes.as_slice());
        assert_eq!(app.status_message, "Jumped to Days of the Week");
    }

    #[test]
    fn test_toggle_exercise_twice_restores() {
        let mut app = test_app();
        update(&mut app, Action::ToggleExercise(3));
        assert!(app.is_completed(3));
        assert_eq!(app.status_message, "Exercise 3 completed");
        update(&mut app, Action::ToggleExercise(3));
        assert!(!app.is_completed(3));
        assert_eq!(app.status_message, "Exercise 3 reopened");
    }

    #[test]
    fn test_cycle_sample_is_per_category() {
        let mut app = test_app();
        update(&mut app, Action::CycleSample(EnumCategory::Priority));
        update(&mut app, Action::CycleSample(EnumCategory::Priority));
        update(&mut app, Action::CycleSample(EnumCategory::HttpStatus));
        assert_eq!(app.sample_cursor(EnumCategory::Priority), 2);
        assert_eq!(app.sample_cursor(EnumCategory::HttpStatus), 1);
        assert_eq!(app.sample_cursor(EnumCategory::DayOfWeek), 0);
    }

    #[test]
    fn test_quit_effect() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }
}
