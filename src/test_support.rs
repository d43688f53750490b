//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::core::state::App;

/// Creates a fresh App sitting at Home with no progress.
pub fn test_app() -> App {
    App::new()
}
