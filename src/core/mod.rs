//! # Core Application Logic
//!
//! Routes, the navigation stack, and the demo data.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Route (destinations) │
//!                    │  • NavigationCoordinator│
//!                    │  • State + Action       │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`route`]: The `Route` enum, every destination
//! - [`navigation`]: `NavigationPath` and `NavigationCoordinator`
//! - [`state`]: The `App` struct, all session state in one place
//! - [`action`]: The `Action` enum and `update()`
//! - [`models`]: The enums the screens demonstrate
//! - [`config`]: Settings file, env vars and CLI overrides

pub mod action;
pub mod config;
pub mod models;
pub mod navigation;
pub mod route;
pub mod state;

pub use action::{Action, Effect, update};
pub use navigation::{NavigationCoordinator, NavigationPath};
pub use route::{EnumCategory, Route};
pub use state::App;
