//! # TUI Components
//!
//! Components in this directory follow two patterns:
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as fields built each frame:
//! - `TitleBar`: app name and the breadcrumb trail
//! - `HelpBar`: key hints and the status message
//!
//! ### Stateful Components (Event-Driven)
//!
//! - `ScreenView`: scrollable screen body plus the selectable entry list.
//!   Its `ScreenViewState` persists in `TuiState` and emits `ScreenEvent`s.
//!
//! Each component file contains its state types, event types, rendering
//! and tests.
//!
//! ```text
//! components/
//! ├── mod.rs          (this file)
//! ├── title_bar.rs    (Top bar with breadcrumbs)
//! ├── screen_view.rs  (Body + entries of the visible route)
//! └── help_bar.rs     (Bottom bar with key hints)
//! ```

mod help_bar;
mod screen_view;
mod title_bar;

pub use help_bar::HelpBar;
pub use screen_view::{ScreenEvent, ScreenView, ScreenViewState};
pub use title_bar::TitleBar;
