//! # TitleBar Component
//!
//! Top bar showing where the user is in the navigation stack.
//!
//! ## Responsibilities
//!
//! - Display the app name
//! - Display the breadcrumb trail (`Home › Basic Enums › Days of the Week`),
//!   or only the visible screen's title when breadcrumbs are turned off
//! - Drop the oldest crumbs first when the trail is wider than the terminal
//!
//! ## Design Decisions
//!
//! ### Stateless Component
//!
//! TitleBar is purely presentational. It receives all data as props and has
//! no internal state:
//!
//! ```rust,ignore
//! let mut title_bar = TitleBar::new(crumbs, config.show_breadcrumbs);
//! title_bar.render(frame, area);
//! ```
//!
//! ### Truncation
//!
//! The trail is trimmed from the left. The visible screen is always the last
//! crumb, so it survives the longest.

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

const APP_NAME: &str = "EnumNav";
const SEPARATOR: &str = " › ";
const ELLIPSIS: &str = "…";

/// Top bar component showing the navigation trail.
///
/// # Props
///
/// - `crumbs`: titles from the root to the visible screen, root first
/// - `show_breadcrumbs`: whether to show the whole trail or just the last crumb
pub struct TitleBar {
    pub crumbs: Vec<String>,
    pub show_breadcrumbs: bool,
}

impl TitleBar {
    pub fn new(crumbs: Vec<String>, show_breadcrumbs: bool) -> Self {
        Self {
            crumbs,
            show_breadcrumbs,
        }
    }

    /// The trail text that fits in `max_width` columns.
    pub fn trail(&self, max_width: usize) -> String {
        if !self.show_breadcrumbs {
            return self.crumbs.last().cloned().unwrap_or_default();
        }

        let full = self.crumbs.join(SEPARATOR);
        if full.width() <= max_width {
            return full;
        }

        // Drop crumbs from the front until the rest fits behind an ellipsis
        for start in 1..self.crumbs.len() {
            let candidate = format!(
                "{ELLIPSIS}{SEPARATOR}{}",
                self.crumbs[start..].join(SEPARATOR)
            );
            if candidate.width() <= max_width {
                return candidate;
            }
        }

        self.crumbs.last().cloned().unwrap_or_default()
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let prefix = format!("{APP_NAME} | ");
        let available = (area.width as usize).saturating_sub(prefix.width());
        let line = Line::from(vec![
            Span::styled(
                prefix,
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(self.trail(available)),
        ]);
        frame.render_widget(line, area);
    }
}
