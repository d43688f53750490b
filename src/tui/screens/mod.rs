//! # Screens
//!
//! The resolver: maps the visible [`Route`] to a [`Screen`], a plain
//! description of what to draw and which actions the screen offers.
//!
//! ```text
//! Route ──resolve()──▶ Screen
//!                      ├── title, icon
//!                      ├── sections: Vec<Section>   // scrollable body
//!                      └── entries: Vec<Entry>      // selectable, carry an Action
//! ```
//!
//! `resolve` is an exhaustive `match`, so a new `Route` variant does not
//! compile until it has a screen. Screens never fail: bad payloads (an
//! unknown exercise id) produce placeholder content.
//!
//! Screens are rebuilt on every frame from `&App`. They hold no state of
//! their own; selection and scroll live in `ScreenViewState`.

mod associated_values;
mod basic_enums;
mod code_representations;
mod enum_detail;
mod exercise_detail;
mod exercises;
mod home;
mod navigation_demo;
mod switch_examples;

use crate::core::action::Action;
use crate::core::route::Route;
use crate::core::state::App;

/// Everything needed to draw one route.
#[derive(Debug, Clone, PartialEq)]
pub struct Screen {
    pub title: String,
    pub icon: &'static str,
    pub sections: Vec<Section>,
    pub entries: Vec<Entry>,
}

impl Screen {
    pub fn new(route: Route) -> Self {
        Self {
            title: route.title(),
            icon: route.icon(),
            sections: Vec::new(),
            entries: Vec::new(),
        }
    }

    pub fn section(mut self, section: Section) -> Self {
        self.sections.push(section);
        self
    }

    pub fn entry(mut self, entry: Entry) -> Self {
        self.entries.push(entry);
        self
    }

    pub fn entries(mut self, entries: impl IntoIterator<Item = Entry>) -> Self {
        self.entries.extend(entries);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    Text,
    Code,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub heading: String,
    pub lines: Vec<String>,
    pub kind: SectionKind,
}

impl Section {
    pub fn text<I, S>(heading: impl Into<String>, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            heading: heading.into(),
            lines: lines.into_iter().map(Into::into).collect(),
            kind: SectionKind::Text,
        }
    }

    pub fn code(heading: impl Into<String>, code: &str) -> Self {
        Self {
            heading: heading.into(),
            lines: code.lines().map(str::to_string).collect(),
            kind: SectionKind::Code,
        }
    }
}

/// A selectable row. Enter triggers `action`, Space triggers `secondary`.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub label: String,
    pub detail: Option<String>,
    pub action: Action,
    pub secondary: Option<Action>,
}

impl Entry {
    pub fn new(label: impl Into<String>, action: Action) -> Self {
        Self {
            label: label.into(),
            detail: None,
            action,
            secondary: None,
        }
    }

    /// Entry that pushes `route`, labelled with its icon and title.
    pub fn link(route: Route) -> Self {
        Self::new(format!("{} {}", route.icon(), route.title()), Action::Navigate(route))
    }

    pub fn detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub fn secondary(mut self, action: Action) -> Self {
        self.secondary = Some(action);
        self
    }
}

/// Builds the screen for `route`.
pub fn resolve(route: Route, app: &App) -> Screen {
    match route {
        Route::Home => home::screen(),
        Route::BasicEnums => basic_enums::screen(),
        Route::AssociatedValueEnums => associated_values::screen(),
        Route::SwitchExamples => switch_examples::screen(),
        Route::CodeRepresentations => code_representations::screen(),
        Route::NavigationDemo => navigation_demo::screen(app),
        Route::Exercises => exercises::screen(app),
        Route::EnumDetail(category) => enum_detail::screen(category, app),
        Route::ExerciseDetail(id) => exercise_detail::screen(id, app),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::route::EnumCategory;
    use crate::test_support::test_app;

    fn all_routes() -> Vec<Route> {
        let mut routes: Vec<Route> = Route::BASIC.to_vec();
        routes.extend(EnumCategory::ALL.iter().map(|c| Route::EnumDetail(*c)));
        routes.extend((0..=7).map(Route::ExerciseDetail));
        routes
    }

    #[test]
    fn test_every_route_resolves_with_matching_title() {
        let app = test_app();
        for route in all_routes() {
            let screen = resolve(route, &app);
            assert_eq!(screen.title, route.title(), "title for {route:?}");
            assert_eq!(screen.icon, route.icon());
            assert!(!screen.sections.is_empty(), "{route:?} has no body");
        }
    }

    #[test]
    fn test_link_entry_navigates() {
        let entry = Entry::link(Route::Exercises);
        assert_eq!(entry.action, Action::Navigate(Route::Exercises));
        assert!(entry.label.ends_with("Exercises"));
        assert!(entry.secondary.is_none());
    }

    #[test]
    fn test_code_section_splits_lines() {
        let section = Section::code("Code", "enum A {\n    B,\n}");
        assert_eq!(section.kind, SectionKind::Code);
        assert_eq!(section.lines, vec!["enum A {", "    B,", "}"]);
    }
}
