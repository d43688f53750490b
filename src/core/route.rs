//! # Routes
//!
//! The closed set of places a user can be. Every screen in the app is reached
//! by pushing one of these values onto the navigation path.
//!
//! ```text
//! Route
//! ├── Home
//! ├── BasicEnums / AssociatedValueEnums / SwitchExamples
//! ├── CodeRepresentations / NavigationDemo / Exercises
//! ├── EnumDetail(EnumCategory)     // one of six demo enums
//! └── ExerciseDetail(u32)          // exercise id, unchecked
//! ```
//!
//! Equality is structural: `ExerciseDetail(1) != ExerciseDetail(2)`, and both
//! can sit on the path at the same time.

use std::fmt;

/// A navigable destination.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Route {
    #[default]
    Home,
    BasicEnums,
    AssociatedValueEnums,
    SwitchExamples,
    CodeRepresentations,
    NavigationDemo,
    Exercises,
    EnumDetail(EnumCategory),
    /// Exercise id. Ids without content resolve to a placeholder screen.
    ExerciseDetail(u32),
}

impl Route {
    /// Payload-free routes, in menu order.
    pub const BASIC: [Route; 7] = [
        Route::Home,
        Route::BasicEnums,
        Route::AssociatedValueEnums,
        Route::SwitchExamples,
        Route::CodeRepresentations,
        Route::NavigationDemo,
        Route::Exercises,
    ];

    pub fn title(&self) -> String {
        match self {
            Route::Home => "Home".to_string(),
            Route::BasicEnums => "Basic Enums".to_string(),
            Route::AssociatedValueEnums => "Associated Values".to_string(),
            Route::SwitchExamples => "Switch & If Case".to_string(),
            Route::CodeRepresentations => "Codes & Representations".to_string(),
            Route::NavigationDemo => "Navigation Demo".to_string(),
            Route::Exercises => "Exercises".to_string(),
            Route::EnumDetail(category) => category.display_name().to_string(),
            Route::ExerciseDetail(id) => format!("Exercise {id}"),
        }
    }

    /// Single-glyph icon shown next to the title.
    pub fn icon(&self) -> &'static str {
        match self {
            Route::Home => "⌂",
            Route::BasicEnums => "≡",
            Route::AssociatedValueEnums => "▤",
            Route::SwitchExamples => "⑂",
            Route::CodeRepresentations => "▥",
            Route::NavigationDemo => "⌖",
            Route::Exercises => "✎",
            Route::EnumDetail(_) => "ⓘ",
            Route::ExerciseDetail(_) => "✐",
        }
    }

    pub fn is_parameterized(&self) -> bool {
        matches!(self, Route::EnumDetail(_) | Route::ExerciseDetail(_))
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}

/// The demo enums that have a detail screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnumCategory {
    DayOfWeek,
    Priority,
    Connection,
    Measurement,
    Notification,
    HttpStatus,
}

impl EnumCategory {
    pub const ALL: [EnumCategory; 6] = [
        EnumCategory::DayOfWeek,
        EnumCategory::Priority,
        EnumCategory::Connection,
        EnumCategory::Measurement,
        EnumCategory::Notification,
        EnumCategory::HttpStatus,
    ];

    /// Rust type name of the demonstrated enum.
    pub fn type_name(&self) -> &'static str {
        match self {
            EnumCategory::DayOfWeek => "DayOfWeek",
            EnumCategory::Priority => "Priority",
            EnumCategory::Connection => "ConnectionStatus",
            EnumCategory::Measurement => "Measurement",
            EnumCategory::Notification => "NotificationKind",
            EnumCategory::HttpStatus => "HttpStatusCode",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            EnumCategory::DayOfWeek => "Days of the Week",
            EnumCategory::Priority => "Priorities",
            EnumCategory::Connection => "Connection Status",
            EnumCategory::Measurement => "Measurements",
            EnumCategory::Notification => "Notifications",
            EnumCategory::HttpStatus => "HTTP Status Codes",
        }
    }
}
