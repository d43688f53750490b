use crate::core::action::Action;
use crate::core::models::{
    ConnectionStatus, DayOfWeek, HttpStatusCode, Measurement, NotificationKind, Priority,
};
use crate::core::route::{EnumCategory, Route};
use crate::core::state::App;
use crate::tui::screens::{Entry, Screen, Section};

fn description(category: EnumCategory) -> &'static str {
    match category {
        EnumCategory::DayOfWeek => {
            "A plain enum with a string raw value per day and a method that tells weekdays from weekends."
        }
        EnumCategory::Priority => {
            "An enum with integer discriminants. The numbers order the variants and convert back with from_raw."
        }
        EnumCategory::Connection => {
            "A state machine in miniature: four states with display text and a next() transition."
        }
        EnumCategory::Measurement => {
            "Each variant carries a different quantity. Methods convert the payload to another unit."
        }
        EnumCategory::Notification => {
            "Variants with several named fields, including a nested AlertLevel enum."
        }
        EnumCategory::HttpStatus => {
            "Integer discriminants that double as protocol codes, grouped into categories by range."
        }
    }
}

fn code(category: EnumCategory) -> &'static str {
    match category {
        EnumCategory::DayOfWeek => {
            "enum DayOfWeek {\n    Monday,\n    Tuesday,\n    // ...\n    Sunday,\n}\n\n\
             impl DayOfWeek {\n    fn is_weekend(&self) -> bool {\n        \
             matches!(self, DayOfWeek::Saturday | DayOfWeek::Sunday)\n    }\n}"
        }
        EnumCategory::Priority => {
            "enum Priority {\n    Low = 1,\n    Medium = 2,\n    High = 3,\n    Urgent = 4,\n}\n\n\
             let raw = Priority::High as u8; // 3"
        }
        EnumCategory::Connection => {
            "enum ConnectionStatus {\n    Disconnected,\n    Connecting,\n    Connected,\n    Error,\n}"
        }
        EnumCategory::Measurement => {
            "enum Measurement {\n    Distance { meters: f64 },\n    Weight { kilograms: f64 },\n    \
             Temperature { celsius: f64 },\n    Time { seconds: u32 },\n}"
        }
        EnumCategory::Notification => {
            "enum NotificationKind {\n    Message { from: String, content: String },\n    \
             Reminder { title: String, date: NaiveDate },\n    \
             Alert { level: AlertLevel, message: String },\n    \
             System { code: u32, info: String },\n}"
        }
        EnumCategory::HttpStatus => {
            "enum HttpStatusCode {\n    Ok = 200,\n    Created = 201,\n    BadRequest = 400,\n    \
             // ...\n    InternalServerError = 500,\n}\n\n\
             match code {\n    200..=299 => StatusCategory::Success,\n    // ...\n}"
        }
    }
}

fn notes(category: EnumCategory) -> &'static [&'static str] {
    match category {
        EnumCategory::DayOfWeek => &[
            "Raw values are returned from a match, not stored per variant",
            "An ALL constant lists the variants in order",
            "matches! keeps boolean checks on variants short",
        ],
        EnumCategory::Priority => &[
            "Explicit discriminants make `as u8` meaningful",
            "Deriving PartialOrd orders variants by declaration",
            "from_raw returns Option for numbers outside 1..=4",
        ],
        EnumCategory::Connection => &[
            "No raw value is needed when the variant itself is the data",
            "Transitions are a match from state to state",
        ],
        EnumCategory::Measurement => &[
            "The unit is encoded in the variant, so values cannot be mixed up",
            "Struct-like variants name their payload fields",
        ],
        EnumCategory::Notification => &[
            "Variants can hold owned data such as String and dates",
            "Nested enums keep related options together",
        ],
        EnumCategory::HttpStatus => &[
            "Range patterns classify codes without listing each one",
            "A wildcard arm covers codes outside every range",
        ],
    }
}

/// The sample picked by `cursor` and what the enum says about it.
fn sample(category: EnumCategory, cursor: usize) -> Vec<String> {
    match category {
        EnumCategory::DayOfWeek => {
            let day = DayOfWeek::ALL[cursor % DayOfWeek::ALL.len()];
            vec![
                format!("Selected: {day:?}"),
                format!("Raw value: {:?}", day.raw_value()),
                format!("Weekend? {}", if day.is_weekend() { "yes" } else { "no" }),
            ]
        }
        EnumCategory::Priority => {
            let priority = Priority::ALL[cursor % Priority::ALL.len()];
            vec![
                format!("Selected: {priority:?}"),
                format!("Value: {}", priority.raw_value()),
                format!("Label: {} ({})", priority.label(), priority.color_name()),
            ]
        }
        EnumCategory::Connection => {
            let status = ConnectionStatus::ALL[cursor % ConnectionStatus::ALL.len()];
            vec![
                format!("Current state: {}", status.display_text()),
                format!("Next state: {}", status.next().display_text()),
            ]
        }
        EnumCategory::Measurement => {
            let samples = Measurement::samples();
            let measurement = samples[cursor % samples.len()];
            vec![
                format!("Primary: {}", measurement.description()),
                format!("Alternative: {}", measurement.alternative_unit()),
            ]
        }
        EnumCategory::Notification => {
            let samples = NotificationKind::samples();
            let notification = &samples[cursor % samples.len()];
            vec![notification.summary()]
        }
        EnumCategory::HttpStatus => {
            let status = HttpStatusCode::ALL[cursor % HttpStatusCode::ALL.len()];
            vec![
                format!("Code: {} {}", status.code(), status.reason()),
                format!("Category: {}", status.category().description()),
            ]
        }
    }
}

pub fn screen(category: EnumCategory, app: &App) -> Screen {
    Screen::new(Route::EnumDetail(category))
        .section(Section::text(
            format!("Detailed analysis: {}", category.type_name()),
            [description(category)],
        ))
        .section(Section::code("Implementation", code(category)))
        .section(Section::text(
            "Interactive example",
            sample(category, app.sample_cursor(category)),
        ))
        .section(Section::text(
            "Implementation notes",
            notes(category).iter().map(|note| format!("• {note}")),
        ))
        .entry(Entry::new("↻ Next sample", Action::CycleSample(category)))
        .entry(Entry::new("← Back", Action::Back))
}
