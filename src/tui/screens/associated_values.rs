use crate::core::models::{
    HttpStatusCode, Measurement, NotificationKind, OperationError, OperationResult,
};
use crate::core::route::{EnumCategory, Route};
use crate::tui::screens::{Entry, Screen, Section};

fn describe_result(result: &OperationResult<Vec<&str>>) -> String {
    match result {
        OperationResult::Success(users) => format!("Success: {}", users.join(", ")),
        OperationResult::Failure(error) => format!("Failure: {}", error.description()),
    }
}

pub fn screen() -> Screen {
    let measurements = Measurement::samples().into_iter().map(|m| {
        format!(
            "{:<12} {:<10} = {}",
            m.kind(),
            m.description(),
            m.alternative_unit()
        )
    });

    let notifications = NotificationKind::samples()
        .into_iter()
        .map(|n| n.summary())
        .collect::<Vec<_>>();

    let results: Vec<OperationResult<Vec<&str>>> = vec![
        OperationResult::Success(vec!["Alice", "Bob"]),
        OperationResult::Failure(OperationError::Network("timeout".to_string())),
        OperationResult::Failure(OperationError::Validation {
            field: "email".to_string(),
            message: "invalid format".to_string(),
        }),
        OperationResult::Failure(OperationError::Unknown),
    ];

    let statuses = HttpStatusCode::ALL.iter().map(|s| {
        format!(
            "{} {:<22} {}",
            s.code(),
            s.reason(),
            s.category().description()
        )
    });

    Screen::new(Route::AssociatedValueEnums)
        .section(Section::text(
            "Associated values",
            [
                "A variant can carry extra data. Different variants carry",
                "different types, and the payload is part of the value.",
            ],
        ))
        .section(Section::text("Measurement", measurements))
        .section(Section::text("NotificationKind", notifications))
        .section(Section::text(
            "OperationResult<T>",
            results.iter().map(describe_result),
        ))
        .section(Section::text("HttpStatusCode", statuses))
        .entries(
            [
                EnumCategory::Measurement,
                EnumCategory::Notification,
                EnumCategory::HttpStatus,
            ]
            .into_iter()
            .map(|category| {
                Entry::link(Route::EnumDetail(category)).detail(category.type_name())
            }),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_lines() {
        let screen = screen();
        let results = &screen.sections[3];
        assert_eq!(results.lines[0], "Success: Alice, Bob");
        assert_eq!(results.lines[1], "Failure: Network error: timeout");
        assert_eq!(results.lines[3], "Failure: Unknown error");
    }

    #[test]
    fn test_http_section_lists_all_codes() {
        let screen = screen();
        assert_eq!(screen.sections[4].lines.len(), HttpStatusCode::ALL.len());
        assert!(screen.sections[4].lines[5].starts_with("404 Not Found"));
    }
}
