use crate::core::models::{ConnectionStatus, DayOfWeek, Priority};
use crate::core::route::{EnumCategory, Route};
use crate::tui::screens::{Entry, Screen, Section};

pub fn screen() -> Screen {
    let days = DayOfWeek::ALL.iter().map(|day| {
        let kind = if day.is_weekend() { "weekend" } else { "weekday" };
        format!("DayOfWeek::{:<10} = {:?}  ({kind})", format!("{day:?}"), day.raw_value())
    });

    let priorities = Priority::ALL.iter().map(|p| {
        format!(
            "Priority::{:<7} = {}  {} [{}]",
            format!("{p:?}"),
            p.raw_value(),
            p.label(),
            p.color_name()
        )
    });

    let statuses = ConnectionStatus::ALL.iter().map(|s| {
        format!(
            "ConnectionStatus::{:<13} → {:<14} next: {:?}",
            format!("{s:?}"),
            s.display_text(),
            s.next()
        )
    });

    Screen::new(Route::BasicEnums)
        .section(Section::text(
            "What is an enum?",
            [
                "An enum defines a closed set of related values.",
                "Each variant can map to a raw value (a string or a number),",
                "and methods on the enum compute properties from the variant.",
            ],
        ))
        .section(Section::text("String raw values", days))
        .section(Section::text("Integer raw values", priorities))
        .section(Section::text("Plain variants", statuses))
        .entries(
            [
                EnumCategory::DayOfWeek,
                EnumCategory::Priority,
                EnumCategory::Connection,
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
    fn test_lists_every_day_and_flags_weekend() {
        let screen = screen();
        let days = &screen.sections[1];
        assert_eq!(days.lines.len(), 7);
        assert!(days.lines[5].contains("Saturday"));
        assert!(days.lines[5].contains("weekend"));
        assert!(days.lines[0].contains("weekday"));
    }

    #[test]
    fn test_links_to_basic_enum_details() {
        let screen = screen();
        assert_eq!(screen.entries.len(), 3);
        assert_eq!(screen.entries[1].detail.as_deref(), Some("Priority"));
    }
}
