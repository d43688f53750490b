use crate::core::models::patterns::{
    analyze_http_status, categorize_http_response, check_if_alert, check_if_message,
    check_if_system, classify_temperature, extract_measurement, filter_message,
};
use crate::core::models::{HttpStatusCode, Measurement, NotificationKind};
use crate::core::route::{EnumCategory, Route};
use crate::tui::screens::{Entry, Screen, Section};

const MATCH_SNIPPET: &str = "match measurement {
    Measurement::Temperature { celsius } if celsius < 0.0 => \"below zero\",
    Measurement::Temperature { celsius } if celsius > 30.0 => \"hot\",
    Measurement::Temperature { .. } => \"mild\",
    _ => \"not a temperature\",
}";

pub fn screen() -> Screen {
    let http = HttpStatusCode::ALL
        .iter()
        .map(|s| format!("{} → {}", s.code(), analyze_http_status(*s)));

    let extraction = Measurement::samples()
        .iter()
        .map(extract_measurement)
        .collect::<Vec<_>>();

    let notifications = NotificationKind::samples();
    let if_let = notifications.iter().flat_map(|n| {
        [check_if_message(n), check_if_alert(n), check_if_system(n)]
            .into_iter()
            .filter(|line| !line.starts_with('❌'))
    });

    let temperatures = [-5.0, 22.5, 35.0]
        .into_iter()
        .map(|celsius| classify_temperature(&Measurement::Temperature { celsius }));
    let messages = [("Roberto", "See you later"), ("Ana", "Lunch?"), ("Ana", "Hello")]
        .into_iter()
        .map(|(from, content)| {
            filter_message(&NotificationKind::Message {
                from: from.to_string(),
                content: content.to_string(),
            })
        });
    let categories = [
        HttpStatusCode::Ok,
        HttpStatusCode::Unauthorized,
        HttpStatusCode::InternalServerError,
    ]
    .into_iter()
    .map(categorize_http_response);
    let guards = temperatures.chain(messages).chain(categories);

    Screen::new(Route::SwitchExamples)
        .section(Section::text(
            "Extracting values",
            [
                "match must cover every variant; if let checks a single one.",
                "Both bind the associated values of the variant they match.",
            ],
        ))
        .section(Section::text("1. match on plain variants", http))
        .section(Section::text("2. match with associated values", extraction))
        .section(Section::text("3. if let for one variant", if_let))
        .section(Section::text("4. Match guards", guards))
        .section(Section::code("Guard syntax", MATCH_SNIPPET))
        .entry(
            Entry::link(Route::EnumDetail(EnumCategory::Measurement))
                .detail("Try matching on measurements"),
        )
        .entry(
            Entry::link(Route::EnumDetail(EnumCategory::Notification))
                .detail("Try if let on notifications"),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_if_let_section_only_shows_hits() {
        let screen = screen();
        let if_let = &screen.sections[3];
        // one matching check per sample notification, except reminders
        assert_eq!(if_let.lines.len(), 3);
        assert!(if_let.lines.iter().all(|l| !l.starts_with('❌')));
    }

    #[test]
    fn test_guard_section() {
        let screen = screen();
        let guards = &screen.sections[4].lines;
        assert_eq!(guards[0], "Below zero (-5°C)");
        assert_eq!(guards[1], "Mild (22.5°C)");
        assert_eq!(guards[2], "Hot (35°C)");
        assert_eq!(guards[3], "Message from a long name: Roberto");
        assert_eq!(guards[4], "Question from Ana");
    }
}
