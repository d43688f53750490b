use crate::core::route::Route;
use crate::tui::screens::{Entry, Screen, Section};

/// Menu order and one-line descriptions of the top-level screens.
const MENU: [(Route, &str); 6] = [
    (Route::BasicEnums, "Enum fundamentals"),
    (Route::AssociatedValueEnums, "Enums that carry data"),
    (Route::SwitchExamples, "Extracting values with match"),
    (Route::CodeRepresentations, "Enums as codes and identifiers"),
    (Route::NavigationDemo, "The route stack behind this app"),
    (Route::Exercises, "Practice for students"),
];

pub fn screen() -> Screen {
    let version = format!("v{}", env!("CARGO_PKG_VERSION"));
    Screen::new(Route::Home)
        .section(Section::text(
            "Enums & Navigation",
            [
                "Enums with raw values, enums with associated values, and a",
                "push/pop navigation stack built from a Route enum.",
                "",
                version.as_str(),
            ],
        ))
        .entries(
            MENU.iter()
                .map(|(route, description)| Entry::link(*route).detail(*description)),
        )
}
