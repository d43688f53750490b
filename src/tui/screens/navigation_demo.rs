use crate::core::action::Action;
use crate::core::route::{EnumCategory, Route};
use crate::core::state::App;
use crate::tui::screens::{Entry, Screen, Section};

/// Two levels deep in one step.
pub fn multi_hop_path() -> Vec<Route> {
    vec![Route::BasicEnums, Route::EnumDetail(EnumCategory::DayOfWeek)]
}

pub fn screen(app: &App) -> Screen {
    let nav = &app.navigation;
    let breadcrumbs = nav
        .breadcrumbs()
        .iter()
        .map(|r| r.title())
        .collect::<Vec<_>>()
        .join(" › ");

    let path_info = vec![
        format!("Current route: {}", nav.current_route().title()),
        format!("Visible route: {}", nav.visible_route().title()),
        format!("Depth:         {}", nav.depth()),
        format!(
            "Can go back:   {}",
            if nav.can_go_back() { "yes" } else { "no" }
        ),
        format!("Path:          {breadcrumbs}"),
    ];

    let pushes = EnumCategory::ALL
        .into_iter()
        .map(|category| Entry::link(Route::EnumDetail(category)).detail("push"));

    Screen::new(Route::NavigationDemo)
        .section(Section::text(
            "Route stack",
            [
                "Every screen is a Route value on a stack. Enter pushes,",
                "Esc pops, h clears the stack. The entries below drive the",
                "coordinator directly.",
            ],
        ))
        .section(Section::text("Path information", path_info))
        .section(Section::text(
            "Note",
            [
                "Current route tracks the last push and is not rewound by Back,",
                "so after popping it can name a screen that is no longer shown.",
            ],
        ))
        .entries(pushes)
        .entry(
            Entry::new("⤷ Multi-hop path", Action::NavigateToPath(multi_hop_path()))
                .detail("Basic Enums › Days of the Week"),
        )
        .entry(Entry::new("⌂ Go to root", Action::Root).detail("clear the stack"))
        .entry(Entry::new("← Back", Action::Back).detail("pop one level"))
        .entry(Entry::link(Route::Exercises).detail("push"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::update;
    use crate::test_support::test_app;

    #[test]
    fn test_path_info_reflects_coordinator() {
        let mut app = test_app();
        update(&mut app, Action::Navigate(Route::NavigationDemo));
        let screen = screen(&app);
        let info = &screen.sections[1].lines;
        assert_eq!(info[0], "Current route: Navigation Demo");
        assert_eq!(info[2], "Depth:         1");
        assert_eq!(info[3], "Can go back:   yes");
        assert_eq!(info[4], "Path:          Home › Navigation Demo");
    }

    #[test]
    fn test_stale_current_route_is_visible_after_back() {
        let mut app = test_app();
        update(&mut app, Action::Navigate(Route::NavigationDemo));
        update(&mut app, Action::Navigate(Route::Exercises));
        update(&mut app, Action::Back);
        let screen = screen(&app);
        let info = &screen.sections[1].lines;
        assert_eq!(info[0], "Current route: Exercises");
        assert_eq!(info[1], "Visible route: Navigation Demo");
    }

    #[test]
    fn test_command_entries() {
        let screen = screen(&test_app());
        let actions: Vec<&Action> = screen.entries.iter().map(|e| &e.action).collect();
        assert!(actions.contains(&&Action::Root));
        assert!(actions.contains(&&Action::Back));
        assert!(actions.contains(&&Action::NavigateToPath(multi_hop_path())));
        assert_eq!(screen.entries.len(), EnumCategory::ALL.len() + 4);
    }
}
