use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{HelpBar, ScreenView, TitleBar};
use crate::tui::screens::Screen;

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

pub fn draw_ui(
    frame: &mut Frame,
    app: &App,
    tui: &mut TuiState,
    screen: &Screen,
    config: &ResolvedConfig,
) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(0), Length(1)]);
    let [title_area, main_area, help_area] = layout.areas(frame.area());

    // Title bar
    let crumbs = app
        .navigation
        .breadcrumbs()
        .iter()
        .map(|route| route.title())
        .collect();
    TitleBar::new(crumbs, config.show_breadcrumbs).render(frame, title_area);

    // Visible screen
    ScreenView::new(screen, &mut tui.screen_view).render(frame, main_area);

    // Help bar
    let mut help_bar = HelpBar {
        status_message: app.status_message.clone(),
        show_help: config.show_help,
        can_go_back: app.navigation.can_go_back(),
        has_entries: !screen.entries.is_empty(),
        has_secondary: screen.entries.iter().any(|e| e.secondary.is_some()),
    };
    help_bar.render(frame, help_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::{Action, update};
    use crate::core::route::{EnumCategory, Route};
    use crate::test_support::test_app;
    use crate::tui::screens::resolve;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn draw(app: &App, config: &ResolvedConfig) -> String {
        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut tui = TuiState::new();
        let screen = resolve(app.visible_route(), app);
        tui.sync(app, &screen);
        terminal
            .draw(|f| {
                draw_ui(f, app, &mut tui, &screen, config);
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_draw_ui() {
        let app = test_app();
        let text = draw(&app, &ResolvedConfig::default());
        assert!(text.contains("EnumNav | Home"));
        assert!(text.contains("Welcome!"));
        assert!(text.contains("Basic Enums"));
    }

    #[test]
    fn test_draw_ui_after_navigation_shows_trail() {
        let mut app = test_app();
        update(&mut app, Action::Navigate(Route::BasicEnums));
        update(
            &mut app,
            Action::Navigate(Route::EnumDetail(EnumCategory::Priority)),
        );
        let text = draw(&app, &ResolvedConfig::default());
        assert!(text.contains("Home › Basic Enums › Priorities"));
        assert!(text.contains("Esc back"));
    }

    #[test]
    fn test_draw_ui_without_breadcrumbs_or_help() {
        let mut app = test_app();
        update(&mut app, Action::Navigate(Route::Exercises));
        let config = ResolvedConfig {
            show_breadcrumbs: false,
            show_help: false,
            ..ResolvedConfig::default()
        };
        let text = draw(&app, &config);
        assert!(text.contains("EnumNav | Exercises"));
        assert!(!text.contains("Home › Exercises"));
        assert!(!text.contains("q quit"));
    }
}
