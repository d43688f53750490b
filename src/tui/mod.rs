//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the visible
//! route and translates keyboard events into `core::Action` values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Flow
//!
//! ```text
//! crossterm Event ─translate()─▶ TuiEvent ─dispatch()─▶ Option<Action> ─update()─▶ App
//!                                              │
//!                                              └─ cursor / scroll stay in ScreenViewState
//! ```
//!
//! ## Redraw Strategy
//!
//! Nothing animates, so the loop only redraws after an event (including a
//! resize). While idle it sleeps for up to `tick_rate_ms`.

mod component;
mod components;
mod event;
pub mod screens;
mod ui;

use log::{debug, info};
use std::io::stdout;
use std::time::Duration;

use crossterm::cursor::{Hide, Show};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::{ScreenEvent, ScreenViewState};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};
use crate::tui::screens::Screen;

/// TUI-specific presentation state (not part of core business logic)
#[derive(Default)]
pub struct TuiState {
    pub screen_view: ScreenViewState,
}

impl TuiState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keeps the view state in step with the screen about to be shown.
    pub fn sync(&mut self, app: &App, screen: &Screen) {
        self.screen_view.sync(
            app.visible_route(),
            app.navigation.depth(),
            screen.entries.len(),
        );
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture, Hide)?;
        info!("Terminal modes enabled (mouse capture, hidden cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture, Show);
    }
}

/// Turns one input event into the action it stands for on `screen`.
///
/// Global keys map straight to navigation actions. Everything else goes to
/// the screen view; only activating an entry yields an action.
pub fn dispatch(event: &TuiEvent, screen: &Screen, view: &mut ScreenViewState) -> Option<Action> {
    match event {
        TuiEvent::Quit | TuiEvent::ForceQuit => Some(Action::Quit),
        TuiEvent::Back => Some(Action::Back),
        TuiEvent::Home => Some(Action::Root),
        TuiEvent::Resize => None,
        _ => match view.handle_event(event)? {
            ScreenEvent::Activate(index) => screen.entries.get(index).map(|e| e.action.clone()),
            ScreenEvent::Secondary(index) => {
                screen.entries.get(index).and_then(|e| e.secondary.clone())
            }
        },
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let mut app = App::new();
    let mut tui = TuiState::new();
    let tick_rate = Duration::from_millis(config.tick_rate_ms);

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    let mut needs_redraw = true; // Force first frame

    loop {
        // Only draw when something changed
        if needs_redraw {
            let screen = screens::resolve(app.visible_route(), &app);
            tui.sync(&app, &screen);
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, &screen, &config))?;
            needs_redraw = false;
        }

        let first_event = poll_event_timeout(tick_rate);
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            // Each event sees the screen left behind by the previous one
            let screen = screens::resolve(app.visible_route(), &app);
            tui.sync(&app, &screen);

            if let Some(action) = dispatch(&event, &screen, &mut tui.screen_view) {
                debug!("Dispatching {:?}", action);
                if update(&mut app, action) == Effect::Quit {
                    should_quit = true;
                    break;
                }
            }
        }

        if should_quit {
            break;
        }
    }

    info!("Shutting down");
    ratatui::restore();
    Ok(())
}
