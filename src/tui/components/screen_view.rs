//! # Screen View Component
//!
//! Draws a resolved [`Screen`]: a scrollable body of sections on top and,
//! when the screen offers any, a selectable list of entries below it.
//!
//! ```text
//! ┌ ⓘ Days of the Week ────────────────┐
//! │ Detailed analysis: DayOfWeek       │ ▲
//! │ ...                                │ █  body (ScrollView)
//! └────────────────────────────────────┘ ▼
//! ┌ Go to ─────────────────────────────┐
//! │ ▶ ↻ Next sample                    │    entries (List)
//! │   ← Back                           │
//! └────────────────────────────────────┘
//! ```
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `ScreenViewState` lives in `TuiState`
//! - `ScreenView` is created each frame with borrowed state

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, List, ListItem, ListState, Paragraph, Wrap};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::route::Route;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;
use crate::tui::screens::{Screen, SectionKind};

/// Persistent selection and scroll state for the visible screen.
#[derive(Default)]
pub struct ScreenViewState {
    pub selected: usize,
    pub entry_count: usize,
    pub list_state: ListState,
    pub scroll_state: ScrollViewState,
    /// Route and depth the state belongs to.
    shown: Option<(Route, usize)>,
}

/// Events emitted by the screen view: which entry to act on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenEvent {
    Activate(usize),
    Secondary(usize),
}

impl ScreenViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Points the state at the screen about to be drawn. Selection and
    /// scroll reset whenever the visible route or the stack depth changes.
    pub fn sync(&mut self, route: Route, depth: usize, entry_count: usize) {
        if self.shown != Some((route, depth)) {
            self.shown = Some((route, depth));
            self.selected = 0;
            self.scroll_state = ScrollViewState::default();
        }
        self.entry_count = entry_count;
        if entry_count == 0 {
            self.selected = 0;
            self.list_state.select(None);
        } else {
            self.selected = self.selected.min(entry_count - 1);
            self.list_state.select(Some(self.selected));
        }
    }
}

impl EventHandler for ScreenViewState {
    type Event = ScreenEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<ScreenEvent> {
        match event {
            TuiEvent::CursorUp => {
                if self.entry_count > 0 {
                    self.selected = self.selected.saturating_sub(1);
                    self.list_state.select(Some(self.selected));
                }
                None
            }
            TuiEvent::CursorDown => {
                if self.entry_count > 0 {
                    self.selected = (self.selected + 1).min(self.entry_count - 1);
                    self.list_state.select(Some(self.selected));
                }
                None
            }
            TuiEvent::Submit if self.entry_count > 0 => Some(ScreenEvent::Activate(self.selected)),
            TuiEvent::Toggle if self.entry_count > 0 => Some(ScreenEvent::Secondary(self.selected)),
            TuiEvent::ScrollUp => {
                self.scroll_state.scroll_up();
                None
            }
            TuiEvent::ScrollDown => {
                self.scroll_state.scroll_down();
                None
            }
            TuiEvent::ScrollPageUp => {
                self.scroll_state.scroll_page_up();
                None
            }
            TuiEvent::ScrollPageDown => {
                self.scroll_state.scroll_page_down();
                None
            }
            _ => None,
        }
    }
}

/// Transient render wrapper for a screen.
pub struct ScreenView<'a> {
    screen: &'a Screen,
    state: &'a mut ScreenViewState,
}

impl<'a> ScreenView<'a> {
    pub fn new(screen: &'a Screen, state: &'a mut ScreenViewState) -> Self {
        Self { screen, state }
    }
}

/// Flattens sections into styled lines, with a blank line between sections.
pub fn body_lines(screen: &Screen) -> Vec<Line<'_>> {
    let heading_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let code_style = Style::default().fg(Color::Yellow);

    let mut lines = Vec::new();
    for (i, section) in screen.sections.iter().enumerate() {
        if i > 0 {
            lines.push(Line::default());
        }
        lines.push(Line::from(Span::styled(section.heading.as_str(), heading_style)));
        for line in &section.lines {
            match section.kind {
                SectionKind::Text => lines.push(Line::raw(line.as_str())),
                SectionKind::Code => {
                    lines.push(Line::from(vec![
                        Span::styled("  ", code_style),
                        Span::styled(line.as_str(), code_style),
                    ]))
                }
            }
        }
    }
    lines
}

impl Component for ScreenView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let entries = &self.screen.entries;
        let (body_area, list_area) = if entries.is_empty() {
            (area, None)
        } else {
            let wanted = entries.len() as u16 + 2;
            let height = wanted.min((area.height / 2).max(3));
            let [body, list] =
                Layout::vertical([Constraint::Min(0), Constraint::Length(height)]).areas(area);
            (body, Some(list))
        };

        // --- Body ---
        let block = Block::bordered()
            .title(format!(" {} {} ", self.screen.icon, self.screen.title))
            .border_style(Style::default().fg(Color::DarkGray))
            .title_style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD));
        let inner = block.inner(body_area);
        frame.render_widget(block, body_area);

        // Leave a column for the scrollbar
        let content_width = inner.width.saturating_sub(1);
        let paragraph = Paragraph::new(body_lines(self.screen)).wrap(Wrap { trim: false });
        let content_height = paragraph.line_count(content_width) as u16;

        let mut scroll_view = ScrollView::new(Size::new(content_width, content_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);
        scroll_view.render_widget(paragraph, Rect::new(0, 0, content_width, content_height));
        frame.render_stateful_widget(scroll_view, inner, &mut self.state.scroll_state);

        // --- Entries ---
        if let Some(list_area) = list_area {
            let detail_style = Style::default().fg(Color::DarkGray);
            let items: Vec<ListItem> = entries
                .iter()
                .map(|entry| {
                    let mut spans = vec![Span::raw(entry.label.as_str())];
                    if let Some(detail) = &entry.detail {
                        spans.push(Span::styled(format!("  {detail}"), detail_style));
                    }
                    ListItem::new(Line::from(spans))
                })
                .collect();

            let list = List::new(items)
                .block(
                    Block::bordered()
                        .title(" Go to ")
                        .border_style(Style::default().fg(Color::DarkGray)),
                )
                .highlight_style(
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD | Modifier::REVERSED),
                )
                .highlight_symbol("▶ ");

            frame.render_stateful_widget(list, list_area, &mut self.state.list_state);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::Action;
    use crate::tui::screens::{Entry, Section};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn sample_screen() -> Screen {
        Screen::new(Route::Exercises)
            .section(Section::text("Intro", ["first line", "second line"]))
            .section(Section::code("Code", "let x = 1;"))
            .entry(Entry::new("Open", Action::Navigate(Route::ExerciseDetail(1))).detail("go"))
            .entry(Entry::new("Back", Action::Back))
    }

    fn render_text(screen: &Screen, state: &mut ScreenViewState) -> String {
        let backend = TestBackend::new(60, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| ScreenView::new(screen, state).render(f, f.area()))
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
    fn test_body_lines_separate_sections() {
        let screen = sample_screen();
        let lines = body_lines(&screen);
        // heading + 2 lines, blank, heading + 1 code line
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[3], Line::default());
    }

    #[test]
    fn test_cursor_is_clamped() {
        let mut state = ScreenViewState::new();
        state.sync(Route::Exercises, 1, 2);
        state.handle_event(&TuiEvent::CursorUp);
        assert_eq!(state.selected, 0);
        state.handle_event(&TuiEvent::CursorDown);
        state.handle_event(&TuiEvent::CursorDown);
        assert_eq!(state.selected, 1);
        assert_eq!(
            state.handle_event(&TuiEvent::Submit),
            Some(ScreenEvent::Activate(1))
        );
        assert_eq!(
            state.handle_event(&TuiEvent::Toggle),
            Some(ScreenEvent::Secondary(1))
        );
    }

    #[test]
    fn test_no_entries_means_no_activation() {
        let mut state = ScreenViewState::new();
        state.sync(Route::CodeRepresentations, 1, 0);
        assert_eq!(state.handle_event(&TuiEvent::Submit), None);
        assert_eq!(state.list_state.selected(), None);
    }

    #[test]
    fn test_sync_resets_selection_on_route_change() {
        let mut state = ScreenViewState::new();
        state.sync(Route::Exercises, 1, 6);
        state.handle_event(&TuiEvent::CursorDown);
        state.handle_event(&TuiEvent::CursorDown);
        state.sync(Route::Exercises, 1, 6);
        assert_eq!(state.selected, 2);

        state.sync(Route::ExerciseDetail(3), 2, 3);
        assert_eq!(state.selected, 0);

        // Same route at a different depth is a different screen
        state.handle_event(&TuiEvent::CursorDown);
        state.sync(Route::ExerciseDetail(3), 3, 3);
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn test_sync_clamps_when_entries_shrink() {
        let mut state = ScreenViewState::new();
        state.sync(Route::Exercises, 1, 6);
        for _ in 0..5 {
            state.handle_event(&TuiEvent::CursorDown);
        }
        state.sync(Route::Exercises, 1, 2);
        assert_eq!(state.selected, 1);
    }

    #[test]
    fn test_render_shows_title_body_and_entries() {
        let screen = sample_screen();
        let mut state = ScreenViewState::new();
        state.sync(Route::Exercises, 1, screen.entries.len());
        let text = render_text(&screen, &mut state);
        assert!(text.contains("Exercises"));
        assert!(text.contains("first line"));
        assert!(text.contains("let x = 1;"));
        assert!(text.contains("Go to"));
        assert!(text.contains("▶ Open"));
    }

    #[test]
    fn test_render_without_entries_has_no_list() {
        let screen = Screen::new(Route::CodeRepresentations)
            .section(Section::text("Only body", ["text"]));
        let mut state = ScreenViewState::new();
        state.sync(Route::CodeRepresentations, 1, 0);
        let text = render_text(&screen, &mut state);
        assert!(text.contains("Only body"));
        assert!(!text.contains("Go to"));
    }
}
