//! # HelpBar Component
//!
//! Bottom line: key hints on the left, the status message on the right.
//! Hints only mention keys that do something on the current screen.

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

pub struct HelpBar {
    pub status_message: String,
    pub show_help: bool,
    pub can_go_back: bool,
    pub has_entries: bool,
    pub has_secondary: bool,
}

impl HelpBar {
    pub fn hints(&self) -> Vec<(&'static str, &'static str)> {
        let mut hints = Vec::new();
        if self.has_entries {
            hints.push(("↑↓", "select"));
            hints.push(("Enter", "open"));
        }
        if self.has_secondary {
            hints.push(("Space", "toggle"));
        }
        if self.can_go_back {
            hints.push(("Esc", "back"));
            hints.push(("h", "home"));
        }
        hints.push(("q", "quit"));
        hints
    }
}

impl Component for HelpBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let status_width = (self.status_message.width() as u16 + 1).min(area.width / 2);
        let [hints_area, status_area] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(status_width)])
                .areas(area);

        if self.show_help {
            let key_style = Style::default().fg(Color::Cyan);
            let label_style = Style::default().fg(Color::DarkGray);
            let spans: Vec<Span> = self
                .hints()
                .into_iter()
                .flat_map(|(key, label)| {
                    [
                        Span::styled(key, key_style),
                        Span::styled(format!(" {label}  "), label_style),
                    ]
                })
                .collect();
            frame.render_widget(Line::from(spans), hints_area);
        }

        frame.render_widget(
            Line::from(self.status_message.as_str())
                .style(Style::default().fg(Color::Green))
                .right_aligned(),
            status_area,
        );
    }
}
