use crate::core::action::Action;
use crate::core::models::Exercise;
use crate::core::route::Route;
use crate::core::state::App;
use crate::tui::screens::{Entry, Screen, Section};

const PROGRESS_WIDTH: usize = 24;

/// Text progress bar, e.g. `[########················] 2/6`.
pub fn progress_bar(done: usize, total: usize) -> String {
    let filled = if total == 0 {
        0
    } else {
        (done.min(total) * PROGRESS_WIDTH) / total
    };
    format!(
        "[{}{}] {done}/{total}",
        "#".repeat(filled),
        "·".repeat(PROGRESS_WIDTH - filled)
    )
}

pub fn screen(app: &App) -> Screen {
    let exercises = Exercise::all();
    let done = exercises.iter().filter(|e| app.is_completed(e.id)).count();

    let entries = exercises.iter().map(|exercise| {
        let mark = if app.is_completed(exercise.id) { "✓" } else { "○" };
        Entry::new(
            format!("{mark} {}. {}", exercise.id, exercise.title),
            Action::Navigate(Route::ExerciseDetail(exercise.id)),
        )
        .detail(format!(
            "{} · {}",
            exercise.difficulty.label(),
            exercise.estimated_time
        ))
        .secondary(Action::ToggleExercise(exercise.id))
    });

    Screen::new(Route::Exercises)
        .section(Section::text(
            "Practice for students",
            [
                "Work through these exercises to practice enums and navigation.",
                "Enter opens an exercise, Space marks it done.",
            ],
        ))
        .section(Section::text(
            "Progress",
            [
                progress_bar(done, exercises.len()),
                "Every finished exercise gets you closer to mastering enums.".to_string(),
            ],
        ))
        .entries(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::update;
    use crate::test_support::test_app;

    #[test]
    fn test_progress_bar() {
        assert_eq!(progress_bar(0, 6), format!("[{}] 0/6", "·".repeat(24)));
        assert_eq!(progress_bar(6, 6), format!("[{}] 6/6", "#".repeat(24)));
        assert!(progress_bar(3, 6).starts_with(&format!("[{}·", "#".repeat(12))));
        assert!(progress_bar(0, 0).ends_with("0/0"));
    }

    #[test]
    fn test_entries_open_and_toggle() {
        let screen = screen(&test_app());
        assert_eq!(screen.entries.len(), 6);
        let first = &screen.entries[0];
        assert_eq!(first.action, Action::Navigate(Route::ExerciseDetail(1)));
        assert_eq!(first.secondary, Some(Action::ToggleExercise(1)));
        assert!(first.label.starts_with('○'));
    }

    #[test]
    fn test_completed_exercises_are_marked() {
        let mut app = test_app();
        update(&mut app, Action::ToggleExercise(2));
        let screen = screen(&app);
        assert!(screen.entries[1].label.starts_with('✓'));
        assert!(screen.sections[1].lines[0].ends_with("1/6"));
    }
}
