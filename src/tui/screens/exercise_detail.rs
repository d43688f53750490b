use crate::core::action::Action;
use crate::core::models::Exercise;
use crate::core::models::exercises::{detailed_description, hints, sample_code, steps};
use crate::core::route::Route;
use crate::core::state::App;
use crate::tui::screens::{Entry, Screen, Section};

pub fn screen(id: u32, app: &App) -> Screen {
    let exercise = Exercise::find(id);
    let screen = Screen::new(Route::ExerciseDetail(id));

    if exercise.is_placeholder() {
        return screen
            .section(Section::text(
                exercise.title,
                [
                    exercise.description.to_string(),
                    format!("There is no exercise with id {id}."),
                ],
            ))
            .entry(Entry::new("← Back", Action::Back));
    }

    let completed = app.is_completed(id);
    let status = if completed { "✓ Completed" } else { "Not completed" };

    let numbered_steps = steps(id)
        .iter()
        .enumerate()
        .map(|(i, step)| format!("{}. {step}", i + 1));

    let mut screen = screen
        .section(Section::text(
            exercise.title,
            [
                format!(
                    "{} · {} · {status}",
                    exercise.difficulty.label(),
                    exercise.estimated_time
                ),
                format!("Topics: {}", exercise.topics.join(", ")),
            ],
        ))
        .section(Section::text("Description", [detailed_description(id)]))
        .section(Section::text("Steps", numbered_steps))
        .section(Section::code("Your solution", sample_code(id)))
        .section(Section::text(
            "💡 Hints",
            hints(id).iter().map(|hint| format!("• {hint}")),
        ))
        .entry(
            Entry::new(
                if completed { "↺ Mark as not done" } else { "✓ Mark as done" },
                Action::ToggleExercise(id),
            )
            .detail(status),
        );

    if Exercise::get(id + 1).is_some() {
        screen = screen.entry(Entry::link(Route::ExerciseDetail(id + 1)).detail("next"));
    }

    screen.entry(Entry::new("← Back to exercises", Action::Back))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::update;
    use crate::test_support::test_app;

    #[test]
    fn test_unknown_id_shows_placeholder() {
        let screen = screen(99, &test_app());
        assert_eq!(screen.title, "Exercise 99");
        assert_eq!(screen.sections[0].heading, "Exercise not found");
        assert_eq!(screen.entries.len(), 1);
        assert_eq!(screen.entries[0].action, Action::Back);
    }

    #[test]
    fn test_known_exercise_has_toggle_next_and_back() {
        let screen = screen(1, &test_app());
        let actions: Vec<&Action> = screen.entries.iter().map(|e| &e.action).collect();
        assert_eq!(
            actions,
            vec![
                &Action::ToggleExercise(1),
                &Action::Navigate(Route::ExerciseDetail(2)),
                &Action::Back,
            ]
        );
        assert_eq!(screen.sections[2].lines[0], "1. Define DayOfWeek with one variant per day");
    }

    #[test]
    fn test_last_exercise_has_no_next() {
        let screen = screen(6, &test_app());
        assert_eq!(screen.entries.len(), 2);
    }

    #[test]
    fn test_toggle_label_follows_completion() {
        let mut app = test_app();
        update(&mut app, Action::ToggleExercise(4));
        let screen = screen(4, &app);
        assert_eq!(screen.entries[0].label, "↺ Mark as not done");
        assert!(screen.sections[0].lines[0].ends_with("✓ Completed"));
    }
}
