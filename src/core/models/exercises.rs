//! # Exercise Catalog
//!
//! Six practice exercises. Lookup never fails: an unknown id yields
//! [`Exercise::placeholder`], so an `ExerciseDetail` route with any id can be
//! rendered.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exercise {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub difficulty: Difficulty,
    pub estimated_time: &'static str,
    pub topics: &'static [&'static str],
}

const CATALOG: &[Exercise] = &[
    Exercise {
        id: 1,
        title: "Basic Enum: Days of the Week",
        description: "Create an enum for the days of the week with a few useful methods.",
        difficulty: Difficulty::Beginner,
        estimated_time: "15 min",
        topics: &["Basic enums", "Raw values", "Methods on enums"],
    },
    Exercise {
        id: 2,
        title: "Associated Values: File System",
        description: "Model different kinds of files with their metadata.",
        difficulty: Difficulty::Intermediate,
        estimated_time: "25 min",
        topics: &["Associated values", "match", "Pattern matching"],
    },
    Exercise {
        id: 3,
        title: "Pattern Matching: Command Processor",
        description: "Process terminal commands with advanced match and if let.",
        difficulty: Difficulty::Intermediate,
        estimated_time: "30 min",
        topics: &["Pattern matching", "if let", "let else"],
    },
    Exercise {
        id: 4,
        title: "API Response Handler",
        description: "Design an enum that handles the different kinds of API responses.",
        difficulty: Difficulty::Advanced,
        estimated_time: "35 min",
        topics: &["Generic enums", "Error handling", "Result"],
    },
    Exercise {
        id: 5,
        title: "Navigation Flow",
        description: "Build a multi-step navigation flow on top of a route stack.",
        difficulty: Difficulty::Advanced,
        estimated_time: "40 min",
        topics: &["Route enums", "Navigation stacks", "Programmatic navigation"],
    },
    Exercise {
        id: 6,
        title: "Application State",
        description: "Create an enum describing the states an application can be in.",
        difficulty: Difficulty::Beginner,
        estimated_time: "20 min",
        topics: &["App states", "Loading states", "Error states"],
    },
];

const PLACEHOLDER: Exercise = Exercise {
    id: 0,
    title: "Exercise not found",
    description: "This exercise does not exist.",
    difficulty: Difficulty::Beginner,
    estimated_time: "0 min",
    topics: &[],
};

impl Exercise {
    pub fn all() -> &'static [Exercise] {
        CATALOG
    }

    pub fn get(id: u32) -> Option<&'static Exercise> {
        CATALOG.iter().find(|exercise| exercise.id == id)
    }

    /// Looks up `id`, falling back to the placeholder.
    pub fn find(id: u32) -> &'static Exercise {
        Self::get(id).unwrap_or(&PLACEHOLDER)
    }

    pub fn placeholder() -> &'static Exercise {
        &PLACEHOLDER
    }

    pub fn is_placeholder(&self) -> bool {
        self.id == PLACEHOLDER.id
    }
}

pub fn detailed_description(id: u32) -> &'static str {
    match id {
        1 => {
            "Create an enum called `DayOfWeek` for the days of the week. Give each \
             variant a raw string value and add a method telling whether it is a weekend day."
        }
        2 => {
            "Implement a `FileType` enum with associated values for documents, images \
             and videos, each carrying its own metadata."
        }
        3 => {
            "Design a `Command` enum representing terminal commands and process it \
             with pattern matching over the different parameters."
        }
        4 => {
            "Create a generic `ApiResponse<T>` enum that handles successful responses \
             and the different kinds of errors a REST API can return."
        }
        5 => {
            "Implement a navigation coordinator on top of a route stack that handles \
             several programmatic navigation flows."
        }
        6 => {
            "Design an `AppState` enum covering the states of an application: \
             loading, loaded, error and empty."
        }
        _ => "Practice exercise on enums.",
    }
}

pub fn steps(id: u32) -> &'static [&'static str] {
    match id {
        1 => &[
            "Define DayOfWeek with one variant per day",
            "Add raw string values",
            "Expose an ALL constant listing every variant",
            "Write the is_weekend method",
        ],
        2 => &[
            "Define FileType with document, image and video variants",
            "Attach the right associated values to each variant",
            "Add methods that extract information",
            "Use match to handle each variant",
        ],
        3 => &[
            "Define Command with the different kinds of commands",
            "Use associated values for parameters",
            "Implement the processing with match",
            "Add let-else for early validation",
        ],
        _ => &[
            "Analyze the problem",
            "Design the shape of the enum",
            "Implement the required methods",
            "Test your solution",
        ],
    }
}

pub fn hints(id: u32) -> &'static [&'static str] {
    match id {
        1 => &[
            "Return &'static str for the raw value",
            "A const array makes iterating every variant easy",
            "matches! keeps the weekend check short",
        ],
        2 => &[
            "Each variant can carry different types",
            "Think about which metadata matters for each kind of file",
            "Destructure the associated values in match arms",
        ],
        3 => &[
            "Commands can take different numbers of parameters",
            "Match guards help with validation",
            "let-else keeps early returns flat",
        ],
        _ => &[
            "Remember the basics of enums",
            "Use pattern matching where it fits",
            "Put extra logic in methods on the enum",
        ],
    }
}

/// Starter code shown in the solution panel.
pub fn sample_code(id: u32) -> &'static str {
    match id {
        1 => {
            "enum DayOfWeek {\n    Monday,\n    Tuesday,\n    // ...\n}\n\n\
             impl DayOfWeek {\n    fn is_weekend(&self) -> bool {\n        todo!()\n    }\n}"
        }
        2 => {
            "enum FileType {\n    Document { name: String, pages: u32 },\n    \
             Image { name: String, resolution: String },\n    \
             Video { name: String, duration_secs: f64 },\n}"
        }
        _ => "// Write your solution here",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_ids_are_sequential() {
        let ids: Vec<u32> = Exercise::all().iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_find_known_exercise() {
        let exercise = Exercise::find(4);
        assert_eq!(exercise.title, "API Response Handler");
        assert_eq!(exercise.difficulty, Difficulty::Advanced);
        assert!(!exercise.is_placeholder());
    }

    #[test]
    fn test_unknown_id_falls_back_to_placeholder() {
        assert!(Exercise::find(0).is_placeholder());
        assert!(Exercise::find(99).is_placeholder());
        assert!(Exercise::get(99).is_none());
        assert!(Exercise::placeholder().topics.is_empty());
    }

    #[test]
    fn test_generic_content_for_ids_without_specifics() {
        assert_eq!(steps(5), steps(42));
        assert_eq!(hints(6), hints(0));
        assert_eq!(detailed_description(7), "Practice exercise on enums.");
        assert_ne!(steps(1), steps(2));
    }
}
