use serde::Serialize;

use super::Exercise;

/// One workout session of a program week.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkoutDay {
    pub workout_type: String,
    pub exercises: Vec<Exercise>,
}

/// All sessions scheduled for a week, sorted by workout type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgramWeek {
    pub week: i64,
    pub days: Vec<WorkoutDay>,
}

/// The full program as week → workout type → exercises.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProgramTemplate {
    pub weeks: Vec<ProgramWeek>,
}

impl ProgramTemplate {
    pub fn is_empty(&self) -> bool {
        self.weeks.is_empty()
    }

    /// Looks up a single week of the template.
    pub fn week(&self, week: i64) -> Option<&ProgramWeek> {
        self.weeks.iter().find(|w| w.week == week)
    }
}

/// Size and shape of the loaded catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogSummary {
    /// Where the catalog was read from, when it came from a file
    pub source: Option<String>,
    pub muscles: usize,
    pub equipment: usize,
    pub exercises: usize,
    pub equipment_categories: usize,
    pub weeks: Vec<i64>,
}
