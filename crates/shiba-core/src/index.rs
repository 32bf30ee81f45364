//! Week and workout-type views over a catalog.
//!
//! The index borrows a [`Catalog`] and derives every view on demand. Nothing
//! is cached, so an index built over a fresh snapshot always reflects it.

use std::collections::{BTreeMap, BTreeSet};

use crate::{
    catalog::Catalog,
    models::{Exercise, ProgramTemplate, ProgramWeek, WorkoutDay},
};

/// Read-only program views over a catalog.
#[derive(Debug, Clone, Copy)]
pub struct ExerciseIndex<'a> {
    catalog: &'a Catalog,
}

impl<'a> ExerciseIndex<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// Returns the exercise with the given ID.
    pub fn get(&self, id: &str) -> Option<&'a Exercise> {
        self.catalog.exercise(id)
    }

    /// Exercises scheduled for `week` under exactly `workout_type`, in
    /// catalog order. Empty when nothing matches.
    pub fn exercises_for(&self, week: i64, workout_type: &str) -> Vec<&'a Exercise> {
        self.catalog
            .all_exercises()
            .iter()
            .filter(|e| e.week == week && e.workout_type == workout_type)
            .collect()
    }

    /// Distinct workout types scheduled in `week`, ascending.
    pub fn workout_types_for(&self, week: i64) -> Vec<String> {
        self.catalog
            .all_exercises()
            .iter()
            .filter(|e| e.week == week)
            .map(|e| e.workout_type.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Distinct weeks present in the catalog, ascending.
    pub fn weeks(&self) -> Vec<i64> {
        self.catalog
            .all_exercises()
            .iter()
            .map(|e| e.week)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Builds the whole program tree.
    pub fn template(&self) -> ProgramTemplate {
        self.build_template(|_| true)
    }

    /// Builds the program tree for a single week. Empty if the week has no
    /// exercises.
    pub fn template_for_week(&self, week: i64) -> ProgramTemplate {
        self.build_template(|e| e.week == week)
    }

    fn build_template(&self, include: impl Fn(&Exercise) -> bool) -> ProgramTemplate {
        let mut tree: BTreeMap<i64, BTreeMap<&str, Vec<Exercise>>> = BTreeMap::new();
        for exercise in self.catalog.all_exercises().iter().filter(|e| include(*e)) {
            tree.entry(exercise.week)
                .or_default()
                .entry(exercise.workout_type.as_str())
                .or_default()
                .push(exercise.clone());
        }

        let weeks = tree
            .into_iter()
            .map(|(week, days)| ProgramWeek {
                week,
                days: days
                    .into_iter()
                    .map(|(workout_type, exercises)| WorkoutDay {
                        workout_type: workout_type.to_string(),
                        exercises,
                    })
                    .collect(),
            })
            .collect();

        ProgramTemplate { weeks }
    }
}
