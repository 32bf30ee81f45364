//! Display implementations for domain models.
//!
//! All implementations produce markdown for rich terminal display and MCP
//! responses. Empty fields are left out rather than printed blank.

use std::fmt;

use crate::models::{
    AnnotatedExercise, CatalogSummary, EquipmentSummary, Exercise, ProgramTemplate,
    ResolvedSubstitutionView, SubstitutedExercise, SubstitutionCandidate, SubstitutionOption,
    Target,
};

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Number(n) => write!(f, "{n}"),
            Target::Text(text) => write!(f, "{text}"),
        }
    }
}

fn field(f: &mut fmt::Formatter<'_>, label: &str, value: &str) -> fmt::Result {
    if value.is_empty() {
        Ok(())
    } else {
        writeln!(f, "- {label}: {value}")
    }
}

fn candidates(f: &mut fmt::Formatter<'_>, substitutions: &[SubstitutionCandidate]) -> fmt::Result {
    if substitutions.is_empty() {
        return Ok(());
    }
    writeln!(f, "\n## Substitutions")?;
    writeln!(f)?;
    for candidate in substitutions {
        write!(f, "- {}: {}", candidate.id, candidate.name)?;
        if !candidate.equipment.is_empty() {
            write!(f, " ({})", candidate.equipment)?;
        }
        writeln!(f)?;
    }
    Ok(())
}

/// Formats the sets line, e.g. "2-3 warm-up, 3 working".
fn sets(warmup: &Target, working: &Target) -> String {
    match (warmup.is_empty(), working.is_empty()) {
        (true, true) => String::new(),
        (true, false) => format!("{working} working"),
        (false, true) => format!("{warmup} warm-up"),
        (false, false) => format!("{warmup} warm-up, {working} working"),
    }
}

fn rpe(early: &Target, last: &Target) -> String {
    match (early.is_empty(), last.is_empty()) {
        (true, true) => String::new(),
        (false, true) => early.to_string(),
        (true, false) => format!("{last} last set"),
        (false, false) => format!("{early} early, {last} last set"),
    }
}

impl fmt::Display for Exercise {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}. {}", self.id, self.name)?;
        writeln!(f)?;

        field(f, "Muscle", &self.muscle)?;
        field(f, "Equipment", &self.equipment)?;
        field(f, "Body part", &self.body_part)?;
        writeln!(f, "- Week: {}", self.week)?;
        field(f, "Workout", &self.workout_type)?;
        field(f, "Focus", &self.training_focus)?;
        field(f, "Sets", &sets(&self.warmup_sets, &self.working_sets))?;
        field(f, "Reps", &self.reps)?;
        field(f, "RPE", &rpe(&self.early_rpe, &self.last_rpe))?;
        field(f, "Rest", &self.rest)?;
        field(f, "Tutorial", &self.tutorial_url)?;

        if !self.notes.is_empty() {
            writeln!(f)?;
            writeln!(f, "{}", self.notes)?;
        }

        candidates(f, &self.substitutions)
    }
}

impl fmt::Display for AnnotatedExercise {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let e = &self.exercise;
        write!(f, "### {}. {}", e.id, e.name)?;
        if !e.equipment.is_empty() {
            write!(f, " ({})", e.equipment)?;
        }
        writeln!(f)?;
        writeln!(f)?;

        writeln!(f, "- Week {}: {}", e.week, e.workout_type)?;
        let sets = sets(&e.warmup_sets, &e.working_sets);
        if !sets.is_empty() || !e.reps.is_empty() {
            writeln!(f, "- Sets: {sets}; Reps: {}", e.reps)?;
        }
        field(f, "Rest", &e.rest)?;
        if !self.tags.is_empty() {
            writeln!(f, "- Tags: {}", self.tags.join(", "))?;
        }
        writeln!(f)
    }
}

impl fmt::Display for SubstitutionOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "- {}: {}", self.id, self.name)?;
        let details: Vec<&str> = [&self.equipment_name, &self.muscle, &self.body_part]
            .into_iter()
            .map(String::as_str)
            .filter(|s| !s.is_empty())
            .collect();
        if !details.is_empty() {
            write!(f, " ({})", details.join(", "))?;
        }
        writeln!(f)
    }
}

impl fmt::Display for SubstitutedExercise {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}. {}", self.id, self.name)?;
        writeln!(f)?;

        field(f, "Muscle", &self.muscle)?;
        field(f, "Equipment", &self.equipment)?;
        field(f, "Body part", &self.body_part)?;
        writeln!(f, "- Week: {}", self.week)?;
        field(f, "Workout", &self.workout_type)?;
        field(f, "Working sets", &self.working_sets.to_string())?;
        field(f, "Reps", &self.reps)?;
        field(f, "Rest", &self.rest)?;

        if !self.notes.is_empty() {
            writeln!(f)?;
            writeln!(f, "{}", self.notes)?;
        }

        candidates(f, &self.substitutions)
    }
}

impl fmt::Display for ResolvedSubstitutionView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolvedSubstitutionView::Original(exercise) => write!(f, "{exercise}"),
            ResolvedSubstitutionView::Substituted(exercise) => write!(f, "{exercise}"),
        }
    }
}

impl fmt::Display for EquipmentSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "- {}: {}", self.id, self.name)?;
        let details: Vec<&str> = [&self.subcategory, &self.mobility, &self.resistance_type]
            .into_iter()
            .map(String::as_str)
            .filter(|s| !s.is_empty())
            .collect();
        if !details.is_empty() {
            write!(f, " ({})", details.join(", "))?;
        }
        writeln!(f)
    }
}

impl fmt::Display for ProgramTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.weeks.is_empty() {
            return writeln!(f, "No workouts found.");
        }
        for (i, week) in self.weeks.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            writeln!(f, "# Week {}", week.week)?;
            for day in &week.days {
                writeln!(f)?;
                writeln!(f, "## {}", day.workout_type)?;
                writeln!(f)?;
                for (position, exercise) in day.exercises.iter().enumerate() {
                    write!(f, "{}. {} ({})", position + 1, exercise.name, exercise.id)?;
                    if !exercise.working_sets.is_empty() || !exercise.reps.is_empty() {
                        write!(f, ": {} x {}", exercise.working_sets, exercise.reps)?;
                    }
                    writeln!(f)?;
                }
            }
        }
        Ok(())
    }
}

impl fmt::Display for CatalogSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Catalog")?;
        writeln!(f)?;
        if let Some(source) = &self.source {
            writeln!(f, "- Source: {source}")?;
        }
        writeln!(f, "- Muscles: {}", self.muscles)?;
        writeln!(f, "- Equipment: {} ({} categories)", self.equipment, self.equipment_categories)?;
        writeln!(f, "- Exercises: {}", self.exercises)?;
        match (self.weeks.first(), self.weeks.last()) {
            (Some(first), Some(last)) if first != last => {
                writeln!(f, "- Weeks: {first}-{last} ({} weeks)", self.weeks.len())
            }
            (Some(only), _) => writeln!(f, "- Weeks: {only}"),
            _ => writeln!(f, "- Weeks: none"),
        }
    }
}
