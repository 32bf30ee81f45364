use serde::Serialize;

use super::{Exercise, SubstitutionCandidate, Target};

/// A substitution candidate projected for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubstitutionOption {
    pub id: String,
    pub name: String,
    pub muscle: String,
    pub equipment: String,
    /// Same value as `equipment`, kept for clients that label the two apart
    pub equipment_name: String,
    pub body_part: String,
}

impl From<&SubstitutionCandidate> for SubstitutionOption {
    fn from(candidate: &SubstitutionCandidate) -> Self {
        Self {
            id: candidate.id.clone(),
            name: candidate.name.clone(),
            muscle: candidate.muscle.clone(),
            equipment: candidate.equipment.clone(),
            equipment_name: candidate.equipment.clone(),
            body_part: candidate.body_part.clone(),
        }
    }
}

/// An exercise slot displayed with a substitute movement.
///
/// Identity comes from the candidate, the schedule from the original, and the
/// original's substitution list rides along so the slot can be swapped again.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubstitutedExercise {
    pub id: String,
    pub name: String,
    pub muscle: String,
    pub equipment: String,
    pub body_part: String,
    pub week: i64,
    pub workout_type: String,
    pub working_sets: Target,
    pub reps: String,
    pub rest: String,
    pub notes: String,
    pub substitutions: Vec<SubstitutionCandidate>,
}

impl SubstitutedExercise {
    /// Merges a candidate's identity into the original's schedule.
    pub fn merge(original: &Exercise, candidate: &SubstitutionCandidate) -> Self {
        Self {
            id: candidate.id.clone(),
            name: candidate.name.clone(),
            muscle: candidate.muscle.clone(),
            equipment: candidate.equipment.clone(),
            body_part: candidate.body_part.clone(),
            week: original.week,
            workout_type: original.workout_type.clone(),
            working_sets: original.working_sets.clone(),
            reps: original.reps.clone(),
            rest: original.rest.clone(),
            notes: original.notes.clone(),
            substitutions: original.substitutions.clone(),
        }
    }
}

/// The record to display for an exercise slot after a substitution request.
///
/// Asking for the original's own ID resets the slot and yields the catalog
/// record untouched.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ResolvedSubstitutionView {
    Original(Exercise),
    Substituted(SubstitutedExercise),
}

impl ResolvedSubstitutionView {
    pub fn is_substituted(&self) -> bool {
        matches!(self, ResolvedSubstitutionView::Substituted(_))
    }

    pub fn id(&self) -> &str {
        match self {
            Self::Original(e) => &e.id,
            Self::Substituted(s) => &s.id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Original(e) => &e.name,
            Self::Substituted(s) => &s.name,
        }
    }

    pub fn muscle(&self) -> &str {
        match self {
            Self::Original(e) => &e.muscle,
            Self::Substituted(s) => &s.muscle,
        }
    }

    pub fn equipment(&self) -> &str {
        match self {
            Self::Original(e) => &e.equipment,
            Self::Substituted(s) => &s.equipment,
        }
    }

    pub fn body_part(&self) -> &str {
        match self {
            Self::Original(e) => &e.body_part,
            Self::Substituted(s) => &s.body_part,
        }
    }

    pub fn week(&self) -> i64 {
        match self {
            Self::Original(e) => e.week,
            Self::Substituted(s) => s.week,
        }
    }

    pub fn workout_type(&self) -> &str {
        match self {
            Self::Original(e) => &e.workout_type,
            Self::Substituted(s) => &s.workout_type,
        }
    }

    pub fn working_sets(&self) -> &Target {
        match self {
            Self::Original(e) => &e.working_sets,
            Self::Substituted(s) => &s.working_sets,
        }
    }

    pub fn reps(&self) -> &str {
        match self {
            Self::Original(e) => &e.reps,
            Self::Substituted(s) => &s.reps,
        }
    }

    pub fn rest(&self) -> &str {
        match self {
            Self::Original(e) => &e.rest,
            Self::Substituted(s) => &s.rest,
        }
    }

    pub fn notes(&self) -> &str {
        match self {
            Self::Original(e) => &e.notes,
            Self::Substituted(s) => &s.notes,
        }
    }

    pub fn substitutions(&self) -> &[SubstitutionCandidate] {
        match self {
            Self::Original(e) => &e.substitutions,
            Self::Substituted(s) => &s.substitutions,
        }
    }
}
