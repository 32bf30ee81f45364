//! Equipment grouping and exercise tag derivation.

use std::collections::BTreeSet;

use crate::{
    catalog::Catalog,
    models::{AnnotatedExercise, EquipmentSummary, Exercise},
};

/// Name keywords and the movement-pattern tag each group implies.
///
/// Each group is checked on its own, so a name can carry several patterns.
const MOVEMENT_PATTERNS: &[(&[&str], &str)] = &[
    (&["press", "push"], "pressing"),
    (&["pull", "row", "pulldown"], "pulling"),
    (&["squat", "lunge"], "squatting"),
    (&["curl"], "curling"),
    (&["extension", "extend"], "extending"),
    (&["raise", "lateral", "fly", "flye"], "raising"),
];

/// Training-focus keywords, in priority order. The first hit wins.
const TRAINING_FOCUSES: &[&str] = &["strength", "hypertrophy"];

/// Distinct equipment categories, ascending.
pub fn categories(catalog: &Catalog) -> Vec<String> {
    catalog
        .equipment()
        .iter()
        .map(|e| e.category.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Equipment entries whose category matches exactly, in catalog order.
pub fn equipment_by_category(catalog: &Catalog, category: &str) -> Vec<EquipmentSummary> {
    catalog
        .equipment()
        .iter()
        .filter(|e| e.category == category)
        .map(EquipmentSummary::from)
        .collect()
}

/// Derives the search tags of an exercise.
///
/// Tags come from the muscle, equipment and body part (lower-cased, spaces
/// turned into hyphens), the training focus, and movement keywords in the
/// exercise name.
pub fn tags_for(exercise: &Exercise) -> BTreeSet<String> {
    let mut tags = BTreeSet::new();

    let muscle = exercise.muscle.to_lowercase();
    if !muscle.is_empty() {
        tags.insert(muscle);
    }
    for field in [&exercise.equipment, &exercise.body_part] {
        let tag = slug(field);
        if !tag.is_empty() {
            tags.insert(tag);
        }
    }

    let focus = exercise.training_focus.to_lowercase();
    if let Some(tag) = TRAINING_FOCUSES.iter().find(|f| focus.contains(*f)) {
        tags.insert(tag.to_string());
    }

    let name = exercise.name.to_lowercase();
    for (keywords, tag) in MOVEMENT_PATTERNS {
        if keywords.iter().any(|k| name.contains(k)) {
            tags.insert(tag.to_string());
        }
    }

    tags
}

/// Pairs an exercise with its tags.
pub fn annotate(exercise: &Exercise) -> AnnotatedExercise {
    AnnotatedExercise {
        tags: tags_for(exercise).into_iter().collect(),
        exercise: exercise.clone(),
    }
}

fn slug(value: &str) -> String {
    value.to_lowercase().replace(' ', "-")
}
