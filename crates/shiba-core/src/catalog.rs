//! Catalog loading and indexed lookups.
//!
//! A [`Catalog`] is built once from a JSON document holding three sections:
//!
//! ```text
//! {
//!   "muscles":   { "<muscle id>": { ... }, ... },
//!   "equipment": { "<equipment id>": { "name", "category", "subcategory",
//!                                      "mobility", "resistance_type" }, ... },
//!   "exercises": [ { "id", "name", ... }, ... ]      // or
//!   "exercises": { "<exercise id>": { "name", ... }, ... }
//! }
//! ```
//!
//! Both shapes of `exercises` are normalized at load time into one ordered
//! sequence plus an `id → position` index, so nothing downstream branches on
//! the source layout. The catalog is never mutated after construction.

use std::{
    collections::HashMap,
    io::Read,
    path::{Path, PathBuf},
};

use log::{info, warn};
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::{
    error::LoadError,
    models::{Equipment, Exercise},
};

/// How exercises sharing an ID are treated at load time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DuplicatePolicy {
    /// Keep every record; ID lookups return the first one in source order.
    #[default]
    FirstWins,
    /// Fail the load on the first repeated ID.
    Reject,
}

#[derive(Deserialize)]
struct RawCatalog {
    muscles: Option<Map<String, Value>>,
    equipment: Option<Map<String, Value>>,
    exercises: Option<RawExercises>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawExercises {
    List(Vec<Value>),
    Keyed(Map<String, Value>),
}

/// The immutable exercise and equipment dataset.
#[derive(Debug, Clone)]
pub struct Catalog {
    source: Option<PathBuf>,
    muscles: Map<String, Value>,
    equipment: Vec<Equipment>,
    exercises: Vec<Exercise>,
    by_id: HashMap<String, usize>,
}

impl Catalog {
    /// Loads a catalog from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns `LoadError::FileSystem` if the file cannot be read, and any of
    /// the errors of [`Catalog::from_json_str`] if its contents are invalid.
    pub fn from_path(path: impl AsRef<Path>, policy: DuplicatePolicy) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| LoadError::FileSystem {
            path: path.to_path_buf(),
            source: e,
        })?;

        let mut catalog = Self::from_json_str(&contents, policy)?;
        catalog.source = Some(path.to_path_buf());

        info!(
            "Loaded catalog from {}: {} muscles, {} equipment, {} exercises",
            path.display(),
            catalog.muscles.len(),
            catalog.equipment.len(),
            catalog.exercises.len()
        );
        Ok(catalog)
    }

    /// Loads a catalog from any reader producing JSON.
    ///
    /// # Errors
    ///
    /// Same as [`Catalog::from_json_str`]; read failures surface as
    /// `LoadError::Parse`.
    pub fn from_reader<R: Read>(reader: R, policy: DuplicatePolicy) -> Result<Self, LoadError> {
        let raw: RawCatalog = serde_json::from_reader(reader)?;
        Self::from_raw(raw, policy)
    }

    /// Loads a catalog from a JSON string.
    ///
    /// # Errors
    ///
    /// - `LoadError::Parse` when the text is not a JSON object of the
    ///   expected shape
    /// - `LoadError::MissingSection` when `muscles`, `equipment` or
    ///   `exercises` is absent
    /// - `LoadError::Malformed` when a record cannot be interpreted
    /// - `LoadError::DuplicateExerciseId` under [`DuplicatePolicy::Reject`]
    pub fn from_json_str(json: &str, policy: DuplicatePolicy) -> Result<Self, LoadError> {
        let raw: RawCatalog = serde_json::from_str(json)?;
        Self::from_raw(raw, policy)
    }

    fn from_raw(raw: RawCatalog, policy: DuplicatePolicy) -> Result<Self, LoadError> {
        let muscles = raw.muscles.ok_or(LoadError::MissingSection { section: "muscles" })?;
        let equipment = raw.equipment.ok_or(LoadError::MissingSection {
            section: "equipment",
        })?;
        let exercises = raw.exercises.ok_or(LoadError::MissingSection {
            section: "exercises",
        })?;

        let equipment = equipment
            .into_iter()
            .map(|(id, record)| parse_equipment(id, record))
            .collect::<Result<Vec<_>, _>>()?;

        let exercises = match exercises {
            RawExercises::List(records) => records
                .into_iter()
                .enumerate()
                .map(|(position, record)| parse_listed_exercise(position, record))
                .collect::<Result<Vec<_>, _>>()?,
            RawExercises::Keyed(records) => records
                .into_iter()
                .map(|(id, record)| parse_keyed_exercise(id, record))
                .collect::<Result<Vec<_>, _>>()?,
        };

        let by_id = index_exercises(&exercises, policy)?;

        Ok(Self {
            source: None,
            muscles,
            equipment,
            exercises,
            by_id,
        })
    }

    /// Returns the exercise with the given ID.
    ///
    /// When the source listed several exercises under one ID, the first in
    /// source order is returned.
    pub fn exercise(&self, id: &str) -> Option<&Exercise> {
        self.by_id.get(id).map(|&position| &self.exercises[position])
    }

    /// All exercises in source order.
    pub fn all_exercises(&self) -> &[Exercise] {
        &self.exercises
    }

    /// All equipment entries in source order.
    pub fn equipment(&self) -> &[Equipment] {
        &self.equipment
    }

    /// The muscle table, keyed by muscle ID, as written in the source.
    pub fn muscles(&self) -> &Map<String, Value> {
        &self.muscles
    }

    /// The file the catalog was read from, if any.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }
}

fn parse_equipment(id: String, record: Value) -> Result<Equipment, LoadError> {
    if !record.is_object() {
        return Err(LoadError::malformed(format!(
            "equipment '{id}' is not an object"
        )));
    }
    let mut equipment: Equipment = serde_json::from_value(record)
        .map_err(|e| LoadError::malformed(format!("equipment '{id}': {e}")))?;
    equipment.id = id;
    Ok(equipment)
}

fn parse_listed_exercise(position: usize, record: Value) -> Result<Exercise, LoadError> {
    if !record.is_object() {
        return Err(LoadError::malformed(format!(
            "exercise at position {position} is not an object"
        )));
    }
    let exercise: Exercise = serde_json::from_value(record)
        .map_err(|e| LoadError::malformed(format!("exercise at position {position}: {e}")))?;
    if exercise.id.is_empty() {
        return Err(LoadError::malformed(format!(
            "exercise at position {position} has no id"
        )));
    }
    Ok(exercise)
}

fn parse_keyed_exercise(id: String, record: Value) -> Result<Exercise, LoadError> {
    if !record.is_object() {
        return Err(LoadError::malformed(format!(
            "exercise '{id}' is not an object"
        )));
    }
    let mut exercise: Exercise = serde_json::from_value(record)
        .map_err(|e| LoadError::malformed(format!("exercise '{id}': {e}")))?;
    if !exercise.id.is_empty() && exercise.id != id {
        warn!(
            "Exercise keyed '{id}' declares id '{}'; using the key",
            exercise.id
        );
    }
    exercise.id = id;
    Ok(exercise)
}

fn index_exercises(
    exercises: &[Exercise],
    policy: DuplicatePolicy,
) -> Result<HashMap<String, usize>, LoadError> {
    let mut by_id = HashMap::with_capacity(exercises.len());
    for (position, exercise) in exercises.iter().enumerate() {
        if by_id.contains_key(&exercise.id) {
            match policy {
                DuplicatePolicy::FirstWins => {
                    warn!(
                        "Duplicate exercise id '{}' at position {position}; lookups use the first",
                        exercise.id
                    );
                }
                DuplicatePolicy::Reject => {
                    return Err(LoadError::DuplicateExerciseId {
                        id: exercise.id.clone(),
                    });
                }
            }
        } else {
            by_id.insert(exercise.id.clone(), position);
        }
    }
    Ok(by_id)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use serde_json::json;
    use tempfile::NamedTempFile;

    use super::*;

    fn listed() -> Value {
        json!({
            "muscles": {"chest": {"name": "Chest"}, "lats": {"name": "Lats"}},
            "equipment": {
                "barbell": {"name": "Barbell", "category": "Free Weight",
                            "subcategory": "Bar", "mobility": "Mobile",
                            "resistance_type": "Constant"},
                "cable": {"name": "Cable Stack", "category": "Machine"}
            },
            "exercises": [
                {"id": "bench1", "name": "Barbell Bench Press", "week": 1,
                 "workout_type": "Upper (Strength)"},
                {"id": "row1", "name": "Cable Row", "week": 1,
                 "workout_type": "Upper (Strength)"}
            ]
        })
    }

    fn load(value: Value, policy: DuplicatePolicy) -> Result<Catalog, LoadError> {
        Catalog::from_json_str(&value.to_string(), policy)
    }

    #[test]
    fn test_load_list_shape() {
        let catalog = load(listed(), DuplicatePolicy::FirstWins).unwrap();

        assert_eq!(catalog.muscles().len(), 2);
        assert_eq!(catalog.equipment().len(), 2);
        assert_eq!(catalog.all_exercises().len(), 2);
        assert_eq!(catalog.exercise("row1").unwrap().name, "Cable Row");
        assert!(catalog.exercise("missing").is_none());
        assert!(catalog.source().is_none());
    }

    #[test]
    fn test_load_keyed_shape_matches_list_shape() {
        let mut keyed = listed();
        keyed["exercises"] = json!({
            "bench1": {"name": "Barbell Bench Press", "week": 1,
                       "workout_type": "Upper (Strength)"},
            "row1": {"id": "row1", "name": "Cable Row", "week": 1,
                     "workout_type": "Upper (Strength)"}
        });

        let from_list = load(listed(), DuplicatePolicy::FirstWins).unwrap();
        let from_map = load(keyed, DuplicatePolicy::FirstWins).unwrap();

        assert_eq!(from_list.all_exercises(), from_map.all_exercises());
    }

    #[test]
    fn test_keyed_shape_uses_key_as_id() {
        let mut keyed = listed();
        keyed["exercises"] = json!({"squat1": {"id": "other", "name": "Back Squat"}});

        let catalog = load(keyed, DuplicatePolicy::FirstWins).unwrap();
        let squat = catalog.exercise("squat1").unwrap();
        assert_eq!(squat.id, "squat1");
        assert!(catalog.exercise("other").is_none());
    }

    #[test]
    fn test_equipment_keeps_source_order_and_ids() {
        let catalog = load(listed(), DuplicatePolicy::FirstWins).unwrap();
        let ids: Vec<_> = catalog.equipment().iter().map(|e| e.id.as_str()).collect();

        assert_eq!(ids, ["barbell", "cable"]);
        assert!(catalog.equipment()[1].subcategory.is_empty());
    }

    #[test]
    fn test_duplicate_ids_first_wins() {
        let mut value = listed();
        value["exercises"]
            .as_array_mut()
            .unwrap()
            .push(json!({"id": "bench1", "name": "Second Bench"}));

        let catalog = load(value, DuplicatePolicy::FirstWins).unwrap();
        assert_eq!(catalog.all_exercises().len(), 3);
        assert_eq!(catalog.exercise("bench1").unwrap().name, "Barbell Bench Press");
    }

    #[test]
    fn test_duplicate_ids_rejected_when_strict() {
        let mut value = listed();
        value["exercises"]
            .as_array_mut()
            .unwrap()
            .push(json!({"id": "bench1", "name": "Second Bench"}));

        let err = load(value, DuplicatePolicy::Reject).unwrap_err();
        assert!(matches!(err, LoadError::DuplicateExerciseId { ref id } if id == "bench1"));
    }

    #[test]
    fn test_missing_sections_fail() {
        for section in ["muscles", "equipment", "exercises"] {
            let mut value = listed();
            value.as_object_mut().unwrap().remove(section);

            let err = load(value, DuplicatePolicy::FirstWins).unwrap_err();
            assert!(
                matches!(err, LoadError::MissingSection { section: s } if s == section),
                "expected missing {section}, got {err}"
            );
        }
    }

    #[test]
    fn test_invalid_json_fails() {
        let err = Catalog::from_json_str("{not json", DuplicatePolicy::FirstWins).unwrap_err();
        assert!(matches!(err, LoadError::Parse { .. }));

        let err = Catalog::from_json_str("[]", DuplicatePolicy::FirstWins).unwrap_err();
        assert!(matches!(err, LoadError::Parse { .. }));
    }

    #[test]
    fn test_listed_exercise_without_id_is_malformed() {
        let mut value = listed();
        value["exercises"] = json!([{"name": "Nameless"}]);

        let err = load(value, DuplicatePolicy::FirstWins).unwrap_err();
        assert!(matches!(err, LoadError::Malformed { .. }));
        assert!(err.to_string().contains("position 0"));
    }

    #[test]
    fn test_non_object_records_are_malformed() {
        let mut value = listed();
        value["exercises"] = json!(["bench1"]);
        assert!(matches!(
            load(value, DuplicatePolicy::FirstWins).unwrap_err(),
            LoadError::Malformed { .. }
        ));

        let mut value = listed();
        value["equipment"] = json!({"barbell": "Barbell"});
        assert!(matches!(
            load(value, DuplicatePolicy::FirstWins).unwrap_err(),
            LoadError::Malformed { .. }
        ));
    }

    #[test]
    fn test_from_path_records_source() {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        write!(file, "{}", listed()).unwrap();

        let catalog = Catalog::from_path(file.path(), DuplicatePolicy::FirstWins).unwrap();
        assert_eq!(catalog.source(), Some(file.path()));
    }

    #[test]
    fn test_from_path_missing_file() {
        let err = Catalog::from_path("/nonexistent/workout_database.json", DuplicatePolicy::FirstWins)
            .unwrap_err();
        assert!(matches!(err, LoadError::FileSystem { .. }));
    }

    #[test]
    fn test_from_reader() {
        let bytes = listed().to_string().into_bytes();
        let catalog = Catalog::from_reader(bytes.as_slice(), DuplicatePolicy::FirstWins).unwrap();
        assert_eq!(catalog.all_exercises().len(), 2);
    }

    #[test]
    fn test_week_accepts_numeric_strings_only() {
        let mut value = listed();
        value["exercises"][1]["week"] = json!(" 2 ");
        let catalog = load(value, DuplicatePolicy::FirstWins).unwrap();
        assert_eq!(catalog.exercise("row1").unwrap().week, 2);

        let mut value = listed();
        value["exercises"][1]["week"] = json!("Deload");
        let err = load(value, DuplicatePolicy::FirstWins).unwrap_err();
        assert!(
            matches!(&err, LoadError::Malformed { reason } if reason.contains("'Deload'")),
            "unexpected error: {err}"
        );
    }
}
