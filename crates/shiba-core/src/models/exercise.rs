use serde::{Deserialize, Serialize};

use super::lenient;

/// A prescription value written either as a number (`3`, `8.5`) or as text
/// (`"1-2"`, `"~9"`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Target {
    Number(serde_json::Number),
    Text(String),
}

impl Target {
    /// Returns true when the source left the value blank.
    pub fn is_empty(&self) -> bool {
        matches!(self, Target::Text(text) if text.is_empty())
    }
}

impl Default for Target {
    fn default() -> Self {
        Target::Text(String::new())
    }
}

impl From<u32> for Target {
    fn from(value: u32) -> Self {
        Target::Number(value.into())
    }
}

impl From<&str> for Target {
    fn from(value: &str) -> Self {
        Target::Text(value.to_string())
    }
}

/// A prescribed movement for one week/workout-type slot of the program.
///
/// Identity fields (`id`, `name`, `muscle`, `equipment`, `body_part`) describe
/// the movement; the remaining fields describe how it is scheduled and
/// performed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Exercise {
    #[serde(default, deserialize_with = "lenient::text")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub muscle: String,
    /// Equipment display name, matched loosely against the equipment table
    #[serde(default, deserialize_with = "lenient::text")]
    pub equipment: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub body_part: String,
    #[serde(default, deserialize_with = "lenient::week")]
    pub week: i64,
    #[serde(default, deserialize_with = "lenient::text")]
    pub workout_type: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub training_focus: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub reps: String,
    #[serde(default, deserialize_with = "lenient::target")]
    pub early_rpe: Target,
    #[serde(default, deserialize_with = "lenient::target")]
    pub last_rpe: Target,
    #[serde(default, deserialize_with = "lenient::target")]
    pub warmup_sets: Target,
    #[serde(default, deserialize_with = "lenient::target")]
    pub working_sets: Target,
    #[serde(default, deserialize_with = "lenient::text")]
    pub rest: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub notes: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub tutorial_url: String,
    /// Author-curated alternates, in authoring order
    #[serde(default, deserialize_with = "lenient::candidates")]
    pub substitutions: Vec<SubstitutionCandidate>,
}

impl Exercise {
    /// Finds a declared substitution candidate by ID.
    ///
    /// A blank ID never matches, even against candidates written without one.
    pub fn candidate(&self, id: &str) -> Option<&SubstitutionCandidate> {
        if id.is_empty() {
            return None;
        }
        self.substitutions.iter().find(|candidate| candidate.id == id)
    }
}

/// An alternate movement declared inline on an [`Exercise`].
///
/// Candidates carry identity only; sets, reps and rest always come from the
/// exercise they replace.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubstitutionCandidate {
    #[serde(default, deserialize_with = "lenient::text")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub muscle: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub equipment: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub body_part: String,
}

/// An exercise together with its derived search tags.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnnotatedExercise {
    #[serde(flatten)]
    pub exercise: Exercise,
    pub tags: Vec<String>,
}
