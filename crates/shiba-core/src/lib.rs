//! Core library for the Shiba workout program.
//!
//! This crate loads a static exercise catalog and answers the questions a
//! training log asks of it: which exercises make up a workout, which workouts
//! a week holds, what a movement can be swapped for, and what a swapped slot
//! looks like.
//!
//! # Architecture
//!
//! ```text
//! ┌───────────────┐   ┌───────────────┐   ┌─────────────────────┐
//! │   Catalog     │──▶│ ExerciseIndex │──▶│ equipment (tags,    │
//! │ (immutable)   │   │ (week × type) │   │ categories)         │
//! └───────────────┘   └───────────────┘   └─────────────────────┘
//!         │
//!         └──────────▶ SubstitutionResolver (pure projection)
//! ```
//!
//! [`ExerciseLibrary`] ties the pieces together behind a snapshot pointer and
//! is what the interfaces talk to. The lower-level components borrow a
//! [`Catalog`] directly, which keeps them trivial to test with fixtures.
//!
//! # Quick Start
//!
//! ```rust
//! use shiba_core::{
//!     params::{Id, Substitute},
//!     Catalog, DuplicatePolicy, ExerciseLibrary,
//! };
//!
//! let catalog = Catalog::from_json_str(
//!     r#"{
//!         "muscles": {},
//!         "equipment": {},
//!         "exercises": [{
//!             "id": "bench1", "name": "Barbell Bench Press", "week": 1,
//!             "workout_type": "Upper (Strength)", "working_sets": 3,
//!             "reps": "6-8", "rest": "2-3 min",
//!             "substitutions": [{"id": "db_bench", "name": "Dumbbell Bench Press",
//!                                "muscle": "Chest", "equipment": "Dumbbell",
//!                                "body_part": "Push"}]
//!         }]
//!     }"#,
//!     DuplicatePolicy::FirstWins,
//! )?;
//! let library = ExerciseLibrary::from_catalog(catalog);
//!
//! let options = library.substitutes(&Id { id: "bench1".to_string() })?;
//! assert_eq!(options[0].equipment_name, "Dumbbell");
//!
//! let view = library.substitute(&Substitute {
//!     original_id: "bench1".to_string(),
//!     substitution_id: "db_bench".to_string(),
//! })?;
//! assert_eq!(view.name(), "Dumbbell Bench Press");
//! assert_eq!(view.rest(), "2-3 min");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod catalog;
pub mod display;
pub mod equipment;
pub mod error;
pub mod index;
pub mod library;
pub mod models;
pub mod params;
pub mod substitution;

// Re-export commonly used types
pub use catalog::{Catalog, DuplicatePolicy};
pub use display::{EquipmentList, Exercises, Names, OperationStatus, SubstitutionOptions};
pub use error::{CatalogError, LoadError, NotFoundError, NotFoundKind, Result};
pub use index::ExerciseIndex;
pub use library::{ExerciseLibrary, LibraryBuilder};
pub use models::{
    AnnotatedExercise, CatalogSummary, Equipment, EquipmentSummary, Exercise, ProgramTemplate,
    ResolvedSubstitutionView, SubstitutionCandidate, SubstitutionOption,
};
pub use substitution::SubstitutionResolver;
