//! Data models for the exercise catalog.
//!
//! This module contains the domain records read from the catalog source
//! ([`Exercise`], [`SubstitutionCandidate`], [`Equipment`]) and the derived
//! views produced by the query surface ([`SubstitutionOption`],
//! [`ResolvedSubstitutionView`], [`ProgramTemplate`], [`CatalogSummary`]).
//! Display implementations for these models are located in
//! [`crate::display::models`] to keep data and presentation apart.
//!
//! # Field Tolerance
//!
//! Catalog records are hand-authored. Every field of a record is optional on
//! input; absent values become empty strings or empty lists, and scalars
//! written as numbers are accepted where text is expected. Non-object entries
//! in a substitution list are dropped.
//!
//! # Examples
//!
//! ```rust
//! use shiba_core::models::Exercise;
//!
//! let exercise: Exercise = serde_json::from_str(
//!     r#"{"id": "bench1", "name": "Barbell Bench Press", "week": 1, "reps": 8}"#,
//! )
//! .unwrap();
//! assert_eq!(exercise.reps, "8");
//! assert!(exercise.notes.is_empty());
//! assert!(exercise.substitutions.is_empty());
//! ```

mod equipment;
mod exercise;
pub(crate) mod lenient;
mod program;
mod substitution;


pub use equipment::{Equipment, EquipmentSummary};
pub use exercise::{AnnotatedExercise, Exercise, SubstitutionCandidate, Target};
pub use program::{CatalogSummary, ProgramTemplate, ProgramWeek, WorkoutDay};
pub use substitution::{ResolvedSubstitutionView, SubstitutedExercise, SubstitutionOption};
