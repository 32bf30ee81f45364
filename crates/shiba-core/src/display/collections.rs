//! Collection wrapper types for displaying groups of domain objects.
//!
//! Each wrapper formats its items with the item's own Display and prints a
//! fixed message when the collection is empty, so "nothing matched" always
//! reads the same across interfaces.

use std::fmt;

use crate::models::{AnnotatedExercise, EquipmentSummary, SubstitutionOption};

/// Newtype wrapper for displaying a list of tagged exercises.
///
/// # Examples
///
/// ```rust
/// use shiba_core::display::Exercises;
///
/// let exercises = Exercises(vec![]);
/// assert_eq!(exercises.to_string(), "No exercises found.\n");
/// ```
pub struct Exercises(pub Vec<AnnotatedExercise>);

impl Exercises {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for Exercises {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No exercises found.")
        } else {
            for exercise in &self.0 {
                write!(f, "{}", exercise)?;
            }
            Ok(())
        }
    }
}

/// Newtype wrapper for displaying the substitutes of an exercise.
///
/// An empty list means the exercise exists but declares no substitutes.
pub struct SubstitutionOptions(pub Vec<SubstitutionOption>);

impl SubstitutionOptions {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for SubstitutionOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No substitutions available.")
        } else {
            for option in &self.0 {
                write!(f, "{}", option)?;
            }
            Ok(())
        }
    }
}

/// Newtype wrapper for displaying equipment of a category.
pub struct EquipmentList(pub Vec<EquipmentSummary>);

impl fmt::Display for EquipmentList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No equipment found.")
        } else {
            for equipment in &self.0 {
                write!(f, "{}", equipment)?;
            }
            Ok(())
        }
    }
}

/// Newtype wrapper for displaying a plain list of names, such as workout
/// types or equipment categories.
pub struct Names<'a> {
    pub items: Vec<String>,
    pub empty_message: &'a str,
}

impl<'a> Names<'a> {
    pub fn new(items: Vec<String>, empty_message: &'a str) -> Self {
        Self {
            items,
            empty_message,
        }
    }
}

impl fmt::Display for Names<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.items.is_empty() {
            writeln!(f, "{}", self.empty_message)
        } else {
            for item in &self.items {
                writeln!(f, "- {item}")?;
            }
            Ok(())
        }
    }
}
