//! Substitution candidates and the substitution transform.
//!
//! Substitution is a pure projection over the catalog. The resolver keeps no
//! record of which substitute is active for a slot; callers remember that and
//! always address the slot by its original exercise ID.
//!
//! A substitute is only valid if the original exercise declares it. Asking
//! to substitute a substitute fails, since the substitute's ID is not an
//! exercise in the catalog.

use log::debug;

use crate::{
    catalog::Catalog,
    error::NotFoundError,
    models::{Exercise, ResolvedSubstitutionView, SubstitutedExercise, SubstitutionOption},
};

/// Resolves substitution requests against a catalog.
#[derive(Debug, Clone, Copy)]
pub struct SubstitutionResolver<'a> {
    catalog: &'a Catalog,
}

impl<'a> SubstitutionResolver<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// Lists the declared substitutes of an exercise, in authoring order.
    ///
    /// # Errors
    ///
    /// Returns a `NotFoundError` of kind `OriginalExercise` if the exercise
    /// does not exist. An exercise without substitutes yields `Ok(vec![])`.
    pub fn resolve_substitutes(
        &self,
        exercise_id: &str,
    ) -> Result<Vec<SubstitutionOption>, NotFoundError> {
        let original = self.original(exercise_id)?;
        Ok(original
            .substitutions
            .iter()
            .map(SubstitutionOption::from)
            .collect())
    }

    /// Produces the record to display when `substitution_id` stands in for
    /// `original_id`.
    ///
    /// Passing the original's own ID resets the slot and returns the catalog
    /// record unchanged.
    ///
    /// # Errors
    ///
    /// - `OriginalExercise` if `original_id` is not in the catalog
    /// - `Substitution` if the original does not declare `substitution_id`
    pub fn substitute(
        &self,
        original_id: &str,
        substitution_id: &str,
    ) -> Result<ResolvedSubstitutionView, NotFoundError> {
        let original = self.original(original_id)?;

        if substitution_id == original_id {
            debug!("Reset '{original_id}' to its original exercise");
            return Ok(ResolvedSubstitutionView::Original(original.clone()));
        }

        let candidate = original
            .candidate(substitution_id)
            .ok_or_else(|| NotFoundError::substitution(substitution_id))?;

        debug!("Substituted '{original_id}' with '{substitution_id}'");
        Ok(ResolvedSubstitutionView::Substituted(
            SubstitutedExercise::merge(original, candidate),
        ))
    }

    fn original(&self, id: &str) -> Result<&'a Exercise, NotFoundError> {
        self.catalog
            .exercise(id)
            .ok_or_else(|| NotFoundError::original_exercise(id))
    }
}
