//! High-level query API over a shared catalog snapshot.

use std::{
    path::{Path, PathBuf},
    sync::{Arc, PoisonError, RwLock},
};

use log::{debug, info};
use tokio::task;

use crate::{
    catalog::{Catalog, DuplicatePolicy},
    equipment,
    error::{CatalogError, LoadError, Result},
    index::ExerciseIndex,
    models::{
        AnnotatedExercise, CatalogSummary, EquipmentSummary, Exercise, ProgramTemplate,
        ResolvedSubstitutionView, SubstitutionOption,
    },
    params::{EquipmentCategory, Id, ListExercises, ShowProgram, Substitute, Week},
    substitution::SubstitutionResolver,
};

const CATALOG_FILE_NAME: &str = "workout_database.json";

/// Main query interface over the exercise catalog.
///
/// Every query runs against one immutable [`Catalog`] snapshot. A reload
/// swaps the snapshot pointer in a single step, so a query in flight keeps
/// reading the catalog it started with.
#[derive(Debug)]
pub struct ExerciseLibrary {
    catalog: RwLock<Arc<Catalog>>,
    policy: DuplicatePolicy,
}

impl ExerciseLibrary {
    /// Wraps an already loaded catalog.
    pub fn from_catalog(catalog: Catalog) -> Self {
        Self::with_policy(catalog, DuplicatePolicy::default())
    }

    fn with_policy(catalog: Catalog, policy: DuplicatePolicy) -> Self {
        Self {
            catalog: RwLock::new(Arc::new(catalog)),
            policy,
        }
    }

    /// Returns the current catalog snapshot.
    pub fn snapshot(&self) -> Arc<Catalog> {
        self.catalog
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Lists exercises with their tags.
    pub fn list_exercises(&self, params: &ListExercises) -> Vec<AnnotatedExercise> {
        debug!("list_exercises: {params:?}");
        let catalog = self.snapshot();
        let index = ExerciseIndex::new(&catalog);

        let exercises: Vec<&Exercise> = match (params.week, params.workout_type.as_deref()) {
            (Some(week), Some(workout_type)) => index.exercises_for(week, workout_type),
            (week, workout_type) => catalog
                .all_exercises()
                .iter()
                .filter(|e| week.map_or(true, |w| e.week == w))
                .filter(|e| workout_type.map_or(true, |t| e.workout_type == t))
                .collect(),
        };

        exercises.into_iter().map(equipment::annotate).collect()
    }

    /// Retrieves an exercise by its ID.
    pub fn exercise(&self, params: &Id) -> Option<Exercise> {
        debug!("exercise: {params:?}");
        self.snapshot().exercise(&params.id).cloned()
    }

    /// Lists the declared substitutes of an exercise.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::NotFound` when the exercise does not exist.
    pub fn substitutes(&self, params: &Id) -> Result<Vec<SubstitutionOption>> {
        debug!("substitutes: {params:?}");
        let catalog = self.snapshot();
        Ok(SubstitutionResolver::new(&catalog).resolve_substitutes(&params.id)?)
    }

    /// Applies (or resets) a substitution.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::NotFound` naming either the original exercise or
    /// the substitution, whichever lookup failed.
    pub fn substitute(&self, params: &Substitute) -> Result<ResolvedSubstitutionView> {
        debug!("substitute: {params:?}");
        let catalog = self.snapshot();
        Ok(SubstitutionResolver::new(&catalog)
            .substitute(&params.original_id, &params.substitution_id)?)
    }

    /// Lists equipment categories, ascending.
    pub fn equipment_categories(&self) -> Vec<String> {
        equipment::categories(&self.snapshot())
    }

    /// Lists the equipment of one category.
    pub fn equipment_in_category(&self, params: &EquipmentCategory) -> Vec<EquipmentSummary> {
        debug!("equipment_in_category: {params:?}");
        equipment::equipment_by_category(&self.snapshot(), &params.category)
    }

    /// Lists the workout types of a week, ascending.
    pub fn workout_types(&self, params: &Week) -> Vec<String> {
        debug!("workout_types: {params:?}");
        ExerciseIndex::new(&self.snapshot()).workout_types_for(params.week)
    }

    /// Builds the program template, optionally for a single week.
    pub fn template(&self, params: &ShowProgram) -> ProgramTemplate {
        debug!("template: {params:?}");
        let catalog = self.snapshot();
        let index = ExerciseIndex::new(&catalog);
        match params.week {
            Some(week) => index.template_for_week(week),
            None => index.template(),
        }
    }

    /// Summarizes the loaded catalog.
    pub fn summary(&self) -> CatalogSummary {
        summarize(&self.snapshot())
    }

    /// Re-reads the catalog from its source file and swaps it in.
    ///
    /// On failure the current catalog stays in place.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Configuration` when the catalog was not loaded
    /// from a file, and `CatalogError::Load` when the file no longer loads.
    pub async fn reload(&self) -> Result<CatalogSummary> {
        let path = self
            .snapshot()
            .source()
            .map(Path::to_path_buf)
            .ok_or_else(|| CatalogError::Configuration {
                message: "catalog was not loaded from a file".to_string(),
            })?;

        let catalog = load_blocking(path, self.policy).await?;
        let summary = summarize(&catalog);

        *self.catalog.write().unwrap_or_else(PoisonError::into_inner) = Arc::new(catalog);
        info!("Catalog reloaded: {} exercises", summary.exercises);
        Ok(summary)
    }
}

fn summarize(catalog: &Catalog) -> CatalogSummary {
    CatalogSummary {
        source: catalog.source().map(|p| p.display().to_string()),
        muscles: catalog.muscles().len(),
        equipment: catalog.equipment().len(),
        exercises: catalog.all_exercises().len(),
        equipment_categories: equipment::categories(catalog).len(),
        weeks: ExerciseIndex::new(catalog).weeks(),
    }
}

async fn load_blocking(path: PathBuf, policy: DuplicatePolicy) -> Result<Catalog> {
    task::spawn_blocking(move || Catalog::from_path(&path, policy))
        .await
        .map_err(|e| CatalogError::Configuration {
            message: format!("Task join error: {e}"),
        })?
        .map_err(CatalogError::from)
}

/// Builder for creating and configuring [`ExerciseLibrary`] instances.
#[derive(Debug, Clone, Default)]
pub struct LibraryBuilder {
    catalog_path: Option<PathBuf>,
    policy: DuplicatePolicy,
}

impl LibraryBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom catalog file path.
    ///
    /// If not specified, `workout_database.json` is looked up in the XDG data
    /// directories under `shiba/` (`$XDG_DATA_HOME/shiba/` first, then
    /// `$XDG_DATA_DIRS`).
    pub fn with_catalog_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.catalog_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Sets how exercises sharing an ID are handled.
    pub fn with_duplicate_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Loads the catalog and builds the library.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Load` if no catalog file can be located or the
    /// file fails to load.
    pub async fn build(self) -> Result<ExerciseLibrary> {
        let path = match self.catalog_path {
            Some(path) => path,
            None => Self::default_catalog_path()?,
        };

        let catalog = load_blocking(path, self.policy).await?;
        Ok(ExerciseLibrary::with_policy(catalog, self.policy))
    }

    /// Locates the catalog following the XDG Base Directory specification.
    fn default_catalog_path() -> std::result::Result<PathBuf, LoadError> {
        xdg::BaseDirectories::with_prefix("shiba")
            .find_data_file(CATALOG_FILE_NAME)
            .ok_or_else(|| {
                LoadError::XdgDirectory(format!(
                    "no {CATALOG_FILE_NAME} found in the shiba data directories"
                ))
            })
    }
}
