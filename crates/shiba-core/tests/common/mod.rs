use std::path::PathBuf;

use shiba_core::{Catalog, DuplicatePolicy, ExerciseLibrary};

/// Path of the catalog fixture shared by the integration tests
pub fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("workout_database.json")
}

/// Helper function to load the fixture catalog
pub fn fixture_catalog() -> Catalog {
    Catalog::from_path(fixture_path(), DuplicatePolicy::FirstWins)
        .expect("Failed to load fixture catalog")
}

/// Helper function to create a library over the fixture catalog
#[allow(dead_code)]
pub fn fixture_library() -> ExerciseLibrary {
    ExerciseLibrary::from_catalog(fixture_catalog())
}
