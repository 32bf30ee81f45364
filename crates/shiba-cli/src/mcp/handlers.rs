//! MCP tool handlers implementation

use std::sync::Arc;

use log::debug;
use rmcp::{
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content},
    ErrorData,
};
use schemars::JsonSchema;
use serde::Deserialize;
use shiba_core::{
    display::{EquipmentList, Exercises, Names, OperationStatus, SubstitutionOptions},
    params as core, ExerciseLibrary, NotFoundError,
};

use super::errors::to_mcp_error;

// ============================================================================
// Generic Parameter Wrapper Implementation
// ============================================================================
//
// The wrapper gives any core parameter type the Deserialize and JsonSchema
// impls rmcp needs while the core types stay free of MCP concerns.
// #[serde(transparent)] passes the JSON straight through to the inner type.

/// Generic MCP wrapper for core parameter types with serde integration
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct McpParams<T>(T)
where
    T: JsonSchema;

impl<T> JsonSchema for McpParams<T>
where
    T: JsonSchema,
{
    fn schema_name() -> std::borrow::Cow<'static, str> {
        T::schema_name()
    }

    fn json_schema(g: &mut schemars::SchemaGenerator) -> schemars::Schema {
        T::json_schema(g)
    }
}

impl<T> AsRef<T> for McpParams<T>
where
    T: JsonSchema,
{
    fn as_ref(&self) -> &T {
        &self.0
    }
}

// Type aliases for cleaner usage in function signatures
pub type Id = McpParams<core::Id>;
pub type ListExercises = McpParams<core::ListExercises>;
pub type Substitute = McpParams<core::Substitute>;
pub type EquipmentCategory = McpParams<core::EquipmentCategory>;
pub type Week = McpParams<core::Week>;
pub type ShowProgram = McpParams<core::ShowProgram>;

pub type McpResult = Result<CallToolResult, ErrorData>;

/// Rejects a blank identifier before it reaches the library.
fn require_id(field: &str, value: &str) -> Result<(), ErrorData> {
    if value.trim().is_empty() {
        return Err(ErrorData::invalid_params(
            format!("{field} must not be empty"),
            None,
        ));
    }
    Ok(())
}

fn text(content: impl ToString) -> McpResult {
    Ok(CallToolResult::success(vec![Content::text(
        content.to_string(),
    )]))
}

/// Handler implementations for the MCP server
pub struct McpHandlers {
    library: Arc<ExerciseLibrary>,
}

impl McpHandlers {
    pub fn new(library: Arc<ExerciseLibrary>) -> Self {
        Self { library }
    }

    pub fn list_exercises(&self, Parameters(params): Parameters<ListExercises>) -> McpResult {
        debug!("list_exercises: {:?}", params);

        let inner_params = params.as_ref();
        let exercises = Exercises(self.library.list_exercises(inner_params));

        let title = match (inner_params.week, inner_params.workout_type.as_deref()) {
            (Some(week), Some(workout_type)) => format!("Week {week}: {workout_type}"),
            (Some(week), None) => format!("Week {week}"),
            (None, Some(workout_type)) => workout_type.to_string(),
            (None, None) => "All Exercises".to_string(),
        };

        text(format!("# {title}\n\n{exercises}"))
    }

    pub fn show_exercise(&self, Parameters(params): Parameters<Id>) -> McpResult {
        debug!("show_exercise: {:?}", params);

        let id = &params.as_ref().id;
        require_id("id", id)?;
        let exercise = self.library.exercise(params.as_ref()).ok_or_else(|| {
            ErrorData::resource_not_found(NotFoundError::original_exercise(id).to_string(), None)
        })?;

        text(exercise)
    }

    pub fn list_substitutions(&self, Parameters(params): Parameters<Id>) -> McpResult {
        debug!("list_substitutions: {:?}", params);
        require_id("id", &params.as_ref().id)?;

        let options = self
            .library
            .substitutes(params.as_ref())
            .map_err(|e| to_mcp_error("Failed to list substitutions", &e))?;

        text(format!(
            "# Substitutions for {}\n\n{}",
            params.as_ref().id,
            SubstitutionOptions(options)
        ))
    }

    pub fn substitute_exercise(&self, Parameters(params): Parameters<Substitute>) -> McpResult {
        debug!("substitute_exercise: {:?}", params);
        let inner_params = params.as_ref();
        require_id("original_id", &inner_params.original_id)?;
        require_id("substitution_id", &inner_params.substitution_id)?;

        let view = self
            .library
            .substitute(inner_params)
            .map_err(|e| to_mcp_error("Failed to substitute exercise", &e))?;

        text(view)
    }

    pub fn list_equipment_categories(&self) -> McpResult {
        debug!("list_equipment_categories");

        let categories = Names::new(
            self.library.equipment_categories(),
            "No equipment categories found.",
        );
        text(format!("# Equipment Categories\n\n{categories}"))
    }

    pub fn list_equipment(&self, Parameters(params): Parameters<EquipmentCategory>) -> McpResult {
        debug!("list_equipment: {:?}", params);

        let equipment = EquipmentList(self.library.equipment_in_category(params.as_ref()));
        text(format!("# {}\n\n{equipment}", params.as_ref().category))
    }

    pub fn list_workout_types(&self, Parameters(params): Parameters<Week>) -> McpResult {
        debug!("list_workout_types: {:?}", params);

        let week = params.as_ref().week;
        let empty = format!("No workouts scheduled in week {week}.");
        let types = Names::new(self.library.workout_types(params.as_ref()), &empty);
        text(format!("# Week {week} Workouts\n\n{types}"))
    }

    pub fn show_program(&self, Parameters(params): Parameters<ShowProgram>) -> McpResult {
        debug!("show_program: {:?}", params);
        text(self.library.template(params.as_ref()))
    }

    pub fn catalog_summary(&self) -> McpResult {
        debug!("catalog_summary");
        text(self.library.summary())
    }

    pub async fn reload_catalog(&self) -> McpResult {
        debug!("reload_catalog");

        let summary = self
            .library
            .reload()
            .await
            .map_err(|e| to_mcp_error("Failed to reload catalog", &e))?;

        let status = OperationStatus::success(format!(
            "Reloaded catalog with {} exercises.",
            summary.exercises
        ));
        text(format!("{status}\n{summary}"))
    }
}
