//! Parameter structures for catalog queries
//!
//! These structures are shared by every interface (CLI, MCP) without carrying
//! framework-specific derives. Interface layers wrap them:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │   MCP Params    │    │  Core Params    │
//! │  (clap derives) │───▶│ (serde derives) │───▶│ (minimal deps)  │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! The CLI converts its clap `Args` structs with `From` impls; the MCP layer
//! deserializes these types directly through a transparent wrapper and gets
//! their JSON schema from the optional `schema` feature.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Parameters for operations addressing a single exercise.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Id {
    /// The exercise ID
    pub id: String,
}

/// Parameters for listing exercises.
///
/// With both `week` and `workout_type` set, lists one workout. Either field
/// alone narrows the list by that field; with neither, every exercise is
/// listed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ListExercises {
    /// Program week to list
    #[serde(default)]
    pub week: Option<i64>,
    /// Workout type within the week, e.g. "Upper (Strength)"
    #[serde(default)]
    pub workout_type: Option<String>,
}

/// Parameters for substituting an exercise.
///
/// `substitution_id` must be one of the substitutes declared by the exercise
/// `original_id`, or `original_id` itself to reset the slot.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Substitute {
    /// ID of the exercise as it appears in the program
    pub original_id: String,
    /// ID of the substitute to show instead
    pub substitution_id: String,
}

/// Parameters for listing equipment of one category.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct EquipmentCategory {
    /// Category name, matched exactly (e.g. "Free Weight")
    pub category: String,
}

/// Parameters for week-scoped queries.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Week {
    /// Program week
    pub week: i64,
}

/// Parameters for showing the program template.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ShowProgram {
    /// Restrict the template to one week
    #[serde(default)]
    pub week: Option<i64>,
}
