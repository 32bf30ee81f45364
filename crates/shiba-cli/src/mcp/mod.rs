//! MCP server implementation for Shiba
//!
//! Exposes the catalog queries as Model Context Protocol tools so AI
//! assistants can browse the program and swap exercises.

use std::sync::Arc;

use anyhow::Result;
use log::{debug, error, info};
use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{Implementation, ProtocolVersion, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ServerHandler,
};
use shiba_core::ExerciseLibrary;
use tokio::signal::unix::{signal, SignalKind};

pub mod errors;
pub mod handlers;

pub use handlers::{
    EquipmentCategory, Id, ListExercises, McpResult, ShowProgram, Substitute, Week,
};

/// MCP server for Shiba
#[derive(Clone)]
pub struct ShibaMcpServer {
    library: Arc<ExerciseLibrary>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl ShibaMcpServer {
    /// Create a new Shiba MCP server
    pub fn new(library: ExerciseLibrary) -> Self {
        Self {
            library: Arc::new(library),
            tool_router: Self::tool_router(),
        }
    }

    fn handlers(&self) -> handlers::McpHandlers {
        handlers::McpHandlers::new(self.library.clone())
    }

    #[tool(
        name = "list_exercises",
        description = "List exercises with their tags. Give both week and workout_type (e.g. week=1, workout_type=\"Upper (Strength)\") to get one workout in program order. Either field alone narrows the list; with neither, every exercise is listed. An empty result means nothing is scheduled there."
    )]
    async fn list_exercises(&self, params: Parameters<ListExercises>) -> McpResult {
        self.handlers().list_exercises(params)
    }

    #[tool(
        name = "show_exercise",
        description = "Show one exercise by ID: muscle, equipment, week, workout, sets, reps, RPE, rest, notes, tutorial link and its declared substitutes."
    )]
    async fn show_exercise(&self, params: Parameters<Id>) -> McpResult {
        self.handlers().show_exercise(params)
    }

    #[tool(
        name = "list_substitutions",
        description = "List the curated substitutes of an exercise, in declared order, with their equipment, muscle and body part. An exercise with no substitutes returns an empty list; an unknown exercise ID is an error."
    )]
    async fn list_substitutions(&self, params: Parameters<Id>) -> McpResult {
        self.handlers().list_substitutions(params)
    }

    #[tool(
        name = "substitute_exercise",
        description = "Show an exercise with one of its substitutes swapped in. The result takes name, muscle, equipment and body part from the substitute, and week, workout, working sets, reps, rest and notes from the original. Pass substitution_id equal to original_id to get the original back. The substitute must be declared by the original exercise."
    )]
    async fn substitute_exercise(&self, params: Parameters<Substitute>) -> McpResult {
        self.handlers().substitute_exercise(params)
    }

    #[tool(
        name = "list_equipment_categories",
        description = "List the distinct equipment categories in the catalog, sorted."
    )]
    async fn list_equipment_categories(&self) -> McpResult {
        self.handlers().list_equipment_categories()
    }

    #[tool(
        name = "list_equipment",
        description = "List the equipment of one category (exact, case-sensitive match, e.g. \"Free Weight\") with subcategory, mobility and resistance type."
    )]
    async fn list_equipment(&self, params: Parameters<EquipmentCategory>) -> McpResult {
        self.handlers().list_equipment(params)
    }

    #[tool(
        name = "list_workout_types",
        description = "List the workout types scheduled in a program week, sorted. Use the names with list_exercises."
    )]
    async fn list_workout_types(&self, params: Parameters<Week>) -> McpResult {
        self.handlers().list_workout_types(params)
    }

    #[tool(
        name = "show_program",
        description = "Show the program template: every week, its workouts, and each workout's exercises with working sets and reps. Pass week to restrict it to one week."
    )]
    async fn show_program(&self, params: Parameters<ShowProgram>) -> McpResult {
        self.handlers().show_program(params)
    }

    #[tool(
        name = "catalog_summary",
        description = "Summarize the loaded catalog: source file, muscle, equipment and exercise counts, and the weeks the program covers."
    )]
    async fn catalog_summary(&self) -> McpResult {
        self.handlers().catalog_summary()
    }

    #[tool(
        name = "reload_catalog",
        description = "Re-read the catalog file and swap it in. If the file no longer loads, the current catalog stays active and an error is returned."
    )]
    async fn reload_catalog(&self) -> McpResult {
        self.handlers().reload_catalog().await
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for ShibaMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "shiba".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Implementation::from_build_env()
            },
            instructions: Some(r#"Shiba answers questions about a fixed workout program and its exercise catalog.

## Core Concepts
- **Exercises**: scheduled movements identified by ID, each placed in a program week and a workout type such as "Upper (Strength)"
- **Substitutions**: curated alternatives an exercise declares; swapping one in keeps the original's week, workout, sets, reps, rest and notes
- **Equipment**: catalog entries grouped by category

## Workflow Examples

### Planning a Session
1. `list_workout_types` for the week
2. `list_exercises` with week and workout_type to get the session in order
3. `show_exercise` for full prescription details

### Swapping an Exercise
1. `list_substitutions` for the exercise ID
2. `substitute_exercise` with the original ID and the chosen substitute
3. `substitute_exercise` with the original ID twice to go back

## Tool Categories
- **Program**: list_workout_types, list_exercises, show_exercise, show_program
- **Substitution**: list_substitutions, substitute_exercise
- **Equipment**: list_equipment_categories, list_equipment
- **Catalog**: catalog_summary, reload_catalog"#.to_string()),
        }
    }
}

/// Run the MCP server with stdio transport
pub async fn run_stdio_server(server: ShibaMcpServer) -> Result<()> {
    use rmcp::{transport::stdio, ServiceExt};

    info!("Starting Shiba MCP server on stdio");
    debug!(
        "Server created with {} tools",
        server.tool_router.list_all().len()
    );

    let service = server.serve(stdio()).await.inspect_err(|e| {
        error!("serving error: {e:?}");
    })?;

    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;

    tokio::select! {
        result = service.waiting() => {
            match result {
                Ok(_) => info!("MCP server stopped normally"),
                Err(e) => error!("MCP server error: {e:?}"),
            }
        }
        _ = sigint.recv() => {
            info!("Received SIGINT, shutting down gracefully...");
        }
        _ = sigterm.recv() => {
            info!("Received SIGTERM, shutting down gracefully...");
        }
    }

    info!("MCP server shutdown complete");
    Ok(())
}
