use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{EquipmentCommands, ExerciseCommands, SubCommands, WorkoutCommands};

/// Workout program browser and exercise substitution tool
///
/// Shiba reads a static exercise catalog and lets you browse the program
/// week by week, look up exercises, and swap a movement for one of its
/// curated substitutes. It can also run as an MCP (Model Context Protocol)
/// server so AI assistants can answer the same questions.
#[derive(Parser)]
#[command(version, about, name = "shiba")]
pub struct Args {
    /// Path to the catalog JSON file. Defaults to
    /// $XDG_DATA_HOME/shiba/workout_database.json
    #[arg(long, global = true, env = "SHIBA_CATALOG")]
    pub catalog_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Print results as JSON instead of markdown
    #[arg(long, global = true)]
    pub json: bool,

    /// Refuse to load a catalog that lists two exercises under one ID
    #[arg(long, global = true)]
    pub strict_ids: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Shiba CLI
///
/// - `exercise`: list and show exercises
/// - `sub`: list and apply substitutions
/// - `equipment`: browse equipment by category
/// - `workout`: workout types and the program template
/// - `summary`: catalog counts
/// - `serve`: start the MCP server for AI assistant integration
#[derive(Subcommand)]
pub enum Commands {
    /// Browse exercises
    #[command(alias = "e")]
    Exercise {
        #[command(subcommand)]
        command: ExerciseCommands,
    },
    /// Exercise substitutions
    #[command(alias = "s")]
    Sub {
        #[command(subcommand)]
        command: SubCommands,
    },
    /// Browse equipment
    #[command(alias = "eq")]
    Equipment {
        #[command(subcommand)]
        command: EquipmentCommands,
    },
    /// Workout types and program template
    #[command(alias = "w")]
    Workout {
        #[command(subcommand)]
        command: WorkoutCommands,
    },
    /// Show catalog counts
    Summary,
    /// Start the MCP server
    Serve,
}
