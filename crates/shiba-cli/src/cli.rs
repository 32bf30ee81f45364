//! Command-line interface definitions and command execution
//!
//! Each subcommand takes a clap `Args` struct that converts into the matching
//! core parameter type:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → ExerciseLibrary
//! ```
//!
//! Core parameter types stay free of clap derives, so the CLI can grow
//! aliases and help text without touching `shiba_core::params`.

use std::fmt::Display;

use anyhow::{anyhow, Context, Result};
use clap::{builder::NonEmptyStringValueParser, Args, Subcommand};
use serde::Serialize;
use shiba_core::{
    params::*, EquipmentList, ExerciseLibrary, Exercises, Names, SubstitutionOptions,
};

use crate::renderer::TerminalRenderer;

// ============================================================================
// CLI Argument Wrapper Implementations
// ============================================================================

/// List exercises
///
/// With both --week and --workout-type, lists one workout in program order.
/// Either flag alone narrows the list; with neither, every exercise in the
/// catalog is listed.
#[derive(Args)]
pub struct ListExercisesArgs {
    /// Program week to list
    #[arg(short, long, help = "Program week to list")]
    pub week: Option<i64>,
    /// Workout type within the week
    #[arg(
        short = 't',
        long,
        help = "Workout type within the week, e.g. \"Upper (Strength)\""
    )]
    pub workout_type: Option<String>,
}

impl From<ListExercisesArgs> for ListExercises {
    fn from(val: ListExercisesArgs) -> Self {
        ListExercises {
            week: val.week,
            workout_type: val.workout_type,
        }
    }
}

/// Show details of a specific exercise
#[derive(Args)]
pub struct ShowExerciseArgs {
    #[arg(
        value_parser = NonEmptyStringValueParser::new(),
        help = "ID of the exercise to show"
    )]
    pub id: String,
}

impl From<ShowExerciseArgs> for Id {
    fn from(val: ShowExerciseArgs) -> Self {
        Id { id: val.id }
    }
}

/// List the substitutes of an exercise
#[derive(Args)]
pub struct ListSubstitutionsArgs {
    #[arg(
        value_parser = NonEmptyStringValueParser::new(),
        help = "ID of the exercise whose substitutes to list"
    )]
    pub id: String,
}

impl From<ListSubstitutionsArgs> for Id {
    fn from(val: ListSubstitutionsArgs) -> Self {
        Id { id: val.id }
    }
}

/// Show an exercise with one of its substitutes swapped in
///
/// The substitute keeps the original's place in the program: week, workout,
/// sets, reps, rest and notes come from the original exercise. Passing the
/// original ID twice shows the original unchanged.
#[derive(Args)]
pub struct ApplySubstitutionArgs {
    #[arg(
        value_parser = NonEmptyStringValueParser::new(),
        help = "ID of the exercise as it appears in the program"
    )]
    pub original_id: String,
    #[arg(
        value_parser = NonEmptyStringValueParser::new(),
        help = "ID of the substitute, or the original ID to reset"
    )]
    pub substitution_id: String,
}

impl From<ApplySubstitutionArgs> for Substitute {
    fn from(val: ApplySubstitutionArgs) -> Self {
        Substitute {
            original_id: val.original_id,
            substitution_id: val.substitution_id,
        }
    }
}

/// List equipment of one category
#[derive(Args)]
pub struct ListEquipmentArgs {
    #[arg(help = "Equipment category, matched exactly (e.g. \"Free Weight\")")]
    pub category: String,
}

impl From<ListEquipmentArgs> for EquipmentCategory {
    fn from(val: ListEquipmentArgs) -> Self {
        EquipmentCategory {
            category: val.category,
        }
    }
}

/// List the workout types scheduled in a week
#[derive(Args)]
pub struct WorkoutTypesArgs {
    #[arg(help = "Program week")]
    pub week: i64,
}

impl From<WorkoutTypesArgs> for Week {
    fn from(val: WorkoutTypesArgs) -> Self {
        Week { week: val.week }
    }
}

/// Show the program template
#[derive(Args)]
pub struct ShowProgramArgs {
    /// Restrict the template to one week
    #[arg(short, long, help = "Restrict the template to one week")]
    pub week: Option<i64>,
}

impl From<ShowProgramArgs> for ShowProgram {
    fn from(val: ShowProgramArgs) -> Self {
        ShowProgram { week: val.week }
    }
}

#[derive(Subcommand)]
pub enum ExerciseCommands {
    /// List exercises, optionally for one workout
    #[command(aliases = ["l", "ls"])]
    List(ListExercisesArgs),
    /// Show details of a specific exercise
    #[command(alias = "s")]
    Show(ShowExerciseArgs),
}

#[derive(Subcommand)]
pub enum SubCommands {
    /// List the substitutes of an exercise
    #[command(aliases = ["l", "ls"])]
    List(ListSubstitutionsArgs),
    /// Show an exercise with a substitute swapped in
    #[command(alias = "a")]
    Apply(ApplySubstitutionArgs),
}

#[derive(Subcommand)]
pub enum EquipmentCommands {
    /// List equipment categories
    #[command(alias = "c")]
    Categories,
    /// List equipment of one category
    #[command(aliases = ["l", "ls"])]
    List(ListEquipmentArgs),
}

#[derive(Subcommand)]
pub enum WorkoutCommands {
    /// List the workout types of a week
    #[command(alias = "t")]
    Types(WorkoutTypesArgs),
    /// Show the program template, grouped by week and workout
    #[command(alias = "p")]
    Template(ShowProgramArgs),
}

// ============================================================================
// Command Execution
// ============================================================================

/// Runs CLI commands against the library and prints their results.
pub struct Cli {
    library: ExerciseLibrary,
    renderer: TerminalRenderer,
    json: bool,
}

impl Cli {
    pub fn new(library: ExerciseLibrary, renderer: TerminalRenderer, json: bool) -> Self {
        Self {
            library,
            renderer,
            json,
        }
    }

    pub fn handle_exercise_command(&self, command: ExerciseCommands) -> Result<()> {
        match command {
            ExerciseCommands::List(args) => self.list_exercises(&args.into()),
            ExerciseCommands::Show(args) => self.show_exercise(&args.into()),
        }
    }

    pub fn handle_sub_command(&self, command: SubCommands) -> Result<()> {
        match command {
            SubCommands::List(args) => {
                let params: Id = args.into();
                let options = self
                    .library
                    .substitutes(&params)
                    .context("Failed to list substitutions")?;
                self.emit(&options, SubstitutionOptions(options.clone()))
            }
            SubCommands::Apply(args) => {
                let view = self
                    .library
                    .substitute(&args.into())
                    .context("Failed to substitute exercise")?;
                self.emit(&view, &view)
            }
        }
    }

    pub fn handle_equipment_command(&self, command: EquipmentCommands) -> Result<()> {
        match command {
            EquipmentCommands::Categories => {
                let categories = self.library.equipment_categories();
                self.emit(
                    &categories,
                    Names::new(categories.clone(), "No equipment categories found."),
                )
            }
            EquipmentCommands::List(args) => {
                let equipment = self.library.equipment_in_category(&args.into());
                self.emit(&equipment, EquipmentList(equipment.clone()))
            }
        }
    }

    pub fn handle_workout_command(&self, command: WorkoutCommands) -> Result<()> {
        match command {
            WorkoutCommands::Types(args) => {
                let params: Week = args.into();
                let types = self.library.workout_types(&params);
                let empty = format!("No workouts scheduled in week {}.", params.week);
                self.emit(&types, Names::new(types.clone(), &empty))
            }
            WorkoutCommands::Template(args) => {
                let template = self.library.template(&args.into());
                self.emit(&template, &template)
            }
        }
    }

    pub fn list_exercises(&self, params: &ListExercises) -> Result<()> {
        let exercises = self.library.list_exercises(params);
        self.emit(&exercises, Exercises(exercises.clone()))
    }

    pub fn show_exercise(&self, params: &Id) -> Result<()> {
        let exercise = self
            .library
            .exercise(params)
            .ok_or_else(|| anyhow!("Exercise '{}' not found", params.id))?;
        self.emit(&exercise, &exercise)
    }

    pub fn summary(&self) -> Result<()> {
        let summary = self.library.summary();
        self.emit(&summary, &summary)
    }

    /// Prints `data` as pretty JSON in `--json` mode, else renders `text`.
    fn emit(&self, data: &impl Serialize, text: impl Display) -> Result<()> {
        if self.json {
            let json = serde_json::to_string_pretty(data).context("Failed to encode JSON")?;
            println!("{json}");
            Ok(())
        } else {
            self.renderer.render(&text.to_string())
        }
    }
}
