use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::error::WorkoutError;
use crate::types::WorkoutKind;

const DEFAULT_DB_PATH: &str = "sentier.sqlite3";

#[derive(Parser, Debug)]
#[command(
    name = "sentier",
    about = "Log runs and rides on a map and keep them between sessions"
)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Option<Cmd>,

    /// SQLite file holding saved workouts
    #[arg(long, value_name = "PATH", default_value = DEFAULT_DB_PATH, global = true)]
    pub db: PathBuf,

    /// Keep workouts in memory only; nothing is saved
    #[arg(long, global = true)]
    pub memory: bool,

    /// Latitude of your current position. Without a position there is no map.
    #[arg(long, allow_hyphen_values = true, global = true)]
    pub home_lat: Option<f64>,

    /// Longitude of your current position
    #[arg(long, allow_hyphen_values = true, global = true)]
    pub home_lng: Option<f64>,

    /// Increase log verbosity (-v, -vv). Defaults to INFO.
    #[arg(short = 'v', long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Decrease log verbosity (-q, -qq). Defaults to INFO.
    #[arg(short = 'q', long, action = ArgAction::Count, global = true)]
    pub quiet: u8,
}

#[derive(Subcommand, Debug)]
pub enum Cmd {
    /// Click the map at a spot and submit a workout there
    Add(WorkoutArgs),
    /// Print the workout list (default)
    List {
        /// Print the sidebar markup instead of a table
        #[arg(long)]
        html: bool,
    },
    /// Click a workout in the list and move the map to it
    Focus { id: u64 },
    /// Delete every saved workout
    Reset,
}

/// The new-workout form, field by field.
#[derive(Args, Debug)]
pub struct WorkoutArgs {
    /// Workout type: running or cycling
    #[arg(long = "type", value_name = "TYPE", default_value = "running", value_parser = parse_kind)]
    pub kind: WorkoutKind,

    /// Latitude of the map click
    #[arg(long, allow_hyphen_values = true)]
    pub lat: f64,

    /// Longitude of the map click
    #[arg(long, allow_hyphen_values = true)]
    pub lng: f64,

    /// Kilometers
    #[arg(long, allow_hyphen_values = true)]
    pub distance: f64,

    /// Minutes
    #[arg(long, allow_hyphen_values = true)]
    pub duration: f64,

    /// Steps per minute (running)
    #[arg(long, allow_hyphen_values = true)]
    pub cadence: Option<f64>,

    /// Meters climbed (cycling)
    #[arg(long, allow_hyphen_values = true)]
    pub elev_gain: Option<f64>,
}

fn parse_kind(s: &str) -> Result<WorkoutKind, WorkoutError> {
    s.parse()
}
