use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "sprintkit",
    version,
    about = "Agile reporting CLI: RICE prioritization, sprint velocity and burndown"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score and rank features with RICE
    Rice(RiceCommand),
    /// Velocity metrics and next-sprint capacity from a sprint status file
    Velocity(VelocityCommand),
    /// Daily burndown series for one sprint
    Burndown(BurndownCommand),
}

#[derive(Args)]
pub struct RiceCommand {
    /// Load features from CSV (name,reach,impact,confidence,effort)
    #[arg(short, long, value_name = "FILE")]
    pub batch: Option<PathBuf>,

    /// Export the ranking to CSV
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Skip the automatic <input>_results.csv export in batch mode
    #[arg(long, conflicts_with = "output")]
    pub no_export: bool,
}

#[derive(Args)]
pub struct VelocityCommand {
    pub path: PathBuf,
}

#[derive(Args)]
pub struct BurndownCommand {
    pub path: PathBuf,

    /// Sprint number; defaults to current_sprint
    pub sprint: Option<u32>,

    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ReportFormat {
    Table,
    Csv,
    Json,
}
