mod burndown;
mod cli;
mod config;
mod error;
mod logging;
mod report;
mod rice;
mod status;
mod types;
mod velocity;

use crate::error::{Result, SprintKitError};
use clap::Parser;
use std::io;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    /// Interactive cancel is a clean exit.
    pub const CANCELLED: i32 = 0;
    pub const RUNTIME_FAILURE: i32 = 1;
}

const CANCEL_MESSAGE: &str = "\n\nOperation cancelled by user";

fn register_cancel_handler() {
    let installed = ctrlc::set_handler(|| {
        println!("{CANCEL_MESSAGE}");
        std::process::exit(exit_code::CANCELLED);
    });
    if let Err(e) = installed {
        tracing::warn!("could not install Ctrl+C handler: {e}");
    }
}

fn run() -> Result<i32> {
    let cli = cli::Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    let cwd = std::env::current_dir()?;
    let settings = config::load_config(&cwd)?.unwrap_or_default();

    match cli.command {
        cli::Commands::Rice(cmd) => {
            let features = match &cmd.batch {
                Some(path) => rice::batch::load_features(path)?,
                None => {
                    register_cancel_handler();
                    let stdin = io::stdin();
                    rice::interactive::Prompter::new(stdin.lock(), io::stdout())
                        .collect_features()?
                }
            };

            let ranking = rice::rank(&features);
            let export = match (&cmd.output, &cmd.batch) {
                (Some(output), _) => Some(output.clone()),
                (None, Some(batch)) if !cmd.no_export && settings.auto_export() => {
                    Some(rice::batch::default_export_path(batch))
                }
                _ => None,
            };
            if let Some(path) = &export {
                report::delimited::write_ranking(path, &ranking)?;
            }

            println!("{}", report::text::ranking_table(&ranking));
            if let Some(path) = export {
                println!("Results exported to: {}", path.display());
            }
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Velocity(cmd) => {
            let status = status::load_status(&cmd.path)?;
            let velocity_report = velocity::analyze(&status, settings.default_capacity());
            println!("{}", report::text::velocity_report(&velocity_report));
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Burndown(cmd) => {
            let status = status::load_status(&cmd.path)?;
            let sprint = burndown::select_sprint(&status, cmd.sprint)?;
            let series = burndown::generate(sprint)?;

            let output_format = match cmd.format {
                Some(cli::ReportFormat::Table) => report::OutputFormat::Table,
                Some(cli::ReportFormat::Csv) => report::OutputFormat::Csv,
                Some(cli::ReportFormat::Json) => report::OutputFormat::Json,
                None => settings.burndown_format(),
            };
            let rendered = report::render_burndown(&series, sprint, output_format)?;
            println!("{rendered}");
            Ok(exit_code::SUCCESS)
        }
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(SprintKitError::Cancelled) => {
            println!("{CANCEL_MESSAGE}");
            std::process::exit(exit_code::CANCELLED);
        }
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
