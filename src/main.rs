mod analyze;
mod cli;
mod config;
mod error;
mod export;
mod report;
mod scan;
mod types;

use crate::error::AuditError;
use crate::types::checks::Priority;
use crate::types::report::{AnalysisResult, QualityLevel};
use clap::Parser;
use std::path::Path;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const WARNINGS: i32 = 1;
    pub const BLOCKING: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn init_tracing(verbose: u8, quiet: bool) {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn ensure_path(path: &Path) -> Result<(), AuditError> {
    if !path.exists() {
        return Err(AuditError::PathNotFound(path.display().to_string()));
    }
    Ok(())
}

fn has_missing_required(analysis: &AnalysisResult) -> bool {
    analysis
        .missing
        .iter()
        .any(|item| item.priority == Priority::Required)
}

fn run() -> Result<i32, AuditError> {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    match cli.command {
        cli::Commands::Audit(cmd) => {
            ensure_path(&cmd.path)?;

            let loaded = config::load_config(&cmd.path)?;
            let inventory = scan::discover(&cmd.path);
            let result = analyze::audit_repository(&inventory.directories, &inventory.files);

            let format = match cmd.format {
                Some(cli::ReportFormat::Json) => report::OutputFormat::Json,
                Some(cli::ReportFormat::Md) => report::OutputFormat::Md,
                None => {
                    let configured = loaded
                        .as_ref()
                        .map(|cfg| cfg.default_format())
                        .unwrap_or("md");
                    if configured == "json" {
                        report::OutputFormat::Json
                    } else {
                        report::OutputFormat::Md
                    }
                }
            };
            let rendered = report::render(&result, format)?;
            println!("{rendered}");

            let min_level: Option<QualityLevel> = match cmd.min_level {
                Some(level) => Some(level.into()),
                None => loaded
                    .as_ref()
                    .map(|cfg| cfg.min_level())
                    .transpose()?
                    .flatten(),
            };
            if let Some(min) = min_level {
                if result.level < min {
                    eprintln!(
                        "gate: quality level {} is below the required minimum {}",
                        result.level, min
                    );
                    return Ok(exit_code::BLOCKING);
                }
            }

            if has_missing_required(&result.structure) || has_missing_required(&result.community) {
                Ok(exit_code::WARNINGS)
            } else {
                Ok(exit_code::SUCCESS)
            }
        }
        cli::Commands::Structure(cmd) => {
            ensure_path(&cmd.path)?;

            let inventory = scan::discover(&cmd.path);
            let analysis = analyze::analyze_structure(&inventory.directories);
            print_analysis("structure", &analysis);

            if has_missing_required(&analysis) {
                Ok(exit_code::WARNINGS)
            } else {
                Ok(exit_code::SUCCESS)
            }
        }
        cli::Commands::Community(cmd) => {
            ensure_path(&cmd.path)?;

            let inventory = scan::discover(&cmd.path);
            let analysis = analyze::analyze_community_standards(&inventory.files);
            print_analysis("community", &analysis);

            if has_missing_required(&analysis) {
                Ok(exit_code::WARNINGS)
            } else {
                Ok(exit_code::SUCCESS)
            }
        }
        cli::Commands::Recommend(cmd) => {
            ensure_path(&cmd.path)?;

            let inventory = scan::discover(&cmd.path);
            let result = analyze::audit_repository(&inventory.directories, &inventory.files);

            println!("recommendations:");
            for line in &result.recommendations {
                println!("- {line}");
            }

            if cmd.export {
                let plan = export::RecommendationPlan::new(result.recommendations.clone());
                let path = export::write_plan(&cmd.path, &plan)?;
                println!("plan file: {}", path.display());
            }

            Ok(exit_code::SUCCESS)
        }
    }
}

fn print_analysis(kind: &str, analysis: &AnalysisResult) {
    println!("{kind} score: {}/100", analysis.score);
    for path in &analysis.present {
        println!("present: {path}");
    }
    for item in &analysis.missing {
        println!(
            "missing [{}]: {} ({})",
            item.priority.as_str(),
            item.path,
            item.purpose
        );
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
