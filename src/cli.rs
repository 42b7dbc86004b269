use crate::types::report::QualityLevel;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "repoaudit",
    version,
    about = "Repository structure and community standards audit CLI"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all logging except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    Audit(AuditCommand),
    Structure(StructureCommand),
    Community(CommunityCommand),
    Recommend(RecommendCommand),
}

#[derive(Clone, Debug, ValueEnum)]
pub enum ReportFormat {
    Md,
    Json,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum LevelArg {
    Raw,
    Bronze,
    Silver,
    Gold,
    Rhodium,
}

impl From<LevelArg> for QualityLevel {
    fn from(level: LevelArg) -> Self {
        match level {
            LevelArg::Raw => QualityLevel::Raw,
            LevelArg::Bronze => QualityLevel::Bronze,
            LevelArg::Silver => QualityLevel::Silver,
            LevelArg::Gold => QualityLevel::Gold,
            LevelArg::Rhodium => QualityLevel::Rhodium,
        }
    }
}

#[derive(Args)]
pub struct AuditCommand {
    pub path: PathBuf,
    /// Report format; falls back to [report].format, then md
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
    /// Exit with the blocking code when the audited level is below this
    #[arg(long, value_enum)]
    pub min_level: Option<LevelArg>,
}

#[derive(Args)]
pub struct StructureCommand {
    pub path: PathBuf,
}

#[derive(Args)]
pub struct CommunityCommand {
    pub path: PathBuf,
}

#[derive(Args)]
pub struct RecommendCommand {
    pub path: PathBuf,
    /// Write the recommendations to a plan file under .repoaudit/plans/
    #[arg(long)]
    pub export: bool,
}
