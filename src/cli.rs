use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "fitcheck",
    version,
    about = "Design Systems Specialist self-assessment scoring CLI"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Config file to use instead of ./fitcheck.toml
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the question bank
    Questions(QuestionsCommand),
    /// Score a completed answer sheet
    Score(ScoreCommand),
    /// Take the assessment interactively
    Take(TakeCommand),
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum InstrumentArg {
    Psychometric,
    Technical,
    Wiscar,
}

#[derive(Args)]
pub struct QuestionsCommand {
    #[arg(short, long, value_enum)]
    pub instrument: Option<InstrumentArg>,
}

#[derive(Args)]
pub struct ScoreCommand {
    /// Answer sheet (.toml or .json)
    pub sheet: PathBuf,
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
}

#[derive(Args)]
pub struct TakeCommand {
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}
