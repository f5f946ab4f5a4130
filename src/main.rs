mod answers;
mod bank;
mod cli;
mod config;
mod error;
mod interactive;
mod recommend;
mod report;
mod score;
mod session;
mod sheet;
mod telemetry;
mod types;

use crate::bank::Instrument;
use crate::error::{AssessError, Result};
use crate::types::config::FitcheckConfig;
use crate::types::report::AssessmentReport;
use chrono::Utc;
use clap::Parser;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const WARNINGS: i32 = 1;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn output_format(
    requested: Option<cli::ReportFormat>,
    config: &FitcheckConfig,
) -> report::OutputFormat {
    match requested {
        Some(cli::ReportFormat::Json) => report::OutputFormat::Json,
        Some(cli::ReportFormat::Md) => report::OutputFormat::Md,
        None => config
            .report_format()
            .and_then(report::OutputFormat::from_name)
            .unwrap_or(report::OutputFormat::Md),
    }
}

fn print_questions(instrument: Instrument) {
    println!("## {} ({} questions)", instrument.title(), instrument.len());
    for prompt in instrument.prompts() {
        println!();
        println!("{} [{}] {}", prompt.id, prompt.section, prompt.text);
        for option in &prompt.options {
            println!("  - {}: {}", option.key, option.label);
        }
    }
    println!();
}

fn run() -> Result<i32> {
    let cli = cli::Cli::parse();
    let loaded = config::load_config(cli.config.as_deref())?;
    let level = telemetry::level_for_flags(cli.verbose, cli.quiet).unwrap_or(loaded.log_level());
    telemetry::init(level)?;
    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "fitcheck starting");

    match cli.command {
        cli::Commands::Questions(cmd) => {
            let selected = match cmd.instrument {
                Some(cli::InstrumentArg::Psychometric) => vec![Instrument::Psychometric],
                Some(cli::InstrumentArg::Technical) => vec![Instrument::Technical],
                Some(cli::InstrumentArg::Wiscar) => vec![Instrument::Wiscar],
                None => Instrument::ALL.to_vec(),
            };
            for instrument in selected {
                print_questions(instrument);
            }
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Score(cmd) => {
            let collected = sheet::load_sheet(&cmd.sheet)?.collect()?;
            let psychometric = score::score_psychometric(&collected.psychometric);
            let technical = score::score_technical(&collected.technical);
            let wiscar = score::score_wiscar(&collected.wiscar);
            let result =
                recommend::recommend_with(&psychometric, &technical, &wiscar, &loaded.thresholds());

            let assessment = AssessmentReport {
                generated_at: Utc::now().to_rfc3339(),
                psychometric,
                technical,
                wiscar,
                result,
            };
            let rendered = report::render(&assessment, output_format(cmd.format, &loaded))?;
            println!("{rendered}");

            if collected.unanswered.is_empty() {
                return Ok(exit_code::SUCCESS);
            }
            let ids = collected
                .unanswered
                .iter()
                .map(|(instrument, id)| format!("{}.{}", instrument.key(), id))
                .collect::<Vec<_>>();
            eprintln!(
                "warning: {} unanswered question(s) scored with defaults: {}",
                ids.len(),
                ids.join(", ")
            );
            Ok(exit_code::WARNINGS)
        }
        cli::Commands::Take(cmd) => {
            let stdin = std::io::stdin();
            let mut stdout = std::io::stdout();
            let session = interactive::run(
                stdin.lock(),
                &mut stdout,
                session::Session::new(loaded.thresholds()),
            )?;

            let (psychometric, technical, wiscar) = session
                .results()
                .ok_or(AssessError::IncompleteSession)?;
            let result = session.final_result().ok_or(AssessError::IncompleteSession)?;
            let assessment = AssessmentReport {
                generated_at: Utc::now().to_rfc3339(),
                psychometric,
                technical,
                wiscar,
                result,
            };
            let rendered = report::render(&assessment, output_format(cmd.format, &loaded))?;
            println!();
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
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
