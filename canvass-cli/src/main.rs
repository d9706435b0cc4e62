use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Result, bail};
use canvass::SurveyError;
use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod file_backend;
use file_backend::{FileBackend, load_answers, load_survey};

/// Check survey documents and answer sets.
#[derive(Debug, Parser)]
#[command(name = "canvass", version)]
struct Cli {
    /// Raise the log level (-v debug, -vv trace). RUST_LOG takes precedence.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Report authoring problems in a survey document.
    Lint {
        /// Survey document (JSON).
        survey: PathBuf,
    },

    /// Show which questions a respondent sees for a set of answers.
    Visible {
        /// Survey document (JSON).
        survey: PathBuf,
        /// Answer document (JSON object keyed by question id).
        answers: PathBuf,
    },

    /// Check whether a set of answers would be accepted.
    Submit {
        /// Survey document (JSON).
        survey: PathBuf,
        /// Answer document (JSON object keyed by question id).
        answers: PathBuf,
    },

    /// Print a bundled example survey as JSON.
    Example {
        /// One of: event-feedback, product-research, customer-satisfaction, legacy-onboarding.
        name: String,
    },
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Lint { survey } => lint(survey),
        Command::Visible { survey, answers } => visible(survey, answers),
        Command::Submit { survey, answers } => submit(survey, answers),
        Command::Example { name } => example(&name),
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .or_else(|_| EnvFilter::try_new(default_level))
                .unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .try_init();
}

fn lint(survey: PathBuf) -> Result<ExitCode> {
    let definition = load_survey(&survey)?;
    let issues = definition.lint();

    if issues.is_empty() {
        println!("{}: no issues", survey.display());
        return Ok(ExitCode::SUCCESS);
    }

    for issue in &issues {
        println!("{}: {issue}", survey.display());
    }
    Ok(ExitCode::FAILURE)
}

fn visible(survey: PathBuf, answers: PathBuf) -> Result<ExitCode> {
    let definition = load_survey(&survey)?;
    let responses = load_answers(&answers)?;
    let progress = definition.progress(&responses);

    for question in definition.questions() {
        let mark = if progress.is_visible(question.id()) {
            if responses.has_answer(question.id()) {
                "[x]"
            } else {
                "[ ]"
            }
        } else {
            " - "
        };
        println!("{mark} {}  {}", question.id(), question.text());
    }
    println!(
        "progress: {}/{} answered ({}%)",
        progress.answered,
        progress.visible.len(),
        progress.percent()
    );
    Ok(ExitCode::SUCCESS)
}

fn submit(survey: PathBuf, answers: PathBuf) -> Result<ExitCode> {
    let definition = load_survey(&survey)?;

    match canvass::submit(&definition, &FileBackend::new(answers)) {
        Ok(responses) => {
            println!("accepted ({} answers)", responses.len());
            if let Some(message) = &definition.closing_message {
                println!("{message}");
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(SurveyError::Rejected(err)) => {
            println!("rejected: {err}");
            Ok(ExitCode::FAILURE)
        }
        Err(err) => Err(err.into()),
    }
}

fn example(name: &str) -> Result<ExitCode> {
    let Some(definition) = example_surveys::by_name(name) else {
        bail!(
            "unknown example '{name}', expected one of: {}",
            example_surveys::NAMES.join(", ")
        );
    };
    println!("{}", serde_json::to_string_pretty(&definition?)?);
    Ok(ExitCode::SUCCESS)
}
