use std::io::Read;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use dwi_core::models::screening::ScreeningInput;
use dwi_core::models::student::{Paperwork, Student};
use dwi_screening::{answer_key, record, score, validate};
use serde::Serialize;

use crate::config::{self, ScreenConfig};

#[derive(Debug, Parser)]
#[command(name = "dwi-screen", version, about = "NDP screening for DWI intake paperwork", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Score a screening (JSON object or null)
    Score {
        /// Fail on the first answer outside the questionnaire's vocabulary
        #[arg(long)]
        strict: bool,
        /// Screening JSON file; `-` or omitted reads stdin
        file: Option<PathBuf>,
    },
    /// Recompute the NDP score on a student record
    Student {
        /// Student JSON file; `-` or omitted reads stdin
        file: Option<PathBuf>,
    },
    /// Attach new paperwork to a student record
    Paperwork {
        /// Student JSON file
        student: PathBuf,
        /// Paperwork JSON file
        paperwork: PathBuf,
    },
    /// Print the MAST answer key
    AnswerKey,
    /// Write the default config file
    InitConfig,
}

/// Read a JSON document from `path`, or stdin when it is absent or `-`.
pub fn read_input(path: Option<&Path>) -> eyre::Result<String> {
    match path {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .map_err(|e| eyre::eyre!("failed to read {}: {e}", path.display())),
        _ => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

/// Execute a command and return what should be written to stdout.
pub fn run(command: &Command, config: &ScreenConfig) -> eyre::Result<String> {
    match command {
        Command::Score { strict, file } => {
            let input: Option<ScreeningInput> =
                serde_json::from_str(&read_input(file.as_deref())?)?;
            if let Some(input) = &input {
                if *strict {
                    validate::ensure_valid(input)?;
                } else {
                    for warning in validate::validate_input(input) {
                        tracing::warn!(question = warning.question, "{warning}");
                    }
                }
            }
            render(&score(input.as_ref()), config)
        }
        Command::Student { file } => {
            let mut student = Student::from_json(&read_input(file.as_deref())?)?;
            record::recompute(&mut student);
            render(&student, config)
        }
        Command::Paperwork { student, paperwork } => {
            let mut record = Student::from_json(&read_input(Some(student.as_path()))?)?;
            let paperwork: Paperwork = serde_json::from_str(&read_input(Some(paperwork.as_path()))?)?;
            record::update_paperwork(&mut record, paperwork, jiff::Timestamp::now());
            render(&record, config)
        }
        Command::AnswerKey => {
            let key: Vec<KeyEntry> = answer_key::entries()
                .map(|(question, answer)| KeyEntry {
                    question,
                    answer: answer.as_str(),
                })
                .collect();
            render(&key, config)
        }
        Command::InitConfig => {
            let path = config::save_config(&ScreenConfig::default())?;
            Ok(path.display().to_string())
        }
    }
}

#[derive(Serialize)]
struct KeyEntry {
    question: u32,
    answer: &'static str,
}

fn render<T: Serialize>(value: &T, config: &ScreenConfig) -> eyre::Result<String> {
    let out = if config.pretty_output {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(out)
}
