use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use job_vacancies::app;
use job_vacancies::config::Config;
use job_vacancies::data::model::FilterCriteria;
use job_vacancies::data::pipeline::CsvPipeline;
use job_vacancies::error::{EXIT_FAILURE, EXIT_USAGE, VacancyError};
use job_vacancies::prompt::SelectionPrompt;
use job_vacancies::question::Question;

#[derive(Parser)]
#[command(author, version, about = "Filter and chart Canadian job vacancy data")]
struct Cli {
    /// JSON config file (defaults to $JOB_VACANCIES_CONFIG, then built-ins).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Override the plotting file path.
    #[arg(long, global = true)]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Answer one of the survey questions (1-4), prompting for each category.
    Question {
        number: u8,
        input: PathBuf,
        /// Category code in prompt order; give one per menu to skip prompting.
        #[arg(long = "select", value_name = "CODE", allow_negative_numbers = true)]
        select: Vec<i64>,
    },
    /// Filter by exact dataset labels, without prompting.
    Filter {
        input: PathBuf,
        /// Occupation classification label.
        #[arg(long)]
        occupation: String,
        /// Job characteristic label (recruitment, education or duration).
        #[arg(long)]
        characteristic: String,
    },
    /// Chart a plotting file over time.
    Plot { csv: PathBuf },
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::from(EXIT_USAGE)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            let code = e
                .downcast_ref::<VacancyError>()
                .map(VacancyError::exit_code)
                .unwrap_or(EXIT_FAILURE);
            ExitCode::from(code)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(output) = cli.output {
        config.output_path = output;
    }

    match cli.command {
        Command::Question {
            number,
            input,
            select,
        } => {
            let question = Question::get(number)?;
            for (catalog, code, label) in question.unreachable_codes() {
                log::warn!(
                    "question {number}: {catalog} code {code} ({label}) exists but is not offered"
                );
            }

            let criteria = if select.is_empty() {
                println!("{}", question.title);
                question.prompt(&mut SelectionPrompt::stdio())?
            } else {
                question.resolve(&select)?
            };
            filter(&config, &input, &criteria)
        }
        Command::Filter {
            input,
            occupation,
            characteristic,
        } => filter(&config, &input, &FilterCriteria::new(occupation, characteristic)),
        Command::Plot { csv } => app::render(&csv, config.window)
            .with_context(|| format!("charting {}", csv.display())),
    }
}

fn filter(config: &Config, input: &Path, criteria: &FilterCriteria) -> Result<()> {
    let pipeline = CsvPipeline::new(config.layout);
    let summary = if config.echo {
        let stdout = io::stdout();
        let mut lock = stdout.lock();
        let summary = pipeline.run(input, &config.output_path, criteria, &mut lock)?;
        lock.flush()?;
        summary
    } else {
        pipeline.run(input, &config.output_path, criteria, &mut io::sink())?
    };

    if summary.malformed > 0 {
        log::warn!("{} malformed rows skipped", summary.malformed);
    }
    log::info!(
        "{} matching rows written to {}",
        summary.matched,
        config.output_path.display()
    );
    Ok(())
}
