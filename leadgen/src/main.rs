//! Entry point for the lead pipeline binary

use std::path::PathBuf;
use clap::Parser;

use leadgen::{CsvFileSink, JsonFileSource, LeadgenResult, Pipeline, PipelineConfig};
use shared::{Stage, logging, stage_debug};

/// Normalize, deduplicate and score company leads for the corn-starch supply chain
#[derive(Parser)]
#[command(name = "leadgen")]
#[command(about = "Cleans scraped company records and scores them as corn-starch leads")]
pub struct Args {
    /// JSON file holding an array of raw company records
    #[arg(long, default_value = "input_data.json")]
    pub input: PathBuf,

    /// CSV destination for the scored leads
    #[arg(long, default_value = "cleaned_leads.csv")]
    pub output: PathBuf,

    /// Optional JSON rubric overriding the default weights and keywords
    #[arg(long)]
    pub rubric: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl From<Args> for PipelineConfig {
    fn from(args: Args) -> Self {
        Self {
            input: args.input,
            output: args.output,
            rubric: args.rubric,
            log_level: args.log_level,
        }
    }
}

fn run(config: &PipelineConfig) -> LeadgenResult<()> {
    config.validate()?;
    let rubric = config.load_rubric()?;
    stage_debug!(Stage::Cli, "Rubric max score: {}", rubric.max_score());

    let pipeline = Pipeline::new(
        JsonFileSource::new(&config.input),
        CsvFileSink::new(&config.output),
    )
    .with_rubric(rubric);

    let report = pipeline.run()?;
    logging::log_success(
        Stage::Cli,
        &format!(
            "Run {}: {} records in, {} leads out",
            report.run_id, report.loaded, report.exported
        ),
    );
    println!(
        "Data cleaning and scoring complete! Results saved to '{}'.",
        config.output.display()
    );
    Ok(())
}

fn main() -> LeadgenResult<()> {
    let config = PipelineConfig::from(Args::parse());

    logging::init_tracing_with_level(Some(&config.log_level.to_lowercase()));
    logging::log_startup(Stage::Cli, &format!("lead pipeline on {}", config.input.display()));

    if let Err(e) = run(&config) {
        logging::log_error(Stage::Cli, "Lead pipeline", &e);
        return Err(e);
    }
    Ok(())
}
