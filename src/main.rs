use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, Result};
use paint_estimate::application::engine::{PricingBreakdown, PricingEngine};
use paint_estimate::application::intake::IntakeForm;
use paint_estimate::domain::tables::PricingTables;
use paint_estimate::infrastructure::tables_file;
use paint_estimate::interfaces::csv::estimate_writer::EstimateWriter;
use paint_estimate::interfaces::csv::intake_reader::IntakeReader;
use paint_estimate::interfaces::json::submission_writer::SubmissionWriter;
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about = "Unofficial painting cost estimates", long_about = None)]
struct Cli {
    /// Pricing tables TOML file. The built-in tables are used when omitted.
    #[arg(long, global = true)]
    tables: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Price every request in an intake CSV file and print the estimates as CSV
    Batch {
        /// Input intake CSV file
        input: PathBuf,

        /// Write the submission document of every accepted request to this
        /// file, one JSON object per line
        #[arg(long)]
        submissions: Option<PathBuf>,
    },
    /// Price a single project
    Quote {
        /// interior, exterior or both
        #[arg(long)]
        project_type: String,

        /// Area to paint, at least 100
        #[arg(long)]
        square_footage: String,

        /// standard, premium or designer
        #[arg(long)]
        paint_tier: String,

        /// basic, standard, moderate, complex or high_difficulty (default: basic)
        #[arg(long)]
        difficulty: Option<String>,

        /// Selected surface; repeat the flag for several
        #[arg(long = "surface")]
        surfaces: Vec<String>,

        /// Show the multipliers and floors behind the range
        #[arg(long)]
        explain: bool,
    },
}

fn main() -> Result<()> {
    paint_estimate::init_tracing();
    let cli = Cli::parse();

    let tables = match cli.tables {
        Some(path) => tables_file::load(path).into_diagnostic()?,
        None => PricingTables::default(),
    };
    let engine = PricingEngine::new(tables);

    match cli.command {
        Command::Batch { input, submissions } => run_batch(&engine, input, submissions),
        Command::Quote {
            project_type,
            square_footage,
            paint_tier,
            difficulty,
            surfaces,
            explain,
        } => {
            let form = IntakeForm {
                project_type: Some(project_type),
                square_footage: Some(square_footage),
                paint_tier: Some(paint_tier),
                difficulty,
                surfaces: Some(surfaces.join(";")),
                ..Default::default()
            };
            let intake = form.validate(1).into_diagnostic()?;
            let (estimate, breakdown) = engine.estimate_with_breakdown(&intake.project);
            if explain {
                print_breakdown(&breakdown);
            }
            println!("{estimate}");
            Ok(())
        }
    }
}

fn run_batch(engine: &PricingEngine, input: PathBuf, submissions: Option<PathBuf>) -> Result<()> {
    let file = File::open(input).into_diagnostic()?;
    let reader = IntakeReader::new(file);

    let mut submissions = match submissions {
        Some(path) => Some(SubmissionWriter::new(BufWriter::new(
            File::create(path).into_diagnostic()?,
        ))),
        None => None,
    };

    let stdout = io::stdout();
    let mut writer = EstimateWriter::new(stdout.lock());
    let mut priced = 0usize;
    let mut rejected = 0usize;

    for (index, form_result) in reader.forms().enumerate() {
        let row = index + 1;
        match form_result {
            Ok(form) => match form.validate(row) {
                Ok(intake) => {
                    let estimate = engine.estimate(&intake.project);
                    writer.write(row, &estimate).into_diagnostic()?;
                    if let Some(submissions) = submissions.as_mut() {
                        submissions.write(&intake).into_diagnostic()?;
                    }
                    priced += 1;
                }
                Err(e) => {
                    eprintln!("Rejected intake row {}: {}", row, e);
                    rejected += 1;
                }
            },
            Err(e) => {
                eprintln!("Error reading intake: {}", e);
                rejected += 1;
            }
        }
    }

    writer.flush().into_diagnostic()?;
    if let Some(submissions) = submissions.as_mut() {
        submissions.flush().into_diagnostic()?;
    }
    tracing::info!(priced, rejected, "batch complete");

    Ok(())
}

fn print_breakdown(breakdown: &PricingBreakdown) {
    let yes_no = |applied: bool| if applied { "yes" } else { "no" };
    println!("tier multiplier:       {}", breakdown.tier_multiplier.normalize());
    println!("difficulty multiplier: {}", breakdown.difficulty_multiplier.normalize());
    println!("surface multiplier:    {}", breakdown.surface_multiplier.normalize());
    println!(
        "rate per sqft:         {} - {}",
        breakdown.rate_min.normalize(),
        breakdown.rate_max.normalize()
    );
    println!(
        "before floors:         {} - {}",
        breakdown.raw_min.normalize(),
        breakdown.raw_max.normalize()
    );
    println!("spread floor applied:  {}", yes_no(breakdown.spread_floor_applied));
    println!("minimum floor applied: {}", yes_no(breakdown.absolute_floor_applied));
}
