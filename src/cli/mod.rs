use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate, NaiveDateTime};
use clap::{Args, Parser, Subcommand};
use tracing::info;

use crate::core::{BucketSpec, default_catalog, generate_goals, validate_catalog};
use crate::report::{
    BucketConfigurationReport, MockDataDocument, ScreenshotGuide, summarize_buckets,
};

pub const MOCK_DATA_FILE: &str = "mock-data.json";
pub const BUCKET_CONFIGURATION_FILE: &str = "BUCKET_CONFIGURATION.md";

#[derive(Parser, Debug)]
#[command(
    name = "goal_mock",
    about = "Synthetic goal portfolio data for the portfolio viewer demo"
)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write mock-data.json and BUCKET_CONFIGURATION.md (the default)
    Generate(GenerateArgs),
    /// Print the screenshot-taking guide
    Screenshots(ScreenshotArgs),
}

#[derive(Args, Debug, Clone)]
struct GenerateArgs {
    #[arg(long, default_value = "demo", help = "Directory receiving the generated files")]
    output_dir: PathBuf,
    #[arg(long, help = "Base seed; drawn from OS entropy when omitted")]
    seed: Option<u64>,
    #[arg(long, help = "JSON bucket catalog replacing the built-in one")]
    catalog: Option<PathBuf>,
    #[arg(long, help = "Last day of every series (YYYY-MM-DD); defaults to today")]
    as_of: Option<NaiveDate>,
}

impl Default for GenerateArgs {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("demo"),
            seed: None,
            catalog: None,
            as_of: None,
        }
    }
}

#[derive(Args, Debug, Clone)]
struct ScreenshotArgs {
    #[arg(long, default_value = "demo")]
    demo_dir: PathBuf,
    #[arg(long, default_value = "assets")]
    assets_dir: PathBuf,
}

#[derive(Debug, Clone)]
struct GenerateOptions {
    output_dir: PathBuf,
    seed: u64,
    catalog: Vec<BucketSpec>,
    as_of: NaiveDate,
    generated_at: NaiveDateTime,
}

#[derive(Debug)]
pub struct GenerateOutcome {
    pub mock_data_path: PathBuf,
    pub bucket_configuration_path: PathBuf,
    pub document: MockDataDocument,
}

fn build_options(
    args: GenerateArgs,
    catalog: Vec<BucketSpec>,
    now: NaiveDateTime,
) -> Result<GenerateOptions, String> {
    if args.output_dir.as_os_str().is_empty() {
        return Err("--output-dir must not be empty".to_string());
    }

    validate_catalog(&catalog).map_err(|e| format!("--catalog: {e}"))?;

    Ok(GenerateOptions {
        output_dir: args.output_dir,
        seed: args.seed.unwrap_or_else(rand::random),
        catalog,
        as_of: args.as_of.unwrap_or(now.date()),
        generated_at: now,
    })
}

fn load_catalog(path: Option<&Path>) -> Result<Vec<BucketSpec>> {
    let Some(path) = path else {
        return Ok(default_catalog());
    };
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read catalog {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse catalog {}", path.display()))
}

fn bucket_list(catalog: &[BucketSpec]) -> String {
    let names: Vec<&str> = catalog.iter().map(|b| b.name.as_str()).collect();
    match names.split_last() {
        Some((last, rest)) if !rest.is_empty() => format!("{} and {last}", rest.join(", ")),
        Some((last, _)) => (*last).to_string(),
        None => String::new(),
    }
}

fn generate(options: &GenerateOptions) -> Result<GenerateOutcome> {
    info!(seed = options.seed, as_of = %options.as_of, "generating mock goals");

    let goals = generate_goals(&options.catalog, options.seed, options.as_of);
    let document = MockDataDocument::from_goals(&goals, options.as_of);

    fs::create_dir_all(&options.output_dir)
        .with_context(|| format!("failed to create {}", options.output_dir.display()))?;

    let mock_data_path = options.output_dir.join(MOCK_DATA_FILE);
    let json = document
        .to_pretty_json()
        .context("failed to serialize mock data")?;
    fs::write(&mock_data_path, json)
        .with_context(|| format!("failed to write {}", mock_data_path.display()))?;
    info!(path = %mock_data_path.display(), goals = goals.len(), "wrote mock data");

    let report = BucketConfigurationReport::from_document(&document, options.generated_at);
    let bucket_configuration_path = options.output_dir.join(BUCKET_CONFIGURATION_FILE);
    fs::write(&bucket_configuration_path, report.to_string())
        .with_context(|| format!("failed to write {}", bucket_configuration_path.display()))?;
    info!(path = %bucket_configuration_path.display(), "wrote bucket configuration");

    Ok(GenerateOutcome {
        mock_data_path,
        bucket_configuration_path,
        document,
    })
}

fn print_generate_summary(options: &GenerateOptions, outcome: &GenerateOutcome) {
    println!("Mock data generated and saved to {}", outcome.mock_data_path.display());
    println!(
        "Generated {} goals across {} buckets",
        outcome.document.performance.len(),
        bucket_list(&options.catalog)
    );
    println!("\nSummary:");
    for bucket in summarize_buckets(&outcome.document) {
        println!("{bucket}");
    }
    println!(
        "\nBucket configuration saved to {}",
        outcome.bucket_configuration_path.display()
    );
}

fn screenshots(args: &ScreenshotArgs) -> Result<()> {
    let guide = ScreenshotGuide::new(&args.demo_dir, &args.assets_dir);
    fs::create_dir_all(guide.assets_dir())
        .with_context(|| format!("failed to create {}", guide.assets_dir().display()))?;
    println!("{guide}");
    Ok(())
}

pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Some(Command::Screenshots(args)) => screenshots(&args),
        Some(Command::Generate(args)) => run_generate(args),
        None => run_generate(GenerateArgs::default()),
    }
}

fn run_generate(args: GenerateArgs) -> Result<()> {
    let catalog = load_catalog(args.catalog.as_deref())?;
    let options =
        build_options(args, catalog, Local::now().naive_local()).map_err(anyhow::Error::msg)?;
    let outcome = generate(&options)?;
    print_generate_summary(&options, &outcome);
    Ok(())
}
