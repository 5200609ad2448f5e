use anyhow::Result;
use clap::Parser;
use gridfill::alias_index::AliasIndex;
use gridfill::config::{FillConfig, DEFAULT_CUTOFF};
use gridfill::fill::{FillEngine, FillReport};
use gridfill::loader;
use gridfill::qa_index::QuestionAnswerIndex;
use itertools::Itertools;
use std::path::{Path, PathBuf};
use tracing::info;

/// How many unmatched items to show per list; full counts are always printed.
const PREVIEW_LIMIT: usize = 15;

#[derive(Parser)]
#[command(name = "gridfill")]
#[command(about = "Auto-fill blank grid cells from a master reference table")]
struct Args {
    /// Master reference table (CSV with header row)
    reference: PathBuf,

    /// Question-to-attribute mapping sheet (headerless two-row CSV)
    mapping: PathBuf,

    /// Target grid to fill (CSV)
    target: PathBuf,

    /// Output path (default: <target stem>_FILLED.csv)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// 0-based row holding the question headers
    #[arg(long, default_value_t = FillConfig::default().header_row)]
    header_row: usize,

    /// 0-based column holding the parameter labels
    #[arg(long, default_value_t = FillConfig::default().label_column)]
    label_column: usize,

    /// 0-based first column to fill
    #[arg(long, default_value_t = FillConfig::default().data_start_column)]
    data_start_column: usize,

    /// Similarity cutoff for header matching
    #[arg(long, default_value_t = DEFAULT_CUTOFF)]
    question_cutoff: f64,

    /// Similarity cutoff for parameter matching
    #[arg(long, default_value_t = DEFAULT_CUTOFF)]
    parameter_cutoff: f64,

    /// Also print the full report as JSON
    #[arg(long)]
    json: bool,
}

fn default_output(target: &Path) -> PathBuf {
    let stem = target
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    target.with_file_name(format!("{stem}_FILLED.csv"))
}

fn print_preview(label: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    println!("⚠️  {} ({}):", label, items.len());
    println!("  {}", items.iter().take(PREVIEW_LIMIT).join("\n  "));
    if items.len() > PREVIEW_LIMIT {
        println!("  ... and {} more", items.len() - PREVIEW_LIMIT);
    }
}

fn print_report(report: &FillReport) {
    println!("✅ Auto-fill complete. {} cells filled.", report.filled_count);
    print_preview("Unmatched Questions", &report.unmatched_questions);
    print_preview("Unmatched Parameters", &report.unmatched_parameters);
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let config = FillConfig {
        header_row: args.header_row,
        data_start_row: args.header_row + 1,
        label_column: args.label_column,
        data_start_column: args.data_start_column,
        question_cutoff: args.question_cutoff,
        parameter_cutoff: args.parameter_cutoff,
    };

    let reference = loader::read_reference(&args.reference)?;
    let aliases = AliasIndex::build(&reference);

    let (questions, answers) = loader::read_mapping(&args.mapping)?;
    let qa = QuestionAnswerIndex::build(&questions, &answers);

    let mut grid = loader::read_grid(&args.target)?;

    let engine = FillEngine::new(&config, &aliases, &qa);
    let report = engine.run(&mut grid);

    let output = args.output.unwrap_or_else(|| default_output(&args.target));
    loader::write_grid(&output, &grid)?;
    info!(output = %output.display(), "filled grid written");

    print_report(&report);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    }

    Ok(())
}
