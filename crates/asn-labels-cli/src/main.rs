use anyhow::Result;
use asn_labels::{InputSession, LabelOptions, Orientation, PaperSize, calculate_statistics};
use clap::{Parser, ValueEnum};
use log::LevelFilter;
use std::path::PathBuf;

mod logger;
mod prompt;

use logger::CliLogger;

/// Generate a printable sheet of sequentially numbered Code128 labels.
///
/// Any of start/end/columns/rows not given as flags is asked for
/// interactively.
#[derive(Parser)]
#[command(name = "asnl", version)]
struct Cli {
    /// First label number
    #[arg(long, allow_negative_numbers = true)]
    start: Option<i64>,

    /// Last label number (inclusive)
    #[arg(long, allow_negative_numbers = true)]
    end: Option<i64>,

    /// Labels per row
    #[arg(long, allow_negative_numbers = true)]
    columns: Option<i64>,

    /// Rows per sheet
    #[arg(long, allow_negative_numbers = true)]
    rows: Option<i64>,

    /// Text in front of each number
    #[arg(long, default_value = "ASN")]
    prefix: String,

    /// Minimum number of digits (zero-padded)
    #[arg(long, default_value = "6")]
    digits: usize,

    /// Sheet paper size
    #[arg(long, default_value = "a4", value_enum)]
    paper: PaperArg,

    /// Sheet orientation
    #[arg(long, default_value = "portrait", value_enum)]
    orientation: OrientationArg,

    /// Output PDF file (default: ASNLabels_{start}to{end}_{cols}x{rows}_bracodes.pdf)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Leave out the grey cutting guides
    #[arg(long)]
    no_separator: bool,

    /// Log every label's placement
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log warnings and errors
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum PaperArg {
    A4,
    A5,
    Letter,
    Legal,
}

#[derive(Clone, Copy, ValueEnum)]
enum OrientationArg {
    Portrait,
    Landscape,
}

impl From<PaperArg> for PaperSize {
    fn from(arg: PaperArg) -> Self {
        match arg {
            PaperArg::A4 => Self::A4,
            PaperArg::A5 => Self::A5,
            PaperArg::Letter => Self::Letter,
            PaperArg::Legal => Self::Legal,
        }
    }
}

impl From<OrientationArg> for Orientation {
    fn from(arg: OrientationArg) -> Self {
        match arg {
            OrientationArg::Portrait => Self::Portrait,
            OrientationArg::Landscape => Self::Landscape,
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        LevelFilter::Debug
    } else if cli.quiet {
        LevelFilter::Warn
    } else {
        LevelFilter::Info
    };
    let logger = CliLogger::new(level);
    logger.clone().init()?;

    let options = LabelOptions {
        prefix: cli.prefix,
        digits: cli.digits,
        paper_size: cli.paper.into(),
        orientation: cli.orientation.into(),
        draw_separator: !cli.no_separator,
        ..Default::default()
    };
    options.validate()?;

    let mut session = InputSession::with_presets(cli.start, cli.end, cli.columns, cli.rows)?;
    let params = {
        let stdin = std::io::stdin();
        let mut stdout = std::io::stdout();
        prompt::collect_params(&mut session, &mut stdin.lock(), &mut stdout)?
    };

    let stats = calculate_statistics(&params);
    println!("Sheets of labels needed: {}", stats.sheets);
    log::info!(
        "{} labels, {} per {} sheet, {} on the last sheet",
        stats.total_labels,
        stats.labels_per_sheet,
        options.paper_size.name(),
        stats.last_sheet_labels
    );

    let output = cli
        .output
        .unwrap_or_else(|| PathBuf::from(params.output_filename()));
    let report = asn_labels::generate_pdf(&params, &options, &output).await?;

    if !report.is_complete() {
        println!(
            "{} of {} labels have no barcode:",
            report.failures.len(),
            report.labels_drawn
        );
        for failure in &report.failures {
            println!("  {}: {}", failure.text, failure.error);
        }
    }

    println!("PDF '{}' was generated successfully!", output.display());

    let warnings = logger.warning_count();
    if warnings > 0 {
        log::info!("Finished with {} warnings", warnings);
    }

    Ok(())
}
