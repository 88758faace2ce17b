//! JEP106 Table Generator CLI Application
//!
//! Command-line front end for the jep106-extract library. It adds:
//! - Argument handling and template/output resolution
//! - Optional TOML configuration
//! - Logging setup
//! - JSON dump and dry-run modes

use anyhow::{bail, Context, Result};
use clap::Parser;
use jep106_extract::{GenerationReport, Generator, ManufacturerTable};
use std::path::{Path, PathBuf};

mod config;

/// JEP106 table generator - regenerate the manufacturer-ID table from the JEDEC PDF
#[derive(Parser, Debug)]
#[command(name = "jep106-cli")]
#[command(about = "Regenerate the JEDEC JEP106 manufacturer table from the official PDF", long_about = None)]
#[command(version)]
struct Args {
    /// Official JEP106 PDF
    #[arg(value_name = "PDF", default_value = "JEP106BL.pdf")]
    pdf: PathBuf,

    /// Output file (default: overwrite the template)
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Template file to regenerate (default: the output file)
    #[arg(short, long, value_name = "FILE")]
    template: Option<PathBuf>,

    /// Path to configuration file (TOML)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Also write the extracted table as JSON
    #[arg(long, value_name = "FILE")]
    json: Option<PathBuf>,

    /// Print the regenerated file to stdout instead of writing it
    #[arg(long)]
    dry_run: bool,

    /// Verbosity level (can be repeated: -v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(args.verbose, args.quiet);

    log::info!("JEP106 table generator v{}", env!("CARGO_PKG_VERSION"));
    log::debug!("Using extraction library v{}", jep106_extract::VERSION);

    let app_config = match &args.config {
        Some(path) => {
            log::info!("Loading configuration from: {:?}", path);
            config::load_config(path)?
        }
        None => config::AppConfig::default(),
    };

    let (template, output) = resolve_targets(
        args.template.as_deref().or(app_config.paths.template.as_deref()),
        args.output.as_deref(),
    )?;
    log::debug!("Template: {:?}, output: {:?}", template, output);

    let generator = Generator::new(app_config.generator_config())?;

    let report = if args.dry_run {
        generator.prepare(&args.pdf, &template)
    } else {
        generator.generate(&args.pdf, &template, &output)
    }
    .with_context(|| format!("Failed to regenerate {:?} from {:?}", output, args.pdf))?;

    if let Some(json_path) = args.json.as_deref().or(app_config.paths.json.as_deref()) {
        write_json(&report.table, json_path)?;
    }

    if args.dry_run {
        print!("{}", report.output);
    } else if !args.quiet {
        print_summary(&report, &args.pdf, &output);
    }

    Ok(())
}

/// Decide which file is read and which is written
///
/// Either one defaults to the other; with neither there is nothing to rewrite.
fn resolve_targets(template: Option<&Path>, output: Option<&Path>) -> Result<(PathBuf, PathBuf)> {
    match (template, output) {
        (Some(template), Some(output)) => Ok((template.to_path_buf(), output.to_path_buf())),
        (Some(path), None) | (None, Some(path)) => Ok((path.to_path_buf(), path.to_path_buf())),
        (None, None) => bail!("No template given: pass an OUTPUT file or --template <FILE>"),
    }
}

/// Dump the extracted table as pretty-printed JSON
fn write_json(table: &ManufacturerTable, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(table).context("Failed to serialize table")?;
    jep106_extract::write_atomic(path, &json)
        .with_context(|| format!("Failed to write JSON table: {:?}", path))?;
    log::info!("Wrote JSON table to {:?}", path);
    Ok(())
}

fn print_summary(report: &GenerationReport, pdf: &Path, output: &Path) {
    println!("Source:  {}", pdf.display());
    println!("Output:  {}", output.display());
    println!("Banks:   {}", report.table.banks.len());
    println!("Entries: {}", report.table.entry_count());

    for bank in &report.table.banks {
        log::debug!("  Bank {:>2}: {} manufacturers", bank.number, bank.len());
    }
    for entry in report.table.entries() {
        log::trace!("  Bank {:>2} 0x{:02X} {}", entry.bank, entry.id, entry.name);
    }

    if report.table.is_empty() {
        println!("⚠️  No manufacturer rows were recognised; the table is empty");
    }
}

/// Initialize logging based on verbosity level
fn init_logging(verbose: u8, quiet: bool) {
    use env_logger::Builder;
    use log::LevelFilter;
    use std::io::Write;

    let level = if quiet {
        LevelFilter::Error
    } else {
        match verbose {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    };

    Builder::new()
        .filter_level(level)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}] {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}
