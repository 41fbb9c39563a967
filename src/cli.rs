// src/cli.rs
use std::{
    fs,
    path::{Path, PathBuf},
};

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use log::LevelFilter;
use thiserror::Error;

use crate::config::options::{AppOptions, EngineOptions, ExportOptions, SelectorConfig};
use crate::csv::records_to_tsv;
use crate::engine::{Session, SortField, SortOrder};
use crate::error::{ExportError, ExtractError, InvalidDateRangeError, ResourceLoadError};
use crate::export::{console_report, to_canonical_json};
use crate::progress::Progress;
use crate::record::CanonicalDate;
use crate::specs::certifications::{extract_html, CertificationSelectors};

#[derive(Debug, Parser)]
#[command(name = "cert_catalog", version, about = "Extract, canonicalize and query certification records")]
pub struct Cli {
    /// Debug-level logging to .store/debug.log
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract records from a saved profile page and print them as CSV/JSON blocks
    Extract(ExtractArgs),
    /// Re-emit a record set as canonical JSON
    Canonicalize {
        /// Record set (JSON array)
        path: PathBuf,
    },
    /// Run one search/filter/sort pass over a record set
    Query(QueryArgs),
}

#[derive(Debug, Args)]
pub struct ExtractArgs {
    /// Saved HTML of the profile page
    pub html: PathBuf,
    /// JSON file overriding the entry/field selectors
    #[arg(long)]
    pub selectors: Option<PathBuf>,
    /// Also write <stem>.tsv and <stem>.json into this directory
    #[arg(long)]
    pub out: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct QueryArgs {
    /// Record set (JSON array)
    pub path: PathBuf,
    #[arg(long, default_value = "")]
    pub search: String,
    /// Earliest expedition date, YYYY-MM-DD (inclusive)
    #[arg(long, value_parser = parse_day)]
    pub from: Option<NaiveDate>,
    /// Latest expedition date, YYYY-MM-DD (inclusive)
    #[arg(long, value_parser = parse_day)]
    pub to: Option<NaiveDate>,
    /// date | name
    #[arg(long, default_value = "date")]
    pub sort: SortField,
    /// asc | desc (defaults to the field's own order)
    #[arg(long)]
    pub order: Option<SortOrder>,
    /// Record positions to pin, e.g. `0,6,9-11`
    #[arg(long)]
    pub pin: Option<String>,
    /// Plain containment instead of fuzzy matching
    #[arg(long)]
    pub exact: bool,
}

#[derive(Debug, Error)]
pub enum CliError {
    #[error("could not read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Load(#[from] ResourceLoadError),
    #[error(transparent)]
    Extract(#[from] ExtractError),
    #[error(transparent)]
    Export(#[from] ExportError),
    #[error("invalid date range: {0}")]
    InvalidRange(#[from] InvalidDateRangeError),
    #[error("invalid --pin list: {0}")]
    Pins(String),
}

/// Progress on stderr; stdout is reserved for the report.
struct CliProgress;

impl Progress for CliProgress {
    fn begin(&mut self, total: usize) {
        eprintln!("Found {total} entries");
    }
    fn item_failed(&mut self, entry: usize, err: &ExtractError) {
        eprintln!("  skipped entry {entry}: {err}");
    }
}

pub fn run() -> Result<(), CliError> {
    let cli = Cli::parse();
    crate::logging::init(if cli.verbose { LevelFilter::Debug } else { LevelFilter::Info });

    match cli.command {
        Command::Extract(args) => run_extract(&args),
        Command::Canonicalize { path } => {
            let set = crate::store::load_records(&path)?;
            println!("{}", to_canonical_json(set.records())?);
            Ok(())
        }
        Command::Query(args) => run_query(&args),
    }
}

fn run_extract(args: &ExtractArgs) -> Result<(), CliError> {
    let html = fs::read_to_string(&args.html)
        .map_err(|source| CliError::Read { path: args.html.clone(), source })?;
    let cfg = match &args.selectors {
        Some(p) => SelectorConfig::load(p)?,
        None => SelectorConfig::default(),
    };
    let selectors = CertificationSelectors::from_config(&cfg)?;

    let mut progress = CliProgress;
    let extraction = extract_html(&html, &selectors, Some(&mut progress));

    print!("{}", console_report(&extraction.records)?);
    eprintln!("{} records, {} skipped", extraction.records.len(), extraction.skipped_count());

    if let Some(dir) = &args.out {
        let export = export_options(dir);
        for path in crate::file::write_export(&export, &extraction.records)? {
            eprintln!("Wrote {}", path.display());
        }
    }
    Ok(())
}

/// App export settings, written into `dir`.
fn export_options(dir: &Path) -> ExportOptions {
    ExportOptions { out_dir: dir.to_path_buf(), ..AppOptions::default().export }
}

fn run_query(args: &QueryArgs) -> Result<(), CliError> {
    let mut set = crate::store::load_records(&args.path)?;
    if let Some(list) = &args.pin {
        let pins = parse_ids_list(list).map_err(CliError::Pins)?;
        let marked = set.pin_positions(&pins);
        logd!("Query: pinned {marked} of {} positions", pins.len());
    }

    let opts = EngineOptions { fuzzy_search: !args.exact, ..EngineOptions::default() };
    let mut session = Session::with_records(opts, set);
    session.set_sort(args.sort, args.order.unwrap_or(args.sort.default_order()));
    session.set_search(&args.search);
    session.set_start_date(args.from);
    session.set_end_date(args.to);

    if let Some(e) = session.validation() {
        return Err(CliError::InvalidRange(*e));
    }

    for tag in session.active_filters() {
        println!("Filter: {}", tag.label);
    }
    println!("{} result(s)", session.result_count());
    let tsv = records_to_tsv(session.visible());
    if !tsv.is_empty() {
        println!("{tsv}");
    }
    Ok(())
}

/// `YYYY-MM-DD`, or the canonical `YYYY/MM/DD`.
fn parse_day(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .or_else(|_| CanonicalDate::parse(s).map(|d| d.date()))
        .map_err(|_| format!("expected YYYY-MM-DD, got '{s}'"))
}

/// `"0,6,9-11"` → `[0, 6, 9, 10, 11]` (sorted, deduplicated).
pub fn parse_ids_list(s: &str) -> Result<Vec<usize>, String> {
    let num = |p: &str| p.trim().parse::<usize>().map_err(|e| format!("'{p}': {e}"));

    let mut out = Vec::new();
    for part in s.split(',') {
        let part = part.trim();
        if part.is_empty() { continue; }
        if let Some((a, b)) = part.split_once('-') {
            let (a, b) = (num(a)?, num(b)?);
            if a > b { return Err(format!("invalid range: {part}")); }
            out.extend(a..=b);
        } else {
            out.push(num(part)?);
        }
    }
    out.sort_unstable();
    out.dedup();
    Ok(out)
}
