// src/cli.rs
use std::io::{self, Write};
use std::time::Duration;

use clap::{Parser, ValueEnum};

use crate::config::consts::{DEFAULT_LOG_LEVEL, MAX_BATCH_WORDS, REQUEST_TIMEOUT_SECS};
use crate::config::options::{LookupOptions, SourceKind};
use crate::error::LookupError;
use crate::progress::Progress;
use crate::scrape::{Lookup, WordResult};
use crate::word::WordRecord;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Json,
    Text,
}

#[derive(Debug, Parser)]
#[command(name = "lernkartei", version, about = "Look up German words on Duden and Glosbe")]
pub struct Args {
    /// Words to look up (at most 10)
    #[arg(required = true, num_args = 1..=MAX_BATCH_WORDS)]
    pub words: Vec<String>,
    /// Dictionary site to query; repeat for several (default: all)
    #[arg(long = "source", value_parser = parse_source)]
    pub sources: Vec<SourceKind>,
    /// Only keep Glosbe entries whose heading equals the word
    #[arg(long)]
    pub exact: bool,
    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Json)]
    pub format: Format,
    /// Per-request timeout in seconds
    #[arg(long, default_value_t = REQUEST_TIMEOUT_SECS)]
    pub timeout: u64,
    /// Log level (RUST_LOG overrides)
    #[arg(long, default_value = DEFAULT_LOG_LEVEL)]
    pub log_level: String,
}

fn parse_source(s: &str) -> Result<SourceKind, LookupError> {
    s.parse()
}

impl Args {
    pub fn options(&self) -> LookupOptions {
        LookupOptions::default()
            .with_sources(self.sources.clone())
            .with_timeout(Duration::from_secs(self.timeout))
            .with_exact_match(self.exact)
    }
}

/// Batch progress on stderr, so stdout stays clean for JSON.
struct StderrProgress {
    total: usize,
    done: usize,
}

impl Progress for StderrProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }

    fn log(&mut self, msg: &str) {
        if self.total > 1 {
            eprintln!("{msg}");
        }
    }

    fn item_done(&mut self, word: &str, records: usize) {
        self.done += 1;
        if self.total > 1 {
            eprintln!("[{}/{}] {word}: {records} record(s)", self.done, self.total);
        }
    }

    fn item_failed(&mut self, word: &str, error: &str) {
        self.done += 1;
        eprintln!("[{}/{}] {word}: {error}", self.done, self.total);
    }
}

pub fn run() -> color_eyre::Result<()> {
    let args = Args::parse();
    crate::log::init(&args.log_level);

    let lookup = Lookup::new(&args.options())?;
    logf!("sources: {:?}, words: {:?}", lookup.sources(), args.words);
    let mut progress = StderrProgress { total: 0, done: 0 };
    let results = lookup.lookup_batch(&args.words, Some(&mut progress))?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match args.format {
        Format::Json => write_json(&mut out, &results)?,
        Format::Text => write_text(&mut out, &results)?,
    }
    out.flush()?;
    Ok(())
}

/// All records of all words, flattened in input order.
pub fn write_json<W: Write>(out: &mut W, results: &[WordResult]) -> io::Result<()> {
    let records: Vec<&WordRecord> = results.iter().flat_map(|r| r.records.iter()).collect();
    serde_json::to_writer_pretty(&mut *out, &records)?;
    writeln!(out)
}

/// Base, part of speech, forms, definitions; one per line, blank line between records.
pub fn write_text<W: Write>(out: &mut W, results: &[WordResult]) -> io::Result<()> {
    for record in results.iter().flat_map(|r| r.records.iter()) {
        writeln!(out, "{}", record.base())?;
        writeln!(out, "{}", record.part_of_speech())?;
        writeln!(out, "{}", record.forms().join(", "))?;
        writeln!(out, "{}", record.definitions().join("; "))?;
        writeln!(out)?;
    }
    Ok(())
}
