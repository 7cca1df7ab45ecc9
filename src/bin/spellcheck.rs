//! Ad-hoc command line spell checker.
//!
//! Loads a dictionary into a Bloom filter, then prints every word read from
//! stdin that the filter has definitely never seen. Words are raw bytes, so
//! dictionaries in any single-byte encoding work.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use spellbloom::{BloomFilter, Filter};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

const DELIMITERS: &[u8] = b" \t,.;:\r\n?!-/()";

#[derive(Parser, Debug)]
#[command(name = "spellcheck")]
#[command(about = "Print the words on stdin that are not in the dictionary")]
struct Args {
    /// Word list, one word per line
    #[arg(short, long, default_value = "dictionary")]
    dictionary: PathBuf,

    /// Bloom filter size in bits
    #[arg(short, long, default_value_t = 2_500_000)]
    capacity: usize,
}

/// Cuts a line at its first CR or LF.
fn strip(line: &[u8]) -> &[u8] {
    match line.iter().position(|&b| b == b'\r' || b == b'\n') {
        Some(end) => &line[..end],
        None => line,
    }
}

fn tokens(line: &[u8]) -> impl Iterator<Item = &[u8]> {
    line.split(|b| DELIMITERS.contains(b))
        .filter(|t| !t.is_empty())
}

fn load_dictionary(filter: &mut dyn Filter, reader: impl BufRead) -> io::Result<()> {
    for line in reader.split(b'\n') {
        filter.add(strip(&line?));
    }
    Ok(())
}

fn check(filter: &dyn Filter, input: impl BufRead, mut out: impl Write) -> io::Result<()> {
    for line in input.split(b'\n') {
        let line = line?;
        for word in tokens(&line) {
            if !filter.contains(word) {
                out.write_all(word)?;
                out.write_all(b"\n")?;
            }
        }
    }
    out.flush()
}

fn run(args: Args) -> anyhow::Result<()> {
    debug!(?args, "starting");

    let file = File::open(&args.dictionary).context("Couldn't open words file")?;

    let mut filter = BloomFilter::new(args.capacity)?;
    load_dictionary(&mut filter, BufReader::new(file))
        .with_context(|| format!("reading {}", args.dictionary.display()))?;
    info!(
        count = filter.count(),
        bits_set = filter.bits_set(),
        fpr = filter.false_positive_rate(),
        "dictionary loaded"
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "bloom filter count : {}", filter.count())?;
    writeln!(out, "bloom filter size  : {}", filter.size())?;

    check(&filter, io::stdin().lock(), out)?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    run(Args::parse())
}
