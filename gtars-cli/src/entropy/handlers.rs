use std::io::{self, BufWriter};
use std::path::Path;

use anyhow::{Context, Result};
use clap::ArgMatches;
use tracing::info;

use gtars_entropy::{LabelPolicy, LocusTable, compute_all, write_report};

use super::cli::{ENTROPY_INPUT, STRICT_LABELS};

pub fn run_entropy(matches: &ArgMatches) -> Result<()> {
    let input = matches
        .get_one::<String>(ENTROPY_INPUT)
        .expect("A path to an entropy input file is required.");

    let policy = match matches.get_flag(STRICT_LABELS) {
        true => LabelPolicy::Strict,
        false => LabelPolicy::Permissive,
    };

    let input = Path::new(input);
    info!("Reading locus counts from {} ({:?} end labels)", input.display(), policy);

    // everything is read and validated before anything is written to stdout
    let table = LocusTable::from_path(input, policy)
        .with_context(|| format!("Failed to read locus counts from {}", input.display()))?;
    info!("Aggregated {} loci", table.len());

    let results = compute_all(&table);

    let stdout = io::stdout();
    write_report(&results, BufWriter::new(stdout.lock())).context("Failed to write report")?;

    Ok(())
}
