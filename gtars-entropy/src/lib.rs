//! Positional entropy of read-start counts at genomic loci.
//!
//! Given a tab-delimited table of `locus<TAB>end<TAB>count` records, this crate
//! groups the counts per locus and read end (5' or 3'), normalizes each count
//! sequence into a probability distribution and reduces it to its Shannon
//! entropy (natural log).
//!
//! The computation is a strict three step pipeline:
//!
//! - [aggregate] reads all records into a [LocusTable]
//! - [compute_all] turns every locus into an [EntropyResult]
//! - [report] renders the results sorted by locus name
//!
//! # Example
//!
//! ```
//! use std::io::Cursor;
//! use gtars_entropy::{LabelPolicy, aggregate, compute_all, report};
//!
//! let input = "L1\t5p\t5\nL1\t5p\t5\nL1\t3p\t10\n";
//! let table = aggregate(Cursor::new(input), LabelPolicy::Permissive).unwrap();
//! let results = compute_all(&table);
//!
//! assert_eq!(
//!     report(&results),
//!     vec!["name\tpos_entropy5p\tpos_entropy3p", "L1\t0.6931471805599453\t0.0"]
//! );
//! ```
pub mod aggregate;
pub mod consts;
pub mod entropy;
pub mod errors;
pub mod models;
pub mod report;
pub mod utils;

use std::path::Path;

// re-exports
pub use aggregate::*;
pub use entropy::*;
pub use errors::*;
pub use models::*;
pub use report::*;

///
/// Run the whole pipeline over a counts file and return the report lines.
///
/// Nothing is rendered unless every record was read and parsed successfully.
///
/// # Arguments
/// - path: counts file (`.gz` is decompressed, `-` reads stdin)
/// - policy: how end labels other than `5p`/`3p` are treated
///
pub fn locus_entropy_report(path: &Path, policy: LabelPolicy) -> Result<Vec<String>> {
    let table = LocusTable::from_path(path, policy)?;
    let results = compute_all(&table);

    Ok(report(&results))
}
