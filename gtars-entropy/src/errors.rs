use std::io;
use std::num::ParseIntError;
use std::path::PathBuf;

use thiserror::Error;

/// Error type for gtars-entropy operations.
#[derive(Error, Debug)]
pub enum EntropyError {
    /// The input file is missing or could not be opened.
    #[error("Can't read file {path:?}: {source}")]
    FileAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A line did not split into exactly `name`, `end label` and `count`.
    #[error("Malformed record at line {line}: expected 3 tab-separated fields, found {found}")]
    MalformedRecord { line: usize, found: usize },

    /// A line had an empty locus name.
    #[error("Malformed record at line {line}: locus name is empty")]
    EmptyLocusName { line: usize },

    /// The count field is not a non-negative integer.
    #[error("Error parsing count at line {line}: {value:?} is not a non-negative integer")]
    InvalidCount {
        line: usize,
        value: String,
        #[source]
        source: ParseIntError,
    },

    /// End label other than `5p`/`3p` under strict label handling.
    #[error("Unknown end label at line {line}: {label:?} (expected \"5p\" or \"3p\")")]
    UnknownEndLabel { line: usize, label: String },

    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Result type alias for gtars-entropy operations.
pub type Result<T> = std::result::Result<T, EntropyError>;
