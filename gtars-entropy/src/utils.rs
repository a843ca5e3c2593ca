use std::ffi::OsStr;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use flate2::read::MultiGzDecoder;

use crate::consts::{GZIP_EXT, STDIN_PATH};
use crate::errors::{EntropyError, Result};

///
/// Get a reader for either a gzip'd or non-gzip'd file.
///
/// # Arguments
///
/// - path: path to the file to read
///
pub fn get_dynamic_reader(path: &Path) -> Result<BufReader<Box<dyn Read>>> {
    let is_gzipped = path.extension() == Some(OsStr::new(GZIP_EXT));
    let file = File::open(path).map_err(|source| EntropyError::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;

    let file: Box<dyn Read> = match is_gzipped {
        true => Box::new(MultiGzDecoder::new(file)),
        false => Box::new(file),
    };

    Ok(BufReader::new(file))
}

/// Get a reader for a gzipped file, a plain file, or stdin when the path is `-`.
pub fn get_dynamic_reader_w_stdin(path: &Path) -> Result<BufReader<Box<dyn Read>>> {
    if path == Path::new(STDIN_PATH) {
        Ok(BufReader::new(Box::new(std::io::stdin()) as Box<dyn Read>))
    } else {
        get_dynamic_reader(path)
    }
}
