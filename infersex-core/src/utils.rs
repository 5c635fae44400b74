use std::ffi::OsStr;
use std::fs::File;
use std::io::prelude::*;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use flate2::read::MultiGzDecoder;

use crate::consts::BAM_EXTENSION;
use crate::errors::InferSexError;

///
/// Get a reader for either a gzip'd or non-gzip'd file.
///
/// # Arguments
///
/// - path: path to the file to read
///
pub fn get_dynamic_reader(path: &Path) -> Result<BufReader<Box<dyn Read>>> {
    let is_gzipped = path.extension() == Some(OsStr::new("gz"));
    let file = File::open(path).with_context(|| format!("Failed to open file: {:?}", path))?;
    let file: Box<dyn Read> = match is_gzipped {
        true => Box::new(MultiGzDecoder::new(file)),
        false => Box::new(file),
    };

    let reader = BufReader::new(file);

    Ok(reader)
}

///
/// Read a newline-delimited list of BAM paths. Lines are trimmed
/// and blank lines are skipped.
///
/// # Arguments
///
/// - path: path to the list, optionally gzip'd
///
pub fn read_bam_list(path: &Path) -> Result<Vec<PathBuf>, InferSexError> {
    let reader = get_dynamic_reader(path)
        .map_err(|e| InferSexError::BamListRead(format!("{:#}", e)))?;

    let mut bams = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| {
            InferSexError::BamListRead(format!(
                "error reading line {} of {:?}: {}",
                index + 1,
                path,
                e
            ))
        })?;

        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        bams.push(PathBuf::from(line));
    }

    Ok(bams)
}

///
/// Derive a sample name from a BAM path: the file name with
/// a trailing `.bam` removed.
///
pub fn sample_name_from_path(path: &Path) -> String {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| path.to_string_lossy().to_string());

    match file_name.strip_suffix(BAM_EXTENSION) {
        Some(stem) => stem.to_string(),
        None => file_name,
    }
}
