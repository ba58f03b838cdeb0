//! # Output
//!
//! Writes generated source to its destination.
//!
//! The destination is opened with truncate semantics and written in full.
//! A failure part-way through is fatal to the run; the file must be
//! regenerated from scratch.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::Path;

use crate::error::GenerateError;

/// Overwrites `path` with `source`.
///
/// ## Example
///
/// ```rust,no_run
/// use std::path::Path;
/// use lox_astgen::{generate_lox_ast, write_generated};
///
/// let source = generate_lox_ast()?;
/// write_generated(Path::new("ast.rs"), &source)?;
/// # Ok::<(), lox_astgen::GenerateError>(())
/// ```
pub fn write_generated(path: &Path, source: &str) -> Result<(), GenerateError> {
    let io_error = |source: io::Error| GenerateError::Io {
        path: path.to_path_buf(),
        source,
    };

    let mut file = File::create(path).map_err(io_error)?;
    file.write_all(source.as_bytes()).map_err(io_error)?;
    file.flush().map_err(io_error)?;

    log::info!("wrote {} bytes to {}", source.len(), path.display());
    Ok(())
}

/// Returns true when `path` already holds exactly `source`.
///
/// A missing file is reported as out of date rather than as an error.
pub fn is_up_to_date(path: &Path, source: &str) -> Result<bool, GenerateError> {
    match fs::read_to_string(path) {
        Ok(existing) => Ok(existing == source),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(err) => Err(GenerateError::Io {
            path: path.to_path_buf(),
            source: err,
        }),
    }
}

/// What [`sync_generated`] found or did at the destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    /// The destination was overwritten.
    Written,
    /// Check mode: the destination already matches.
    UpToDate,
    /// Check mode: the destination is missing or differs.
    OutOfDate,
}

impl SyncOutcome {
    /// Returns false only for a failed check.
    pub fn is_success(self) -> bool {
        self != SyncOutcome::OutOfDate
    }
}

/// Writes `source` to `path`, or with `check` set only compares them.
///
/// Check mode never touches the destination.
pub fn sync_generated(path: &Path, source: &str, check: bool) -> Result<SyncOutcome, GenerateError> {
    if !check {
        write_generated(path, source)?;
        return Ok(SyncOutcome::Written);
    }
    if is_up_to_date(path, source)? {
        log::info!("{} is up to date", path.display());
        Ok(SyncOutcome::UpToDate)
    } else {
        log::error!("{} is out of date; rerun without --check", path.display());
        Ok(SyncOutcome::OutOfDate)
    }
}
