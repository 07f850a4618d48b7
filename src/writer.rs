//! # Writer Module
//!
//! This module writes the rendered license to disk. It never overwrites: if
//! anything already exists at the output path the write is skipped.

use std::fs::{self, OpenOptions};
use std::io::{self, Write as _};
use std::path::{Component, Path, PathBuf};

use tracing::debug;

/// Result of a successful [`write_license`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteOutcome {
  /// The file was created at this absolute path.
  Created(PathBuf),
  /// Something already exists at this absolute path; nothing was written.
  AlreadyExists(PathBuf),
}

/// Error type for writing the license file.
#[derive(Debug, thiserror::Error)]
pub enum WriteError {
  /// The output path could not be turned into an absolute path.
  #[error("Invalid output path '{path}': {reason}")]
  PathResolution { path: PathBuf, reason: String },

  /// Creating or writing the file failed.
  #[error("Failed to write license file '{path}': {source}")]
  Write { path: PathBuf, source: io::Error },
}

/// Resolves `path` against `cwd` and removes `.` and `..` segments lexically.
///
/// `..` never climbs above the root.
pub fn clean_path(path: &Path, cwd: &Path) -> PathBuf {
  let joined = if path.is_absolute() {
    path.to_path_buf()
  } else {
    cwd.join(path)
  };

  let mut cleaned = PathBuf::new();
  for component in joined.components() {
    match component {
      Component::CurDir => {}
      Component::ParentDir => {
        // no-op at the root
        cleaned.pop();
      }
      other => cleaned.push(other.as_os_str()),
    }
  }
  cleaned
}

/// Resolves the output path relative to the current working directory.
///
/// # Errors
///
/// Returns [`WriteError::PathResolution`] for an empty path or when the
/// working directory cannot be determined.
pub fn resolve_output_path(path: &Path) -> Result<PathBuf, WriteError> {
  if path.as_os_str().is_empty() {
    return Err(WriteError::PathResolution {
      path: path.to_path_buf(),
      reason: "path is empty".to_string(),
    });
  }

  let cwd = std::env::current_dir().map_err(|e| WriteError::PathResolution {
    path: path.to_path_buf(),
    reason: format!("cannot determine current directory: {e}"),
  })?;

  Ok(clean_path(path, &cwd))
}

/// Checks whether anything occupies `path`, including a dangling symlink.
///
/// Lookup failures other than "not found" (for example permission errors)
/// count as occupied so that the file is never clobbered.
pub(crate) fn is_occupied(path: &Path) -> bool {
  match fs::symlink_metadata(path) {
    Ok(_) => true,
    Err(e) => e.kind() != io::ErrorKind::NotFound,
  }
}

/// Writes `text` to `path` unless something already exists there.
///
/// The file is created with create-new semantics and default permissions.
///
/// # Errors
///
/// Returns [`WriteError::PathResolution`] if the path cannot be resolved and
/// [`WriteError::Write`] if the file cannot be created or written, e.g. when
/// the parent directory is missing.
pub fn write_license(path: &Path, text: &str) -> Result<WriteOutcome, WriteError> {
  let resolved = resolve_output_path(path)?;
  debug!("Resolved output path: {}", resolved.display());

  if is_occupied(&resolved) {
    debug!("Output path is occupied, skipping write");
    return Ok(WriteOutcome::AlreadyExists(resolved));
  }

  let mut file = match OpenOptions::new().write(true).create_new(true).open(&resolved) {
    Ok(file) => file,
    Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
      debug!("Output path appeared before create, skipping write");
      return Ok(WriteOutcome::AlreadyExists(resolved));
    }
    Err(e) => {
      return Err(WriteError::Write {
        path: resolved,
        source: e,
      });
    }
  };

  if let Err(e) = file.write_all(text.as_bytes()) {
    return Err(WriteError::Write {
      path: resolved,
      source: e,
    });
  }

  Ok(WriteOutcome::Created(resolved))
}
