//! # Author Module
//!
//! This module determines the default copyright holder by reading
//! `user.name` from git configuration, checking the local, global and system
//! scopes in that order.
//!
//! The lookup goes through the [`ConfigReader`] trait so callers (and tests)
//! can supply their own source instead of spawning `git`.

use std::fmt;
use std::io;
use std::path::PathBuf;
use std::process::Command;

use tracing::{debug, trace};

/// Git configuration key holding the author name.
pub const USER_NAME_KEY: &str = "user.name";

/// Configuration scopes, in the order they are consulted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigScope {
  /// Repository configuration (`.git/config`)
  Local,
  /// Per-user configuration (`~/.gitconfig`)
  Global,
  /// Machine-wide configuration (`/etc/gitconfig`)
  System,
}

impl ConfigScope {
  /// All scopes, highest precedence first.
  pub const ALL: [ConfigScope; 3] = [ConfigScope::Local, ConfigScope::Global, ConfigScope::System];

  /// The scope name as understood by `git config --<scope>`.
  pub const fn as_str(self) -> &'static str {
    match self {
      ConfigScope::Local => "local",
      ConfigScope::Global => "global",
      ConfigScope::System => "system",
    }
  }
}

impl fmt::Display for ConfigScope {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Error type for author resolution.
#[derive(Debug, thiserror::Error)]
pub enum AuthorError {
  /// No scope produced a non-empty name.
  #[error("Could not detect an author name from git config (local, global or system); pass --author <NAME>")]
  NotFound,

  /// The configuration source failed or returned an unusable value.
  #[error("Failed to read git config {scope} {key}: {message}")]
  Source {
    scope: ConfigScope,
    key: String,
    message: String,
  },
}

/// Reads a single value from a scoped configuration source.
pub trait ConfigReader {
  /// Returns the raw value of `key` in `scope`, or `None` when it is unset.
  fn read(&self, scope: ConfigScope, key: &str) -> Result<Option<String>, AuthorError>;
}

/// [`ConfigReader`] backed by the `git config` command.
///
/// A missing `git` binary or a non-zero exit (unset key, not inside a
/// repository for the local scope) is reported as an unset value. Failing to
/// launch an installed `git`, or a value that is not UTF-8, is an
/// [`AuthorError::Source`].
#[derive(Debug, Default, Clone)]
pub struct GitCli {
  dir: Option<PathBuf>,
}

impl GitCli {
  /// Runs `git` in the current directory.
  pub fn new() -> Self {
    Self::default()
  }

  /// Runs `git` in `dir`, which decides what the local scope refers to.
  pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
    Self { dir: Some(dir.into()) }
  }
}

impl ConfigReader for GitCli {
  fn read(&self, scope: ConfigScope, key: &str) -> Result<Option<String>, AuthorError> {
    let mut command = Command::new("git");
    command.arg("config").arg(format!("--{scope}")).arg(key);
    if let Some(dir) = &self.dir {
      command.current_dir(dir);
    }

    let output = match command.output() {
      Ok(output) => output,
      Err(e) if e.kind() == io::ErrorKind::NotFound => {
        debug!("git is not installed, treating {} as unset", scope);
        return Ok(None);
      }
      Err(e) => {
        return Err(AuthorError::Source {
          scope,
          key: key.to_string(),
          message: format!("cannot run git: {e}"),
        });
      }
    };

    if !output.status.success() {
      trace!(
        "git config --{} {} exited with {}: {}",
        scope,
        key,
        output.status,
        String::from_utf8_lossy(&output.stderr).trim()
      );
      return Ok(None);
    }

    String::from_utf8(output.stdout)
      .map(Some)
      .map_err(|e| AuthorError::Source {
        scope,
        key: key.to_string(),
        message: format!("value is not valid UTF-8: {e}"),
      })
  }
}

/// Finds the author name by walking [`ConfigScope::ALL`].
pub struct AuthorResolver<R> {
  reader: R,
}

impl AuthorResolver<GitCli> {
  /// Resolver using `git` in the current directory.
  pub fn git() -> Self {
    Self::new(GitCli::new())
  }
}

impl<R: ConfigReader> AuthorResolver<R> {
  pub const fn new(reader: R) -> Self {
    Self { reader }
  }

  /// Returns the first `user.name` that is non-empty after trimming.
  ///
  /// # Errors
  ///
  /// Returns [`AuthorError::NotFound`] if every scope is unset or blank, or
  /// the reader's own error if it fails.
  pub fn resolve(&self) -> Result<String, AuthorError> {
    for scope in ConfigScope::ALL {
      let value = self.reader.read(scope, USER_NAME_KEY)?;
      if let Some(name) = value.as_deref().map(str::trim)
        && !name.is_empty()
      {
        debug!("Detected author {:?} from {} git config", name, scope);
        return Ok(name.to_string());
      }
      trace!("No {} in {} git config", USER_NAME_KEY, scope);
    }

    Err(AuthorError::NotFound)
  }
}

/// Picks the author for a run, only consulting `resolver` when neither an
/// explicit value nor a configured one is available.
///
/// # Errors
///
/// Propagates the resolver's error when it has to be consulted.
pub fn choose_author<R: ConfigReader>(
  explicit: Option<String>,
  configured: Option<String>,
  resolver: &AuthorResolver<R>,
) -> Result<String, AuthorError> {
  if let Some(author) = explicit {
    debug!("Using author from --author");
    return Ok(author);
  }
  if let Some(author) = configured {
    debug!("Using author from config file");
    return Ok(author);
  }
  resolver.resolve()
}
