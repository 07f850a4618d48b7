#![allow(dead_code)]

use std::path::Path;
use std::process::Command as StdCommand;

use anyhow::{Context, Result};
use assert_cmd::Command;

/// Checks if git is available on the system.
pub fn is_git_available() -> bool {
  StdCommand::new("git").arg("--version").status().is_ok()
}

/// Runs a git command in the given directory, returning an error with stderr on
/// failure.
pub fn run_git(dir: &Path, args: &[&str]) -> Result<()> {
  let output = StdCommand::new("git")
    .args(args)
    .current_dir(dir)
    .output()
    .with_context(|| format!("Failed to execute git {:?}", args))?;

  if !output.status.success() {
    anyhow::bail!("git {:?} failed: {}", args, String::from_utf8_lossy(&output.stderr));
  }
  Ok(())
}

/// Initializes a git repository in the given directory with a local
/// `user.name`.
pub fn init_git_repo(dir: &Path, user_name: &str) -> Result<()> {
  run_git(dir, &["init"])?;
  run_git(dir, &["config", "--local", "user.name", user_name])?;
  Ok(())
}

/// Points every git configuration scope away from the real machine.
///
/// `home` stands in for the user's home directory, so a `.gitconfig` written
/// there becomes the global scope. The system scope is a file that never
/// exists, and repository discovery stops at `dir`'s parent.
pub fn isolate_git<'a>(cmd: &'a mut Command, dir: &Path, home: &Path) -> &'a mut Command {
  cmd
    .env("HOME", home)
    .env("XDG_CONFIG_HOME", home.join(".config"))
    .env("GIT_CONFIG_GLOBAL", home.join(".gitconfig"))
    .env("GIT_CONFIG_SYSTEM", home.join("no-such-system-gitconfig"))
    .env("GIT_CONFIG_NOSYSTEM", "1")
    .env("GIT_CEILING_DIRECTORIES", dir.parent().unwrap_or(dir))
    .env_remove("GIT_DIR")
    .env_remove("GIT_WORK_TREE")
}

/// Builds a `gl` command running in `dir` with an isolated git identity and
/// no ambient config file or log filter.
pub fn gl(dir: &Path, home: &Path) -> Result<Command> {
  let mut cmd = Command::cargo_bin("gl")?;
  cmd
    .current_dir(dir)
    .env_remove("GL_CONFIG")
    .env_remove("RUST_LOG")
    .env("NO_COLOR", "1");
  isolate_git(&mut cmd, dir, home);
  Ok(cmd)
}
