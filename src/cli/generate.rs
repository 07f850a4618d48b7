//! # Generate Command
//!
//! Renders the selected license and writes it to the output path. This is the
//! default action when no subcommand is given.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use chrono::Datelike;
use clap::Args;
use clap::builder::{PossibleValue, PossibleValuesParser};
use tracing::debug;

use crate::author::{AuthorResolver, ConfigReader, choose_author};
use crate::config::{Config, load_config};
use crate::output::{print_already_exists, print_created, print_license_text};
use crate::templates::{self, LICENSES, LicenseData, Template, TemplateError};
use crate::verbose_log;
use crate::writer::{WriteOutcome, is_occupied, resolve_output_path, write_license};

/// Output path used when neither `--output` nor the config file sets one.
pub const DEFAULT_OUTPUT: &str = "./LICENSE";

/// Arguments for generating a license file
#[derive(Args, Debug, Default)]
pub struct GenerateArgs {
  /// License to generate
  #[arg(value_name = "LICENSE", value_parser = license_parser())]
  pub license: Option<String>,

  /// Author name [default: user.name from git config]
  #[arg(long, value_name = "NAME")]
  pub author: Option<String>,

  /// Copyright year [default: current year]
  #[arg(long, allow_negative_numbers = true)]
  pub year: Option<i64>,

  /// Output path [default: ./LICENSE]
  #[arg(long, short = 'o', value_name = "PATH")]
  pub output: Option<PathBuf>,

  /// Render this template file instead of the built-in one
  #[arg(long, value_name = "FILE")]
  pub template: Option<PathBuf>,

  /// Print the license to stdout instead of writing a file
  #[arg(long)]
  pub dry_run: bool,

  /// Path to config file (default: .gl.toml in the current directory)
  #[arg(long, value_name = "FILE")]
  pub config: Option<PathBuf>,

  /// Ignore config file even if present
  #[arg(long)]
  pub no_config: bool,
}

fn license_parser() -> PossibleValuesParser {
  PossibleValuesParser::new(LICENSES.iter().map(|license| PossibleValue::new(license.alias).help(license.name)))
}

/// The current calendar year in local time.
pub fn current_year() -> i64 {
  i64::from(chrono::Local::now().year())
}

/// Run the generate command, detecting the author through `git config`.
pub fn run_generate(args: GenerateArgs) -> Result<()> {
  run_generate_with(args, &AuthorResolver::git())
}

/// Run the generate command with a caller-supplied author resolver.
///
/// The resolver is only consulted when no author is given on the command line
/// or in the config file, and only once the output path is known to be free.
pub fn run_generate_with<R: ConfigReader>(args: GenerateArgs, resolver: &AuthorResolver<R>) -> Result<()> {
  let Some(alias) = args.license.as_deref() else {
    bail!("Missing required argument: <LICENSE>");
  };
  let license = templates::find(alias).ok_or_else(|| TemplateError::UnknownLicense(alias.to_string()))?;

  let cwd = std::env::current_dir().context("Failed to get current directory")?;
  let config = load_config(args.config.as_deref(), &cwd, args.no_config)
    .context("Failed to load configuration")?
    .unwrap_or_default();
  let Config {
    author: configured_author,
    output: configured_output,
  } = config;

  let output = args
    .output
    .or(configured_output)
    .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));

  if !args.dry_run {
    let resolved = resolve_output_path(&output)?;
    if is_occupied(&resolved) {
      print_already_exists(&resolved);
      return Ok(());
    }
  }

  let template = match args.template.as_deref() {
    Some(path) => Template::from_file(path)?,
    None => templates::get(license.alias)?,
  };

  let year = args.year.unwrap_or_else(current_year);
  let author = choose_author(args.author, configured_author, resolver)?;
  verbose_log!("Generating {} for {} ({})", license.name, author, year);

  let text = templates::render(&template, &LicenseData { author, year });

  if args.dry_run {
    debug!("Dry run, printing license instead of writing {}", output.display());
    print_license_text(&text).context("Failed to write license to stdout")?;
    return Ok(());
  }

  match write_license(&output, &text)? {
    WriteOutcome::Created(path) => print_created(license, &path),
    WriteOutcome::AlreadyExists(path) => print_already_exists(&path),
  }

  Ok(())
}

/// Renders `alias` exactly as the command would, without touching the disk.
///
/// # Errors
///
/// Returns an error for an unknown alias.
pub fn render_license(alias: &str, author: &str, year: i64) -> Result<String, TemplateError> {
  let template = templates::get(alias)?;
  Ok(templates::render(
    &template,
    &LicenseData {
      author: author.to_string(),
      year,
    },
  ))
}
