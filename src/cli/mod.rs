//! # CLI Module
//!
//! This module contains the command-line interface implementation.
//! It uses clap for argument parsing. Generating a license is the default
//! action; `list` is the only subcommand.

mod generate;
mod list;

use anyhow::Result;
use clap::builder::styling::{AnsiColor, Color, Style, Styles};
use clap::{Args, Parser, Subcommand};
pub use generate::{DEFAULT_OUTPUT, GenerateArgs, current_year, render_license, run_generate, run_generate_with};
pub use list::{ListArgs, run_list};

use crate::logging::{ColorMode, init_tracing, set_quiet, set_verbose};

const CUSTOM_STYLES: Styles = Styles::styled()
  .header(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green))).bold())
  .usage(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green))).bold())
  .literal(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Blue))).bold())
  .placeholder(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Cyan))))
  .error(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Red))).bold())
  .valid(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green))))
  .invalid(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Yellow))));

/// Top-level CLI arguments
#[derive(Parser, Debug)]
#[command(
  name = "gl",
  author,
  version,
  about = "Generate a LICENSE file for your project",
  styles = CUSTOM_STYLES,
  arg_required_else_help = true,
  after_help = "Examples:
  # Write ./LICENSE using the MIT license, author taken from git config
  gl mit

  # Explicit author and year
  gl apache --author \"Jane Doe\" --year 2024

  # Write somewhere else
  gl gpl --output docs/COPYING

  # Preview without writing anything
  gl bsd3 --dry-run

  # Show every supported license
  gl list
",
  help_template = "{before-help}{name} v{version}
{about-section}
{usage-heading} {usage}

{all-args}{after-help}
"
)]
pub struct Cli {
  #[command(subcommand)]
  pub command: Option<Command>,

  #[command(flatten)]
  pub generate: GenerateArgs,

  #[command(flatten)]
  pub output: OutputArgs,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
  /// List the supported licenses
  List(ListArgs),
}

/// Flags controlling diagnostics and colors, accepted everywhere.
#[derive(Args, Debug)]
pub struct OutputArgs {
  /// Increase verbosity (-v info, -vv debug, -vvv trace)
  #[arg(short, long, action = clap::ArgAction::Count, global = true)]
  pub verbose: u8,

  /// Suppress all output except errors
  #[arg(short, long, conflicts_with = "verbose", global = true)]
  pub quiet: bool,

  /// Control when to use colored output (auto, never, always)
  #[arg(
    long,
    value_name = "WHEN",
    num_args = 0..=1,
    default_value_t = ColorMode::Auto,
    default_missing_value = "always",
    value_enum,
    global = true
  )]
  pub colors: ColorMode,
}

impl OutputArgs {
  /// Install the tracing subscriber and set the output and color modes.
  pub fn apply(&self) {
    init_tracing(self.quiet, self.verbose);

    if self.verbose > 0 {
      set_verbose();
    } else if self.quiet {
      set_quiet();
    }
    self.colors.apply();
  }
}

impl Cli {
  /// Parse CLI arguments and return the Cli struct
  pub fn parse_args() -> Self {
    Self::parse()
  }

  /// Run whichever action the arguments select.
  pub fn run(self) -> Result<()> {
    self.output.apply();

    match self.command {
      Some(Command::List(args)) => run_list(&args),
      None => run_generate(self.generate),
    }
  }
}
