//! # gl
//!
//! Generate a LICENSE file for your project.

use anyhow::Result;
use gl_license::cli::Cli;

fn main() -> Result<()> {
  Cli::parse_args().run()
}
