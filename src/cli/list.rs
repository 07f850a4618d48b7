//! # List Command
//!
//! Prints the licenses `gl` can generate.

use anyhow::{Context, Result};
use clap::Args;

use crate::output::print_license_table;
use crate::templates::{LicenseDescriptor, licenses};

/// Arguments for the list command
#[derive(Args, Debug, Default)]
pub struct ListArgs {
  /// Print the licenses as a JSON array
  #[arg(long)]
  pub json: bool,
}

/// Serializes the license table as pretty-printed JSON.
pub fn licenses_json(licenses: &[LicenseDescriptor]) -> Result<String> {
  serde_json::to_string_pretty(licenses).context("Failed to serialize license list")
}

/// Run the list command with the given arguments
pub fn run_list(args: &ListArgs) -> Result<()> {
  if args.json {
    println!("{}", licenses_json(licenses())?);
  } else {
    print_license_table(licenses());
  }
  Ok(())
}
