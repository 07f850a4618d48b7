//! # Output Module
//!
//! This module centralizes user-facing output for gl so every message uses
//! the same symbols and colors.

use std::io::{self, Write as _};
use std::path::Path;

use owo_colors::{OwoColorize, Stream};

use crate::logging::is_quiet;
use crate::templates::LicenseDescriptor;

/// Symbols used in output
pub mod symbols {
  /// File created
  pub const SUCCESS: &str = "\u{2713}"; // ✓
  /// Nothing written
  pub const SKIPPED: &str = "-";
}

/// Print the message for a newly created license file.
pub fn print_created(license: &LicenseDescriptor, path: &Path) {
  if is_quiet() {
    return;
  }

  println!(
    "{} Created {} ({})",
    symbols::SUCCESS.if_supports_color(Stream::Stdout, |s| s.green()),
    path.display(),
    license.name
  );
}

/// Print the message shown when the output path is already taken.
pub fn print_already_exists(path: &Path) {
  if is_quiet() {
    return;
  }

  println!(
    "{} LICENSE file already exists: {}",
    symbols::SKIPPED.if_supports_color(Stream::Stdout, |s| s.dimmed()),
    path.display()
  );
}

/// Write the rendered license text as-is.
///
/// Not affected by quiet mode, since the text is the command's output.
pub fn print_license_text(text: &str) -> io::Result<()> {
  let mut stdout = io::stdout().lock();
  stdout.write_all(text.as_bytes())?;
  stdout.flush()
}

/// Print the supported licenses as an aligned two-column table.
pub fn print_license_table(licenses: &[LicenseDescriptor]) {
  let width = licenses.iter().map(|l| l.alias.len()).max().unwrap_or(0);

  for license in licenses {
    let alias = format!("{:<width$}", license.alias);
    println!("  {}  {}", alias.if_supports_color(Stream::Stdout, |s| s.bold()), license.name);
  }
}
