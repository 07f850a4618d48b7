//! # Templates Module
//!
//! This module holds the built-in license templates and renders them with the
//! author name and copyright year.
//!
//! The module includes:
//! - [`LicenseDescriptor`] and the static [`LICENSES`] table, one entry per
//!   supported license
//! - [`Template`] for the raw text of a license with its placeholders
//! - [`LicenseData`] and [`render`] for filling in the placeholders
//!
//! ## Example
//!
//! ```rust
//! use gl_license::templates::{self, LicenseData};
//!
//! # fn main() -> anyhow::Result<()> {
//! let template = templates::get("mit")?;
//! let data = LicenseData {
//!   author: "Jane Doe".to_string(),
//!   year: 2024,
//! };
//!
//! let text = templates::render(&template, &data);
//! assert!(text.contains("Copyright (c) 2024 Jane Doe"));
//! # Ok(())
//! # }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, trace};

/// Placeholder replaced by the copyright year.
pub const YEAR_PLACEHOLDER: &str = "<YEAR>";

/// Placeholder replaced by the author name.
pub const AUTHOR_PLACEHOLDER: &str = "<AUTHOR>";

/// A supported license: the identifier used on the command line and the name
/// shown to users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LicenseDescriptor {
  /// Identifier accepted on the command line (e.g. `mit`)
  pub alias: &'static str,
  /// Human readable license name
  pub name: &'static str,
}

/// Every license `gl` knows how to generate, ordered by alias.
pub const LICENSES: &[LicenseDescriptor] = &[
  LicenseDescriptor {
    alias: "agpl",
    name: "GNU AGPLv3",
  },
  LicenseDescriptor {
    alias: "apache",
    name: "Apache License 2.0",
  },
  LicenseDescriptor {
    alias: "bsd2",
    name: "BSD 2-Clause \"Simplified\" License",
  },
  LicenseDescriptor {
    alias: "bsd3",
    name: "BSD 3-Clause \"New\" or \"Revised\" License",
  },
  LicenseDescriptor {
    alias: "eclipse",
    name: "Eclipse Public License 2.0",
  },
  LicenseDescriptor {
    alias: "gpl",
    name: "GNU GPLv3",
  },
  LicenseDescriptor {
    alias: "lgpl",
    name: "GNU LGPLv3",
  },
  LicenseDescriptor {
    alias: "lgpl2",
    name: "GNU LGPLv2.1",
  },
  LicenseDescriptor {
    alias: "mit",
    name: "MIT License",
  },
  LicenseDescriptor {
    alias: "mpl",
    name: "Mozilla Public License 2.0",
  },
  LicenseDescriptor {
    alias: "unlicense",
    name: "The Unlicense",
  },
];

/// Error type for template lookup and loading.
#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
  /// No template is registered for the alias.
  #[error("Unknown license '{0}'")]
  UnknownLicense(String),

  /// A custom template file could not be read.
  #[error("Failed to read license template '{path}': {source}")]
  Read { path: PathBuf, source: std::io::Error },
}

/// Raw license text containing the [`YEAR_PLACEHOLDER`] and
/// [`AUTHOR_PLACEHOLDER`] tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
  body: String,
}

impl Template {
  /// Wraps raw template text.
  pub fn new(body: impl Into<String>) -> Self {
    Self { body: body.into() }
  }

  /// Loads a custom template from a file.
  ///
  /// # Errors
  ///
  /// Returns [`TemplateError::Read`] if the file does not exist, cannot be
  /// read, or is not valid UTF-8.
  pub fn from_file(path: &Path) -> Result<Self, TemplateError> {
    debug!("Loading template from: {}", path.display());

    let body = fs::read_to_string(path).map_err(|e| TemplateError::Read {
      path: path.to_path_buf(),
      source: e,
    })?;

    Ok(Self { body })
  }

  /// The unrendered template text.
  pub const fn body(&self) -> &str {
    self.body.as_str()
  }
}

/// Data used to fill out a license template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LicenseData {
  /// Copyright holder, inserted verbatim
  pub author: String,
  /// Copyright year
  pub year: i64,
}

/// Returns the table of supported licenses.
pub const fn licenses() -> &'static [LicenseDescriptor] {
  LICENSES
}

/// Looks up the descriptor for an alias.
pub fn find(alias: &str) -> Option<&'static LicenseDescriptor> {
  LICENSES.iter().find(|license| license.alias == alias)
}

/// Iterates over every supported alias.
pub fn aliases() -> impl Iterator<Item = &'static str> {
  LICENSES.iter().map(|license| license.alias)
}

fn embedded(alias: &str) -> Option<&'static str> {
  let body = match alias {
    "agpl" => include_str!("../templates/agpl.txt"),
    "apache" => include_str!("../templates/apache.txt"),
    "bsd2" => include_str!("../templates/bsd2.txt"),
    "bsd3" => include_str!("../templates/bsd3.txt"),
    "eclipse" => include_str!("../templates/eclipse.txt"),
    "gpl" => include_str!("../templates/gpl.txt"),
    "lgpl" => include_str!("../templates/lgpl.txt"),
    "lgpl2" => include_str!("../templates/lgpl2.txt"),
    "mit" => include_str!("../templates/mit.txt"),
    "mpl" => include_str!("../templates/mpl.txt"),
    "unlicense" => include_str!("../templates/unlicense.txt"),
    _ => return None,
  };
  Some(body)
}

/// Returns the built-in template for a license alias.
///
/// # Errors
///
/// Returns [`TemplateError::UnknownLicense`] if the alias is not in
/// [`LICENSES`].
pub fn get(alias: &str) -> Result<Template, TemplateError> {
  let license = find(alias).ok_or_else(|| TemplateError::UnknownLicense(alias.to_string()))?;
  let body = embedded(license.alias).ok_or_else(|| TemplateError::UnknownLicense(alias.to_string()))?;

  debug!("Using built-in template for {} ({})", license.alias, license.name);

  Ok(Template::new(body))
}

/// Renders a template with the given data.
///
/// Replaces the first [`YEAR_PLACEHOLDER`] with the decimal year and the first
/// [`AUTHOR_PLACEHOLDER`] with the author, verbatim. Nothing else in the text
/// is touched.
pub fn render(template: &Template, data: &LicenseData) -> String {
  trace!("Rendering template with author {:?} and year {}", data.author, data.year);

  let year = data.year.to_string();
  let rendered = template.body.replacen(YEAR_PLACEHOLDER, &year, 1);
  rendered.replacen(AUTHOR_PLACEHOLDER, &data.author, 1)
}
