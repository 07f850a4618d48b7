//! # gl
//!
//! A tool that writes a LICENSE file for a project from a built-in set of
//! license templates, filling in the copyright holder and year.
//!
//! `gl` never overwrites: if anything already exists at the output path it
//! reports that and leaves it alone. When no author is given, the name is
//! taken from `git config user.name`, checking the local, global and system
//! scopes in that order.
//!
//! ## Usage as a Library
//!
//! ```rust,no_run
//! use std::path::Path;
//!
//! use gl_license::author::AuthorResolver;
//! use gl_license::templates::{self, LicenseData};
//! use gl_license::writer::{WriteOutcome, write_license};
//!
//! fn main() -> anyhow::Result<()> {
//!     let author = AuthorResolver::git().resolve()?;
//!     let template = templates::get("mit")?;
//!     let text = templates::render(&template, &LicenseData { author, year: 2025 });
//!
//!     match write_license(Path::new("LICENSE"), &text)? {
//!         WriteOutcome::Created(path) => println!("wrote {}", path.display()),
//!         WriteOutcome::AlreadyExists(path) => println!("{} already exists", path.display()),
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Modules
//!
//! * [`templates`] - Built-in license templates and rendering
//! * [`author`] - Author detection from git configuration
//! * [`writer`] - Create-only output of the rendered license
//! * [`config`] - Optional `.gl.toml` defaults
//! * [`cli`] - Command-line interface
//! * [`logging`] - Logging utilities for verbose output
//!
//! [`templates`]: crate::templates
//! [`author`]: crate::author
//! [`writer`]: crate::writer
//! [`config`]: crate::config
//! [`cli`]: crate::cli
//! [`logging`]: crate::logging

pub mod author;
pub mod cli;
pub mod config;
pub mod logging;
pub mod output;
pub mod templates;
pub mod writer;
