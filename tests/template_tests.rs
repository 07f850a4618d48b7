use std::fs;

use anyhow::Result;
use gl_license::templates::{self, LicenseData, Template, TemplateError};
use tempfile::tempdir;

fn data(author: &str, year: i64) -> LicenseData {
  LicenseData {
    author: author.to_string(),
    year,
  }
}

#[test]
fn test_templates_carry_their_license_title() -> Result<()> {
  let expected = [
    ("agpl", "GNU AFFERO GENERAL PUBLIC LICENSE"),
    ("apache", "Apache License"),
    ("bsd2", "BSD 2-Clause License"),
    ("bsd3", "BSD 3-Clause License"),
    ("eclipse", "Eclipse Public License - v 2.0"),
    ("gpl", "GNU GENERAL PUBLIC LICENSE"),
    ("lgpl", "GNU LESSER GENERAL PUBLIC LICENSE"),
    ("lgpl2", "Version 2.1, February 1999"),
    ("mit", "MIT License"),
    ("mpl", "Mozilla Public License Version 2.0"),
    ("unlicense", "unencumbered software released into the public domain"),
  ];

  assert_eq!(expected.len(), templates::licenses().len());
  for (alias, title) in expected {
    let template = templates::get(alias)?;
    assert!(template.body().contains(title), "{alias} should contain {title:?}");
  }
  Ok(())
}

#[test]
fn test_copyright_lines() -> Result<()> {
  let cases = [
    ("agpl", "Copyright (C) 1970  Ada Lovelace"),
    ("apache", "Copyright 1970 Ada Lovelace"),
    ("bsd2", "Copyright (c) 1970, Ada Lovelace"),
    ("gpl", "Copyright (C) 1970  Ada Lovelace"),
    ("lgpl2", "Copyright (C) 1970  Ada Lovelace"),
    ("mit", "Copyright (c) 1970 Ada Lovelace"),
    ("unlicense", "Dedicated to the public domain in 1970 by Ada Lovelace."),
  ];

  for (alias, line) in cases {
    let text = templates::render(&templates::get(alias)?, &data("Ada Lovelace", 1970));
    assert!(text.contains(line), "{alias} should contain {line:?}");
  }
  Ok(())
}

#[test]
fn test_gpl_keeps_sample_notice_placeholders() -> Result<()> {
  // The interactive notice in the appendix is meant for the user to fill in.
  let text = templates::render(&templates::get("gpl")?, &data("Ada Lovelace", 1970));
  assert!(text.contains("<program>  Copyright (C) <year>  <name of author>"));
  Ok(())
}

#[test]
fn test_custom_template_file() -> Result<()> {
  let temp_dir = tempdir()?;
  let path = temp_dir.path().join("custom.txt");
  fs::write(&path, "Copyright <YEAR> <AUTHOR>\nAll rights reserved.\n")?;

  let template = Template::from_file(&path)?;
  let rendered = templates::render(&template, &data("Test Company", 2025));

  assert_eq!(rendered, "Copyright 2025 Test Company\nAll rights reserved.\n");
  Ok(())
}

#[test]
fn test_custom_template_missing() {
  let err = Template::from_file(std::path::Path::new("/definitely/not/here.txt")).unwrap_err();
  assert!(matches!(err, TemplateError::Read { .. }));
}
