// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Portfolio serialization and deserialization.
//!
//! This module handles exporting and importing portfolio data in YAML
//! and JSON formats.

use crate::models::project::Portfolio;
use anyhow::{bail, Result};
use std::path::Path;

/// Supported portfolio file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Yaml,
    Json,
}

impl Format {
    /// Pick a format from a file extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path.extension().and_then(|s| s.to_str());
        match extension {
            Some("yaml") | Some("yml") => Ok(Format::Yaml),
            Some("json") => Ok(Format::Json),
            _ => bail!("Unsupported file extension: {:?}", extension),
        }
    }
}

/// Export portfolio data to YAML format.
pub fn export_yaml(data: &Portfolio, path: &Path) -> Result<()> {
    let yaml = serde_yaml::to_string(data)?;
    std::fs::write(path, yaml)?;
    Ok(())
}

/// Export portfolio data to JSON format.
pub fn export_json(data: &Portfolio, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(data)?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Import portfolio data from YAML format.
pub fn import_yaml(path: &Path) -> Result<Portfolio> {
    let yaml = std::fs::read_to_string(path)?;
    let data = serde_yaml::from_str(&yaml)?;
    Ok(data)
}

/// Import portfolio data from JSON format.
pub fn import_json(path: &Path) -> Result<Portfolio> {
    let json = std::fs::read_to_string(path)?;
    let data = serde_json::from_str(&json)?;
    Ok(data)
}

/// Export in the format implied by the file extension.
pub fn export(data: &Portfolio, path: &Path) -> Result<()> {
    match Format::from_path(path)? {
        Format::Yaml => export_yaml(data, path),
        Format::Json => export_json(data, path),
    }
}

/// Import in the format implied by the file extension.
pub fn import(path: &Path) -> Result<Portfolio> {
    let portfolio = match Format::from_path(path)? {
        Format::Yaml => import_yaml(path)?,
        Format::Json => import_json(path)?,
    };
    if portfolio.projects.is_empty() {
        bail!("Portfolio file {} lists no projects", path.display());
    }
    log::info!(
        "Imported {} projects from {}",
        portfolio.projects.len(),
        path.display()
    );
    Ok(portfolio)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("folio-{}-{}", std::process::id(), name))
    }

    #[test]
    fn test_format_from_extension() {
        assert_eq!(Format::from_path(Path::new("a.yml")).unwrap(), Format::Yaml);
        assert_eq!(Format::from_path(Path::new("a.yaml")).unwrap(), Format::Yaml);
        assert_eq!(Format::from_path(Path::new("a.json")).unwrap(), Format::Json);
        assert!(Format::from_path(Path::new("a.toml")).is_err());
        assert!(Format::from_path(Path::new("noext")).is_err());
    }

    #[test]
    fn test_yaml_file_preserves_tag_order() {
        let path = temp_path("order.yaml");
        let portfolio = Portfolio::default();
        export(&portfolio, &path).unwrap();

        let loaded = import(&path).unwrap();
        assert_eq!(loaded, portfolio);
        assert_eq!(loaded.projects[2].tags, vec!["Game Dev", "Logic", "UI"]);
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_import_hand_written_yaml() {
        let path = temp_path("hand.yaml");
        std::fs::write(
            &path,
            "projects:\n  - title: Solo\n    image_url: https://img/1.jpg\n    description: Only one\n    link: /solo.html\n",
        )
        .unwrap();

        let loaded = import(&path).unwrap();
        assert_eq!(loaded.base_url, None);
        assert_eq!(loaded.projects.len(), 1);
        assert!(loaded.projects[0].tags.is_empty());
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_import_rejects_empty_portfolio() {
        let path = temp_path("empty.json");
        std::fs::write(&path, r#"{"projects": []}"#).unwrap();
        assert!(import(&path).is_err());
        std::fs::remove_file(&path).ok();
    }
}
