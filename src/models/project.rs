// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Project records and the portfolio that holds them.
//!
//! A portfolio is loaded once at startup, either from a YAML/JSON file or
//! from the built-in defaults, and is never mutated afterwards.

use serde::{Deserialize, Serialize};

/// A single portfolio entry shown as a carousel or grid card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub title: String,
    pub image_url: String,
    pub description: String,
    /// Display order matters.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Absolute URL or a path relative to the portfolio's `base_url`.
    pub link: String,
}

impl ProjectRecord {
    /// Create a new project record.
    pub fn new(
        title: impl Into<String>,
        image_url: impl Into<String>,
        description: impl Into<String>,
        tags: &[&str],
        link: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            image_url: image_url.into(),
            description: description.into(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            link: link.into(),
        }
    }
}

/// Complete portfolio data for serialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Portfolio {
    /// Base used to resolve relative project links.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    pub projects: Vec<ProjectRecord>,
}

impl Default for Portfolio {
    fn default() -> Self {
        Self {
            base_url: Some("https://adrianuuuu.github.io".to_string()),
            projects: vec![
                ProjectRecord::new(
                    "PROJECT I",
                    "https://images.unsplash.com/photo-1551650975-87deedd944c3?w=800&h=600&fit=crop",
                    "Modern interactive calculator",
                    &["JavaScript", "CSS", "HTML"],
                    "https://adrianuuuu.github.io/Calculadoras/",
                ),
                ProjectRecord::new(
                    "PROJECT II",
                    "https://images.unsplash.com/photo-1504674900247-0877df9cc836?w=800&h=600&fit=crop",
                    "Cooking recipe platform",
                    &["React", "API", "Design"],
                    "/projetos/portfolio/paginas/coding.html",
                ),
                ProjectRecord::new(
                    "PROJECT III",
                    "https://images.unsplash.com/photo-1560174038-da43ac74f01b?w=800&h=600&fit=crop",
                    "Interactive chess game",
                    &["Game Dev", "Logic", "UI"],
                    "/projetos/portfolio/paginas/coding.html",
                ),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_portfolio_has_three_projects() {
        let portfolio = Portfolio::default();
        assert_eq!(portfolio.projects.len(), 3);
        assert_eq!(portfolio.projects[0].tags, vec!["JavaScript", "CSS", "HTML"]);
    }

    #[test]
    fn test_tags_default_to_empty() {
        let json = r#"{"title":"T","image_url":"i","description":"d","link":"/x"}"#;
        let record: ProjectRecord = serde_json::from_str(json).unwrap();
        assert!(record.tags.is_empty());
    }
}
