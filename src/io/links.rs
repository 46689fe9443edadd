// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Resolution of project links to openable URLs.

use anyhow::{anyhow, Result};
use url::Url;

/// Resolve a project link. Absolute URLs are returned unchanged; relative
/// paths are joined onto `base_url`.
pub fn resolve(link: &str, base_url: Option<&str>) -> Result<Url> {
    if let Ok(url) = Url::parse(link) {
        return Ok(url);
    }
    let base = base_url.ok_or_else(|| anyhow!("Relative link {} has no base URL", link))?;
    let joined = Url::parse(base)?.join(link)?;
    Ok(joined)
}
