pub mod build;
pub mod init;
pub mod preview;
pub mod routes;
pub mod validate;

use anyhow::{Context, Result};
use seo_site_core::{Site, parse_site_toml};
use std::path::Path;

/// Load `site.toml` from a project directory with the CLI's usual hints
pub fn load_site(path: &Path) -> Result<Site> {
    if !path.exists() {
        anyhow::bail!(
            "Site directory does not exist: {}\nRun 'seo-site init {}' first",
            path.display(),
            path.display()
        );
    }

    let site_toml_path = path.join("site.toml");
    if !site_toml_path.exists() {
        anyhow::bail!(
            "site.toml not found in {}\nRun 'seo-site init {}' first",
            path.display(),
            path.display()
        );
    }

    parse_site_toml(&site_toml_path).context("Failed to parse site.toml")
}
