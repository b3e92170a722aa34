use anyhow::{Context, Result};
use seo_site_core::parse_site_toml_str;
use std::fs;
use std::path::{Path, PathBuf};

/// Escape a string for safe inclusion in TOML per TOML v1.0.0
///
/// Handles the required escape sequences for TOML basic strings:
/// - Backslash (\\) -> \\\\
/// - Quote (\") -> \\\"
/// - Backspace (\b) -> \\b
/// - Form feed (\f) -> \\f
/// - Newline (\n) -> \\n
/// - Carriage return (\r) -> \\r
/// - Tab (\t) -> \\t
///
/// The starter file is written by hand so its comments survive; the toml
/// crate's serializer would drop them.
///
/// See: https://toml.io/en/v1.0.0#string
fn toml_escape_string(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\x08', "\\b")
        .replace('\x0C', "\\f")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}

/// Initialize a new site project.
///
/// Creates the directory if needed, then writes:
/// - `site.toml` with the site and contact sections and commented examples
///   for every dictionary
/// - `public/` for static files served under `/assets` (logo, images)
///
/// Dictionaries left out of site.toml fall back to the builtin UK catalog, so
/// the fresh project already builds the full page set.
///
/// # Errors
///
/// Returns an error if site.toml already exists or file operations fail.
pub async fn run(path: PathBuf, name: Option<String>, url: Option<String>) -> Result<()> {
    println!("Initializing site project: {}", path.display());

    let site_toml_path = path.join("site.toml");
    if site_toml_path.exists() {
        anyhow::bail!(
            "site.toml already exists at {}\nHint: Delete it first or use a different directory",
            site_toml_path.display()
        );
    }

    fs::create_dir_all(path.join("public")).context("Failed to create public directory")?;
    generate_site_toml(&path, name.as_deref(), url.as_deref())?;

    println!("\n✓ Initialization complete!");
    println!("\nGenerated structure:");
    println!("  {}/", path.display());
    println!("  ├── site.toml            ← Edit this to set name, URL, contact details");
    println!("  └── public/              ← Files here are served under /assets");

    println!("\nNext steps:");
    println!("  1. Edit site.toml (site URL, WhatsApp number, booking link)");
    println!("  2. Add public/logo.png");
    println!("  3. Preview: seo-site preview {}", path.display());

    Ok(())
}

fn generate_site_toml(base: &Path, name: Option<&str>, url: Option<&str>) -> Result<()> {
    let site_name = toml_escape_string(name.unwrap_or("My SEO Site"));
    let site_url = toml_escape_string(url.unwrap_or("https://www.example.com"));

    let name_comment = if name.is_some() {
        ""
    } else {
        "  # TODO: Set site name"
    };
    let url_comment = if url.is_some() {
        ""
    } else {
        "  # TODO: Set site URL"
    };

    let toml = format!(
        r##"# Generated by seo-site init
# Edit this file to customize your site

[site]
name = "{site_name}"{name_comment}
url = "{site_url}"{url_comment}
description = "Programmatic SEO pages for every service and town we cover."

[contact]
email = "hello@example.com"  # TODO: Set contact email
whatsapp = "+440000000000"  # TODO: Set WhatsApp number (or WHATSAPP_NUMBER env var)
booking_url = "https://calendly.com/your-name/15min"  # TODO: Or BOOKING_URL env var

# Every dictionary below is optional. A section present in this file
# replaces the builtin list; leave it out to keep the builtin UK catalog.
# Entries with published = false still resolve but are not pre-rendered.
#
# [[location]]
# slug = "london"
# name = "London"
#
# [[service]]
# slug = "local-seo"
# name = "Local SEO"
#
# [[competitor]]
# slug = "seo-agency"
# name = "SEO Agency"
#
# [[pricing]]
# slug = "seo-cost"
# name = "SEO Cost"
#
# [[faq]]
# slug = "faq"
# name = "FAQ"
#
# Topics for /faq/{{topic}}/{{location}} pages (none by default)
# [[faq_topic]]
# slug = "seo-cost"
# name = "SEO Cost"
#
# Comparison pairs must name services listed above
# [[comparison]]
# first = "local-seo"
# second = "technical-seo"
"##
    );

    // Validate the generated file the same way every other command loads it
    parse_site_toml_str(&toml)
        .context("Generated site.toml is invalid - check --name and --url")?;

    fs::write(base.join("site.toml"), toml).context("Failed to write site.toml")?;

    Ok(())
}
