use crate::builtin::{default_contact, default_settings};
use crate::catalog::{Catalog, Dictionary, DictionaryKind, Entry};
use crate::error::{Error, Result};
use crate::types::*;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Raw TOML configuration structure
/// This matches the site.toml file structure exactly
#[derive(Debug, Deserialize)]
struct RawConfig {
    site: RawSite,
    contact: Option<RawContact>,
    location: Option<Vec<Entry>>,
    service: Option<Vec<Entry>>,
    competitor: Option<Vec<Entry>>,
    pricing: Option<Vec<Entry>>,
    faq: Option<Vec<Entry>>,
    faq_topic: Option<Vec<Entry>>,
    comparison: Option<Vec<RawComparison>>,
}

#[derive(Debug, Deserialize)]
struct RawSite {
    name: String,
    url: String,
    description: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawContact {
    email: Option<String>,
    whatsapp: Option<String>,
    booking_url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawComparison {
    first: String,
    second: String,
}

/// Parse site.toml from a file path, then apply environment overrides
/// (`WHATSAPP_NUMBER`, `BOOKING_URL`).
pub fn parse_site_toml<P: AsRef<Path>>(path: P) -> Result<Site> {
    let content = fs::read_to_string(path)?;
    let mut site = parse_site_toml_str(&content)?;
    apply_contact_overrides(&mut site.contact, |key| std::env::var(key).ok());
    Ok(site)
}

/// Parse site.toml from a string (useful for testing)
pub fn parse_site_toml_str(content: &str) -> Result<Site> {
    let raw: RawConfig = toml::from_str(content)?;

    let url = validate_url(&raw.site.url)?;
    if raw.site.name.trim().is_empty() {
        return Err(Error::ConfigParse("site.name must not be empty".to_string()));
    }

    let defaults = default_settings();
    let settings = SiteSettings {
        name: raw.site.name,
        url,
        description: raw.site.description.unwrap_or(defaults.description),
    };

    let mut contact = default_contact();
    if let Some(raw_contact) = raw.contact {
        if let Some(email) = raw_contact.email {
            contact.email = email;
        }
        if let Some(whatsapp) = raw_contact.whatsapp {
            contact.whatsapp = whatsapp;
        }
        if let Some(booking_url) = raw_contact.booking_url {
            contact.booking_url = booking_url;
        }
    }

    // Each dictionary present in the file replaces the builtin one
    let mut catalog = Catalog::builtin().clone();
    let sections = [
        (DictionaryKind::Location, raw.location),
        (DictionaryKind::Service, raw.service),
        (DictionaryKind::Competitor, raw.competitor),
        (DictionaryKind::Pricing, raw.pricing),
        (DictionaryKind::Faq, raw.faq),
        (DictionaryKind::FaqTopic, raw.faq_topic),
    ];
    for (kind, entries) in sections {
        if let Some(entries) = entries {
            *catalog.dictionary_mut(kind) = Dictionary::new(kind, entries)
                .map_err(|e| Error::ConfigParse(format!("[[{}]]: {}", kind, e)))?;
        }
    }

    if let Some(pairs) = raw.comparison {
        catalog.comparisons = pairs
            .into_iter()
            .map(|p| ComparisonPair::new(p.first, p.second))
            .collect();
    }
    catalog
        .check_comparisons()
        .map_err(|e| Error::ConfigParse(format!("[[comparison]]: {}", e)))?;

    Ok(Site {
        settings,
        contact,
        catalog,
    })
}

/// Replace contact fields from the environment when set and non-empty
fn apply_contact_overrides<F>(contact: &mut Contact, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(number) = lookup("WHATSAPP_NUMBER").filter(|v| !v.trim().is_empty()) {
        contact.whatsapp = number;
    }
    if let Some(url) = lookup("BOOKING_URL").filter(|v| !v.trim().is_empty()) {
        contact.booking_url = url;
    }
}

/// Require an absolute http(s) base URL and strip any trailing slash.
fn validate_url(url: &str) -> Result<String> {
    let trimmed = url.trim();
    if !(trimmed.starts_with("https://") || trimmed.starts_with("http://")) {
        return Err(Error::ConfigParse(format!(
            "site.url must start with http:// or https://, got '{}'",
            url
        )));
    }
    let base = trimmed.trim_end_matches('/');
    if base.ends_with(':') || base.ends_with("//") {
        return Err(Error::ConfigParse(format!("site.url has no host: '{}'", url)));
    }
    Ok(base.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"
[site]
name = "Test SEO"
url = "https://test.example.com/"
"#;

    #[test]
    fn test_parse_minimal_config_uses_builtin_catalog() {
        let site = parse_site_toml_str(MINIMAL).unwrap();
        assert_eq!(site.settings.name, "Test SEO");
        assert_eq!(site.settings.url, "https://test.example.com");
        assert_eq!(site.contact.email, "sales@automateseo.co");
        assert_eq!(site.catalog.locations.len(), Catalog::builtin().locations.len());
        assert_eq!(site.catalog.comparisons.len(), 8);
        assert!(site.catalog.faq_topics.is_empty());
    }

    #[test]
    fn test_parse_config_replaces_dictionaries() {
        let toml = r#"
[site]
name = "Test SEO"
url = "https://test.example.com"
description = "Local pages"

[contact]
email = "hello@example.com"

[[location]]
slug = "london"
name = "London"

[[location]]
slug = "manchester"
name = "Manchester"
published = false

[[service]]
slug = "local-seo"
name = "Local SEO"

[[service]]
slug = "technical-seo"
name = "Technical SEO"

[[comparison]]
first = "local-seo"
second = "technical-seo"

[[faq_topic]]
slug = "seo-cost"
name = "SEO Cost"
"#;

        let site = parse_site_toml_str(toml).unwrap();
        assert_eq!(site.settings.description, "Local pages");
        assert_eq!(site.contact.email, "hello@example.com");
        assert_eq!(site.contact.whatsapp, "+447810666662");
        assert_eq!(site.catalog.locations.len(), 2);
        assert_eq!(site.catalog.locations.published_slugs(), vec!["london"]);
        assert_eq!(site.catalog.comparisons.len(), 1);
        assert_eq!(site.catalog.faq_topics.get("seo-cost"), Some("SEO Cost"));
        // Untouched sections keep the builtin data
        assert_eq!(site.catalog.pricing.len(), 10);
    }

    #[test]
    fn test_parse_config_rejects_stale_comparisons() {
        // Replacing services without replacing comparisons leaves builtin
        // pairs pointing at services that no longer exist
        let toml = r#"
[site]
name = "Test SEO"
url = "https://test.example.com"

[[service]]
slug = "local-seo"
name = "Local SEO"
"#;
        let err = parse_site_toml_str(toml).unwrap_err();
        assert!(err.to_string().contains("[[comparison]]"));
        assert!(err.to_string().contains("unknown service"));
    }

    #[test]
    fn test_parse_config_rejects_invalid_slug() {
        let toml = r#"
[site]
name = "Test SEO"
url = "https://test.example.com"

[[location]]
slug = "New York"
name = "New York"
"#;
        let err = parse_site_toml_str(toml).unwrap_err();
        assert!(err.to_string().contains("[[location]]"));
        assert!(err.to_string().contains("Invalid location slug"));
    }

    #[test]
    fn test_parse_config_rejects_bad_url() {
        let toml = r#"
[site]
name = "Test SEO"
url = "test.example.com"
"#;
        let err = parse_site_toml_str(toml).unwrap_err();
        assert!(err.to_string().contains("site.url"));

        assert!(validate_url("https://").is_err());
        assert_eq!(
            validate_url(" https://example.com// ").unwrap(),
            "https://example.com"
        );
    }

    #[test]
    fn test_parse_config_requires_site_table() {
        assert!(parse_site_toml_str("[contact]\nemail = \"a@b.co\"").is_err());
    }

    #[test]
    fn test_contact_overrides() {
        let mut contact = default_contact();
        apply_contact_overrides(&mut contact, |key| match key {
            "WHATSAPP_NUMBER" => Some("+441234567890".to_string()),
            "BOOKING_URL" => Some("   ".to_string()),
            _ => None,
        });
        assert_eq!(contact.whatsapp, "+441234567890");
        assert_eq!(
            contact.booking_url,
            "https://calendly.com/deankeatingpf/30min"
        );
    }
}
