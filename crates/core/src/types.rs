use crate::catalog::Catalog;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Separator between the two service slugs of a comparison route segment.
pub const VERSUS_SEPARATOR: &str = "-vs-";

/// Complete site definition: branding, contact details and dictionaries
#[derive(Debug, Clone)]
pub struct Site {
    pub settings: SiteSettings,
    pub contact: Contact,
    pub catalog: Catalog,
}

impl Site {
    /// Absolute URL for a site-relative path such as `/seo-services/london`
    pub fn absolute_url(&self, path: &str) -> String {
        format!("{}{}", self.settings.url.trim_end_matches('/'), path)
    }
}

/// Branding shown in page heads and structured data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteSettings {
    pub name: String,
    /// Base URL without trailing slash (e.g., "https://www.automateseo.co")
    pub url: String,
    pub description: String,
}

/// Contact channels used by page calls-to-action
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contact {
    pub email: String,
    pub whatsapp: String,
    pub booking_url: String,
}

impl Contact {
    /// Phone number reduced to digits, as wa.me links expect
    pub fn whatsapp_digits(&self) -> String {
        self.whatsapp.chars().filter(|c| c.is_ascii_digit()).collect()
    }
}

/// A curated pair of service slugs compared on `/compare` pages.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ComparisonPair {
    pub first: String,
    pub second: String,
}

impl ComparisonPair {
    pub fn new(first: impl Into<String>, second: impl Into<String>) -> Self {
        Self {
            first: first.into(),
            second: second.into(),
        }
    }

    /// Route segment for this pair, e.g. "local-seo-vs-technical-seo"
    pub fn slug(&self) -> String {
        format!("{}{}{}", self.first, VERSUS_SEPARATOR, self.second)
    }
}

/// Ordered slugs identifying one page within a route family.
///
/// Construction never validates arity; the resolver rejects tuples whose
/// length does not match the family.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct RouteParams(Vec<String>);

impl RouteParams {
    pub fn new<I, S>(slugs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(slugs.into_iter().map(Into::into).collect())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Slugs joined as URL path segments ("local-seo/london")
    pub fn to_path_segments(&self) -> String {
        self.0.join("/")
    }
}

impl From<Vec<String>> for RouteParams {
    fn from(slugs: Vec<String>) -> Self {
        Self(slugs)
    }
}

impl fmt::Display for RouteParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({})", self.0.join(", "))
    }
}

/// Return `true` when `value` is lowercase kebab-case: ASCII lowercase
/// letters, digits and single hyphens, not starting or ending with a hyphen.
pub fn is_valid_slug(value: &str) -> bool {
    !value.is_empty()
        && !value.starts_with('-')
        && !value.ends_with('-')
        && !value.contains("--")
        && value
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}
