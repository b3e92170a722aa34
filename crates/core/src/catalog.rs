use crate::error::{Error, Result};
use crate::types::{ComparisonPair, is_valid_slug};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;

/// One slug → display name mapping
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub slug: String,
    pub name: String,
    /// Published entries are pre-rendered; unpublished ones still resolve.
    #[serde(default = "default_published")]
    pub published: bool,
}

fn default_published() -> bool {
    true
}

impl Entry {
    pub fn new(slug: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            name: name.into(),
            published: true,
        }
    }

    pub fn unpublished(mut self) -> Self {
        self.published = false;
        self
    }
}

/// Which dictionary of the catalog a route dimension draws from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DictionaryKind {
    Location,
    Service,
    Competitor,
    Pricing,
    Faq,
    FaqTopic,
}

impl DictionaryKind {
    pub const ALL: [DictionaryKind; 6] = [
        DictionaryKind::Location,
        DictionaryKind::Service,
        DictionaryKind::Competitor,
        DictionaryKind::Pricing,
        DictionaryKind::Faq,
        DictionaryKind::FaqTopic,
    ];

    /// Name used for the TOML array table and in messages
    pub fn label(self) -> &'static str {
        match self {
            DictionaryKind::Location => "location",
            DictionaryKind::Service => "service",
            DictionaryKind::Competitor => "competitor",
            DictionaryKind::Pricing => "pricing",
            DictionaryKind::Faq => "faq",
            DictionaryKind::FaqTopic => "faq_topic",
        }
    }
}

impl fmt::Display for DictionaryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Ordered, duplicate-free slug → display name table
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    entries: Vec<Entry>,
    index: HashMap<String, usize>,
}

impl Dictionary {
    /// Build a dictionary, rejecting malformed slugs, duplicate slugs and
    /// blank display names.
    pub fn new(kind: DictionaryKind, entries: Vec<Entry>) -> Result<Self> {
        let mut index = HashMap::with_capacity(entries.len());

        for (position, entry) in entries.iter().enumerate() {
            if !is_valid_slug(&entry.slug) {
                return Err(Error::InvalidData(format!(
                    "Invalid {} slug '{}': use lowercase letters, digits and single hyphens",
                    kind, entry.slug
                )));
            }
            if entry.name.trim().is_empty() {
                return Err(Error::InvalidData(format!(
                    "Empty display name for {} '{}'",
                    kind, entry.slug
                )));
            }
            if index.insert(entry.slug.clone(), position).is_some() {
                return Err(Error::InvalidData(format!(
                    "Duplicate {} slug '{}'",
                    kind, entry.slug
                )));
            }
        }

        Ok(Self { entries, index })
    }

    /// Build from trusted constant data; the first `published` rows are
    /// marked for pre-rendering.
    pub(crate) fn from_static(rows: &[(&str, &str)], published: usize) -> Self {
        let entries: Vec<Entry> = rows
            .iter()
            .enumerate()
            .map(|(i, (slug, name))| Entry {
                slug: (*slug).to_string(),
                name: (*name).to_string(),
                published: i < published,
            })
            .collect();
        let index = entries
            .iter()
            .enumerate()
            .map(|(i, e)| (e.slug.clone(), i))
            .collect();
        Self { entries, index }
    }

    /// Display name for `slug`, if the dictionary knows it
    pub fn get(&self, slug: &str) -> Option<&str> {
        self.index
            .get(slug)
            .map(|&i| self.entries[i].name.as_str())
    }

    pub fn contains(&self, slug: &str) -> bool {
        self.index.contains_key(slug)
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn published(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter().filter(|e| e.published)
    }

    pub fn published_slugs(&self) -> Vec<&str> {
        self.published().map(|e| e.slug.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Every dictionary the page families draw from, plus the curated
/// comparison pairs.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub locations: Dictionary,
    pub services: Dictionary,
    pub competitors: Dictionary,
    pub pricing: Dictionary,
    pub faqs: Dictionary,
    /// Topics for `/faq/{topic}/{location}`; empty unless configured.
    pub faq_topics: Dictionary,
    pub comparisons: Vec<ComparisonPair>,
}

impl Catalog {
    pub fn dictionary(&self, kind: DictionaryKind) -> &Dictionary {
        match kind {
            DictionaryKind::Location => &self.locations,
            DictionaryKind::Service => &self.services,
            DictionaryKind::Competitor => &self.competitors,
            DictionaryKind::Pricing => &self.pricing,
            DictionaryKind::Faq => &self.faqs,
            DictionaryKind::FaqTopic => &self.faq_topics,
        }
    }

    pub fn dictionary_mut(&mut self, kind: DictionaryKind) -> &mut Dictionary {
        match kind {
            DictionaryKind::Location => &mut self.locations,
            DictionaryKind::Service => &mut self.services,
            DictionaryKind::Competitor => &mut self.competitors,
            DictionaryKind::Pricing => &mut self.pricing,
            DictionaryKind::Faq => &mut self.faqs,
            DictionaryKind::FaqTopic => &mut self.faq_topics,
        }
    }

    /// Curated pair whose route segment is `slug` ("a-vs-b")
    pub fn comparison(&self, slug: &str) -> Option<&ComparisonPair> {
        self.comparisons.iter().find(|pair| pair.slug() == slug)
    }

    /// Ensure every comparison pair names two distinct known services and
    /// appears only once.
    pub fn check_comparisons(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for pair in &self.comparisons {
            for slug in [&pair.first, &pair.second] {
                if !self.services.contains(slug) {
                    return Err(Error::InvalidData(format!(
                        "Comparison '{}' references unknown service '{}'",
                        pair.slug(),
                        slug
                    )));
                }
            }
            if pair.first == pair.second {
                return Err(Error::InvalidData(format!(
                    "Comparison '{}' compares a service with itself",
                    pair.slug()
                )));
            }
            if !seen.insert(pair.slug()) {
                return Err(Error::InvalidData(format!(
                    "Duplicate comparison '{}'",
                    pair.slug()
                )));
            }
        }
        Ok(())
    }
}
