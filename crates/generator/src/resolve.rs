use crate::family::{Dimension, RouteFamily, match_path};
use seo_site_core::{Catalog, Error, Result, RouteParams};
use serde::Serialize;

/// Display names for every slot of one page, in route order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Bundle {
    family: RouteFamily,
    params: RouteParams,
    names: Vec<(&'static str, String)>,
}

impl Bundle {
    pub fn family(&self) -> RouteFamily {
        self.family
    }

    pub fn params(&self) -> &RouteParams {
        &self.params
    }

    /// Display name bound to `slot` ("service", "location", "first", ...)
    pub fn get(&self, slot: &str) -> Option<&str> {
        self.names
            .iter()
            .find(|(name, _)| *name == slot)
            .map(|(_, value)| value.as_str())
    }

    pub fn names(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.names.iter().map(|(slot, value)| (*slot, value.as_str()))
    }

    /// Site-relative URL path of the page
    pub fn path(&self) -> String {
        self.family.path(&self.params)
    }
}

/// Resolve `params` against the catalog for `family`.
///
/// Fails closed: a wrong number of slugs, any slug missing from its
/// dictionary (for FAQ topics: from both the topic and FAQ dictionaries), or a comparison that is not a curated pair gives
/// `Error::NotFound`. Partial bundles are never returned.
pub fn resolve(catalog: &Catalog, family: RouteFamily, params: &RouteParams) -> Result<Bundle> {
    let descriptor = family.descriptor();
    let not_found = || Error::NotFound(format!("{} {}", family, params));

    if params.len() != descriptor.dimensions.len() {
        return Err(not_found());
    }

    let mut names = Vec::with_capacity(descriptor.dimensions.len() + 1);
    for (&dimension, slug) in descriptor.dimensions.iter().zip(params.iter()) {
        match dimension {
            Dimension::Dictionary(kind) => {
                let name = catalog.dictionary(kind).get(slug).ok_or_else(not_found)?;
                names.push((dimension.slots()[0], name.to_string()));
            }
            Dimension::Topic => {
                let name = catalog
                    .faq_topics
                    .get(slug)
                    .or_else(|| catalog.faqs.get(slug))
                    .ok_or_else(not_found)?;
                names.push(("topic", name.to_string()));
            }
            Dimension::Comparison => {
                let pair = catalog.comparison(slug).ok_or_else(not_found)?;
                let first = catalog.services.get(&pair.first).ok_or_else(not_found)?;
                let second = catalog.services.get(&pair.second).ok_or_else(not_found)?;
                names.push(("first", first.to_string()));
                names.push(("second", second.to_string()));
            }
        }
    }

    Ok(Bundle {
        family,
        params: params.clone(),
        names,
    })
}

/// Match a raw request path to its family, then resolve it
pub fn resolve_path(catalog: &Catalog, path: &str) -> Result<Bundle> {
    let (family, params) =
        match_path(path).ok_or_else(|| Error::NotFound(path.to_string()))?;
    resolve(catalog, family, &params)
}
