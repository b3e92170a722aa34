use crate::family::{RouteFamily, match_path};
use crate::render::{PageContent, render};
use crate::resolve::{Bundle, resolve};
use seo_site_core::{RouteParams, Site};
use serde::Serialize;

/// Head-tag data for one page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageMetadata {
    pub title: String,
    pub description: String,
    pub canonical_url: String,
}

/// Metadata for a route; falls back to the family's generic title and
/// description when the route does not resolve.
pub fn page_metadata(site: &Site, family: RouteFamily, params: &RouteParams) -> PageMetadata {
    match resolve(&site.catalog, family, params) {
        Ok(bundle) => metadata_for(site, &bundle, &render(&bundle)),
        Err(_) => fallback_metadata(site, family),
    }
}

/// Metadata for a raw request path, including paths outside every family
pub fn path_metadata(site: &Site, path: &str) -> PageMetadata {
    match match_path(path) {
        Some((family, params)) => page_metadata(site, family, &params),
        None => PageMetadata {
            title: site.settings.name.clone(),
            description: site.settings.description.clone(),
            canonical_url: site.absolute_url("/"),
        },
    }
}

pub fn metadata_for(site: &Site, bundle: &Bundle, content: &PageContent) -> PageMetadata {
    PageMetadata {
        title: format!("{} | {}", content.title, site.settings.name),
        description: content.description.clone(),
        canonical_url: site.absolute_url(&bundle.path()),
    }
}

pub fn fallback_metadata(site: &Site, family: RouteFamily) -> PageMetadata {
    let descriptor = family.descriptor();
    PageMetadata {
        title: descriptor.fallback_title.to_string(),
        description: descriptor.fallback_description.to_string(),
        canonical_url: site.absolute_url(descriptor.prefix),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use seo_site_core::builtin::{default_contact, default_settings};
    use seo_site_core::Catalog;

    fn site() -> Site {
        Site {
            settings: default_settings(),
            contact: default_contact(),
            catalog: Catalog::builtin().clone(),
        }
    }

    #[test]
    fn test_metadata_for_resolved_page() {
        let meta = page_metadata(
            &site(),
            RouteFamily::ServiceLocation,
            &RouteParams::new(["local-seo", "london"]),
        );
        assert_eq!(meta.title, "Local SEO Services in London | AutomateSEO.co");
        assert!(meta.description.starts_with("Professional Local SEO services in London."));
        assert_eq!(
            meta.canonical_url,
            "https://www.automateseo.co/seo-services/local-seo/london"
        );
    }

    #[test]
    fn test_metadata_falls_back_per_family() {
        let meta = page_metadata(
            &site(),
            RouteFamily::Pricing,
            &RouteParams::new(["free-seo", "london"]),
        );
        assert_eq!(meta.title, "SEO Pricing");
        assert_eq!(meta.description, "Transparent SEO pricing for your business.");
        assert_eq!(meta.canonical_url, "https://www.automateseo.co/pricing");
    }

    #[test]
    fn test_path_metadata() {
        let site = site();
        let meta = path_metadata(&site, "/compare/local-seo-vs-technical-seo/london");
        assert_eq!(
            meta.title,
            "Local SEO vs Technical SEO in London | AutomateSEO.co"
        );

        let meta = path_metadata(&site, "/compare/nothing");
        assert_eq!(meta.title, "SEO Service Comparison");

        let meta = path_metadata(&site, "/unknown");
        assert_eq!(meta.title, "AutomateSEO.co");
        assert_eq!(meta.canonical_url, "https://www.automateseo.co/");
    }
}
