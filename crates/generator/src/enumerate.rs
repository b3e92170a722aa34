use crate::family::{Dimension, RouteFamily};
use crate::product::cartesian_product;
use seo_site_core::{Catalog, RouteParams};
use tracing::debug;

/// Published slugs a dimension contributes to enumeration
pub fn dimension_values(catalog: &Catalog, dimension: Dimension) -> Vec<String> {
    match dimension {
        Dimension::Dictionary(kind) => catalog
            .dictionary(kind)
            .published()
            .map(|entry| entry.slug.clone())
            .collect(),
        Dimension::Topic => catalog
            .faq_topics
            .published()
            .map(|entry| entry.slug.clone())
            .collect(),
        Dimension::Comparison => catalog.comparisons.iter().map(|pair| pair.slug()).collect(),
    }
}

/// Every parameter tuple to pre-render for `family`.
///
/// The first dimension varies slowest. Comparison routes iterate the curated
/// pair list rather than a product of services.
pub fn enumerate(catalog: &Catalog, family: RouteFamily) -> Vec<RouteParams> {
    let lists: Vec<Vec<String>> = family
        .descriptor()
        .dimensions
        .iter()
        .map(|&dimension| dimension_values(catalog, dimension))
        .collect();

    let routes: Vec<RouteParams> = cartesian_product(&lists)
        .into_iter()
        .map(RouteParams::from)
        .collect();

    debug!(family = %family, routes = routes.len(), "enumerated routes");
    routes
}

/// Enumerate every family, in `RouteFamily::ALL` order
pub fn enumerate_all(catalog: &Catalog) -> Vec<(RouteFamily, RouteParams)> {
    RouteFamily::ALL
        .into_iter()
        .flat_map(|family| {
            enumerate(catalog, family)
                .into_iter()
                .map(move |params| (family, params))
        })
        .collect()
}
