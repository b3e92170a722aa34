//! Programmatic page generation: route enumeration, slug resolution,
//! template rendering and the static HTML/sitemap output built from them.

pub mod enumerate;
pub mod family;
pub mod html;
pub mod metadata;
pub mod product;
pub mod render;
pub mod resolve;
pub mod sitemap;
pub mod templates;

pub use enumerate::{enumerate, enumerate_all};
pub use family::{RouteFamily, match_path};
pub use metadata::{PageMetadata, page_metadata, path_metadata};
pub use render::{PageContent, Section, render};
pub use resolve::{Bundle, resolve, resolve_path};

use chrono::NaiveDate;
use seo_site_core::{Result, Site};
use tracing::info;

/// A fully resolved and rendered page, ready to be written as HTML
#[derive(Debug, Clone)]
pub struct RenderedPage {
    /// Site-relative URL path, e.g. "/seo-services/london"
    pub path: String,
    pub bundle: Bundle,
    pub content: PageContent,
    pub metadata: PageMetadata,
}

pub fn render_page(site: &Site, bundle: Bundle) -> RenderedPage {
    let content = render(&bundle);
    let metadata = metadata::metadata_for(site, &bundle, &content);
    RenderedPage {
        path: bundle.path(),
        bundle,
        content,
        metadata,
    }
}

/// Resolve and render a raw request path; `Error::NotFound` for anything
/// outside the catalog.
pub fn render_request(site: &Site, path: &str) -> Result<RenderedPage> {
    let bundle = resolve_path(&site.catalog, path)?;
    Ok(render_page(site, bundle))
}

/// Render every enumerated route, in enumeration order
pub fn render_all(site: &Site) -> Result<Vec<RenderedPage>> {
    enumerate_all(&site.catalog)
        .into_iter()
        .map(|(family, params)| {
            let bundle = resolve(&site.catalog, family, &params)?;
            Ok(render_page(site, bundle))
        })
        .collect()
}

pub struct GeneratedSite {
    pub pages: Vec<(String, String)>,   // (file path, html)
    pub assets: Vec<(String, Vec<u8>)>, // (file path, data)
}

/// Relative output file for a URL path: "/seo-services/london" becomes
/// "seo-services/london/index.html".
pub fn output_file(url_path: &str) -> String {
    let trimmed = url_path.trim_matches('/');
    if trimmed.is_empty() {
        "index.html".to_string()
    } else {
        format!("{}/index.html", trimmed)
    }
}

/// Generate the complete static site.
///
/// Pages come out in enumeration order followed by the directory index and
/// the 404 page; the sitemap and robots.txt are returned as assets.
pub fn generate_site(site: &Site, lastmod: NaiveDate) -> Result<GeneratedSite> {
    let rendered = render_all(site)?;
    info!(pages = rendered.len(), "rendered site");

    let mut pages: Vec<(String, String)> = rendered
        .iter()
        .map(|page| (output_file(&page.path), html::page_html(site, page, false)))
        .collect();

    pages.push((
        "index.html".to_string(),
        html::index_html(site, &rendered, false),
    ));

    let not_found_meta = metadata::path_metadata(site, "/404");
    pages.push((
        "404.html".to_string(),
        html::not_found_html(site, &not_found_meta, false),
    ));

    let sitemap = sitemap::sitemap_xml(site, rendered.iter().map(|p| p.path.as_str()), lastmod);
    let assets = vec![
        ("sitemap.xml".to_string(), sitemap.into_bytes()),
        ("robots.txt".to_string(), sitemap::robots_txt(site).into_bytes()),
    ];

    Ok(GeneratedSite { pages, assets })
}
