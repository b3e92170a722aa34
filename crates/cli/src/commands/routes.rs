use super::load_site;
use anyhow::Result;
use seo_site_core::Catalog;
use seo_site_generator::{RouteFamily, enumerate, enumerate_all};
use serde_json::json;
use std::path::PathBuf;

/// Print every path the build would generate
pub async fn run(path: PathBuf, family: Option<RouteFamily>, json: bool) -> Result<()> {
    let site = load_site(&path)?;
    let routes = collect_routes(&site.catalog, family);

    if json {
        println!("{}", serde_json::to_string_pretty(&routes_json(&routes))?);
    } else {
        for (_, route) in &routes {
            println!("{}", route);
        }
        eprintln!("{} routes", routes.len());
    }

    Ok(())
}

fn collect_routes(catalog: &Catalog, family: Option<RouteFamily>) -> Vec<(RouteFamily, String)> {
    let routes = match family {
        Some(family) => enumerate(catalog, family)
            .into_iter()
            .map(|params| (family, params))
            .collect(),
        None => enumerate_all(catalog),
    };
    routes
        .into_iter()
        .map(|(family, params)| (family, family.path(&params)))
        .collect()
}

fn routes_json(routes: &[(RouteFamily, String)]) -> serde_json::Value {
    routes
        .iter()
        .map(|(family, path)| json!({ "family": family, "path": path }))
        .collect()
}
