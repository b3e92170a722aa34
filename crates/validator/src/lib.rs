//! Pre-build checks over a parsed site and post-build checks over its output
//! directory.

use seo_site_core::Site;
use seo_site_core::catalog::DictionaryKind;
use seo_site_generator::{RouteFamily, enumerate, output_file, resolve};
use std::collections::{BTreeSet, HashMap};
use std::path::Path;
use walkdir::WalkDir;

#[derive(Debug, Default)]
pub struct ValidationReport {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub info: Vec<String>,
}

impl ValidationReport {
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Check that every route the site would generate resolves, and that no two
/// routes collide on the same path.
pub fn validate_site(site: &Site) -> ValidationReport {
    let mut report = ValidationReport::default();
    let catalog = &site.catalog;

    for kind in [
        DictionaryKind::Location,
        DictionaryKind::Service,
        DictionaryKind::Competitor,
        DictionaryKind::Pricing,
        DictionaryKind::Faq,
    ] {
        if catalog.dictionary(kind).published().next().is_none() {
            report.warnings.push(format!(
                "No published {} entries; pages that use them will not be generated",
                kind
            ));
        }
    }
    if catalog.faq_topics.is_empty() {
        report.warnings.push(format!(
            "No [[faq_topic]] entries; {} pages will not be generated",
            RouteFamily::FaqLocation
        ));
    }
    if site.contact.whatsapp_digits().is_empty() {
        report
            .warnings
            .push("contact.whatsapp has no digits; WhatsApp links will be broken".to_string());
    }

    let mut seen: HashMap<String, RouteFamily> = HashMap::new();
    let mut total = 0;

    for family in RouteFamily::ALL {
        let routes = enumerate(catalog, family);
        report
            .info
            .push(format!("{}: {} pages", family, routes.len()));
        total += routes.len();

        for params in routes {
            if let Err(e) = resolve(catalog, family, &params) {
                report.errors.push(format!("{}: {}", family, e));
                continue;
            }

            let path = family.path(&params);
            if let Some(previous) = seen.insert(path.clone(), family) {
                report.errors.push(format!(
                    "Duplicate path {} produced by {} and {}",
                    path, previous, family
                ));
            }
        }
    }

    report.info.push(format!("Total: {} pages", total));
    report
}

/// Walk a build directory and report expected files that are missing.
///
/// `expected` holds paths relative to `dir` ("seo-services/london/index.html").
/// Files present on disk but not expected are counted, not reported as errors,
/// since `public/` assets are copied alongside generated pages.
pub fn validate_output(dir: &Path, expected: &[String]) -> ValidationReport {
    let mut report = ValidationReport::default();

    if !dir.is_dir() {
        report
            .errors
            .push(format!("Output directory does not exist: {}", dir.display()));
        return report;
    }

    let on_disk: BTreeSet<String> = WalkDir::new(dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter_map(|e| {
            e.path()
                .strip_prefix(dir)
                .ok()
                .map(|rel| rel.to_string_lossy().replace('\\', "/"))
        })
        .collect();

    for file in expected {
        if !on_disk.contains(file) {
            report.errors.push(format!("Missing output file: {}", file));
        }
    }

    let extra = on_disk
        .iter()
        .filter(|file| !expected.contains(file))
        .count();
    report.info.push(format!(
        "{} files on disk ({} expected, {} extra)",
        on_disk.len(),
        expected.len(),
        extra
    ));

    report
}

/// Output files a build must produce for `paths` (site-relative URL paths)
pub fn expected_files<'a, I>(paths: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    paths.into_iter().map(output_file).collect()
}
