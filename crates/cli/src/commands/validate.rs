use super::load_site;
use seo_site_validator::validate_site;
use std::path::PathBuf;

pub async fn run(path: PathBuf) -> anyhow::Result<()> {
    println!("Validating site at: {}", path.display());

    let site = load_site(&path)?;

    println!("✓ site.toml valid");
    println!("  Site: {} ({})", site.settings.name, site.settings.url);
    println!(
        "  Dictionaries: {} locations, {} services, {} comparisons",
        site.catalog.locations.len(),
        site.catalog.services.len(),
        site.catalog.comparisons.len()
    );

    let report = validate_site(&site);

    println!();
    for line in &report.info {
        println!("  {}", line);
    }
    for warning in &report.warnings {
        println!("⚠ {}", warning);
    }
    for error in &report.errors {
        eprintln!("✗ {}", error);
    }

    if !report.is_ok() {
        anyhow::bail!("Validation failed with {} error(s)", report.errors.len());
    }

    println!("\n✓ All routes resolve");
    Ok(())
}
