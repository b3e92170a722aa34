use super::load_site;
use anyhow::{Context, Result};
use chrono::Local;
use seo_site_generator::generate_site;
use seo_site_validator::validate_output;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Build static site for deployment
pub async fn run(path: PathBuf, output: PathBuf) -> Result<()> {
    println!("🔨 Building static site...");
    println!("   Source: {}", path.display());
    println!("   Output: {}", output.display());
    println!();

    let site = load_site(&path)?;

    println!("✓ Loaded: {}", site.settings.name);
    println!("  URL: {}", site.settings.url);
    println!();

    println!("📄 Generating pages...");
    let lastmod = Local::now().date_naive();
    let generated = generate_site(&site, lastmod).context("Failed to generate site")?;

    clean_output(&path, &output)?;
    for (file, html) in &generated.pages {
        write_file(&output, file, html.as_bytes())?;
    }
    println!("   ✓ Generated {} pages", generated.pages.len());

    for (file, data) in &generated.assets {
        write_file(&output, file, data)?;
        println!("   ✓ Generated {}", file);
    }

    println!("🎨 Copying public files...");
    let copied = copy_public(&path.join("public"), &output.join("assets"))?;
    println!("   ✓ Copied {} files", copied);

    println!("🔍 Verifying output...");
    let expected: Vec<String> = generated
        .pages
        .iter()
        .map(|(file, _)| file.clone())
        .chain(generated.assets.iter().map(|(file, _)| file.clone()))
        .collect();
    let report = validate_output(&output, &expected);
    for error in &report.errors {
        eprintln!("   ✗ {}", error);
    }
    if !report.is_ok() {
        anyhow::bail!("Build output is incomplete: {} missing file(s)", report.errors.len());
    }
    for line in &report.info {
        println!("   ✓ {}", line);
    }

    println!();
    println!("✅ Build complete!");
    println!("   Output: {}", output.display());
    println!();
    println!("To test locally:");
    println!("   cd {} && python3 -m http.server 8000", output.display());
    println!();

    Ok(())
}

/// Start every build from an empty output directory so pages for removed or
/// unpublished entries do not survive a rebuild.
///
/// Refuses to clear the project directory, any directory above it, or
/// anything inside its `public/` folder.
fn clean_output(project: &Path, output: &Path) -> Result<()> {
    if output.exists() {
        let project = project
            .canonicalize()
            .with_context(|| format!("Failed to resolve {}", project.display()))?;
        let target = output
            .canonicalize()
            .with_context(|| format!("Failed to resolve {}", output.display()))?;
        if project.starts_with(&target) || target.starts_with(project.join("public")) {
            anyhow::bail!(
                "Refusing to clear output directory {}: it contains the site project or its public/ files",
                output.display()
            );
        }
        if !target.is_dir() {
            anyhow::bail!("Output path is not a directory: {}", output.display());
        }
        fs::remove_dir_all(&target)
            .with_context(|| format!("Failed to clear {}", output.display()))?;
    }

    fs::create_dir_all(output).context("Failed to create output directory")?;
    Ok(())
}

fn write_file(output: &Path, file: &str, data: &[u8]) -> Result<()> {
    let dest = output.join(file);
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    fs::write(&dest, data).with_context(|| format!("Failed to write {}", dest.display()))
}

/// Copy `public/` recursively, skipping hidden files. Returns files copied.
fn copy_public(src: &Path, dest: &Path) -> Result<usize> {
    if !src.exists() {
        return Ok(0);
    }

    let mut copied = 0;
    for entry in WalkDir::new(src)
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !e.file_name().to_string_lossy().starts_with('.'))
    {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let relative = entry
            .path()
            .strip_prefix(src)
            .context("Public file outside public directory")?;
        let target = dest.join(relative);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::copy(entry.path(), &target)
            .with_context(|| format!("Failed to copy {}", entry.path().display()))?;
        copied += 1;
    }

    Ok(copied)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const SITE_TOML: &str = r#"
[site]
name = "Test SEO"
url = "https://test.example.com"

[[location]]
slug = "london"
name = "London"

[[location]]
slug = "leeds"
name = "Leeds"

[[service]]
slug = "local-seo"
name = "Local SEO"

[[service]]
slug = "technical-seo"
name = "Technical SEO"
published = false

[[competitor]]
slug = "seo-agency"
name = "SEO Agency"

[[pricing]]
slug = "seo-cost"
name = "SEO Cost"

[[faq]]
slug = "faq"
name = "FAQ"

[[comparison]]
first = "local-seo"
second = "technical-seo"
"#;

    fn project() -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("site.toml"), SITE_TOML).unwrap();
        fs::create_dir_all(dir.path().join("public/img")).unwrap();
        fs::write(dir.path().join("public/logo.png"), b"png").unwrap();
        fs::write(dir.path().join("public/img/hero.jpg"), b"jpg").unwrap();
        fs::write(dir.path().join("public/.DS_Store"), b"junk").unwrap();
        dir
    }

    #[tokio::test]
    async fn test_build_writes_every_page() {
        let project = project();
        let out = TempDir::new().unwrap();
        let output = out.path().join("dist");

        run(project.path().to_path_buf(), output.clone()).await.unwrap();

        for file in [
            "index.html",
            "404.html",
            "sitemap.xml",
            "robots.txt",
            "seo-services/london/index.html",
            "seo-services/local-seo/leeds/index.html",
            "compare/local-seo-vs-technical-seo/london/index.html",
            "competitors/seo-agency/leeds/index.html",
            "pricing/seo-cost/london/index.html",
            "faq/faq/local-seo/leeds/index.html",
            "assets/logo.png",
            "assets/img/hero.jpg",
        ] {
            assert!(output.join(file).is_file(), "missing {}", file);
        }
        assert!(!output.join("assets/.DS_Store").exists());
        assert!(!output.join("seo-services/technical-seo").exists());

        let page = fs::read_to_string(output.join("seo-services/local-seo/leeds/index.html")).unwrap();
        assert!(page.contains("<title>Local SEO Services in Leeds | Test SEO</title>"));
        assert!(page.contains("https://test.example.com/seo-services/local-seo/leeds"));
    }

    #[tokio::test]
    async fn test_rebuild_removes_pages_no_longer_generated() {
        let project = project();
        let out = TempDir::new().unwrap();
        let output = out.path().join("dist");

        run(project.path().to_path_buf(), output.clone()).await.unwrap();
        assert!(output.join("seo-services/leeds/index.html").is_file());

        let without_leeds = SITE_TOML.replace(
            "[[location]]\nslug = \"leeds\"\nname = \"Leeds\"\n",
            "",
        );
        assert_ne!(without_leeds, SITE_TOML);
        fs::write(project.path().join("site.toml"), without_leeds).unwrap();
        fs::remove_file(project.path().join("public/img/hero.jpg")).unwrap();

        run(project.path().to_path_buf(), output.clone()).await.unwrap();
        assert!(output.join("seo-services/london/index.html").is_file());
        assert!(!output.join("seo-services/leeds").exists());
        assert!(!output.join("faq/faq/local-seo/leeds").exists());
        assert!(!output.join("assets/img/hero.jpg").exists());

        let sitemap = fs::read_to_string(output.join("sitemap.xml")).unwrap();
        assert!(!sitemap.contains("/leeds"));
    }

    #[tokio::test]
    async fn test_build_refuses_to_clear_project_directory() {
        let project = project();

        let result = run(project.path().to_path_buf(), project.path().to_path_buf()).await;
        assert!(result.is_err());
        assert!(project.path().join("site.toml").is_file());

        let result = run(project.path().to_path_buf(), project.path().join("public")).await;
        assert!(result.is_err());
        assert!(project.path().join("public/logo.png").is_file());
    }

    #[tokio::test]
    async fn test_build_without_site_toml_fails() {
        let project = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        let result = run(project.path().to_path_buf(), out.path().join("dist")).await;
        assert!(result.is_err());
    }
}
