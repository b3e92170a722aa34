use crate::html::html_escape;
use chrono::NaiveDate;
use seo_site_core::Site;

/// sitemap.xml for the home page followed by `paths`, in the given order
pub fn sitemap_xml<'a, I>(site: &Site, paths: I, lastmod: NaiveDate) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let lastmod = lastmod.format("%Y-%m-%d").to_string();
    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
    );

    xml.push_str(&url_entry(&site.absolute_url("/"), &lastmod, "weekly", "1.0"));
    for path in paths {
        xml.push_str(&url_entry(&site.absolute_url(path), &lastmod, "monthly", "0.8"));
    }

    xml.push_str("</urlset>\n");
    xml
}

fn url_entry(loc: &str, lastmod: &str, changefreq: &str, priority: &str) -> String {
    format!(
        "  <url>\n    <loc>{}</loc>\n    <lastmod>{}</lastmod>\n    <changefreq>{}</changefreq>\n    <priority>{}</priority>\n  </url>\n",
        html_escape(loc),
        lastmod,
        changefreq,
        priority
    )
}

pub fn robots_txt(site: &Site) -> String {
    format!(
        "User-agent: *\nAllow: /\n\nSitemap: {}\n",
        site.absolute_url("/sitemap.xml")
    )
}
