use crate::RenderedPage;
use crate::family::RouteFamily;
use crate::metadata::PageMetadata;
use crate::render::PageContent;
use seo_site_core::{Contact, Site};
use serde_json::{Value, json};

/// HTML-escape a string to prevent XSS attacks
///
/// Escapes: & < > " '
pub fn html_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

/// wa.me link with a prefilled, URL-encoded message
pub fn whatsapp_link(contact: &Contact, message: &str) -> String {
    format!(
        "https://wa.me/{}?text={}",
        contact.whatsapp_digits(),
        urlencoding::encode(message)
    )
}

pub fn organization_json_ld(site: &Site) -> Value {
    json!({
        "@context": "https://schema.org",
        "@type": "Organization",
        "name": site.settings.name,
        "url": site.settings.url,
        "logo": site.absolute_url("/assets/logo.png"),
        "description": site.settings.description,
        "contactPoint": {
            "@type": "ContactPoint",
            "telephone": site.contact.whatsapp,
            "contactType": "customer service",
            "email": site.contact.email,
        },
    })
}

/// FAQPage structured data: each section is one question and its answer
pub fn faq_json_ld(content: &PageContent) -> Value {
    let questions: Vec<Value> = content
        .sections
        .iter()
        .map(|section| {
            json!({
                "@type": "Question",
                "name": section.heading,
                "acceptedAnswer": {
                    "@type": "Answer",
                    "text": section.body,
                },
            })
        })
        .collect();

    json!({
        "@context": "https://schema.org",
        "@type": "FAQPage",
        "mainEntity": questions,
    })
}

/// Complete HTML document for a generated page.
///
/// Shared between preview and build so that what the preview server shows is
/// exactly what gets written to disk.
pub fn page_html(site: &Site, page: &RenderedPage, is_preview: bool) -> String {
    let content = &page.content;

    let mut structured = vec![organization_json_ld(site)];
    if page.bundle.family().is_faq() {
        structured.push(faq_json_ld(content));
    }

    let keywords_html: String = content
        .keywords
        .iter()
        .map(|k| format!(r#"<li class="badge">{}</li>"#, html_escape(k)))
        .collect();

    let sections_html: String = content
        .sections
        .iter()
        .map(|section| {
            format!(
                r#"<section class="content-section">
            <h2>{}</h2>
            <p>{}</p>
        </section>"#,
                html_escape(&section.heading),
                html_escape(&section.body)
            )
        })
        .collect();

    let body = format!(
        r#"<section class="hero">
            <h1>{heading}</h1>
            <p class="intro">{intro}</p>
            <div class="cta">
                <a class="button primary" href="{whatsapp}" target="_blank" rel="noopener noreferrer">Message us on WhatsApp</a>
                <a class="button" href="{booking}" target="_blank" rel="noopener noreferrer">Book a 15-min call</a>
            </div>
        </section>
        <section class="keywords">
            <h2>Keywords We Help You Rank For</h2>
            <ul>{keywords}</ul>
        </section>
        {sections}"#,
        heading = html_escape(&content.heading),
        intro = html_escape(&content.intro),
        whatsapp = html_escape(&whatsapp_link(&site.contact, &content.cta_message)),
        booking = html_escape(&site.contact.booking_url),
        keywords = keywords_html,
        sections = sections_html,
    );

    document(site, &page.metadata, &structured, &body, is_preview)
}

/// Page shown for any path that does not resolve
pub fn not_found_html(site: &Site, metadata: &PageMetadata, is_preview: bool) -> String {
    let body = format!(
        r#"<section class="hero">
            <h1>Page Not Found</h1>
            <p class="intro">We couldn't find that page. Browse every service and town we cover from the <a href="/">directory</a>.</p>
            <div class="cta">
                <a class="button primary" href="{}" target="_blank" rel="noopener noreferrer">Message us on WhatsApp</a>
            </div>
        </section>"#,
        html_escape(&whatsapp_link(
            &site.contact,
            &format!("Hi {}, I'd like to check availability for my town", site.settings.name),
        ))
    );

    let metadata = PageMetadata {
        title: format!("Page Not Found | {}", site.settings.name),
        ..metadata.clone()
    };
    document(site, &metadata, &[organization_json_ld(site)], &body, is_preview)
}

/// Directory page linking every generated page, grouped by route family
pub fn index_html(site: &Site, pages: &[RenderedPage], is_preview: bool) -> String {
    let groups: String = RouteFamily::ALL
        .into_iter()
        .filter_map(|family| {
            let links: String = pages
                .iter()
                .filter(|page| page.bundle.family() == family)
                .map(|page| {
                    format!(
                        r#"<li><a href="{}">{}</a></li>"#,
                        html_escape(&page.path),
                        html_escape(&page.content.title)
                    )
                })
                .collect();
            if links.is_empty() {
                return None;
            }
            Some(format!(
                r#"<section class="content-section">
            <h2>{}</h2>
            <ul class="directory">{}</ul>
        </section>"#,
                html_escape(family.descriptor().fallback_title),
                links
            ))
        })
        .collect();

    let body = format!(
        r#"<section class="hero">
            <h1>{}</h1>
            <p class="intro">{}</p>
        </section>
        {}"#,
        html_escape(&site.settings.name),
        html_escape(&site.settings.description),
        groups
    );

    let metadata = PageMetadata {
        title: site.settings.name.clone(),
        description: site.settings.description.clone(),
        canonical_url: site.absolute_url("/"),
    };
    document(site, &metadata, &[organization_json_ld(site)], &body, is_preview)
}

fn document(
    site: &Site,
    metadata: &PageMetadata,
    structured_data: &[Value],
    body: &str,
    is_preview: bool,
) -> String {
    let json_ld: String = structured_data
        .iter()
        .map(|value| {
            // "</" inside JSON would close the script element early
            format!(
                r#"<script type="application/ld+json">{}</script>"#,
                value.to_string().replace("</", "<\\/")
            )
        })
        .collect();

    // Preview badge only shown in preview mode
    let preview_badge = if is_preview {
        r#"<div class="preview-badge">PREVIEW MODE - Live Reload Active</div>"#
    } else {
        ""
    };

    // Hot reload script only in preview mode
    let reload_script = if is_preview {
        r#"<script>
        const eventSource = new EventSource('/_reload');
        eventSource.onmessage = () => location.reload();
        eventSource.onerror = () => eventSource.close();
    </script>"#
    } else {
        ""
    };

    let title = html_escape(&metadata.title);
    let description = html_escape(&metadata.description);
    let canonical = html_escape(&metadata.canonical_url);
    let site_name = html_escape(&site.settings.name);
    let email = html_escape(&site.contact.email);

    format!(
        r#"<!DOCTYPE html>
<html lang="en-GB">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <meta name="description" content="{description}">
    <link rel="canonical" href="{canonical}">
    <meta property="og:type" content="website">
    <meta property="og:site_name" content="{site_name}">
    <meta property="og:title" content="{title}">
    <meta property="og:description" content="{description}">
    <meta property="og:url" content="{canonical}">
    <meta name="twitter:card" content="summary_large_image">
    {json_ld}
    <style>{styles}</style>
</head>
<body>
    {preview_badge}
    <header class="site-header"><a class="brand" href="/">{site_name}</a></header>
    <main class="container">
        {body}
    </main>
    <footer class="site-footer">&copy; {site_name} &middot; <a href="mailto:{email}">{email}</a></footer>
    {reload_script}
</body>
</html>"#,
        styles = STYLES,
    )
}

const STYLES: &str = r#"
        * { margin: 0; padding: 0; box-sizing: border-box; }
        body {
            font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
            line-height: 1.6;
            color: #1f2933;
            background: #f7f8fa;
        }
        a { color: #0b6bcb; }
        .preview-badge {
            background: #ff6b35;
            color: white;
            padding: 0.5rem 1rem;
            text-align: center;
            font-weight: bold;
        }
        .site-header, .site-footer {
            padding: 1rem 2rem;
            background: white;
            border-bottom: 1px solid #e4e7eb;
        }
        .site-footer { border-top: 1px solid #e4e7eb; text-align: center; color: #7b8794; }
        .brand { font-weight: 700; text-decoration: none; color: #1f2933; }
        .container { max-width: 900px; margin: 0 auto; padding: 2rem; }
        .hero { text-align: center; padding: 3rem 0 2rem; }
        h1 { font-size: 2.5rem; line-height: 1.2; margin-bottom: 1rem; }
        h2 { font-size: 1.5rem; margin-bottom: 0.75rem; }
        .intro { font-size: 1.2rem; color: #52606d; max-width: 700px; margin: 0 auto; }
        .cta { display: flex; gap: 1rem; justify-content: center; margin-top: 2rem; flex-wrap: wrap; }
        .button {
            display: inline-block;
            padding: 0.75rem 1.5rem;
            border-radius: 6px;
            border: 1px solid #0b6bcb;
            text-decoration: none;
        }
        .button.primary { background: #0b6bcb; color: white; }
        .keywords ul { list-style: none; display: flex; flex-wrap: wrap; gap: 0.5rem; }
        .badge { border: 1px solid #cbd2d9; border-radius: 999px; padding: 0.25rem 0.75rem; font-size: 0.9rem; }
        .content-section {
            background: white;
            padding: 1.5rem;
            margin: 1.5rem 0;
            border-radius: 8px;
            box-shadow: 0 2px 8px rgba(0,0,0,0.06);
        }
        .directory { columns: 2; list-style: none; }
        @media (max-width: 768px) {
            h1 { font-size: 1.8rem; }
            .directory { columns: 1; }
        }
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render_request;
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
    fn test_html_escape_basic_characters() {
        assert_eq!(html_escape("Hello World"), "Hello World");
        assert_eq!(html_escape("Test & Test"), "Test &amp; Test");
        assert_eq!(html_escape("<script>"), "&lt;script&gt;");
        assert_eq!(html_escape("\"quoted\""), "&quot;quoted&quot;");
        assert_eq!(html_escape("'single'"), "&#x27;single&#x27;");
    }

    #[test]
    fn test_html_escape_xss_attempts() {
        assert_eq!(
            html_escape("<script>alert('XSS')</script>"),
            "&lt;script&gt;alert(&#x27;XSS&#x27;)&lt;/script&gt;"
        );
        assert_eq!(
            html_escape("\"><img src=x onerror=alert(1)>"),
            "&quot;&gt;&lt;img src=x onerror=alert(1)&gt;"
        );
    }

    #[test]
    fn test_html_escape_unicode() {
        assert_eq!(html_escape("£1,000 + VAT"), "£1,000 + VAT");
        assert_eq!(html_escape("Before & After"), "Before &amp; After");
    }

    #[test]
    fn test_whatsapp_link_encodes_message() {
        let link = whatsapp_link(&default_contact(), "Hi, I'm in London & Leeds");
        assert_eq!(
            link,
            "https://wa.me/447810666662?text=Hi%2C%20I%27m%20in%20London%20%26%20Leeds"
        );
    }

    #[test]
    fn test_page_html_contains_head_tags() {
        let site = site();
        let page = render_request(&site, "/seo-services/local-seo/london").unwrap();
        let html = page_html(&site, &page, false);

        assert!(html.contains("<title>Local SEO Services in London | AutomateSEO.co</title>"));
        assert!(html.contains(
            r#"<link rel="canonical" href="https://www.automateseo.co/seo-services/local-seo/london">"#
        ));
        assert!(html.contains("<h1>Local SEO Services in London</h1>"));
        assert!(html.contains(r#""@type":"Organization""#));
        assert!(!html.contains("FAQPage"));
        assert!(!html.contains("EventSource"));
    }

    #[test]
    fn test_faq_pages_carry_faq_structured_data() {
        let site = site();
        let page = render_request(&site, "/faq/faq/local-seo/london").unwrap();
        let html = page_html(&site, &page, false);
        assert!(html.contains(r#""@type":"FAQPage""#));
        assert!(html.contains("What is Local SEO?"));
    }

    #[test]
    fn test_preview_adds_reload_script() {
        let site = site();
        let page = render_request(&site, "/seo-services/london").unwrap();
        let html = page_html(&site, &page, true);
        assert!(html.contains("PREVIEW MODE"));
        assert!(html.contains("new EventSource('/_reload')"));
    }

    #[test]
    fn test_display_names_are_escaped() {
        let mut site = site();
        site.settings.name = "<b>Bold</b> SEO".to_string();
        let page = render_request(&site, "/seo-services/london").unwrap();
        let html = page_html(&site, &page, false);
        assert!(!html.contains("<b>Bold</b>"));
        assert!(html.contains("&lt;b&gt;Bold&lt;/b&gt; SEO"));
    }

    #[test]
    fn test_json_ld_cannot_close_script() {
        let mut site = site();
        site.settings.description = "</script><script>alert(1)</script>".to_string();
        let html = index_html(&site, &[], false);
        assert!(!html.contains("</script><script>alert(1)"));
    }

    #[test]
    fn test_not_found_html() {
        let site = site();
        let meta = crate::metadata::path_metadata(&site, "/pricing/free-seo/london");
        let html = not_found_html(&site, &meta, false);
        assert!(html.contains("<title>Page Not Found | AutomateSEO.co</title>"));
        assert!(html.contains("Transparent SEO pricing for your business."));
    }
}
