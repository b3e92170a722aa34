use crate::resolve::Bundle;
use serde::Serialize;

/// Textual content of one generated page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageContent {
    pub title: String,
    pub description: String,
    pub heading: String,
    pub intro: String,
    pub sections: Vec<Section>,
    pub keywords: Vec<String>,
    pub cta_message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    pub heading: String,
    pub body: String,
}

/// Fill the template of the bundle's route family.
///
/// Always succeeds; identical bundles render byte-identical content.
pub fn render(bundle: &Bundle) -> PageContent {
    let template = bundle.family().descriptor().template;
    let fill = |text: &str| interpolate(text, |slot| bundle.get(slot));

    PageContent {
        title: fill(template.title),
        description: fill(template.description),
        heading: fill(template.heading),
        intro: fill(template.intro),
        sections: template
            .sections
            .iter()
            .map(|section| Section {
                heading: fill(section.heading),
                body: fill(section.body),
            })
            .collect(),
        keywords: template.keywords.iter().map(|&k| fill(k)).collect(),
        cta_message: fill(template.cta_message),
    }
}

/// Substitute `{slot}` and `{slot:lower}` placeholders.
///
/// Placeholders with an unknown slot or modifier are copied through
/// unchanged.
pub fn interpolate<'a, F>(template: &str, lookup: F) -> String
where
    F: Fn(&str) -> Option<&'a str>,
{
    let mut out = String::with_capacity(template.len() + 32);
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let Some(close) = after.find('}') else {
            out.push_str(&rest[open..]);
            return out;
        };

        let placeholder = &after[..close];
        let (slot, lowercase) = match placeholder.split_once(':') {
            Some((slot, "lower")) => (slot, true),
            Some(_) => (placeholder, false),
            None => (placeholder, false),
        };

        match lookup(slot) {
            Some(value) if lowercase => out.push_str(&value.to_lowercase()),
            Some(value) => out.push_str(value),
            None => {
                out.push('{');
                out.push_str(placeholder);
                out.push('}');
            }
        }
        rest = &after[close + 1..];
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enumerate::enumerate_all;
    use crate::family::RouteFamily;
    use crate::resolve::resolve;
    use seo_site_core::catalog::{Dictionary, DictionaryKind, Entry};
    use seo_site_core::{Catalog, RouteParams};

    fn bundle(family: RouteFamily, slugs: &[&str]) -> Bundle {
        resolve(
            Catalog::builtin(),
            family,
            &RouteParams::new(slugs.iter().copied()),
        )
        .unwrap()
    }

    fn lookup(slot: &str) -> Option<&'static str> {
        match slot {
            "service" => Some("Local SEO"),
            "location" => Some("London"),
            _ => None,
        }
    }

    #[test]
    fn test_interpolate_plain_and_lower() {
        assert_eq!(
            interpolate("{service} Services in {location}", lookup),
            "Local SEO Services in London"
        );
        assert_eq!(
            interpolate("We help {service:lower} businesses", lookup),
            "We help local seo businesses"
        );
    }

    #[test]
    fn test_interpolate_leaves_unknown_placeholders() {
        assert_eq!(interpolate("{nope} in {location}", lookup), "{nope} in London");
        assert_eq!(interpolate("{service:upper}", lookup), "{service:upper}");
        assert_eq!(interpolate("dangling {service", lookup), "dangling {service");
        assert_eq!(interpolate("no slots", lookup), "no slots");
    }

    #[test]
    fn test_interpolate_non_ascii_text() {
        assert_eq!(
            interpolate("£1,000 in {location} · {service:lower}", lookup),
            "£1,000 in London · local seo"
        );
    }

    #[test]
    fn test_render_service_location_title() {
        let content = render(&bundle(RouteFamily::ServiceLocation, &["local-seo", "london"]));
        assert_eq!(content.title, "Local SEO Services in London");
        assert_eq!(content.heading, "Local SEO Services in London");
        assert!(content.description.contains("We help local seo businesses in London"));
        assert!(content.keywords.contains(&"local seo london".to_string()));
    }

    #[test]
    fn test_render_comparison() {
        let content = render(&bundle(
            RouteFamily::Comparison,
            &["ecommerce-seo-vs-saas-seo", "leeds"],
        ));
        assert_eq!(content.title, "E-commerce SEO vs SaaS SEO in Leeds");
        assert_eq!(content.sections[1].heading, "E-commerce SEO");
        assert!(content.sections[0].body.contains("e-commerce seo and saas seo"));
    }

    #[test]
    fn test_render_faq_location_with_supplied_topic() {
        let mut catalog = Catalog::builtin().clone();
        catalog.faq_topics = Dictionary::new(
            DictionaryKind::FaqTopic,
            vec![Entry::new("seo-cost", "SEO Cost")],
        )
        .unwrap();
        let b = resolve(
            &catalog,
            RouteFamily::FaqLocation,
            &RouteParams::new(["seo-cost", "york"]),
        )
        .unwrap();

        let content = render(&b);
        assert_eq!(content.title, "SEO Cost About SEO in York");
        assert!(content.intro.contains("common seo cost about SEO services in York"));
        assert!(content.sections.iter().all(|s| !s.body.contains('{')));
    }

    #[test]
    fn test_render_is_idempotent() {
        let b = bundle(RouteFamily::FaqServiceLocation, &["tips", "hotel-seo", "bristol"]);
        assert_eq!(render(&b), render(&b));
    }

    #[test]
    fn test_every_template_fills_every_placeholder() {
        let catalog = Catalog::builtin();
        for (family, params) in enumerate_all(catalog) {
            let content = render(&resolve(catalog, family, &params).unwrap());
            let mut texts = vec![
                &content.title,
                &content.description,
                &content.heading,
                &content.intro,
                &content.cta_message,
            ];
            texts.extend(content.keywords.iter());
            for section in &content.sections {
                texts.push(&section.heading);
                texts.push(&section.body);
            }
            for text in texts {
                assert!(!text.contains('{'), "{} left a placeholder: {}", family, text);
            }
        }
    }
}
